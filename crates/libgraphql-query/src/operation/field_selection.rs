use crate::DirectiveAnnotation;
use crate::Value;
use indexmap::IndexMap;

/// A leaf field selection: `[alias: ]name[(args)][ @directives]`.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection {
    pub(super) alias: Option<String>,
    pub(super) arguments: IndexMap<String, Value>,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) name: String,
}
impl FieldSelection {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.directives.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
