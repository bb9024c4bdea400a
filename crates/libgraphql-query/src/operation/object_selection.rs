use crate::DirectiveAnnotation;
use crate::operation::FieldSpec;
use crate::operation::SelectionSet;
use crate::Value;
use indexmap::IndexMap;

/// A field selection with a nested [`SelectionSet`].
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectSelection {
    pub(super) alias: Option<String>,
    pub(super) arguments: IndexMap<String, Value>,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) name: String,
    pub(super) selection_set: SelectionSet,
}
impl ObjectSelection {
    pub(super) fn from_spec(spec: FieldSpec, selection_set: SelectionSet) -> Self {
        let (field, arguments, directives) = spec.into_parts();
        Self {
            alias: field.alias,
            arguments,
            directives,
            name: field.name,
            selection_set,
        }
    }

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

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }
}
