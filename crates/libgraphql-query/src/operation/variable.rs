/// An operation-level variable definition: `$name: Type[ = default]`.
///
/// Both the type annotation and the default value are kept as raw GraphQL
/// text and rendered verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub(crate) default_value: Option<String>,
    pub(crate) type_annotation: String,
}
impl Variable {
    pub fn new(type_annotation: impl Into<String>) -> Self {
        Self {
            default_value: None,
            type_annotation: type_annotation.into(),
        }
    }

    pub fn with_default_value(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn type_annotation(&self) -> &str {
        self.type_annotation.as_str()
    }
}

impl From<&str> for Variable {
    fn from(type_annotation: &str) -> Self {
        Self::new(type_annotation)
    }
}

impl From<String> for Variable {
    fn from(type_annotation: String) -> Self {
        Self::new(type_annotation)
    }
}
