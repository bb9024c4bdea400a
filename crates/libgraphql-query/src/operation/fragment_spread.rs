use crate::DirectiveAnnotation;

/// A `...FragmentName` spread of a named [`Fragment`](crate::operation::Fragment).
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) fragment_name: String,
}
impl FragmentSpread {
    /// Construct a spread with directives attached. Blank names are rejected
    /// by [`SelectionSetBuilder::use_fragment`](crate::operation::SelectionSetBuilder::use_fragment)
    /// and by [`Operation::validate`](crate::operation::Operation::validate),
    /// not here.
    pub fn new(
        fragment_name: impl Into<String>,
        directives: Vec<DirectiveAnnotation>,
    ) -> Self {
        Self {
            directives,
            fragment_name: fragment_name.into(),
        }
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.directives.as_slice()
    }

    pub fn fragment_name(&self) -> &str {
        self.fragment_name.as_str()
    }
}
