use crate::DirectiveAnnotation;
use crate::operation::SelectionSet;

/// An `... on TypeName { ... }` selection.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) selection_set: SelectionSet,
    pub(super) type_condition: String,
}
impl InlineFragment {
    /// Construct an inline fragment with directives attached. Blank type
    /// conditions are rejected by
    /// [`SelectionSetBuilder::inline_fragment`](crate::operation::SelectionSetBuilder::inline_fragment)
    /// and by [`Operation::validate`](crate::operation::Operation::validate),
    /// not here.
    pub fn new(
        type_condition: impl Into<String>,
        directives: Vec<DirectiveAnnotation>,
        selection_set: SelectionSet,
    ) -> Self {
        Self {
            directives,
            selection_set,
            type_condition: type_condition.into(),
        }
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.directives.as_slice()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}
