use crate::operation::SelectionSet;

/// A named fragment definition rendered after the operation body as
/// `fragment Name on TypeCondition { ... }`.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    pub(super) name: String,
    pub(super) selection_set: SelectionSet,
    pub(super) type_condition: String,
}
impl Fragment {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}
