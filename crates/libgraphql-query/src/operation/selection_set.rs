use crate::operation::Selection;

/// The ordered [`Selection`]s beneath one object, fragment, or operation.
/// Insertion order is render order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionSet {
    pub(super) selections: Vec<Selection>,
}
impl SelectionSet {
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn selections(&self) -> &[Selection] {
        self.selections.as_slice()
    }
}
