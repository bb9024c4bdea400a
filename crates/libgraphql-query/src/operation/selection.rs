use crate::operation::FieldSelection;
use crate::operation::FragmentSpread;
use crate::operation::InlineFragment;
use crate::operation::ObjectSelection;

/// One entry of a [`SelectionSet`](crate::operation::SelectionSet).
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(FieldSelection),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
    Object(ObjectSelection),
}
impl Selection {
    /// Whether this is an [`ObjectSelection`] of the field called `name`
    /// (regardless of its alias).
    pub fn is_object_named(&self, name: &str) -> bool {
        matches!(self, Self::Object(object) if object.name() == name)
    }
}
