//! Documents described as data (typically JSON) and replayed through the
//! builders.

mod document_description;
mod selection_description;

pub use document_description::DirectiveDescription;
pub use document_description::DocumentDescription;
pub use document_description::DocumentDescriptionError;
pub use document_description::FragmentDescription;
pub use document_description::SubOperationDescription;
pub use document_description::VariableDescription;
pub use selection_description::ArgumentsDescription;
pub use selection_description::ConnectionSelectionDescription;
pub use selection_description::DirectivesDescription;
pub use selection_description::FieldNameDescription;
pub use selection_description::SelectionDescription;
