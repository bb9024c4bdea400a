//! Rendering of the node model to GraphQL text.

mod document_writer;
mod render_options;
mod stringify;

pub(crate) use document_writer::DocumentParts;
pub(crate) use document_writer::render_document;
pub use render_options::RenderOptions;
pub use stringify::stringify_arguments;
pub use stringify::stringify_directives;
pub use stringify::stringify_value;

#[cfg(test)]
mod tests;
