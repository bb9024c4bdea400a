//! Build GraphQL executable documents with a typed, chainable API and render
//! them to compact or pretty GraphQL text.
//!
//! ```
//! use libgraphql_query::operation::FieldSpec;
//! use libgraphql_query::operation::OperationBuilder;
//! use libgraphql_query::render::RenderOptions;
//!
//! # fn main() -> Result<(), libgraphql_query::operation::SelectionSetBuildError> {
//! let document = OperationBuilder::query()
//!     .name("GetThing")
//!     .variables([("id", "ID!")])
//!     .operation(FieldSpec::new("thing").arg("id", "$id"), |thing| {
//!         thing.fields(["id", "handle"]);
//!         Ok(())
//!     })?
//!     .build(&RenderOptions::default());
//!
//! assert_eq!(document, "query GetThing($id: ID!) { thing(id: $id) { id handle } }");
//! # Ok(())
//! # }
//! ```

pub mod description;
mod directive_annotation;
pub mod operation;
pub mod render;
mod value;

pub use directive_annotation::DirectiveAnnotation;
pub use value::Value;

#[cfg(test)]
mod tests;
