//! The selection node model and the builders that assemble it.

mod connection_builder;
mod field_selection;
mod field_spec;
mod fragment;
mod fragment_spread;
mod inline_fragment;
mod object_selection;
#[allow(clippy::module_inception)]
mod operation;
mod operation_builder;
mod operation_kind;
mod selection;
mod selection_set;
mod selection_set_builder;
mod selection_set_builder_trait;
mod variable;

pub use connection_builder::ConnectionBuilder;
pub use connection_builder::DEFAULT_PAGE_INFO_FIELDS;
pub use field_selection::FieldSelection;
pub use field_spec::FieldRef;
pub use field_spec::FieldSpec;
pub use fragment::Fragment;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use object_selection::ObjectSelection;
pub use operation::Operation;
pub use operation_builder::OperationBuilder;
pub use operation_kind::OperationKind;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use selection_set_builder::SelectionSetBuilder;
pub use selection_set_builder::SelectionSetBuildError;
pub use selection_set_builder_trait::SelectionSetBuilderTrait;
pub use variable::Variable;

#[cfg(test)]
mod tests;
