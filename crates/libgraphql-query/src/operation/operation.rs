use crate::DirectiveAnnotation;
use crate::operation::Fragment;
use crate::operation::OperationBuilder;
use crate::operation::OperationKind;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::operation::SelectionSetBuildError;
use crate::operation::Variable;
use crate::render::DocumentParts;
use crate::render::RenderOptions;
use indexmap::IndexMap;

/// A finished, immutable GraphQL operation together with the fragment
/// definitions it declares.
///
/// Produced by [`OperationBuilder::to_operation`] or
/// [`OperationBuilder::into_operation`]. Rendering only reads the tree, so an
/// [`Operation`] may be rendered any number of times and from any number of
/// threads.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) fragments: IndexMap<String, Fragment>,
    pub(super) kind: OperationKind,
    pub(super) name: Option<String>,
    pub(super) selection_set: SelectionSet,
    pub(super) sub_operations: Vec<Selection>,
    pub(super) variables: IndexMap<String, Variable>,
}
impl Operation {
    /// Convenience wrapper around [`OperationBuilder::new()`].
    pub fn builder(kind: OperationKind) -> OperationBuilder {
        OperationBuilder::new(kind)
    }

    /// The list of operation-level [`DirectiveAnnotation`]s.
    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.directives.as_slice()
    }

    /// The [`Fragment`] definitions declared alongside this operation, keyed
    /// by fragment name.
    pub fn fragments(&self) -> &IndexMap<String, Fragment> {
        &self.fragments
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Access the name of this [`Operation`] (if one was specified).
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The root selections, in the order they were added.
    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    /// The named sub-operations, which render after the root selections.
    pub fn sub_operations(&self) -> &[Selection] {
        self.sub_operations.as_slice()
    }

    /// Access the [`Variable`]s defined on this [`Operation`].
    pub fn variables(&self) -> &IndexMap<String, Variable> {
        &self.variables
    }

    /// Render this operation and its fragments as GraphQL text.
    pub fn to_graphql_string(&self, options: &RenderOptions) -> String {
        crate::render::render_document(&DocumentParts {
            directives: &self.directives,
            fragments: &self.fragments,
            kind: self.kind,
            name: self.name.as_deref(),
            root_selections: self.selection_set.selections(),
            sub_operations: &self.sub_operations,
            variables: &self.variables,
        }, options)
    }

    /// Check every fragment spread, inline fragment, and fragment definition
    /// in this operation for blank names and type conditions.
    ///
    /// Trees built through [`OperationBuilder`] always pass. This is meant
    /// for trees assembled from hand-built [`Selection`]s.
    pub fn validate(&self) -> Result<(), Vec<SelectionSetBuildError>> {
        let mut errors = vec![];
        validate_selections(self.selection_set.selections(), &mut errors);
        validate_selections(&self.sub_operations, &mut errors);
        for fragment in self.fragments.values() {
            if fragment.name().trim().is_empty() {
                errors.push(SelectionSetBuildError::EmptyFragmentName);
            }
            if fragment.type_condition().trim().is_empty() {
                errors.push(SelectionSetBuildError::EmptyTypeCondition {
                    type_condition: fragment.type_condition().to_string(),
                });
            }
            validate_selections(fragment.selection_set().selections(), &mut errors);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn validate_selections(
    selections: &[Selection],
    errors: &mut Vec<SelectionSetBuildError>,
) {
    for selection in selections {
        match selection {
            Selection::Field(_) => (),

            Selection::FragmentSpread(spread) => {
                if spread.fragment_name().trim().is_empty() {
                    errors.push(SelectionSetBuildError::EmptyFragmentName);
                }
            },

            Selection::InlineFragment(inline_fragment) => {
                if inline_fragment.type_condition().trim().is_empty() {
                    errors.push(SelectionSetBuildError::EmptyTypeCondition {
                        type_condition: inline_fragment.type_condition().to_string(),
                    });
                }
                validate_selections(
                    inline_fragment.selection_set().selections(),
                    errors,
                );
            },

            Selection::Object(object) =>
                validate_selections(object.selection_set().selections(), errors),
        }
    }
}
