use crate::operation::ConnectionBuilder;
use crate::operation::FieldSpec;
use crate::operation::Selection;
use crate::operation::SelectionSetBuildError;
use crate::operation::SelectionSetBuilder;

type Result<T> = std::result::Result<T, SelectionSetBuildError>;

/// The chainable selection surface shared by [`SelectionSetBuilder`],
/// [`ConnectionBuilder`], and
/// [`OperationBuilder`](crate::operation::OperationBuilder).
///
/// Every method appends to the builder's ordered selection list, so the
/// order of calls is the order of the rendered selections. Methods that
/// take a callback run it synchronously on a fresh child builder and store
/// the child's finished [`SelectionSet`](crate::operation::SelectionSet) in
/// the appended selection.
pub trait SelectionSetBuilderTrait: Sized {
    /// Add a [`Selection`] after any previously added `Selection`s.
    fn add_selection(&mut self, selection: Selection) -> &mut Self;

    /// Add a paginated connection field: the callback's selections followed
    /// by a `pageInfo { hasNextPage hasPreviousPage startCursor endCursor }`
    /// block unless the callback selected `pageInfo` itself.
    fn connection<TField, TCallback>(
        &mut self,
        field: TField,
        callback: TCallback,
    ) -> Result<&mut Self>
    where
        TField: Into<FieldSpec>,
        TCallback: FnOnce(&mut ConnectionBuilder) -> Result<()>;

    /// Add one leaf field per spec.
    fn fields<TSpecs, TSpec>(&mut self, specs: TSpecs) -> &mut Self
    where
        TSpecs: IntoIterator<Item = TSpec>,
        TSpec: Into<FieldSpec>;

    /// Add an `... on TypeCondition { ... }` selection.
    fn inline_fragment<TCallback>(
        &mut self,
        type_condition: &str,
        callback: TCallback,
    ) -> Result<&mut Self>
    where
        TCallback: FnOnce(&mut SelectionSetBuilder) -> Result<()>;

    /// Add a field with a nested selection set.
    fn object<TField, TCallback>(
        &mut self,
        field: TField,
        callback: TCallback,
    ) -> Result<&mut Self>
    where
        TField: Into<FieldSpec>,
        TCallback: FnOnce(&mut SelectionSetBuilder) -> Result<()>;

    /// The selections added so far, in order.
    fn selections(&self) -> &[Selection];

    /// Add a `...FragmentName` spread.
    fn use_fragment(&mut self, fragment_name: &str) -> Result<&mut Self>;
}
