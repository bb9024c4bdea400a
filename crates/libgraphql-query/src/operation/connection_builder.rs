use crate::operation::FieldSpec;
use crate::operation::ObjectSelection;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::operation::SelectionSetBuildError;
use crate::operation::SelectionSetBuilder;
use crate::operation::SelectionSetBuilderTrait;
use inherent::inherent;

type Result<T> = std::result::Result<T, SelectionSetBuildError>;

/// The fields selected by [`ConnectionBuilder::with_default_page_info`] and
/// by any connection that doesn't select `pageInfo` itself.
pub const DEFAULT_PAGE_INFO_FIELDS: [&str; 4] = [
    "hasNextPage",
    "hasPreviousPage",
    "startCursor",
    "endCursor",
];

/// The builder handed to a
/// [`connection`](SelectionSetBuilderTrait::connection) callback.
///
/// On top of the regular selection surface it offers [`nodes`](Self::nodes)
/// and [`with_page_info`](Self::with_page_info). Once the callback returns,
/// a default `pageInfo` block is appended unless one was selected.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConnectionBuilder {
    selection_set_builder: SelectionSetBuilder,
}
impl ConnectionBuilder {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Consume this [`ConnectionBuilder`] to produce its [`SelectionSet`],
    /// appending the default `pageInfo` selection when none is present.
    pub(super) fn build(mut self) -> SelectionSet {
        let has_page_info =
            self.selection_set_builder
                .selections()
                .iter()
                .any(|selection| selection.is_object_named("pageInfo"));

        if !has_page_info {
            log::trace!("Appending the default `pageInfo` selection to a connection.");
            self.with_default_page_info();
        }

        self.selection_set_builder.build()
    }

    /// Select the connection's `nodes`.
    pub fn nodes<TCallback>(&mut self, callback: TCallback) -> Result<&mut Self>
    where
        TCallback: FnOnce(&mut SelectionSetBuilder) -> Result<()>,
    {
        self.object("nodes", callback)
    }

    /// Select `pageInfo` with the canonical four pagination fields.
    pub fn with_default_page_info(&mut self) -> &mut Self {
        let mut page_info = SelectionSetBuilder::new();
        page_info.fields(DEFAULT_PAGE_INFO_FIELDS);
        self.add_selection(Selection::Object(ObjectSelection::from_spec(
            FieldSpec::new("pageInfo"),
            page_info.build(),
        )))
    }

    /// Select `pageInfo` with a custom selection.
    pub fn with_page_info<TCallback>(&mut self, callback: TCallback) -> Result<&mut Self>
    where
        TCallback: FnOnce(&mut SelectionSetBuilder) -> Result<()>,
    {
        self.object("pageInfo", callback)
    }
}

#[inherent]
impl SelectionSetBuilderTrait for ConnectionBuilder {
    pub fn add_selection(&mut self, selection: Selection) -> &mut Self {
        self.selection_set_builder.add_selection(selection);
        self
    }

    pub fn connection<TField, TCallback>(
        &mut self,
        field: TField,
        callback: TCallback,
    ) -> Result<&mut Self>
    where
        TField: Into<FieldSpec>,
        TCallback: FnOnce(&mut ConnectionBuilder) -> Result<()>,
    {
        self.selection_set_builder.connection(field, callback)?;
        Ok(self)
    }

    pub fn fields<TSpecs, TSpec>(&mut self, specs: TSpecs) -> &mut Self
    where
        TSpecs: IntoIterator<Item = TSpec>,
        TSpec: Into<FieldSpec>,
    {
        self.selection_set_builder.fields(specs);
        self
    }

    pub fn inline_fragment<TCallback>(
        &mut self,
        type_condition: &str,
        callback: TCallback,
    ) -> Result<&mut Self>
    where
        TCallback: FnOnce(&mut SelectionSetBuilder) -> Result<()>,
    {
        self.selection_set_builder.inline_fragment(type_condition, callback)?;
        Ok(self)
    }

    pub fn object<TField, TCallback>(
        &mut self,
        field: TField,
        callback: TCallback,
    ) -> Result<&mut Self>
    where
        TField: Into<FieldSpec>,
        TCallback: FnOnce(&mut SelectionSetBuilder) -> Result<()>,
    {
        self.selection_set_builder.object(field, callback)?;
        Ok(self)
    }

    pub fn selections(&self) -> &[Selection] {
        self.selection_set_builder.selections()
    }

    pub fn use_fragment(&mut self, fragment_name: &str) -> Result<&mut Self> {
        self.selection_set_builder.use_fragment(fragment_name)?;
        Ok(self)
    }
}
