use crate::operation::ConnectionBuilder;
use crate::operation::FieldSelection;
use crate::operation::FieldSpec;
use crate::operation::FragmentSpread;
use crate::operation::InlineFragment;
use crate::operation::ObjectSelection;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::operation::SelectionSetBuilderTrait;
use inherent::inherent;
use thiserror::Error;

type Result<T> = std::result::Result<T, SelectionSetBuildError>;

/// Accumulates the [`Selection`]s of one selection-set scope.
///
/// A fresh builder is handed to every nested callback (see
/// [`SelectionSetBuilderTrait::object`]); the parent moves the finished
/// [`SelectionSet`] into the selection it appends once the callback returns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionSetBuilder {
    selections: Vec<Selection>,
}
impl SelectionSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume this [`SelectionSetBuilder`] to produce a [`SelectionSet`].
    pub fn build(self) -> SelectionSet {
        SelectionSet {
            selections: self.selections,
        }
    }

    /// Run `callback` against a fresh builder and return what it selected.
    pub(super) fn build_nested<TCallback>(callback: TCallback) -> Result<SelectionSet>
    where
        TCallback: FnOnce(&mut SelectionSetBuilder) -> Result<()>,
    {
        let mut builder = Self::new();
        callback(&mut builder)?;
        Ok(builder.build())
    }
}

#[inherent]
impl SelectionSetBuilderTrait for SelectionSetBuilder {
    pub fn add_selection(&mut self, selection: Selection) -> &mut Self {
        self.selections.push(selection);
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
        let spec = field.into();
        let mut connection_builder = ConnectionBuilder::new();
        callback(&mut connection_builder)?;

        self.selections.push(Selection::Object(ObjectSelection::from_spec(
            spec,
            connection_builder.build(),
        )));
        Ok(self)
    }

    pub fn fields<TSpecs, TSpec>(&mut self, specs: TSpecs) -> &mut Self
    where
        TSpecs: IntoIterator<Item = TSpec>,
        TSpec: Into<FieldSpec>,
    {
        for spec in specs {
            let (field, arguments, directives) = spec.into().into_parts();
            self.selections.push(Selection::Field(FieldSelection {
                alias: field.alias,
                arguments,
                directives,
                name: field.name,
            }));
        }
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
        if type_condition.trim().is_empty() {
            return Err(SelectionSetBuildError::EmptyTypeCondition {
                type_condition: type_condition.to_string(),
            });
        }

        let selection_set = Self::build_nested(callback)?;
        self.selections.push(Selection::InlineFragment(InlineFragment {
            directives: vec![],
            selection_set,
            type_condition: type_condition.to_string(),
        }));
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
        let spec = field.into();
        let selection_set = Self::build_nested(callback)?;
        self.selections.push(Selection::Object(ObjectSelection::from_spec(
            spec,
            selection_set,
        )));
        Ok(self)
    }

    pub fn selections(&self) -> &[Selection] {
        self.selections.as_slice()
    }

    pub fn use_fragment(&mut self, fragment_name: &str) -> Result<&mut Self> {
        if fragment_name.trim().is_empty() {
            return Err(SelectionSetBuildError::EmptyFragmentName);
        }

        self.selections.push(Selection::FragmentSpread(FragmentSpread {
            directives: vec![],
            fragment_name: fragment_name.to_string(),
        }));
        Ok(self)
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SelectionSetBuildError {
    #[error(
        "A name/alias mapping must contain exactly one entry, but it \
        contained {key_count}."
    )]
    AliasMapping {
        key_count: usize,
    },

    #[error("Fragment names must not be empty or only whitespace.")]
    EmptyFragmentName,

    #[error(
        "Fragment type conditions must not be empty or only whitespace \
        (got `{type_condition}`)."
    )]
    EmptyTypeCondition {
        type_condition: String,
    },

    #[error(
        "The `{field_name}` selection has no callback to select its \
        sub-fields."
    )]
    MissingCallback {
        field_name: String,
    },
}
