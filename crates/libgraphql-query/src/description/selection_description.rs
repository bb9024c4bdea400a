use crate::operation::ConnectionBuilder;
use crate::operation::FieldRef;
use crate::operation::FieldSpec;
use crate::operation::SelectionSetBuildError;
use crate::operation::SelectionSetBuilderTrait;
use crate::Value;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Deserializer;

type Result<T> = std::result::Result<T, SelectionSetBuildError>;

/// Argument entries of a described selection. A JSON `null` marks the entry
/// as absent.
pub type ArgumentsDescription = IndexMap<String, Option<Value>>;

/// `{ directiveName: argsOrScalar }` inputs of a described field.
pub type DirectivesDescription = IndexMap<String, Option<Value>>;

/// A field name, or a one-entry `{ "name": "alias" }` mapping.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldNameDescription {
    Name(String),
    AliasMapping(IndexMap<String, String>),
}
impl FieldNameDescription {
    pub fn to_field_ref(&self) -> Result<FieldRef> {
        match self {
            Self::Name(name) => Ok(FieldRef::new(name.as_str())),
            Self::AliasMapping(mapping) => FieldRef::from_alias_mapping(
                mapping.iter().map(|(name, alias)| (name.as_str(), alias.as_str())),
            ),
        }
    }
}

/// One entry of a described selection set.
///
/// Mirrors the arguments accepted by the builder methods:
///
/// | JSON                                              | Builder call                     |
/// |---------------------------------------------------|----------------------------------|
/// | `"id"`                                            | `fields(["id"])`                 |
/// | `{ "description": "summary" }`                    | `fields([("description", "summary")])` |
/// | `{ "field": ..., "args": ..., "directive": ... }`  | `fields([FieldSpec])`            |
/// | `{ "object": ..., "args": ..., "select": [...] }` | `object(..)`                     |
/// | `{ "connection": ..., "args": ..., "select": [...] }` | `connection(..)`             |
/// | `{ "useFragment": "Name" }`                       | `use_fragment(..)`               |
/// | `{ "inlineFragment": "Type", "select": [...] }`   | `inline_fragment(..)`            |
///
/// The keys `field`, `object`, `connection`, `useFragment` and
/// `inlineFragment` are reserved: a one-entry mapping that uses one of them
/// decodes as the structured entry, not as an alias. Alias a field with one
/// of those names through the `field` form instead, e.g.
/// `{ "field": { "object": "target" } }`.
///
/// A `null` directive input is taken as the text `null`, so
/// `{ "field": "x", "directive": { "skip": null } }` selects
/// `x @skip(value: "null")`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SelectionDescription {
    Name(String),

    Field {
        field: FieldNameDescription,
        #[serde(default)]
        args: Option<ArgumentsDescription>,
        #[serde(default)]
        directive: Option<DirectivesDescription>,
    },

    Object {
        object: FieldNameDescription,
        #[serde(default)]
        args: Option<ArgumentsDescription>,
        #[serde(default)]
        select: Option<Vec<SelectionDescription>>,
    },

    Connection {
        connection: FieldNameDescription,
        #[serde(default)]
        args: Option<ArgumentsDescription>,
        #[serde(default)]
        select: Option<Vec<ConnectionSelectionDescription>>,
    },

    UseFragment {
        #[serde(rename = "useFragment")]
        use_fragment: String,
    },

    InlineFragment {
        #[serde(rename = "inlineFragment")]
        inline_fragment: String,
        #[serde(default)]
        select: Option<Vec<SelectionDescription>>,
    },

    AliasMapping(IndexMap<String, String>),
}
impl SelectionDescription {
    pub(super) fn replay<TBuilder: SelectionSetBuilderTrait>(
        &self,
        builder: &mut TBuilder,
    ) -> Result<()> {
        match self {
            Self::Name(name) => {
                builder.fields([name.as_str()]);
            },

            Self::AliasMapping(mapping) => {
                builder.fields(
                    mapping.iter().map(|(name, alias)| (name.as_str(), alias.as_str())),
                );
            },

            Self::Field { field, args, directive } => {
                builder.fields([
                    to_field_spec(field, args.as_ref(), directive.as_ref())?,
                ]);
            },

            Self::Object { object, args, select } => {
                let spec = to_field_spec(object, args.as_ref(), None)?;
                let select = require_select(select.as_ref(), spec.field().name())?;
                builder.object(spec, |child| replay_selections(child, select))?;
            },

            Self::Connection { connection, args, select } => {
                let spec = to_field_spec(connection, args.as_ref(), None)?;
                let select = require_select(select.as_ref(), spec.field().name())?;
                builder.connection(spec, |connection_builder| {
                    replay_connection_selections(connection_builder, select)
                })?;
            },

            Self::UseFragment { use_fragment } => {
                builder.use_fragment(use_fragment)?;
            },

            Self::InlineFragment { inline_fragment, select } => {
                let select = require_select(select.as_ref(), inline_fragment)?;
                builder.inline_fragment(inline_fragment, |child| {
                    replay_selections(child, select)
                })?;
            },
        }
        Ok(())
    }
}

/// One entry of a described connection selection set: the connection-only
/// `nodes` and `pageInfo` shorthands, or any regular selection.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ConnectionSelectionDescription {
    Nodes {
        nodes: Vec<SelectionDescription>,
    },

    /// `{ "pageInfo": null }` selects the default pagination fields.
    PageInfo {
        #[serde(rename = "pageInfo", deserialize_with = "deserialize_nullable")]
        page_info: Option<Vec<SelectionDescription>>,
    },

    Selection(SelectionDescription),
}

pub(super) fn replay_selections<TBuilder: SelectionSetBuilderTrait>(
    builder: &mut TBuilder,
    descriptions: &[SelectionDescription],
) -> Result<()> {
    for description in descriptions {
        description.replay(builder)?;
    }
    Ok(())
}

fn replay_connection_selections(
    builder: &mut ConnectionBuilder,
    descriptions: &[ConnectionSelectionDescription],
) -> Result<()> {
    for description in descriptions {
        match description {
            ConnectionSelectionDescription::Nodes { nodes } => {
                builder.nodes(|child| replay_selections(child, nodes))?;
            },

            ConnectionSelectionDescription::PageInfo { page_info: Some(select) } => {
                builder.with_page_info(|child| replay_selections(child, select))?;
            },

            ConnectionSelectionDescription::PageInfo { page_info: None } => {
                builder.with_default_page_info();
            },

            ConnectionSelectionDescription::Selection(selection) =>
                selection.replay(builder)?,
        }
    }
    Ok(())
}

/// Build a [`FieldSpec`] from a described name, its arguments (absent
/// entries included), and its `{ directiveName: argsOrScalar }` inputs.
pub(super) fn to_field_spec(
    field: &FieldNameDescription,
    args: Option<&ArgumentsDescription>,
    directive: Option<&DirectivesDescription>,
) -> Result<FieldSpec> {
    let mut spec = FieldSpec::new(field.to_field_ref()?);
    for (name, value) in args.into_iter().flatten() {
        spec = spec.optional_arg(name.as_str(), value.clone());
    }
    for (name, input) in directive.into_iter().flatten() {
        let input = input.clone().unwrap_or_else(|| Value::String("null".to_string()));
        spec = spec.directive(name.as_str(), input);
    }
    Ok(spec)
}

/// The sub-selection of a described object-like entry. Described entries
/// have no other way to select sub-fields, so a missing `select` is the
/// described form of a missing callback.
pub(super) fn require_select<'a, T>(
    select: Option<&'a Vec<T>>,
    field_name: &str,
) -> Result<&'a [T]> {
    select
        .map(Vec::as_slice)
        .ok_or_else(|| SelectionSetBuildError::MissingCallback {
            field_name: field_name.to_string(),
        })
}

/// Like `Option::deserialize`, but a missing key is an error rather than
/// `None`.
fn deserialize_nullable<'de, D, T>(
    deserializer: D,
) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}
