use crate::description::ArgumentsDescription;
use crate::description::FieldNameDescription;
use crate::description::SelectionDescription;
use crate::description::selection_description::replay_selections;
use crate::description::selection_description::require_select;
use crate::description::selection_description::to_field_spec;
use crate::DirectiveAnnotation;
use crate::operation::OperationBuilder;
use crate::operation::OperationKind;
use crate::operation::SelectionSetBuildError;
use crate::operation::Variable;
use crate::render::stringify_value;
use crate::Value;
use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

type Result<T> = std::result::Result<T, DocumentDescriptionError>;

/// A whole document described as data, typically decoded from JSON.
///
/// Replaying a description through [`to_operation_builder`](Self::to_operation_builder)
/// issues the same builder calls a hand-written program would, in this
/// order: name, variables, operation directives, root selections,
/// sub-operations, then fragments.
///
/// ```
/// use libgraphql_query::description::DocumentDescription;
/// use libgraphql_query::render::RenderOptions;
///
/// # fn main() -> Result<(), libgraphql_query::description::DocumentDescriptionError> {
/// let description = DocumentDescription::from_json_str(r#"{
///     "kind": "query",
///     "name": "Shop",
///     "select": ["id", { "object": "owner", "select": ["email"] }]
/// }"#)?;
///
/// assert_eq!(
///     description.to_operation_builder()?.build(&RenderOptions::default()),
///     "query Shop { id owner { email } }",
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDescription {
    #[serde(default)]
    directives: Vec<DirectiveDescription>,
    #[serde(default)]
    fragments: Vec<FragmentDescription>,
    kind: OperationKind,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    operations: Vec<SubOperationDescription>,
    #[serde(default)]
    select: Vec<SelectionDescription>,
    #[serde(default)]
    variables: IndexMap<String, VariableDescription>,
}
impl DocumentDescription {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Replay this description into a fresh [`OperationBuilder`].
    pub fn to_operation_builder(&self) -> Result<OperationBuilder> {
        let mut builder = OperationBuilder::new(self.kind);

        if let Some(name) = &self.name {
            builder.name(name.as_str());
        }

        if !self.variables.is_empty() {
            builder.variables(
                self.variables.iter()
                    .map(|(name, variable)| (name.as_str(), variable.to_variable())),
            );
        }

        for directive in &self.directives {
            builder.operation_directive(directive.to_directive_annotation());
        }

        replay_selections(&mut builder, &self.select)?;

        for sub_operation in &self.operations {
            let spec = to_field_spec(
                &sub_operation.operation,
                sub_operation.args.as_ref(),
                None,
            )?;
            let select = require_select(sub_operation.select.as_ref(), spec.field().name())?;
            builder.operation(spec, |child| replay_selections(child, select))?;
        }

        for fragment in &self.fragments {
            builder.fragment(&fragment.name, &fragment.on, |child| {
                replay_selections(child, &fragment.select)
            })?;
        }

        log::debug!(
            "Replayed a {} description with {} root selection(s), {} \
            sub-operation(s), and {} fragment(s).",
            self.kind.as_str(),
            self.select.len(),
            self.operations.len(),
            self.fragments.len(),
        );
        Ok(builder)
    }
}

/// `{ "name": "cached", "args": { "ttl": 60 } }`
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct DirectiveDescription {
    name: String,
    #[serde(default)]
    args: IndexMap<String, Value>,
}
impl DirectiveDescription {
    pub fn to_directive_annotation(&self) -> DirectiveAnnotation {
        self.args.iter().fold(
            DirectiveAnnotation::new(self.name.as_str()),
            |annot, (name, value)| annot.arg(name.as_str(), value.clone()),
        )
    }
}

/// `{ "name": "ProductFields", "on": "Product", "select": [...] }`
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FragmentDescription {
    name: String,
    on: String,
    select: Vec<SelectionDescription>,
}

/// `{ "operation": ..., "args": ..., "select": [...] }`
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SubOperationDescription {
    operation: FieldNameDescription,
    #[serde(default)]
    args: Option<ArgumentsDescription>,
    #[serde(default)]
    select: Option<Vec<SelectionDescription>>,
}

/// A bare type annotation (`"Int!"`), or a type annotation with a default
/// value (`{ "type": "String!", "defaultValue": "JPG" }`).
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum VariableDescription {
    Type(String),

    Definition {
        #[serde(rename = "type")]
        type_annotation: String,
        #[serde(default, rename = "defaultValue")]
        default_value: Option<Value>,
    },
}
impl VariableDescription {
    /// String defaults are taken as raw GraphQL text; any other default is
    /// rendered as a GraphQL value.
    pub fn to_variable(&self) -> Variable {
        match self {
            Self::Type(type_annotation) => Variable::new(type_annotation.as_str()),

            Self::Definition { type_annotation, default_value } => {
                let variable = Variable::new(type_annotation.as_str());
                match default_value {
                    Some(Value::String(text)) => variable.with_default_value(text.as_str()),
                    Some(default_value) =>
                        variable.with_default_value(stringify_value(default_value)),
                    None => variable,
                }
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum DocumentDescriptionError {
    #[error("Failure to build the described document: {0}")]
    BuildError(#[from] SelectionSetBuildError),

    #[error("Failure to decode the document description: {0}")]
    DecodeError(#[from] serde_json::Error),
}
