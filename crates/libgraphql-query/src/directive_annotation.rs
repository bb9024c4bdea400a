use crate::Value;
use indexmap::IndexMap;

/// Represents a
/// [directive annotation](https://spec.graphql.org/October2021/#sec-Language.Directives)
/// placed on a field selection, a fragment spread, an inline fragment, or an
/// operation.
///
/// A [`DirectiveAnnotation`] is a directive name paired with a set of named
/// arguments ([`Value`]s).
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub(crate) args: IndexMap<String, Value>,
    pub(crate) name: String,
}
impl DirectiveAnnotation {
    /// A directive annotation named `name` with no arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            args: IndexMap::new(),
            name: name.into(),
        }
    }

    /// Append an argument after any previously added arguments. Adding an
    /// argument name a second time replaces its value in place.
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.insert(name.into(), value.into());
        self
    }

    /// Normalize a single `directiveName: argsOrScalar` directive input.
    ///
    /// A [`Value::Object`] input supplies the directive's arguments as-is.
    /// Any other input is wrapped as a single `value` argument holding the
    /// input's plain-text form, so `{ "cached": true }` becomes
    /// `@cached(value: "true")`.
    pub fn from_input(name: impl Into<String>, input: Value) -> Self {
        let args = match input {
            Value::Object(args) => args,
            scalar => IndexMap::from([(
                "value".to_string(),
                Value::String(scalar.to_plain_string()),
            )]),
        };

        Self {
            args,
            name: name.into(),
        }
    }

    /// Normalize a `{ directiveName: argsOrScalar, ... }` mapping into one
    /// [`DirectiveAnnotation`] per entry, in mapping order.
    pub fn from_input_map<TEntries, TName>(inputs: TEntries) -> Vec<Self>
    where
        TEntries: IntoIterator<Item = (TName, Value)>,
        TName: Into<String>,
    {
        inputs.into_iter()
            .map(|(name, input)| Self::from_input(name, input))
            .collect()
    }

    /// A map from ArgumentName -> [`Value`] for all arguments passed to this
    /// [`DirectiveAnnotation`].
    ///
    /// This returns an [`IndexMap`] to guarantee that map entries retain the same
    /// ordering as the order of arguments passed to this directive annotation.
    pub fn args(&self) -> &IndexMap<String, Value> {
        &self.args
    }

    /// The name of the directive this annotation refers to.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
