use crate::DirectiveAnnotation;
use crate::operation::SelectionSetBuildError;
use crate::Value;
use indexmap::IndexMap;

/// The name of a selected field together with an optional alias.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldRef {
    pub(super) alias: Option<String>,
    pub(super) name: String,
}
impl FieldRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            name: name.into(),
        }
    }

    /// Renders as `alias: name`.
    pub fn aliased(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            name: name.into(),
        }
    }

    /// Resolve a `{ name: alias }` mapping. The mapping must hold exactly
    /// one entry.
    pub fn from_alias_mapping<TEntries, TName, TAlias>(
        mapping: TEntries,
    ) -> Result<Self, SelectionSetBuildError>
    where
        TEntries: IntoIterator<Item = (TName, TAlias)>,
        TName: Into<String>,
        TAlias: Into<String>,
    {
        let mut entries: Vec<(TName, TAlias)> = mapping.into_iter().collect();
        if entries.len() != 1 {
            return Err(SelectionSetBuildError::AliasMapping {
                key_count: entries.len(),
            });
        }
        let (name, alias) = entries.remove(0);
        Ok(Self::aliased(name, alias))
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl From<&str> for FieldRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for FieldRef {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<(&str, &str)> for FieldRef {
    fn from((name, alias): (&str, &str)) -> Self {
        Self::aliased(name, alias)
    }
}

impl From<(String, String)> for FieldRef {
    fn from((name, alias): (String, String)) -> Self {
        Self::aliased(name, alias)
    }
}

/// Describes one field selection: which field (and alias), its arguments,
/// and its directives.
///
/// Argument entries may be *absent* (`None`), which lets a caller pass a
/// fully populated argument record and leave entries out conditionally.
/// Absent entries never reach the rendered document.
///
/// ```
/// use libgraphql_query::operation::FieldSpec;
/// use libgraphql_query::Value;
///
/// let after: Option<&str> = None;
/// let spec = FieldSpec::new("products")
///     .alias("firstProducts")
///     .arg("first", 10)
///     .optional_arg("after", after)
///     .directive("include", Value::object([("if", "$withProducts")]));
/// assert_eq!(spec.field().alias(), Some("firstProducts"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSpec {
    pub(super) arguments: IndexMap<String, Option<Value>>,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) field: FieldRef,
}
impl FieldSpec {
    pub fn new(field: impl Into<FieldRef>) -> Self {
        Self {
            arguments: IndexMap::new(),
            directives: vec![],
            field: field.into(),
        }
    }

    /// Add a [`DirectiveAnnotation`] after any previously added
    /// `DirectiveAnnotation`s.
    pub fn add_directive(mut self, annot: DirectiveAnnotation) -> Self {
        self.directives.push(annot);
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.field.alias = Some(alias.into());
        self
    }

    pub fn arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(name.into(), Some(value.into()));
        self
    }

    /// Add every entry of `args` in iteration order.
    pub fn args<TEntries, TName, TValue>(mut self, args: TEntries) -> Self
    where
        TEntries: IntoIterator<Item = (TName, TValue)>,
        TName: Into<String>,
        TValue: Into<Value>,
    {
        for (name, value) in args {
            self.arguments.insert(name.into(), Some(value.into()));
        }
        self
    }

    /// Add a `directiveName: argsOrScalar` directive input, normalized with
    /// [`DirectiveAnnotation::from_input`].
    pub fn directive(mut self, name: impl Into<String>, input: impl Into<Value>) -> Self {
        self.directives.push(DirectiveAnnotation::from_input(name, input.into()));
        self
    }

    /// Add an argument entry that may be absent. `None` keeps the entry's
    /// slot but it is dropped before the selection is stored.
    pub fn optional_arg<TValue: Into<Value>>(
        mut self,
        name: impl Into<String>,
        value: Option<TValue>,
    ) -> Self {
        self.arguments.insert(name.into(), value.map(Into::into));
        self
    }

    pub fn arguments(&self) -> &IndexMap<String, Option<Value>> {
        &self.arguments
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.directives.as_slice()
    }

    pub fn field(&self) -> &FieldRef {
        &self.field
    }

    pub fn has_arguments(&self) -> bool {
        !self.arguments.is_empty()
    }

    /// Split into the field reference, the present arguments, and the
    /// directives.
    pub(super) fn into_parts(
        self,
    ) -> (FieldRef, IndexMap<String, Value>, Vec<DirectiveAnnotation>) {
        let arguments =
            self.arguments
                .into_iter()
                .filter_map(|(name, value)| value.map(|value| (name, value)))
                .collect();

        (self.field, arguments, self.directives)
    }
}

impl From<&str> for FieldSpec {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for FieldSpec {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<(&str, &str)> for FieldSpec {
    fn from(name_and_alias: (&str, &str)) -> Self {
        Self::new(name_and_alias)
    }
}

impl From<(String, String)> for FieldSpec {
    fn from(name_and_alias: (String, String)) -> Self {
        Self::new(name_and_alias)
    }
}

impl From<FieldRef> for FieldSpec {
    fn from(field: FieldRef) -> Self {
        Self::new(field)
    }
}
