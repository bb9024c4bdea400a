use indexmap::IndexMap;
use regex::Regex;
use serde::de;
use std::fmt;
use std::sync::LazyLock;

static NUMERIC_LITERAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?$").unwrap()
});

static VARIABLE_REF_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\$[A-Za-z0-9_]+$").unwrap()
});

/// An argument value passed to a field, a sub-operation, or a
/// [`DirectiveAnnotation`](crate::DirectiveAnnotation).
///
/// Converting a `&str` or [`String`] into a [`Value`] recognizes variable
/// references: `"$imageFormat"` becomes [`Value::VarRef`] while any other
/// text becomes [`Value::String`].
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(bool),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
    String(String),
    /// A reference to an operation-level variable. The name is stored
    /// without its leading `$`.
    VarRef(String),
}
impl Value {
    /// Build a [`Value::List`] from anything convertible into [`Value`]s.
    pub fn list<TValues, TValue>(values: TValues) -> Self
    where
        TValues: IntoIterator<Item = TValue>,
        TValue: Into<Value>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Build a [`Value::Object`] whose entries keep the order in which they
    /// are given.
    pub fn object<TEntries, TKey, TValue>(entries: TEntries) -> Self
    where
        TEntries: IntoIterator<Item = (TKey, TValue)>,
        TKey: Into<String>,
        TValue: Into<Value>,
    {
        Self::Object(
            entries.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect()
        )
    }

    /// Build a [`Value::VarRef`]. A leading `$` on `name` is optional.
    pub fn var_ref(name: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        Self::VarRef(name.strip_prefix('$').unwrap_or(name).to_string())
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        if let Self::Object(entries) = self {
            Some(entries)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    /// The plain-text form of this value, used when a scalar directive input
    /// is wrapped into a `value` argument.
    ///
    /// Lists flatten to their comma-joined items. Objects fall back to their
    /// GraphQL rendering.
    pub(crate) fn to_plain_string(&self) -> String {
        match self {
            Self::Boolean(value) => value.to_string(),
            Self::Float(value) => value.to_string(),
            Self::Int(value) => value.to_string(),
            Self::List(values) =>
                values.iter()
                    .map(Self::to_plain_string)
                    .collect::<Vec<_>>()
                    .join(","),
            Self::Object(_) => crate::render::stringify_value(self),
            Self::String(value) => value.to_owned(),
            Self::VarRef(name) => format!("${name}"),
        }
    }
}

/// Whether `text` is a `$`-prefixed variable reference such as `$first`.
pub(crate) fn is_variable_ref(text: &str) -> bool {
    VARIABLE_REF_PATTERN.is_match(text)
}

/// Whether `text` reads as an integer or float literal in its entirety.
pub(crate) fn is_numeric_literal(text: &str) -> bool {
    NUMERIC_LITERAL_PATTERN.is_match(text)
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        if is_variable_ref(value) {
            Self::var_ref(value)
        } else {
            Self::String(value.to_string())
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        if is_variable_ref(&value) {
            Self::var_ref(value)
        } else {
            Self::String(value)
        }
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::list(values)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Self::Object(entries)
    }
}

impl<'de> de::Deserialize<'de> for Value {
    fn deserialize<D: de::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;
impl<'de> de::Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(
            "a string, number, boolean, list, or object argument value",
        )
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Value, E> {
        Ok(Value::Boolean(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Value, E> {
        Ok(Value::Int(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Value, E> {
        Ok(match i64::try_from(value) {
            Ok(value) => Value::Int(value),
            Err(_) => Value::Float(value as f64),
        })
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Value, E> {
        Ok(Value::Float(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Value, E> {
        Ok(Value::from(value))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Value, E> {
        Ok(Value::from(value))
    }

    fn visit_seq<A: de::SeqAccess<'de>>(
        self,
        mut seq: A,
    ) -> Result<Value, A::Error> {
        let mut values = vec![];
        while let Some(value) = seq.next_element()? {
            values.push(value);
        }
        Ok(Value::List(values))
    }

    fn visit_map<A: de::MapAccess<'de>>(
        self,
        mut map: A,
    ) -> Result<Value, A::Error> {
        let mut entries = IndexMap::new();
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            entries.insert(key, value);
        }
        Ok(Value::Object(entries))
    }
}
