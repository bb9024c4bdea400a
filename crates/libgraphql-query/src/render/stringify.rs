use crate::DirectiveAnnotation;
use crate::Value;
use crate::value::is_numeric_literal;
use crate::value::is_variable_ref;
use indexmap::IndexMap;

/// Render an argument [`Value`] as GraphQL text.
///
/// * Lists render as `[a, b]` and objects as `{ key: value }` (`{}` when
///   empty), recursively.
/// * [`Value::VarRef`]s render as `$name`.
/// * Strings that are `$`-prefixed variable references or that read as a
///   numeric literal render verbatim. So `"250"` renders as `250`, and so
///   does a code like `"007"`.
/// * Every other string is wrapped in double quotes. No escaping is
///   performed; callers must pre-escape quotes and backslashes.
/// * Numbers and booleans render as their literal text.
pub fn stringify_value(value: &Value) -> String {
    match value {
        Value::Boolean(value) => value.to_string(),
        Value::Float(value) => value.to_string(),
        Value::Int(value) => value.to_string(),

        Value::List(values) => format!(
            "[{}]",
            values.iter()
                .map(stringify_value)
                .collect::<Vec<_>>()
                .join(", "),
        ),

        Value::Object(entries) if entries.is_empty() => "{}".to_string(),
        Value::Object(entries) => format!("{{ {} }}", stringify_entries(entries)),

        Value::String(text) if is_variable_ref(text) || is_numeric_literal(text) =>
            text.to_owned(),
        Value::String(text) => format!("\"{text}\""),

        Value::VarRef(name) => format!("${name}"),
    }
}

/// Render a parenthesized `(name: value, ...)` argument list, or nothing
/// when `arguments` is empty.
pub fn stringify_arguments(arguments: &IndexMap<String, Value>) -> String {
    if arguments.is_empty() {
        String::new()
    } else {
        format!("({})", stringify_entries(arguments))
    }
}

/// Render directives as space-separated `@name(args)` annotations, in
/// order.
pub fn stringify_directives(directives: &[DirectiveAnnotation]) -> String {
    directives.iter()
        .map(|annot| format!("@{}{}", annot.name(), stringify_arguments(annot.args())))
        .collect::<Vec<_>>()
        .join(" ")
}

fn stringify_entries(entries: &IndexMap<String, Value>) -> String {
    entries.iter()
        .map(|(name, value)| format!("{name}: {}", stringify_value(value)))
        .collect::<Vec<_>>()
        .join(", ")
}
