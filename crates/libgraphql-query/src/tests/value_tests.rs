use crate::Value;
use crate::value::is_numeric_literal;
use crate::value::is_variable_ref;
use indexmap::IndexMap;

#[test]
fn dollar_prefixed_text_becomes_a_var_ref() {
    assert_eq!(Value::from("$first"), Value::VarRef("first".to_string()));
    assert_eq!(Value::from("$".to_string()), Value::String("$".to_string()));
    assert_eq!(Value::from("first"), Value::String("first".to_string()));
    assert_eq!(Value::from("$first-page"), Value::String("$first-page".to_string()));
}

#[test]
fn var_ref_constructor_accepts_optional_dollar() {
    assert_eq!(Value::var_ref("$id"), Value::VarRef("id".to_string()));
    assert_eq!(Value::var_ref("id"), Value::VarRef("id".to_string()));
}

#[test]
fn numeric_literal_detection() {
    for text in ["0", "250", "-3", "1.5", "-0.25", "1e10", "2.5E-3", "007"] {
        assert!(is_numeric_literal(text), "{text} should read as numeric");
    }
    for text in ["", "-", "1.", ".5", "1,000", "0x1F", "12px", "NaN"] {
        assert!(!is_numeric_literal(text), "{text} should not read as numeric");
    }
}

#[test]
fn variable_ref_detection() {
    assert!(is_variable_ref("$productsCount"));
    assert!(is_variable_ref("$_private1"));
    assert!(!is_variable_ref("productsCount"));
    assert!(!is_variable_ref("$"));
    assert!(!is_variable_ref("$a b"));
}

#[test]
fn object_keeps_insertion_order() {
    let value = Value::object([("zeta", 1), ("alpha", 2), ("mid", 3)]);
    let keys: Vec<&str> =
        value.as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();

    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn list_and_vec_conversions_agree() {
    assert_eq!(Value::list(["a", "b"]), Value::from(vec!["a", "b"]));
    assert_eq!(Value::list([1, 2]), Value::List(vec![Value::Int(1), Value::Int(2)]));
}

#[test]
fn plain_string_forms() {
    assert_eq!(Value::from(true).to_plain_string(), "true");
    assert_eq!(Value::from(42).to_plain_string(), "42");
    assert_eq!(Value::from("EUR").to_plain_string(), "EUR");
    assert_eq!(Value::from("$currency").to_plain_string(), "$currency");
    assert_eq!(Value::list(["a", "b"]).to_plain_string(), "a,b");
    assert_eq!(
        Value::object([("currency", "EUR")]).to_plain_string(),
        "{ currency: \"EUR\" }",
    );
}

#[test]
fn deserializes_json_values() {
    let value: Value = serde_json::from_str(
        r#"{ "first": 10, "ratio": 0.5, "reverse": true, "after": "$cursor", "ids": ["a"] }"#,
    ).unwrap();

    let mut expected = IndexMap::new();
    expected.insert("first".to_string(), Value::Int(10));
    expected.insert("ratio".to_string(), Value::Float(0.5));
    expected.insert("reverse".to_string(), Value::Boolean(true));
    expected.insert("after".to_string(), Value::VarRef("cursor".to_string()));
    expected.insert("ids".to_string(), Value::List(vec![Value::String("a".to_string())]));
    assert_eq!(value, Value::Object(expected));
}

#[test]
fn null_is_not_a_value() {
    assert!(serde_json::from_str::<Value>("null").is_err());
    assert_eq!(serde_json::from_str::<Option<Value>>("null").unwrap(), None);
}

#[test]
fn accessors_only_match_their_variant() {
    assert_eq!(Value::from("text").as_str(), Some("text"));
    assert_eq!(Value::from(1).as_str(), None);
    assert!(Value::from("text").as_object().is_none());
}
