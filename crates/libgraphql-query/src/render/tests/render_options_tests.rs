use crate::render::RenderOptions;

#[test]
fn defaults_to_compact_with_two_space_indent() {
    let options = RenderOptions::default();

    assert!(!options.pretty);
    assert_eq!(options.indent, "  ");
    assert_eq!(RenderOptions::compact(), options);
}

#[test]
fn pretty_keeps_the_default_indent() {
    let options = RenderOptions::pretty().with_indent("    ");

    assert!(options.pretty);
    assert_eq!(options.indent, "    ");
}

#[test]
fn deserializes_with_missing_keys_defaulted() {
    let options: RenderOptions =
        serde_json::from_str(r#"{ "pretty": true, "color": "never" }"#).unwrap();

    assert_eq!(options, RenderOptions::pretty());
}
