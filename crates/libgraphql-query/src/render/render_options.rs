/// Options recognized when rendering a document.
///
/// Deserializable from configuration: missing keys take their defaults and
/// unrecognized keys are ignored.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// The indentation unit repeated once per nesting level in pretty mode.
    pub indent: String,

    /// Put every selection on its own indented line instead of rendering the
    /// whole operation on one line.
    pub pretty: bool,
}
impl RenderOptions {
    pub fn compact() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }
}
impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            pretty: false,
        }
    }
}
