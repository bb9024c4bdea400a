use crate::DirectiveAnnotation;
use crate::operation::Fragment;
use crate::operation::OperationKind;
use crate::operation::Selection;
use crate::operation::Variable;
use crate::render::RenderOptions;
use crate::render::stringify_arguments;
use crate::render::stringify_directives;
use crate::Value;
use indexmap::IndexMap;

/// Borrowed view of everything that makes up one rendered document. Both
/// [`Operation`](crate::operation::Operation) and
/// [`OperationBuilder`](crate::operation::OperationBuilder) render through
/// it.
pub(crate) struct DocumentParts<'a> {
    pub directives: &'a [DirectiveAnnotation],
    pub fragments: &'a IndexMap<String, Fragment>,
    pub kind: OperationKind,
    pub name: Option<&'a str>,
    pub root_selections: &'a [Selection],
    pub sub_operations: &'a [Selection],
    pub variables: &'a IndexMap<String, Variable>,
}

pub(crate) fn render_document(
    parts: &DocumentParts<'_>,
    options: &RenderOptions,
) -> String {
    let mut writer = DocumentWriter {
        options,
        output: String::new(),
    };
    writer.write_document(parts);
    writer.output
}

/// Appends rendered text to `output`. Every method receives the nesting
/// level it writes at; indentation is derived from that level alone.
struct DocumentWriter<'a> {
    options: &'a RenderOptions,
    output: String,
}
impl DocumentWriter<'_> {
    fn write_document(&mut self, parts: &DocumentParts<'_>) {
        self.write_operation_header(parts);
        self.write_selection_block(
            parts.root_selections.iter().chain(parts.sub_operations),
            0,
        );

        for fragment in parts.fragments.values() {
            self.output.push('\n');
            self.output.push_str("fragment ");
            self.output.push_str(fragment.name());
            self.output.push_str(" on ");
            self.output.push_str(fragment.type_condition());
            self.write_selection_block(fragment.selection_set().selections().iter(), 0);
        }
    }

    fn write_operation_header(&mut self, parts: &DocumentParts<'_>) {
        self.output.push_str(parts.kind.as_str());

        if let Some(name) = parts.name
            && !name.is_empty() {
            self.output.push(' ');
            self.output.push_str(name);
        }

        if !parts.variables.is_empty() {
            let variable_defs =
                parts.variables
                    .iter()
                    .map(|(name, variable)| match variable.default_value() {
                        Some(default_value) => format!(
                            "${name}: {} = {default_value}",
                            variable.type_annotation(),
                        ),
                        None => format!("${name}: {}", variable.type_annotation()),
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
            self.output.push('(');
            self.output.push_str(&variable_defs);
            self.output.push(')');
        }

        self.write_directives(parts.directives);
    }

    fn write_directives(&mut self, directives: &[DirectiveAnnotation]) {
        if !directives.is_empty() {
            self.output.push(' ');
            self.output.push_str(&stringify_directives(directives));
        }
    }

    fn write_field_head(
        &mut self,
        alias: Option<&str>,
        name: &str,
        arguments: &IndexMap<String, Value>,
        directives: &[DirectiveAnnotation],
    ) {
        if let Some(alias) = alias {
            self.output.push_str(alias);
            self.output.push_str(": ");
        }
        self.output.push_str(name);
        self.output.push_str(&stringify_arguments(arguments));
        self.write_directives(directives);
    }

    fn write_indent(&mut self, level: usize) {
        if self.options.pretty {
            self.output.push_str(&self.options.indent.repeat(level));
        }
    }

    /// Write ` { ... }` holding `selections` one level below `level`.
    fn write_selection_block<'s>(
        &mut self,
        selections: impl Iterator<Item = &'s Selection>,
        level: usize,
    ) {
        self.output.push_str(" {");
        if self.options.pretty {
            for selection in selections {
                self.output.push('\n');
                self.write_selection(selection, level + 1);
            }
            self.output.push('\n');
            self.write_indent(level);
            self.output.push('}');
        } else {
            for selection in selections {
                self.output.push(' ');
                self.write_selection(selection, level + 1);
            }
            self.output.push_str(" }");
        }
    }

    fn write_selection(&mut self, selection: &Selection, level: usize) {
        self.write_indent(level);
        match selection {
            Selection::Field(field) => self.write_field_head(
                field.alias(),
                field.name(),
                field.arguments(),
                field.directives(),
            ),

            Selection::FragmentSpread(spread) => {
                self.output.push_str("...");
                self.output.push_str(spread.fragment_name());
                self.write_directives(spread.directives());
            },

            Selection::InlineFragment(inline_fragment) => {
                self.output.push_str("... on ");
                self.output.push_str(inline_fragment.type_condition());
                self.write_directives(inline_fragment.directives());
                self.write_selection_block(
                    inline_fragment.selection_set().selections().iter(),
                    level,
                );
            },

            Selection::Object(object) => {
                self.write_field_head(
                    object.alias(),
                    object.name(),
                    object.arguments(),
                    object.directives(),
                );
                self.write_selection_block(
                    object.selection_set().selections().iter(),
                    level,
                );
            },
        }
    }
}
