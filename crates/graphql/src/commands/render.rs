use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_query::description::DocumentDescription;
use libgraphql_query::render::RenderOptions;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct RenderCmd {
    #[arg(
        default_values_t=["json".to_string()],
        help="Set of file extensions to filter to when searching for \
             document description files within a directory.",
        long="exts",
        value_delimiter=',',
    )]
    description_file_exts: Vec<String>,

    #[arg(
        default_value="  ",
        help="Indentation unit repeated once per nesting level when \
             rendering with --pretty.",
        long,
    )]
    indent: String,

    #[arg(
        help="Put every selection on its own indented line.",
        long,
        short='p',
    )]
    pretty: bool,

    #[arg(
        help="Paths to one or more JSON document description files or \
             directories containing them.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl RenderCmd {
    /// Find every description file located at or under each path passed as
    /// an arg, in a stable order.
    pub(super) fn collect_file_paths(
        &self,
        errors: &mut Vec<anyhow::Error>,
    ) -> Vec<PathBuf> {
        let file_exts: HashSet<&str> =
            self.description_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            let entries =
                WalkDir::new(path.as_path())
                    .follow_links(true)
                    .sort_by_file_name();
            for entry in entries {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(e.into());
                        continue
                    },
                };

                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue
                }
                if let Some(ext) = entry_path.extension().and_then(|ext| ext.to_str())
                    && file_exts.contains(ext) {
                    log::trace!("Found description file at {entry_path:#?}.");
                    file_paths.push(entry_path.to_path_buf());
                }
            }
        }

        // A single explicit file argument is rendered even when its
        // extension isn't one of the --exts.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to render {first_arg_path:#?} even though it \
                doesn't match any of the --exts ({}).",
                self.description_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.to_owned());
        }

        log::debug!(
            "Found {} document description files to render.",
            file_paths.len(),
        );
        file_paths
    }

    pub(super) fn render_options(&self) -> RenderOptions {
        RenderOptions {
            indent: self.indent.clone(),
            pretty: self.pretty,
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for RenderCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<anyhow::Error> = vec![];
        let file_paths = self.collect_file_paths(&mut errors);
        let options = self.render_options();

        let mut documents = vec![];
        for path in &file_paths {
            match render_file(path, &options).await {
                Ok(document) => documents.push((path, document)),
                Err(e) => errors.push(e),
            }
        }

        if !errors.is_empty() {
            return CommandResult::errors("rendering", &errors);
        }

        if documents.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No document description files were found.",
                output_utils::RED_X,
            ));
        }

        log::info!(
            "{} Rendered {} document(s).",
            output_utils::GREEN_CHECK,
            documents.len(),
        );

        // Label each document with its source when rendering several.
        let output =
            if let [(_, document)] = documents.as_slice() {
                document.to_owned()
            } else {
                documents.iter()
                    .map(|(path, document)| format!("# {}\n{document}", path.display()))
                    .collect::<Vec<_>>()
                    .join("\n\n")
            };
        CommandResult::stdout(format_args!("{output}"))
    }
}

async fn render_file(path: &Path, options: &RenderOptions) -> anyhow::Result<String> {
    let json =
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

    render_description(&json, options)
        .with_context(|| format!("Failed to render {}", path.display()))
}

pub(super) fn render_description(
    json: &str,
    options: &RenderOptions,
) -> anyhow::Result<String> {
    let description = DocumentDescription::from_json_str(json)?;
    Ok(description.to_operation_builder()?.build(options))
}
