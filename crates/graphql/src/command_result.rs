use crate::output_utils;
use std::process::ExitCode;

/// What a finished command writes to stdout/stderr, and the exit code the
/// process reports for it.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    /// A failed run that lists every one of `errors` beneath a summary line
    /// naming what was being done when they occurred.
    pub fn errors(activity: &str, errors: &[anyhow::Error]) -> Self {
        let listing =
            errors.iter()
                .map(|e| format!("  * {e:#}"))
                .collect::<Vec<_>>()
                .join("\n");

        Self::stderr(format_args!(
            "{} Encountered {} error(s) while {activity}:\n{listing}",
            output_utils::RED_X,
            errors.len(),
        ))
    }

    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }

    /// Print whatever this result carries and hand back its exit code.
    pub fn emit(self) -> ExitCode {
        if let Some(stdout) = self.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = self.stderr {
            eprintln!("{stderr}");
        }
        self.exit_code
    }
}
