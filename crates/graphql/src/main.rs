mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::WARN;

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    match cli.cmd.take() {
        Some(command) => command.run(cli).await.emit(),
        None => match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(e) => {
                log::error!("Failed to print usage: {e:#}");
                std::process::ExitCode::FAILURE
            },
        },
    }
}

/// Parse a `LOG_LEVEL` value. `VERBOSE` is an alias for `DEBUG`.
fn parse_log_level(value: &str) -> Option<tracing::Level> {
    match value.trim().to_ascii_uppercase().as_str() {
        "DEBUG" | "VERBOSE" => Some(tracing::Level::DEBUG),
        "INFO" => Some(tracing::Level::INFO),
        "TRACE" => Some(tracing::Level::TRACE),
        "WARN" => Some(tracing::Level::WARN),
        _ => None,
    }
}

fn setup_logger(cli: &Cli) {
    let mut invalid_env_val = None;
    let log_level =
        if cli.verbose {
            tracing::Level::DEBUG
        } else if let Ok(env_val) = std::env::var("LOG_LEVEL") {
            parse_log_level(&env_val).unwrap_or_else(|| {
                invalid_env_val = Some(env_val);
                DEFAULT_LOG_LEVEL
            })
        } else {
            DEFAULT_LOG_LEVEL
        };

    // Rendered documents go to stdout, so keep log lines on stderr.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(env_val) = invalid_env_val {
        log::warn!("Invalid `LOG_LEVEL` environment variable value: `{env_val}`");
    }
}
