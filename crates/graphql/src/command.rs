use crate::Cli;
use crate::CommandResult;

/// A `graphql` subcommand. Running one never fails outright: every problem
/// it hits is reported through the returned [`CommandResult`].
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
