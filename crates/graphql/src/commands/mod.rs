mod render;

use crate::Cli;
use crate::CommandResult;
use render::RenderCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Render JSON document descriptions as GraphQL documents.
    Render(Box<RenderCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Render(cmd) => cmd.run(cli).await
        }
    }
}
