mod print;
mod schema_args;
mod used_directives;

use crate::Cli;
use crate::CommandResult;
use print::PrintCmd;
use used_directives::UsedDirectivesCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "federation-sdl")]
pub(crate) enum CommandEnum {
    /// Print the federated SDL of a subgraph schema.
    Print(Box<PrintCmd>),

    /// List the federation directives a subgraph schema applies.
    UsedDirectives(Box<UsedDirectivesCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Print(cmd) => cmd.run(cli).await,
            Self::UsedDirectives(cmd) => cmd.run(cli).await,
        }
    }
}
