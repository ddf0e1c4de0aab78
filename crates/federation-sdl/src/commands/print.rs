use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::schema_args::SchemaArgs;
use libfederation::federation::render_federated_sdl;

#[derive(Debug, clap::Args)]
pub(crate) struct PrintCmd {
    #[command(flatten)]
    schema_args: SchemaArgs,
}

#[inherent::inherent]
impl RunnableCommand for PrintCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema = match self.schema_args.load_schema().await {
            Ok(schema) => schema,
            Err(err) => return CommandResult::error(&err),
        };

        match render_federated_sdl(&schema) {
            Ok(sdl) => CommandResult::stdout(format_args!("{}", sdl.trim_end())),
            Err(err) => CommandResult::error(&err.into()),
        }
    }
}
