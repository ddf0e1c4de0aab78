use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::schema_args::SchemaArgs;
use libfederation::federation::FederatedDocumentBuilder;

#[derive(Debug, clap::Args)]
pub(crate) struct UsedDirectivesCmd {
    #[command(flatten)]
    schema_args: SchemaArgs,
}

#[inherent::inherent]
impl RunnableCommand for UsedDirectivesCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema = match self.schema_args.load_schema().await {
            Ok(schema) => schema,
            Err(err) => return CommandResult::error(&err),
        };

        let federated = match FederatedDocumentBuilder::new(&schema).build() {
            Ok(federated) => federated,
            Err(err) => return CommandResult::error(&err.into()),
        };

        let used_directives = federated.used_directives();
        if used_directives.is_empty() {
            return CommandResult::stdout(format_args!(
                "{} No federation directives are applied.",
                output_utils::GREEN_CHECK,
            ));
        }

        // One name per line, in first-use order.
        CommandResult::stdout(format_args!(
            "{}",
            used_directives.iter().collect::<Vec<_>>().join("\n"),
        ))
    }
}
