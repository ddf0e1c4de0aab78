use anyhow::Context;
use libfederation::schema::FederationVersion;
use libfederation::schema::Schema;
use libfederation::schema::SchemaBuilder;
use std::path::PathBuf;

/// Arguments shared by every command that loads a JSON schema model.
#[derive(Debug, clap::Args)]
pub(crate) struct SchemaArgs {
    #[arg(
        help="Federation version to publish under (e.g. `2.3`). Overrides \
             the version declared in the schema file.",
        long,
    )]
    federation_version: Option<FederationVersion>,

    #[arg(
        conflicts_with="no_link_namespace",
        help="Namespace to prefix federation directive names with on \
             Federation 2. Overrides the namespace declared in the schema \
             file.",
        long,
    )]
    link_namespace: Option<String>,

    #[arg(
        help="Emit federation directives under their base names, ignoring \
             any namespace declared in the schema file.",
        long,
    )]
    no_link_namespace: bool,

    #[arg(
        help="Path to a JSON schema model.",
        name="FILE",
        required=true,
    )]
    schema_path: PathBuf,
}
impl SchemaArgs {
    pub(crate) async fn load_schema(&self) -> anyhow::Result<Schema> {
        log::debug!("Loading schema model from {:#?}...", self.schema_path);
        let json = tokio::fs::read_to_string(&self.schema_path)
            .await
            .with_context(|| format!("Failed to read {:#?}", self.schema_path))?;

        let mut builder = SchemaBuilder::new()
            .load_json_str(&json)
            .with_context(|| format!("Failed to load {:#?}", self.schema_path))?;
        if let Some(version) = self.federation_version {
            builder = builder.federation_version(version);
        }
        if let Some(namespace) = &self.link_namespace {
            builder = builder.link_namespace(namespace.as_str());
        }
        if self.no_link_namespace {
            builder = builder.clear_link_namespace();
        }

        let schema = builder.build().context("Invalid schema model")?;
        log::debug!(
            "Loaded {} types (federation v{}).",
            schema.all_types().len(),
            schema.federation_version(),
        );
        Ok(schema)
    }
}
