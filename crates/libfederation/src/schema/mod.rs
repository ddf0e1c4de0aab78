mod federation_config;
mod field_resolution_error;
#[allow(clippy::module_inception)]
mod schema;
mod schema_builder;
mod schema_json;

pub use federation_config::DEFAULT_LINK_NAMESPACE;
pub use federation_config::FederationConfig;
pub use federation_config::FederationVersion;
pub use field_resolution_error::FieldResolutionError;
pub use schema::Schema;
pub use schema_builder::GraphQLOperationType;
pub use schema_builder::SchemaBuildError;
pub use schema_builder::SchemaBuilder;

#[cfg(test)]
mod tests;
