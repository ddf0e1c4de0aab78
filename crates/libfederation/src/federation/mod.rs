//! Apollo Federation support: turns a [`Schema`](crate::schema::Schema) into
//! the SDL document a subgraph publishes to its gateway.

mod directive_merger;
mod federated_document_builder;
mod federated_sdl;
pub mod reserved;
mod used_directives;

pub use directive_merger::DirectiveMerger;
pub use federated_document_builder::FederatedDocument;
pub use federated_document_builder::FederatedDocumentBuilder;
pub use federated_sdl::link_header;
pub use federated_sdl::render_federated_sdl;
pub use used_directives::UsedDirectives;

#[cfg(test)]
mod tests;
