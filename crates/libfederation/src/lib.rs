//! Builds the SDL document a federated GraphQL subgraph publishes to its
//! gateway.
//!
//! A [`Schema`](schema::Schema) declared with federation directive metadata is
//! walked by a [`DocumentBuilder`](document::DocumentBuilder) that, through a
//! [`FederatedDocumentBuilder`](federation::FederatedDocumentBuilder), hides
//! the federation plumbing types and fields, attaches the declared directives
//! to the output nodes, and records which directives were used.

pub mod document;
pub mod federation;
mod federation_directive;
pub mod schema;
pub mod types;
mod value;

pub use federation_directive::FederationDirective;
pub use federation_directive::FederationDirectiveArgument;
pub use value::Value;
