//! A generic "schema to SDL document" traversal.
//!
//! [`DocumentBuilder`] walks a [`Schema`](crate::schema::Schema), builds a
//! baseline node for every element with the functions in [`baseline`], and
//! lets a [`DocumentHooks`] implementation transform each node before it is
//! attached to its parent.

pub mod baseline;
mod document_builder;
mod document_hooks;
mod nodes;

pub use document_builder::build_document;
pub use document_builder::DocumentBuildError;
pub use document_builder::DocumentBuilder;
pub use document_hooks::BaselineHooks;
pub use document_hooks::DocumentHooks;
pub use nodes::DirectiveNode;
pub use nodes::DirectiveTarget;
pub use nodes::DocumentNode;
pub use nodes::EnumTypeNode;
pub use nodes::EnumValueNode;
pub use nodes::FieldContainerNode;
pub use nodes::FieldNode;
pub use nodes::InputObjectTypeNode;
pub use nodes::InputValueNode;
pub use nodes::InterfaceTypeNode;
pub use nodes::ObjectTypeNode;
pub use nodes::ScalarTypeNode;
pub use nodes::SchemaDefinitionNode;
pub use nodes::TypeDefinitionNode;
pub use nodes::UnionTypeNode;
pub use nodes::ValueNode;

#[cfg(test)]
mod tests;
