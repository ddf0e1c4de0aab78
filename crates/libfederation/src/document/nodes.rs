//! Aliases for the `graphql_parser` schema AST nodes the document builder
//! produces, plus the traits used to compose them.

use graphql_parser::query as gp_query;
use graphql_parser::schema as gp;

pub type DirectiveNode = gp_query::Directive<'static, String>;
pub type DocumentNode = gp::Document<'static, String>;
pub type EnumTypeNode = gp::EnumType<'static, String>;
pub type EnumValueNode = gp::EnumValue<'static, String>;
pub type FieldNode = gp::Field<'static, String>;
pub type InputObjectTypeNode = gp::InputObjectType<'static, String>;
pub type InputValueNode = gp::InputValue<'static, String>;
pub type InterfaceTypeNode = gp::InterfaceType<'static, String>;
pub type ObjectTypeNode = gp::ObjectType<'static, String>;
pub type ScalarTypeNode = gp::ScalarType<'static, String>;
pub type SchemaDefinitionNode = gp::SchemaDefinition<'static, String>;
pub type TypeDefinitionNode = gp::TypeDefinition<'static, String>;
pub type UnionTypeNode = gp::UnionType<'static, String>;
pub type ValueNode = gp_query::Value<'static, String>;

/// A document node that directive applications can be attached to.
pub trait DirectiveTarget: Sized {
    /// The directive applications on this node, in the order they were
    /// merged.
    fn directives(&self) -> &[DirectiveNode];

    /// Consumes this node and returns it with `directive` appended after any
    /// existing directive applications.
    fn merge_directive(self, directive: DirectiveNode) -> Self;
}

macro_rules! impl_directive_target {
    ($($node_type:ty),* $(,)?) => {
        $(
            impl DirectiveTarget for $node_type {
                fn directives(&self) -> &[DirectiveNode] {
                    self.directives.as_slice()
                }

                fn merge_directive(mut self, directive: DirectiveNode) -> Self {
                    self.directives.push(directive);
                    self
                }
            }
        )*
    };
}
impl_directive_target!(
    EnumTypeNode,
    EnumValueNode,
    FieldNode,
    InputObjectTypeNode,
    InputValueNode,
    InterfaceTypeNode,
    ObjectTypeNode,
    ScalarTypeNode,
    UnionTypeNode,
);

/// A document node that owns a list of [`FieldNode`]s.
pub trait FieldContainerNode: Sized {
    fn fields(&self) -> &[FieldNode];

    /// Consumes this node and returns it without the fields whose names are
    /// listed in `field_names`. Remaining fields keep their order.
    fn without_fields(self, field_names: &[&str]) -> Self;
}

macro_rules! impl_field_container_node {
    ($($node_type:ty),* $(,)?) => {
        $(
            impl FieldContainerNode for $node_type {
                fn fields(&self) -> &[FieldNode] {
                    self.fields.as_slice()
                }

                fn without_fields(mut self, field_names: &[&str]) -> Self {
                    self.fields.retain(|field| !field_names.contains(&field.name.as_str()));
                    self
                }
            }
        )*
    };
}
impl_field_container_node!(InterfaceTypeNode, ObjectTypeNode);
