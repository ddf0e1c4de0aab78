//! Baseline node builders: one pure function per schema element kind.
//!
//! Each builder maps a schema element onto its `graphql_parser` node with no
//! knowledge of federation. Child nodes (fields, arguments, enum values) are
//! built by the caller and passed in, so that the traversal can run its hooks
//! on every child before the parent node is assembled.
//!
//! Schema elements carry no source location, so every node is positioned at
//! [`SYNTHESIZED_POS`].

use crate::FederationDirectiveArgument;
use crate::document::DirectiveNode;
use crate::document::EnumTypeNode;
use crate::document::EnumValueNode;
use crate::document::FieldNode;
use crate::document::InputObjectTypeNode;
use crate::document::InputValueNode;
use crate::document::InterfaceTypeNode;
use crate::document::ObjectTypeNode;
use crate::document::ScalarTypeNode;
use crate::document::SchemaDefinitionNode;
use crate::document::UnionTypeNode;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::InputObjectType;
use crate::types::InputValue;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

/// Position assigned to nodes that were built from a schema model rather than
/// parsed from text.
pub const SYNTHESIZED_POS: graphql_parser::Pos = graphql_parser::Pos {
    line: 1,
    column: 1,
};

// ───────────────────────────────────────────────────
// Type definitions
// ───────────────────────────────────────────────────

pub fn build_enum_type_node(
    enum_type: &EnumType,
    values: Vec<EnumValueNode>,
) -> EnumTypeNode {
    graphql_parser::schema::EnumType {
        position: SYNTHESIZED_POS,
        description: enum_type.description().map(str::to_string),
        name: enum_type.name().to_string(),
        directives: vec![],
        values,
    }
}

pub fn build_input_object_type_node(
    input_object_type: &InputObjectType,
    fields: Vec<InputValueNode>,
) -> InputObjectTypeNode {
    graphql_parser::schema::InputObjectType {
        position: SYNTHESIZED_POS,
        description: input_object_type.description().map(str::to_string),
        name: input_object_type.name().to_string(),
        directives: vec![],
        fields,
    }
}

pub fn build_interface_type_node(
    interface_type: &InterfaceType,
    fields: Vec<FieldNode>,
) -> InterfaceTypeNode {
    graphql_parser::schema::InterfaceType {
        position: SYNTHESIZED_POS,
        description: interface_type.description().map(str::to_string),
        name: interface_type.name().to_string(),
        implements_interfaces: interface_type
            .interface_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        directives: vec![],
        fields,
    }
}

pub fn build_object_type_node(
    object_type: &ObjectType,
    fields: Vec<FieldNode>,
) -> ObjectTypeNode {
    graphql_parser::schema::ObjectType {
        position: SYNTHESIZED_POS,
        description: object_type.description().map(str::to_string),
        name: object_type.name().to_string(),
        implements_interfaces: object_type
            .interface_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
        directives: vec![],
        fields,
    }
}

pub fn build_scalar_type_node(scalar_type: &ScalarType) -> ScalarTypeNode {
    graphql_parser::schema::ScalarType {
        position: SYNTHESIZED_POS,
        description: scalar_type.description().map(str::to_string),
        name: scalar_type.name().to_string(),
        directives: vec![],
    }
}

pub fn build_union_type_node(union_type: &UnionType) -> UnionTypeNode {
    graphql_parser::schema::UnionType {
        position: SYNTHESIZED_POS,
        description: union_type.description().map(str::to_string),
        name: union_type.name().to_string(),
        directives: vec![],
        types: union_type
            .member_type_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}

// ───────────────────────────────────────────────────
// Members
// ───────────────────────────────────────────────────

/// Builds the node for a field argument or an input-object field.
pub fn build_argument_node(input_value: &InputValue) -> InputValueNode {
    graphql_parser::schema::InputValue {
        position: SYNTHESIZED_POS,
        description: input_value.description().map(str::to_string),
        name: input_value.name().to_string(),
        value_type: input_value.type_annotation().to_gp(),
        default_value: input_value.default_value().map(|value| value.to_gp()),
        directives: vec![],
    }
}

pub fn build_enum_value_node(enum_value: &EnumValue) -> EnumValueNode {
    graphql_parser::schema::EnumValue {
        position: SYNTHESIZED_POS,
        description: enum_value.description().map(str::to_string),
        name: enum_value.name().to_string(),
        directives: vec![],
    }
}

pub fn build_field_node(field: &Field, arguments: Vec<InputValueNode>) -> FieldNode {
    graphql_parser::schema::Field {
        position: SYNTHESIZED_POS,
        description: field.description().map(str::to_string),
        name: field.name().to_string(),
        arguments,
        field_type: field.type_annotation().to_gp(),
        directives: vec![],
    }
}

// ───────────────────────────────────────────────────
// Everything else
// ───────────────────────────────────────────────────

/// Builds a directive application named `name`. Arguments are emitted in
/// the given order and their values are carried over verbatim.
pub fn build_directive_node(
    name: impl Into<String>,
    arguments: &[FederationDirectiveArgument],
) -> DirectiveNode {
    graphql_parser::query::Directive {
        position: SYNTHESIZED_POS,
        name: name.into(),
        arguments: arguments
            .iter()
            .map(|argument| (argument.name().to_string(), argument.values().to_gp()))
            .collect(),
    }
}

pub fn build_schema_definition_node(
    query: Option<&str>,
    mutation: Option<&str>,
    subscription: Option<&str>,
) -> SchemaDefinitionNode {
    graphql_parser::schema::SchemaDefinition {
        position: SYNTHESIZED_POS,
        directives: vec![],
        query: query.map(str::to_string),
        mutation: mutation.map(str::to_string),
        subscription: subscription.map(str::to_string),
    }
}
