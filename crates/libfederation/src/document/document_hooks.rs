use crate::document::EnumTypeNode;
use crate::document::EnumValueNode;
use crate::document::FieldNode;
use crate::document::InputObjectTypeNode;
use crate::document::InputValueNode;
use crate::document::InterfaceTypeNode;
use crate::document::ObjectTypeNode;
use crate::document::ScalarTypeNode;
use crate::document::UnionTypeNode;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InputValue;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

/// Per-kind transforms applied by a [`DocumentBuilder`](crate::document::DocumentBuilder)
/// to the baseline node of every schema element it visits.
///
/// Every method receives the originating schema element together with the
/// node the baseline builder produced for it, and returns the node to attach
/// to the document. All methods default to returning the baseline node
/// unchanged, so an implementation only overrides the kinds it cares about.
///
/// Member hooks ([`field_node`](Self::field_node),
/// [`argument_node`](Self::argument_node),
/// [`enum_value_node`](Self::enum_value_node)) run before the hook of the
/// type that owns them.
pub trait DocumentHooks {
    /// Runs once, before any node is built, with every non-builtin type of
    /// the schema in definition order. Returns the types to document.
    fn type_definitions<'schema>(
        &mut self,
        types: Vec<&'schema GraphQLType>,
    ) -> Vec<&'schema GraphQLType> {
        types
    }

    /// Applied to field arguments and to input-object fields alike.
    fn argument_node(
        &mut self,
        _argument: &InputValue,
        node: InputValueNode,
    ) -> InputValueNode {
        node
    }

    fn enum_type_node(&mut self, _enum_type: &EnumType, node: EnumTypeNode) -> EnumTypeNode {
        node
    }

    fn enum_value_node(
        &mut self,
        _enum_value: &EnumValue,
        node: EnumValueNode,
    ) -> EnumValueNode {
        node
    }

    fn field_node(&mut self, _field: &Field, node: FieldNode) -> FieldNode {
        node
    }

    fn input_object_node(
        &mut self,
        _input_object_type: &InputObjectType,
        node: InputObjectTypeNode,
    ) -> InputObjectTypeNode {
        node
    }

    fn interface_type_node(
        &mut self,
        _interface_type: &InterfaceType,
        node: InterfaceTypeNode,
    ) -> InterfaceTypeNode {
        node
    }

    fn object_type_node(
        &mut self,
        _object_type: &ObjectType,
        node: ObjectTypeNode,
    ) -> ObjectTypeNode {
        node
    }

    fn scalar_type_node(
        &mut self,
        _scalar_type: &ScalarType,
        node: ScalarTypeNode,
    ) -> ScalarTypeNode {
        node
    }

    fn union_type_node(&mut self, _union_type: &UnionType, node: UnionTypeNode) -> UnionTypeNode {
        node
    }
}

/// [`DocumentHooks`] that keep every baseline node as-is.
#[derive(Clone, Copy, Debug, Default)]
pub struct BaselineHooks;
impl DocumentHooks for BaselineHooks {}
