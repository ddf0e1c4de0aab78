use crate::document::DocumentBuildError;
use crate::document::DocumentBuilder;
use crate::document::DocumentHooks;
use crate::document::DocumentNode;
use crate::document::EnumTypeNode;
use crate::document::EnumValueNode;
use crate::document::FieldNode;
use crate::document::InputObjectTypeNode;
use crate::document::InputValueNode;
use crate::document::InterfaceTypeNode;
use crate::document::ObjectTypeNode;
use crate::document::ScalarTypeNode;
use crate::document::UnionTypeNode;
use crate::federation::reserved;
use crate::federation::DirectiveMerger;
use crate::federation::UsedDirectives;
use crate::schema::Schema;
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

/// The document a subgraph publishes, along with the federation directives
/// it applies.
#[derive(Clone, Debug, PartialEq)]
pub struct FederatedDocument {
    document: DocumentNode,
    used_directives: UsedDirectives,
}
impl FederatedDocument {
    pub fn document(&self) -> &DocumentNode {
        &self.document
    }

    pub fn into_parts(self) -> (DocumentNode, UsedDirectives) {
        (self.document, self.used_directives)
    }

    /// The base names of every federation directive applied in
    /// [`Self::document`], in first-use order.
    pub fn used_directives(&self) -> &UsedDirectives {
        &self.used_directives
    }
}

/// Builds the federated SDL document of a [`Schema`].
///
/// Protocol-internal types (`_Any`, `_Entity`, `_Service`) and query fields
/// (`_entities`, `_service`) are left out, and every federation directive
/// declared on a type, field, argument, or enum value is attached to that
/// element's node.
///
/// ```
/// use libfederation::FederationDirective;
/// use libfederation::federation::FederatedDocumentBuilder;
/// use libfederation::schema::SchemaBuilder;
/// use libfederation::types::Field;
/// use libfederation::types::ObjectType;
/// use libfederation::types::TypeAnnotation;
///
/// let schema = SchemaBuilder::new()
///     .add_type(
///         ObjectType::new("Query")
///             .with_field(Field::new("_service", TypeAnnotation::named("_Service").non_null()))
///             .with_field(
///                 Field::new("getProduct", "Product").with_federation_directives(vec![
///                     FederationDirective::new("listSize").with_argument("assumedSize", 100),
///                 ]),
///             ),
///     )?
///     .build()?;
///
/// let federated = FederatedDocumentBuilder::new(&schema).build()?;
/// let sdl = federated.document().to_string();
///
/// assert!(sdl.contains("getProduct: Product @listSize(assumedSize: 100)"));
/// assert!(!sdl.contains("_service"));
/// assert!(federated.used_directives().contains("listSize"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct FederatedDocumentBuilder<'schema> {
    merger: DirectiveMerger<'schema>,
    schema: &'schema Schema,
    used_directives: UsedDirectives,
}
impl<'schema> FederatedDocumentBuilder<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            merger: DirectiveMerger::new(schema.federation()),
            schema,
            used_directives: UsedDirectives::new(),
        }
    }

    pub fn build(self) -> Result<FederatedDocument, DocumentBuildError> {
        let schema = self.schema;
        let (document, hooks) = DocumentBuilder::new(schema, self).build()?;
        Ok(FederatedDocument {
            document,
            used_directives: hooks.used_directives,
        })
    }
}
impl DocumentHooks for FederatedDocumentBuilder<'_> {
    fn type_definitions<'schema>(
        &mut self,
        types: Vec<&'schema GraphQLType>,
    ) -> Vec<&'schema GraphQLType> {
        reserved::filter_reserved_types(self.schema, types)
    }

    fn argument_node(&mut self, argument: &InputValue, node: InputValueNode) -> InputValueNode {
        self.merger.merge_directives(node, argument, &mut self.used_directives)
    }

    fn enum_type_node(&mut self, enum_type: &EnumType, node: EnumTypeNode) -> EnumTypeNode {
        self.merger.merge_directives(node, enum_type, &mut self.used_directives)
    }

    fn enum_value_node(&mut self, enum_value: &EnumValue, node: EnumValueNode) -> EnumValueNode {
        self.merger.merge_directives(node, enum_value, &mut self.used_directives)
    }

    fn field_node(&mut self, field: &Field, node: FieldNode) -> FieldNode {
        self.merger.merge_directives(node, field, &mut self.used_directives)
    }

    fn input_object_node(
        &mut self,
        input_object_type: &InputObjectType,
        node: InputObjectTypeNode,
    ) -> InputObjectTypeNode {
        self.merger.merge_directives(node, input_object_type, &mut self.used_directives)
    }

    fn interface_type_node(
        &mut self,
        interface_type: &InterfaceType,
        node: InterfaceTypeNode,
    ) -> InterfaceTypeNode {
        self.merger.merge_directives(node, interface_type, &mut self.used_directives)
    }

    fn object_type_node(
        &mut self,
        object_type: &ObjectType,
        node: ObjectTypeNode,
    ) -> ObjectTypeNode {
        let node =
            if self.schema.query_type_name() == Some(object_type.name()) {
                reserved::remove_reserved_query_fields(node)
            } else {
                node
            };
        self.merger.merge_directives(node, object_type, &mut self.used_directives)
    }

    fn scalar_type_node(&mut self, scalar_type: &ScalarType, node: ScalarTypeNode) -> ScalarTypeNode {
        self.merger.merge_directives(node, scalar_type, &mut self.used_directives)
    }

    fn union_type_node(&mut self, union_type: &UnionType, node: UnionTypeNode) -> UnionTypeNode {
        self.merger.merge_directives(node, union_type, &mut self.used_directives)
    }
}
