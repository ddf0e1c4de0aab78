use crate::document::baseline;
use crate::document::DocumentHooks;
use crate::document::DocumentNode;
use crate::document::FieldNode;
use crate::document::InputValueNode;
use crate::document::TypeDefinitionNode;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputValue;
use graphql_parser::schema::Definition;
use graphql_parser::schema::TypeDefinition;
use std::collections::HashSet;
use thiserror::Error;

type Result<T> = std::result::Result<T, DocumentBuildError>;

/// Walks a [`Schema`] depth-first and produces its SDL document, handing the
/// baseline node of every element to a [`DocumentHooks`] implementation.
///
/// Types are visited in definition order. For each type, its members are
/// built and passed through their hooks first; the type's own node is then
/// assembled from the resulting member nodes and passed through the type's
/// hook.
pub struct DocumentBuilder<'schema, H: DocumentHooks> {
    hooks: H,
    schema: &'schema Schema,
}
impl<'schema, H: DocumentHooks> DocumentBuilder<'schema, H> {
    pub fn new(schema: &'schema Schema, hooks: H) -> Self {
        Self {
            hooks,
            schema,
        }
    }

    /// Builds the document, returning it together with the hooks so that
    /// any state they accumulated during the traversal can be read.
    ///
    /// A `schema { .. }` definition is emitted first when any surviving root
    /// operation type has a non-default name.
    pub fn build(mut self) -> Result<(DocumentNode, H)> {
        let types = self.schema
            .all_types()
            .values()
            .filter(|type_| !type_.is_builtin())
            .collect::<Vec<_>>();
        let types = self.hooks.type_definitions(types);

        let mut definitions = vec![];
        let documented_names =
            types.iter().map(|type_| type_.name()).collect::<HashSet<_>>();
        if let Some(schema_def) = self.build_schema_definition(&documented_names) {
            definitions.push(schema_def);
        }
        for type_ in types {
            definitions.push(Definition::TypeDefinition(
                self.build_type_definition_node(type_)?
            ));
        }

        Ok((DocumentNode { definitions }, self.hooks))
    }

    /// Builds the node for a single type, running the hooks of the type and
    /// of all of its members.
    ///
    /// Built-in scalars have no node representation and fail with
    /// [`DocumentBuildError::UnsupportedElementKind`].
    pub fn build_type_definition_node(
        &mut self,
        type_: &GraphQLType,
    ) -> Result<TypeDefinitionNode> {
        Ok(match type_ {
            GraphQLType::Bool
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::String =>
                return Err(DocumentBuildError::UnsupportedElementKind {
                    kind: type_.kind(),
                    type_name: type_.name().to_string(),
                }),

            GraphQLType::Enum(enum_type) => {
                let values = enum_type.values().iter().map(|enum_value| {
                    let node = baseline::build_enum_value_node(enum_value);
                    self.hooks.enum_value_node(enum_value, node)
                }).collect();
                let node = baseline::build_enum_type_node(enum_type, values);
                TypeDefinition::Enum(self.hooks.enum_type_node(enum_type, node))
            },

            GraphQLType::InputObject(input_object_type) => {
                let fields = self.build_argument_nodes(input_object_type.fields());
                let node = baseline::build_input_object_type_node(input_object_type, fields);
                TypeDefinition::InputObject(
                    self.hooks.input_object_node(input_object_type, node)
                )
            },

            GraphQLType::Interface(interface_type) => {
                let fields = self.build_field_nodes(interface_type.fields());
                let node = baseline::build_interface_type_node(interface_type, fields);
                TypeDefinition::Interface(
                    self.hooks.interface_type_node(interface_type, node)
                )
            },

            GraphQLType::Object(object_type) => {
                let fields = self.build_field_nodes(object_type.fields());
                let node = baseline::build_object_type_node(object_type, fields);
                TypeDefinition::Object(self.hooks.object_type_node(object_type, node))
            },

            GraphQLType::Scalar(scalar_type) => {
                let node = baseline::build_scalar_type_node(scalar_type);
                TypeDefinition::Scalar(self.hooks.scalar_type_node(scalar_type, node))
            },

            GraphQLType::Union(union_type) => {
                let node = baseline::build_union_type_node(union_type);
                TypeDefinition::Union(self.hooks.union_type_node(union_type, node))
            },
        })
    }

    fn build_argument_nodes(&mut self, arguments: &[InputValue]) -> Vec<InputValueNode> {
        arguments.iter().map(|argument| {
            let node = baseline::build_argument_node(argument);
            self.hooks.argument_node(argument, node)
        }).collect()
    }

    fn build_field_nodes(&mut self, fields: &[Field]) -> Vec<FieldNode> {
        fields.iter().map(|field| {
            let arguments = self.build_argument_nodes(field.arguments());
            let node = baseline::build_field_node(field, arguments);
            self.hooks.field_node(field, node)
        }).collect()
    }

    fn build_schema_definition(
        &self,
        documented_names: &HashSet<&str>,
    ) -> Option<Definition<'static, String>> {
        let (query, mutation, subscription) = self.schema.non_default_root_type_names()?;
        fn documented<'a>(documented_names: &HashSet<&str>, name: Option<&'a str>) -> Option<&'a str> {
            name.filter(|name| documented_names.contains(name))
        }
        let documented = |name| documented(documented_names, name);
        let (query, mutation, subscription) =
            (documented(query), documented(mutation), documented(subscription));
        if query.is_none() && mutation.is_none() && subscription.is_none() {
            return None;
        }

        Some(Definition::SchemaDefinition(
            baseline::build_schema_definition_node(query, mutation, subscription)
        ))
    }
}

/// Builds the SDL document for `schema`, passing every node through `hooks`.
///
/// Shorthand for `DocumentBuilder::new(schema, hooks).build()`.
pub fn build_document<H: DocumentHooks>(
    schema: &Schema,
    hooks: H,
) -> Result<(DocumentNode, H)> {
    DocumentBuilder::new(schema, hooks).build()
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DocumentBuildError {
    #[error(
        "No document node can be built for `{type_name}`: {kind} types have \
        no node representation"
    )]
    UnsupportedElementKind {
        kind: GraphQLTypeKind,
        type_name: String,
    },
}
