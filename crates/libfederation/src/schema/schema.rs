use crate::schema::FederationConfig;
use crate::schema::FederationVersion;
use crate::schema::FieldResolutionError;
use crate::schema::SchemaBuilder;
use crate::types::Field;
use crate::types::GraphQLType;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Represents an immutable GraphQL schema together with the federation
/// settings it is published under.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) federation: FederationConfig,
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: Option<String>,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Returns an [`IndexMap<String, GraphQLType>`] containing all types
    /// defined within this [`Schema`], in definition order.
    ///
    /// [^note] This map includes the implicitly-defined, built-in scalar types
    /// (e.g. [`GraphQLType::Bool`]), which are always registered first.
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// The federation settings this [`Schema`] is published under.
    pub fn federation(&self) -> &FederationConfig {
        &self.federation
    }

    /// Shorthand for `self.federation().version()`.
    pub fn federation_version(&self) -> FederationVersion {
        self.federation.version
    }

    /// Indicates whether `type_` is this [`Schema`]'s Query root operation
    /// type.
    ///
    /// Types are identified by name, so a type is the query type exactly when
    /// its name is the name designated for the Query root operation.
    pub fn is_query_type(&self, type_: &GraphQLType) -> bool {
        self.query_type.as_deref() == Some(type_.name())
    }

    /// Shorthand for `self.federation().link_namespace()`.
    pub fn link_namespace(&self) -> Option<&str> {
        self.federation.link_namespace()
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.mutation_type
            .as_deref()
            .and_then(|type_name| self.types.get(type_name))
    }

    /// Returns this [`Schema`]'s Query root operation type, if the schema
    /// designates one.
    ///
    /// [^note] It is ***strongly*** recommended that you use
    /// [`Schema::query_type()`] in favor of looking for an
    /// [`ObjectType`](crate::types::ObjectType) whose name is `"Query"`: the
    /// default name [can be overridden
    /// ](https://spec.graphql.org/October2021/#RootOperationTypeDefinition).
    pub fn query_type(&self) -> Option<&GraphQLType> {
        self.query_type
            .as_deref()
            .and_then(|type_name| self.types.get(type_name))
    }

    /// The name of the Query root operation type, if one is designated.
    pub fn query_type_name(&self) -> Option<&str> {
        self.query_type.as_deref()
    }

    /// Resolves the public fields of an object or interface type.
    ///
    /// Fields are returned in declaration order. If two fields share a public
    /// name the resolution is ambiguous and a
    /// [`FieldResolutionError::DuplicateFieldName`] is returned. Types without
    /// fields resolve to an empty list.
    pub fn resolved_fields<'schema>(
        &self,
        type_: &'schema GraphQLType,
    ) -> Result<Vec<&'schema Field>, FieldResolutionError> {
        let fields = match type_ {
            GraphQLType::Object(object_type) => object_type.fields(),
            GraphQLType::Interface(interface_type) => interface_type.fields(),
            _ => return Ok(vec![]),
        };

        let mut seen_names = HashSet::new();
        for field in fields {
            if !seen_names.insert(field.name()) {
                return Err(FieldResolutionError::DuplicateFieldName {
                    field_name: field.name().to_string(),
                    type_name: type_.name().to_string(),
                });
            }
        }
        Ok(fields.iter().collect())
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one was
    /// defined).
    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.subscription_type
            .as_deref()
            .and_then(|type_name| self.types.get(type_name))
    }

    /// Names of the root operation types that differ from the GraphQL
    /// defaults, as `(query, mutation, subscription)`. `None` if every root
    /// type uses its default name.
    pub(crate) fn non_default_root_type_names(
        &self,
    ) -> Option<(Option<&str>, Option<&str>, Option<&str>)> {
        let query = self.query_type.as_deref();
        let mutation = self.mutation_type.as_deref();
        let subscription = self.subscription_type.as_deref();
        let all_default =
            query.is_none_or(|name| name == "Query")
            && mutation.is_none_or(|name| name == "Mutation")
            && subscription.is_none_or(|name| name == "Subscription");

        if all_default {
            None
        } else {
            Some((query, mutation, subscription))
        }
    }
}
