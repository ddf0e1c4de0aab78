use crate::schema::schema_json::SchemaJson;
use crate::schema::FederationConfig;
use crate::schema::FederationVersion;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphQLOperationType {
    Query,
    Mutation,
    Subscription,
}
impl GraphQLOperationType {
    fn default_type_name(&self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Mutation => "Mutation",
            Self::Subscription => "Subscription",
        }
    }
}
impl std::fmt::Display for GraphQLOperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.default_type_name())
    }
}

/// Utility for building a [`Schema`].
#[derive(Debug)]
pub struct SchemaBuilder {
    federation: FederationConfig,
    mutation_type: Option<String>,
    query_type: Option<String>,
    subscription_type: Option<String>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    /// Register a type. Type names must be unique across the schema,
    /// including the built-in scalars.
    pub fn add_type(mut self, type_: impl Into<GraphQLType>) -> Result<Self> {
        let type_ = type_.into();
        let type_name = type_.name().to_string();
        if self.types.contains_key(&type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition { type_name });
        }
        self.types.insert(type_name, type_);
        Ok(self)
    }

    pub fn build(mut self) -> Result<Schema> {
        let explicit_query_type = self.query_type.take();
        let explicit_mutation_type = self.mutation_type.take();
        let explicit_subscription_type = self.subscription_type.take();

        let query_type = self.resolve_root_operation_type(
            GraphQLOperationType::Query,
            explicit_query_type,
        )?;
        let mutation_type = self.resolve_root_operation_type(
            GraphQLOperationType::Mutation,
            explicit_mutation_type,
        )?;
        let subscription_type = self.resolve_root_operation_type(
            GraphQLOperationType::Subscription,
            explicit_subscription_type,
        )?;

        Ok(Schema {
            federation: self.federation,
            mutation_type,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    /// Remove any link namespace, so that directives are emitted under their
    /// base names.
    pub fn clear_link_namespace(mut self) -> Self {
        self.federation.link_namespace = None;
        self
    }

    pub fn federation(mut self, config: FederationConfig) -> Self {
        self.federation = config;
        self
    }

    pub fn federation_version(mut self, version: FederationVersion) -> Self {
        self.federation.version = version;
        self
    }

    pub fn link_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.federation.link_namespace = Some(namespace.into());
        self
    }

    /// Load root operation names, federation settings, and types from a JSON
    /// schema model.
    ///
    /// Settings present in the JSON replace any set earlier on this builder;
    /// settings absent from it are left untouched.
    pub fn load_json_str(mut self, json: &str) -> Result<Self> {
        let schema_json: SchemaJson = serde_json::from_str(json).map_err(|err| {
            SchemaBuildError::JsonParseError {
                err: err.to_string(),
            }
        })?;

        if let Some(federation) = schema_json.federation.as_ref() {
            if let Some(version) = federation.version.as_deref() {
                self.federation.version = version.parse()?;
            }
            if let Some(namespace) = federation.link_namespace.as_deref() {
                self.federation.link_namespace = Some(namespace.to_string());
            }
        }
        if schema_json.query_type.is_some() {
            self.query_type = schema_json.query_type.clone();
        }
        if schema_json.mutation_type.is_some() {
            self.mutation_type = schema_json.mutation_type.clone();
        }
        if schema_json.subscription_type.is_some() {
            self.subscription_type = schema_json.subscription_type.clone();
        }

        for type_ in schema_json.into_types()? {
            self = self.add_type(type_)?;
        }
        Ok(self)
    }

    pub fn mutation_type(mut self, type_name: impl Into<String>) -> Self {
        self.mutation_type = Some(type_name.into());
        self
    }

    pub fn new() -> Self {
        let types = GraphQLType::builtins()
            .into_iter()
            .map(|builtin| (builtin.name().to_string(), builtin))
            .collect();

        Self {
            federation: FederationConfig::default(),
            mutation_type: None,
            query_type: None,
            subscription_type: None,
            types,
        }
    }

    /// Designate the Query root operation type. Without this, an object type
    /// named `Query` is used if one exists.
    pub fn query_type(mut self, type_name: impl Into<String>) -> Self {
        self.query_type = Some(type_name.into());
        self
    }

    pub fn subscription_type(mut self, type_name: impl Into<String>) -> Self {
        self.subscription_type = Some(type_name.into());
        self
    }

    fn resolve_root_operation_type(
        &self,
        operation: GraphQLOperationType,
        explicit_type_name: Option<String>,
    ) -> Result<Option<String>> {
        match explicit_type_name {
            Some(type_name) => match self.types.get(&type_name) {
                Some(GraphQLType::Object(_)) => Ok(Some(type_name)),
                Some(other_type) => Err(SchemaBuildError::RootOperationTypeNotObject {
                    kind: other_type.kind(),
                    operation,
                    type_name,
                }),
                None => Err(SchemaBuildError::RootOperationTypeNotDefined {
                    operation,
                    type_name,
                }),
            },

            None => {
                let default_name = operation.default_type_name();
                match self.types.get(default_name) {
                    Some(GraphQLType::Object(_)) => Ok(Some(default_name.to_string())),
                    _ => Ok(None),
                }
            },
        }
    }
}
impl std::default::Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple GraphQL types with the name `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error("`{version}` is not a valid federation version")]
    InvalidFederationVersion {
        version: String,
    },

    #[error("`{annotation}` is not a valid type annotation")]
    InvalidTypeAnnotation {
        annotation: String,
    },

    #[error("Error parsing JSON schema model: {err}")]
    JsonParseError {
        err: String,
    },

    #[error(
        "The {operation} root operation type `{type_name}` is not defined in \
        the schema"
    )]
    RootOperationTypeNotDefined {
        operation: GraphQLOperationType,
        type_name: String,
    },

    #[error(
        "The {operation} root operation type `{type_name}` must be an object \
        type, but it is a {kind} type"
    )]
    RootOperationTypeNotObject {
        kind: GraphQLTypeKind,
        operation: GraphQLOperationType,
        type_name: String,
    },
}
