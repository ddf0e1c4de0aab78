use crate::schema::FederationVersion;
use crate::schema::GraphQLOperationType;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLTypeKind;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[test]
fn builtins_are_registered_first() -> Result<()> {
    let schema = SchemaBuilder::new()
        .add_type(ObjectType::new("Query"))?
        .build()?;

    let names = schema.all_types().keys().map(String::as_str).collect::<Vec<_>>();
    assert_eq!(names, vec!["Boolean", "Float", "ID", "Int", "String", "Query"]);
    assert!(schema.all_types().values().take(5).all(|t| t.is_builtin()));

    Ok(())
}

#[test]
fn duplicate_type_names_are_rejected() -> Result<()> {
    let result = SchemaBuilder::new()
        .add_type(ObjectType::new("Product"))?
        .add_type(ScalarType::new("Product"));

    assert_eq!(
        result.unwrap_err(),
        SchemaBuildError::DuplicateTypeDefinition {
            type_name: "Product".to_string(),
        },
    );

    Ok(())
}

#[test]
fn redefining_builtin_scalar_is_rejected() {
    let result = SchemaBuilder::new().add_type(ScalarType::new("String"));

    assert!(matches!(
        result,
        Err(SchemaBuildError::DuplicateTypeDefinition { type_name }) if type_name == "String",
    ));
}

#[test]
fn default_root_type_names_are_picked_up() -> Result<()> {
    let schema = SchemaBuilder::new()
        .add_type(ObjectType::new("Query"))?
        .add_type(ObjectType::new("Mutation"))?
        .build()?;

    assert_eq!(schema.query_type_name(), Some("Query"));
    assert_eq!(schema.mutation_type().map(|t| t.name()), Some("Mutation"));
    assert!(schema.subscription_type().is_none());
    assert!(schema.non_default_root_type_names().is_none());

    Ok(())
}

#[test]
fn default_root_name_on_non_object_is_ignored() -> Result<()> {
    let schema = SchemaBuilder::new()
        .add_type(ScalarType::new("Query"))?
        .build()?;

    assert!(schema.query_type().is_none());

    Ok(())
}

#[test]
fn schema_without_query_type_builds() -> Result<()> {
    let schema = SchemaBuilder::new()
        .add_type(ObjectType::new("Product"))?
        .build()?;

    assert!(schema.query_type().is_none());
    assert_eq!(schema.query_type_name(), None);

    Ok(())
}

#[test]
fn explicit_query_type_overrides_default() -> Result<()> {
    let schema = SchemaBuilder::new()
        .add_type(ObjectType::new("Query"))?
        .add_type(ObjectType::new("RootQuery"))?
        .query_type("RootQuery")
        .build()?;

    assert_eq!(schema.query_type_name(), Some("RootQuery"));
    let query_type = schema.all_types().get("RootQuery").unwrap();
    assert!(schema.is_query_type(query_type));
    let other = schema.all_types().get("Query").unwrap();
    assert!(!schema.is_query_type(other));
    assert_eq!(
        schema.non_default_root_type_names(),
        Some((Some("RootQuery"), None, None)),
    );

    Ok(())
}

#[test]
fn explicit_root_type_must_exist() -> Result<()> {
    let result = SchemaBuilder::new()
        .add_type(ObjectType::new("Query"))?
        .mutation_type("RootMutation")
        .build();

    assert_eq!(
        result.unwrap_err(),
        SchemaBuildError::RootOperationTypeNotDefined {
            operation: GraphQLOperationType::Mutation,
            type_name: "RootMutation".to_string(),
        },
    );

    Ok(())
}

#[test]
fn explicit_root_type_must_be_an_object() -> Result<()> {
    let result = SchemaBuilder::new()
        .add_type(UnionType::new("SearchResult"))?
        .query_type("SearchResult")
        .build();

    assert_eq!(
        result.unwrap_err(),
        SchemaBuildError::RootOperationTypeNotObject {
            kind: GraphQLTypeKind::Union,
            operation: GraphQLOperationType::Query,
            type_name: "SearchResult".to_string(),
        },
    );

    Ok(())
}

#[test]
fn federation_settings_are_carried_into_schema() -> Result<()> {
    let schema = SchemaBuilder::new()
        .federation_version(FederationVersion::new(2, 3))
        .link_namespace("fed")
        .add_type(ObjectType::new("Query"))?
        .build()?;

    assert_eq!(schema.federation_version(), FederationVersion::new(2, 3));
    assert_eq!(schema.link_namespace(), Some("fed"));

    Ok(())
}

#[test]
fn clear_link_namespace_removes_namespace() -> Result<()> {
    let schema = SchemaBuilder::new()
        .federation_version(FederationVersion::new(2, 0))
        .link_namespace("fed")
        .clear_link_namespace()
        .build()?;

    assert_eq!(schema.link_namespace(), None);

    Ok(())
}
