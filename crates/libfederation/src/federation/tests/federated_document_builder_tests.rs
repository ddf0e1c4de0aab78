use crate::FederationDirective;
use crate::document::DirectiveTarget;
use crate::document::DocumentNode;
use crate::document::ObjectTypeNode;
use crate::federation::FederatedDocumentBuilder;
use crate::federation::tests::test_schemas::key;
use crate::federation::tests::test_schemas::list_size;
use crate::federation::tests::test_schemas::products_schema;
use crate::federation::tests::test_schemas::subgraph_builder;
use crate::schema::FederationVersion;
use crate::schema::SchemaBuilder;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::InputObjectType;
use crate::types::InputValue;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use graphql_parser::schema::Definition;
use graphql_parser::schema::TypeDefinition;

fn object_node<'a>(document: &'a DocumentNode, name: &str) -> Option<&'a ObjectTypeNode> {
    document.definitions.iter().find_map(|definition| match definition {
        Definition::TypeDefinition(TypeDefinition::Object(object)) if object.name == name =>
            Some(object),
        _ => None,
    })
}

fn type_definition_count(document: &DocumentNode) -> usize {
    document.definitions
        .iter()
        .filter(|d| matches!(d, Definition::TypeDefinition(_)))
        .count()
}

#[test]
fn list_size_scenario() {
    let schema = products_schema(FederationVersion::new(2, 0), None);

    let federated = FederatedDocumentBuilder::new(&schema).build().unwrap();

    let query = object_node(federated.document(), "Query").unwrap();
    assert_eq!(query.fields.len(), 1);
    let get_product = &query.fields[0];
    assert_eq!(get_product.name, "getProduct");
    assert_eq!(get_product.directives().len(), 1);
    assert_eq!(get_product.directives()[0].name, "listSize");

    let sdl = federated.document().to_string();
    assert!(sdl.contains("getProduct: [Product] @listSize(assumedSize: 100)"), "{sdl}");
    assert!(!sdl.contains("_service"), "{sdl}");
}

#[test]
fn reserved_types_are_absent_and_user_types_are_kept() {
    let schema = products_schema(FederationVersion::new(2, 0), None);

    let federated = FederatedDocumentBuilder::new(&schema).build().unwrap();
    let document = federated.document();

    assert!(object_node(document, "_Service").is_none());
    assert!(object_node(document, "Product").is_some());
    assert_eq!(type_definition_count(document), 2);
    let sdl = document.to_string();
    assert!(!sdl.contains("_Any"), "{sdl}");
    assert!(!sdl.contains("_Entity"), "{sdl}");
}

#[test]
fn used_directives_follow_first_use_order() {
    let schema = products_schema(FederationVersion::new(2, 0), None);

    let federated = FederatedDocumentBuilder::new(&schema).build().unwrap();

    // `getProduct` is built while visiting `Query`, which precedes `Product`.
    assert_eq!(
        federated.used_directives().iter().collect::<Vec<_>>(),
        vec!["listSize", "key"],
    );
}

#[test]
fn namespace_applies_to_every_element_kind() {
    let tagged = |name: &str| vec![FederationDirective::new("tag").with_argument("name", name)];
    let schema = SchemaBuilder::new()
        .federation_version(FederationVersion::new(2, 3))
        .link_namespace("fed")
        .add_type(
            ObjectType::new("Query").with_federation_directives(tagged("query")).with_field(
                Field::new("search", "SearchResult")
                    .with_federation_directives(tagged("field"))
                    .with_argument(
                        InputValue::new("filter", "Filter")
                            .with_federation_directives(tagged("argument")),
                    ),
            ),
        ).unwrap()
        .add_type(InterfaceType::new("Node").with_federation_directives(tagged("interface")))
        .unwrap()
        .add_type(
            UnionType::new("SearchResult")
                .with_member("Query")
                .with_federation_directives(tagged("union")),
        ).unwrap()
        .add_type(
            EnumType::new("Color")
                .with_federation_directives(tagged("enum"))
                .with_value(EnumValue::new("RED").with_federation_directives(tagged("value"))),
        ).unwrap()
        .add_type(ScalarType::new("Date").with_federation_directives(tagged("scalar")))
        .unwrap()
        .add_type(
            InputObjectType::new("Filter")
                .with_federation_directives(tagged("input"))
                .with_field(
                    InputValue::new("term", "String")
                        .with_federation_directives(tagged("input_field")),
                ),
        ).unwrap()
        .build()
        .unwrap();

    let federated = FederatedDocumentBuilder::new(&schema).build().unwrap();
    let sdl = federated.document().to_string();

    for name in [
        "query", "field", "argument", "interface", "union", "enum", "value", "scalar",
        "input", "input_field",
    ] {
        let expected = format!("@fed__tag(name: \"{name}\")");
        assert!(sdl.contains(&expected), "missing `{expected}` in:\n{sdl}");
    }
    assert!(!sdl.contains("@tag"), "{sdl}");
    assert_eq!(federated.used_directives().iter().collect::<Vec<_>>(), vec!["tag"]);
}

#[test]
fn query_type_with_duplicate_fields_is_kept_unfiltered() {
    let schema = SchemaBuilder::new()
        .add_type(
            ObjectType::new("Query")
                .with_field(Field::new("_service", "_Service"))
                .with_field(Field::new("_service", "_Service")),
        ).unwrap()
        .build()
        .unwrap();

    let federated = FederatedDocumentBuilder::new(&schema).build().unwrap();

    // The type survives the type-level pass; its reserved fields are still
    // removed from the node.
    let query = object_node(federated.document(), "Query").unwrap();
    assert!(query.fields.is_empty());
}

#[test]
fn reserved_query_field_directives_are_discarded() {
    let schema = SchemaBuilder::new()
        .add_type(
            ObjectType::new("Query")
                .with_field(
                    Field::new("_entities", "_Entity")
                        .with_federation_directives(vec![list_size(1)]),
                )
                .with_field(Field::new("me", "String")),
        ).unwrap()
        .build()
        .unwrap();

    let federated = FederatedDocumentBuilder::new(&schema).build().unwrap();
    let sdl = federated.document().to_string();

    assert!(!sdl.contains("@listSize"), "{sdl}");
    assert!(sdl.contains("me: String"), "{sdl}");
}

#[test]
fn renamed_query_type_is_filtered() {
    let schema = SchemaBuilder::new()
        .add_type(
            ObjectType::new("RootQuery")
                .with_field(Field::new("_service", "_Service"))
                .with_field(Field::new("top", "Product")),
        ).unwrap()
        .add_type(ObjectType::new("Product").with_federation_directives(vec![key("upc")]))
        .unwrap()
        .query_type("RootQuery")
        .build()
        .unwrap();

    let federated = FederatedDocumentBuilder::new(&schema).build().unwrap();
    let document = federated.document();

    let query = object_node(document, "RootQuery").unwrap();
    assert_eq!(query.fields.len(), 1);
    assert!(matches!(
        document.definitions.first(),
        Some(Definition::SchemaDefinition(schema_def))
            if schema_def.query.as_deref() == Some("RootQuery"),
    ));
}

#[test]
fn reserved_only_query_type_is_absent() {
    let schema = subgraph_builder(vec![]).build().unwrap();

    let federated = FederatedDocumentBuilder::new(&schema).build().unwrap();

    assert!(object_node(federated.document(), "Query").is_none());
    assert!(object_node(federated.document(), "Product").is_some());
}
