use crate::document::FieldContainerNode;
use crate::document::baseline;
use crate::federation::reserved;
use crate::federation::tests::test_schemas::subgraph_builder;
use crate::schema::SchemaBuilder;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;

fn kept_type_names(schema: &crate::schema::Schema) -> Vec<&str> {
    let types = schema.all_types().values().filter(|t| !t.is_builtin()).collect();
    reserved::filter_reserved_types(schema, types)
        .into_iter()
        .map(|type_| type_.name())
        .collect()
}

#[test]
fn reserved_types_are_excluded() {
    let schema = subgraph_builder(vec![Field::new("me", "String")]).build().unwrap();

    assert_eq!(kept_type_names(&schema), vec!["Query", "Product"]);
}

#[test]
fn query_with_only_reserved_fields_is_excluded() {
    let schema = subgraph_builder(vec![]).build().unwrap();

    assert_eq!(kept_type_names(&schema), vec!["Product"]);
}

#[test]
fn empty_query_type_is_excluded() {
    let schema = SchemaBuilder::new()
        .add_type(ObjectType::new("Query")).unwrap()
        .add_type(ScalarType::new("Date")).unwrap()
        .build()
        .unwrap();

    assert_eq!(kept_type_names(&schema), vec!["Date"]);
}

#[test]
fn query_with_duplicate_field_names_is_kept() {
    let schema = SchemaBuilder::new()
        .add_type(
            ObjectType::new("Query")
                .with_field(Field::new("_service", "_Service"))
                .with_field(Field::new("_service", "_Service")),
        ).unwrap()
        .build()
        .unwrap();

    assert_eq!(kept_type_names(&schema), vec!["Query"]);
}

#[test]
fn reserved_names_only_matter_for_matching_kind() {
    // A non-query type is judged by its name alone, whatever its kind.
    let schema = SchemaBuilder::new()
        .add_type(InterfaceType::new("_Service")).unwrap()
        .add_type(ObjectType::new("_entities")).unwrap()
        .build()
        .unwrap();

    assert_eq!(kept_type_names(&schema), vec!["_entities"]);
}

#[test]
fn renamed_query_type_is_recognized() {
    let schema = SchemaBuilder::new()
        .add_type(ObjectType::new("RootQuery").with_field(Field::new("_entities", "String")))
        .unwrap()
        .add_type(ObjectType::new("Query").with_field(Field::new("_entities", "String")))
        .unwrap()
        .query_type("RootQuery")
        .build()
        .unwrap();

    assert!(reserved::is_reserved_type(&schema, schema.query_type().unwrap()));
    assert!(!reserved::is_reserved_type(&schema, schema.all_types().get("Query").unwrap()));
}

#[test]
fn remove_reserved_query_fields_keeps_user_fields() {
    let query = ObjectType::new("Query")
        .with_field(Field::new("_service", "_Service"))
        .with_field(Field::new("products", "Product"))
        .with_field(Field::new("_entities", "_Entity"))
        .with_field(Field::new("me", "User"));
    let fields = query
        .fields()
        .iter()
        .map(|field| baseline::build_field_node(field, vec![]))
        .collect();
    let node = baseline::build_object_type_node(&query, fields);

    let node = reserved::remove_reserved_query_fields(node);

    let names = node.fields().iter().map(|f| f.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["products", "me"]);
}
