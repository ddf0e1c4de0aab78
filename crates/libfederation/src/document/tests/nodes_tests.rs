use crate::FederationDirectiveArgument;
use crate::Value;
use crate::document::baseline;
use crate::document::DirectiveTarget;
use crate::document::FieldContainerNode;
use crate::types::Field;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;

fn argument(name: &str, values: impl Into<Value>) -> FederationDirectiveArgument {
    FederationDirectiveArgument {
        name: name.to_string(),
        values: values.into(),
    }
}

#[test]
fn merge_directive_appends_in_order() {
    let field = Field::new("name", "String");
    let node = baseline::build_field_node(&field, vec![]);
    let baseline_node = node.clone();

    let merged = node
        .merge_directive(baseline::build_directive_node("shareable", &[]))
        .merge_directive(baseline::build_directive_node(
            "tag",
            &[argument("name", "public")],
        ));

    let names = merged.directives().iter().map(|d| d.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["shareable", "tag"]);
    assert!(baseline_node.directives().is_empty());
}

#[test]
fn without_fields_keeps_remaining_order() {
    let object_type = ObjectType::new("Query")
        .with_field(Field::new("a", "Int"))
        .with_field(Field::new("_service", "String"))
        .with_field(Field::new("b", "Int"))
        .with_field(Field::new("_entities", "String"));
    let fields = object_type
        .fields()
        .iter()
        .map(|field| baseline::build_field_node(field, vec![]))
        .collect();
    let node = baseline::build_object_type_node(&object_type, fields);

    let node = node.without_fields(&["_entities", "_service"]);

    let names = node.fields().iter().map(|f| f.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn without_fields_ignores_unknown_names() {
    let object_type = ObjectType::new("Product")
        .with_field(Field::new("upc", TypeAnnotation::named("ID").non_null()));
    let fields = vec![baseline::build_field_node(&object_type.fields()[0], vec![])];
    let node = baseline::build_object_type_node(&object_type, fields);
    let expected = node.clone();

    assert_eq!(node.without_fields(&["price"]), expected);
}
