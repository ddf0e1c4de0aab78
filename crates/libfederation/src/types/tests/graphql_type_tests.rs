use crate::FederationDirective;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::SchemaElement;

#[test]
fn builtin_scalar_names() {
    let names = GraphQLType::builtins()
        .iter()
        .map(|t| t.name().to_string())
        .collect::<Vec<_>>();

    assert_eq!(names, vec!["Boolean", "Float", "ID", "Int", "String"]);
}

#[test]
fn builtins_have_no_metadata_source() {
    for builtin in GraphQLType::builtins() {
        assert!(builtin.is_builtin());
        assert_eq!(builtin.kind().name(), builtin.name());
        assert!(builtin.federation_directives().is_none());
        assert!(SchemaElement::from(&builtin).federation_directives().is_none());
    }
}

#[test]
fn schema_element_exposes_declared_directives() {
    let product: GraphQLType = ObjectType::new("Product")
        .with_federation_directives(vec![
            FederationDirective::new("key").with_argument("fields", "upc"),
        ])
        .into();

    let element = SchemaElement::from(&product);
    assert!(matches!(element, SchemaElement::Object(_)));
    assert_eq!(element.name(), "Product");
    assert_eq!(element.federation_directives().unwrap()[0].name(), "key");
}

#[test]
fn enum_values_record_their_enum() {
    let color = EnumType::new("Color")
        .with_value(EnumValue::new("RED"))
        .with_value(EnumValue::new("GREEN"));

    assert!(color.values().iter().all(|value| value.enum_type_name() == "Color"));
    assert_eq!(
        SchemaElement::from(&color.values()[1]).name(),
        "GREEN",
    );
}
