use crate::schema::FieldResolutionError;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::ObjectType;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[test]
fn resolved_fields_preserve_declaration_order() -> Result<()> {
    let schema = SchemaBuilder::new()
        .add_type(
            ObjectType::new("Product")
                .with_field(Field::new("upc", "String"))
                .with_field(Field::new("name", "String"))
                .with_field(Field::new("price", "Int")),
        )?
        .build()?;

    let product = schema.all_types().get("Product").unwrap();
    let field_names = schema
        .resolved_fields(product)
        .unwrap()
        .iter()
        .map(|field| field.name())
        .collect::<Vec<_>>();
    assert_eq!(field_names, vec!["upc", "name", "price"]);

    Ok(())
}

#[test]
fn resolved_fields_reports_duplicate_names() -> Result<()> {
    let schema = SchemaBuilder::new()
        .add_type(
            InterfaceType::new("Node")
                .with_field(Field::new("id", "ID"))
                .with_field(Field::new("id", "String")),
        )?
        .build()?;

    let node = schema.all_types().get("Node").unwrap();
    assert_eq!(
        schema.resolved_fields(node),
        Err(FieldResolutionError::DuplicateFieldName {
            field_name: "id".to_string(),
            type_name: "Node".to_string(),
        }),
    );

    Ok(())
}

#[test]
fn resolved_fields_of_fieldless_kinds_are_empty() -> Result<()> {
    let schema = SchemaBuilder::new()
        .add_type(EnumType::new("Color").with_value(EnumValue::new("RED")))?
        .build()?;

    let color = schema.all_types().get("Color").unwrap();
    assert!(schema.resolved_fields(color).unwrap().is_empty());
    let int = schema.all_types().get("Int").unwrap();
    assert!(schema.resolved_fields(int).unwrap().is_empty());

    Ok(())
}

#[test]
fn fields_know_their_parent_type() -> Result<()> {
    let schema = SchemaBuilder::new()
        .add_type(ObjectType::new("Query").with_field(Field::new("me", "String")))?
        .build()?;

    let query = schema.query_type().unwrap().as_object().unwrap();
    assert_eq!(query.fields()[0].parent_type_name(), "Query");

    Ok(())
}
