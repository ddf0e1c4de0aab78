use crate::schema::SchemaBuildError;
use crate::types::TypeAnnotation;

#[test]
fn parse_named() {
    let annot: TypeAnnotation = "Product".parse().unwrap();

    assert!(annot.nullable());
    assert_eq!(annot.as_named_annotation().unwrap().type_name(), "Product");
}

#[test]
fn parse_nested_lists() {
    let annot: TypeAnnotation = "[[Int]!]!".parse().unwrap();

    assert!(!annot.nullable());
    let outer = annot.as_list_annotation().unwrap();
    let middle = outer.inner_type_annotation().as_list_annotation().unwrap();
    assert!(!middle.nullable());
    assert!(middle.inner_type_annotation().nullable());
    assert_eq!(annot.innermost_named_type_annotation().type_name(), "Int");
    assert_eq!(annot.to_string(), "[[Int]!]!");
}

#[test]
fn parse_tolerates_inner_whitespace() {
    let annot: TypeAnnotation = " [ ID ! ] ".parse().unwrap();
    assert_eq!(annot.to_string(), "[ID!]");
}

#[test]
fn parse_rejects_malformed_annotations() {
    for input in ["", "[Int", "Int]", "[]", "1Int", "Int!!", "Int String"] {
        assert_eq!(
            input.parse::<TypeAnnotation>(),
            Err(SchemaBuildError::InvalidTypeAnnotation {
                annotation: input.to_string(),
            }),
            "expected `{input}` to be rejected",
        );
    }
}

#[test]
fn builders_match_parsed_form() {
    let built = TypeAnnotation::list(TypeAnnotation::named("String").non_null()).non_null();
    let parsed: TypeAnnotation = "[String!]!".parse().unwrap();
    assert_eq!(built, parsed);
}

#[test]
fn non_null_wraps_in_graphql_parser_form() {
    use graphql_parser::schema::Type;

    let annot: TypeAnnotation = "[ID!]".parse().unwrap();
    assert_eq!(
        annot.to_gp(),
        Type::ListType(Box::new(Type::NonNullType(Box::new(
            Type::NamedType("ID".to_string()),
        )))),
    );
}
