use crate::FederationDirective;
use crate::document::DirectiveTarget;
use crate::document::DocumentNode;
use crate::document::ObjectTypeNode;
use crate::document::baseline;
use crate::federation::DirectiveMerger;
use crate::federation::FederatedDocumentBuilder;
use crate::federation::UsedDirectives;
use crate::federation::reserved::RESERVED_QUERY_FIELD_NAMES;
use crate::federation::reserved::RESERVED_TYPE_NAMES;
use crate::schema::FederationConfig;
use crate::schema::FederationVersion;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::types::Field;
use crate::types::ObjectType;
use crate::types::ScalarType;
use graphql_parser::schema::Definition;
use graphql_parser::schema::TypeDefinition;
use proptest::prelude::*;

const QUERY_FIELD_POOL: [&str; 6] =
    ["_entities", "_service", "me", "products", "reviews", "topProducts"];

fn query_schema(field_names: &[&str]) -> Schema {
    let query = field_names.iter().fold(ObjectType::new("Query"), |query, name| {
        query.with_field(Field::new(*name, "String"))
    });
    SchemaBuilder::new().add_type(query).unwrap().build().unwrap()
}

fn build(schema: &Schema) -> DocumentNode {
    FederatedDocumentBuilder::new(schema)
        .build()
        .unwrap()
        .into_parts()
        .0
}

fn query_node(document: &DocumentNode) -> Option<&ObjectTypeNode> {
    document.definitions.iter().find_map(|definition| match definition {
        Definition::TypeDefinition(TypeDefinition::Object(object)) if object.name == "Query" =>
            Some(object),
        _ => None,
    })
}

/// Query field names, possibly repeated.
fn arb_query_fields() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(QUERY_FIELD_POOL.to_vec()), 0..8)
}

/// Distinct query field names in arbitrary order.
fn arb_distinct_query_fields() -> impl Strategy<Value = Vec<&'static str>> {
    prop::sample::subsequence(QUERY_FIELD_POOL.to_vec(), 0..=QUERY_FIELD_POOL.len())
        .prop_shuffle()
}

fn arb_directive() -> impl Strategy<Value = FederationDirective> {
    (
        "[a-z][a-zA-Z]{0,8}",
        prop::collection::vec(("[a-z][a-zA-Z0-9]{0,6}", any::<i32>()), 0..4),
    ).prop_map(|(name, arguments)| {
        arguments.into_iter().fold(FederationDirective::new(name), |directive, (arg, value)| {
            directive.with_argument(arg, value)
        })
    })
}

proptest! {
    #[test]
    fn query_node_never_has_reserved_fields(field_names in arb_query_fields()) {
        let document = build(&query_schema(&field_names));

        if let Some(query) = query_node(&document) {
            let no_reserved_fields = query.fields.iter().all(|field| {
                !RESERVED_QUERY_FIELD_NAMES.contains(&field.name.as_str())
            });
            prop_assert!(no_reserved_fields);
        }
    }

    #[test]
    fn query_type_keeps_exactly_its_public_fields(field_names in arb_distinct_query_fields()) {
        let document = build(&query_schema(&field_names));
        let public_fields = field_names
            .iter()
            .copied()
            .filter(|name| !RESERVED_QUERY_FIELD_NAMES.contains(name))
            .collect::<Vec<_>>();

        match query_node(&document) {
            Some(query) => {
                let kept = query.fields.iter().map(|f| f.name.as_str()).collect::<Vec<_>>();
                prop_assert_eq!(kept, public_fields);
            },
            None => prop_assert!(public_fields.is_empty()),
        }
    }

    #[test]
    fn reserved_types_never_appear(
        reserved_name in prop::sample::select(RESERVED_TYPE_NAMES.to_vec()),
        user_name in "[A-Z][a-zA-Z]{0,8}",
    ) {
        let schema = SchemaBuilder::new()
            .add_type(ObjectType::new("Query").with_field(Field::new("me", "String")))
            .unwrap()
            .add_type(ScalarType::new(reserved_name))
            .unwrap()
            .add_type(ScalarType::new(format!("User{user_name}")))
            .unwrap()
            .build()
            .unwrap();

        let sdl = build(&schema).to_string();

        prop_assert!(!sdl.contains(reserved_name));
        let expected_scalar = format!("scalar User{}", user_name);
        prop_assert!(sdl.contains(&expected_scalar));
    }

    #[test]
    fn merged_directives_follow_metadata(
        directives in prop::collection::vec(arb_directive(), 0..5),
        namespace in prop::option::of("[a-z]{1,6}"),
    ) {
        let mut config = FederationConfig::new(FederationVersion::new(2, 0));
        if let Some(namespace) = &namespace {
            config = config.with_link_namespace(namespace.as_str());
        }
        let merger = DirectiveMerger::new(&config);
        let field = Field::new("f", "String").with_federation_directives(directives.clone());
        let mut used = UsedDirectives::new();

        let node = merger.merge_directives(
            baseline::build_field_node(&field, vec![]),
            &field,
            &mut used,
        );

        prop_assert_eq!(node.directives().len(), directives.len());
        for (applied, declared) in node.directives().iter().zip(&directives) {
            let expected_name = match &namespace {
                Some(namespace) => format!("{namespace}__{}", declared.name()),
                None => declared.name().to_string(),
            };
            prop_assert_eq!(&applied.name, &expected_name);
            let applied_arguments =
                applied.arguments.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>();
            let declared_arguments =
                declared.arguments().iter().map(|arg| arg.name()).collect::<Vec<_>>();
            prop_assert_eq!(applied_arguments, declared_arguments);
            prop_assert!(used.contains(declared.name()));
        }
        prop_assert!(used.len() <= directives.len());
    }
}
