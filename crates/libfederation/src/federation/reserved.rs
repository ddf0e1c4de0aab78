//! The types and query fields that exist only to serve the federation
//! protocol, and the filters that keep them out of the published document.

use crate::document::FieldContainerNode;
use crate::schema::Schema;
use crate::types::GraphQLType;

/// Query fields the gateway uses to resolve entities and fetch the subgraph
/// SDL.
pub const RESERVED_QUERY_FIELD_NAMES: [&str; 2] = ["_entities", "_service"];

/// Types that back the reserved query fields.
pub const RESERVED_TYPE_NAMES: [&str; 3] = ["_Any", "_Entity", "_Service"];

/// Drops protocol-internal types from `types`, preserving the order of the
/// rest.
pub fn filter_reserved_types<'schema>(
    schema: &Schema,
    types: Vec<&'schema GraphQLType>,
) -> Vec<&'schema GraphQLType> {
    types.into_iter().filter(|type_| {
        let reserved = is_reserved_type(schema, type_);
        if reserved {
            log::debug!("Excluding federation type `{}` from the document", type_.name());
        }
        !reserved
    }).collect()
}

/// Indicates whether `type_` exists only to serve the federation protocol.
///
/// The query type is reserved when it declares nothing but reserved fields.
/// If its fields cannot be resolved unambiguously, it is treated as having
/// public fields and kept. Any other type is reserved when its name is one of
/// [`RESERVED_TYPE_NAMES`].
pub fn is_reserved_type(schema: &Schema, type_: &GraphQLType) -> bool {
    if !schema.is_query_type(type_) {
        return RESERVED_TYPE_NAMES.contains(&type_.name());
    }

    match schema.resolved_fields(type_) {
        Ok(fields) => fields
            .iter()
            .all(|field| RESERVED_QUERY_FIELD_NAMES.contains(&field.name())),

        Err(err) => {
            log::debug!("Keeping query type `{}`: {err}", type_.name());
            false
        },
    }
}

/// Removes every reserved query field from a query type's node.
pub fn remove_reserved_query_fields<N: FieldContainerNode>(node: N) -> N {
    for field in node.fields() {
        if RESERVED_QUERY_FIELD_NAMES.contains(&field.name.as_str()) {
            log::trace!("Removing federation field `{}` from the query type", field.name);
        }
    }
    node.without_fields(&RESERVED_QUERY_FIELD_NAMES)
}
