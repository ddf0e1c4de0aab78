use thiserror::Error;

/// Raised when the fields of a type cannot be resolved to a set of uniquely
/// named public fields.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FieldResolutionError {
    #[error(
        "The `{type_name}` type has more than one field named `{field_name}`"
    )]
    DuplicateFieldName {
        field_name: String,
        type_name: String,
    },
}
