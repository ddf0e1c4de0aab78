use crate::FederationDirective;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InputValue;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

/// A borrowed reference to any schema element that can appear as a node in
/// the output document, tagged by its kind.
///
/// Whether an element supports federation directive metadata is decided by
/// matching on this tag rather than by probing the element at runtime:
/// built-in scalars are the only kind without a metadata source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SchemaElement<'schema> {
    Argument(&'schema InputValue),
    BuiltinScalar(&'schema GraphQLType),
    Enum(&'schema EnumType),
    EnumValue(&'schema EnumValue),
    Field(&'schema Field),
    InputObject(&'schema InputObjectType),
    Interface(&'schema InterfaceType),
    Object(&'schema ObjectType),
    Scalar(&'schema ScalarType),
    Union(&'schema UnionType),
}
impl<'schema> SchemaElement<'schema> {
    /// The federation directives attached to this element.
    ///
    /// `None` means the element has no metadata source at all, which is
    /// distinct from (but treated the same as) an empty list.
    pub fn federation_directives(&self) -> Option<&'schema [FederationDirective]> {
        match *self {
            Self::Argument(input_value) => input_value.federation_directives(),
            Self::BuiltinScalar(_) => None,
            Self::Enum(enum_type) => enum_type.federation_directives(),
            Self::EnumValue(enum_value) => enum_value.federation_directives(),
            Self::Field(field) => field.federation_directives(),
            Self::InputObject(input_object) => input_object.federation_directives(),
            Self::Interface(interface) => interface.federation_directives(),
            Self::Object(object) => object.federation_directives(),
            Self::Scalar(scalar) => scalar.federation_directives(),
            Self::Union(union_type) => union_type.federation_directives(),
        }
    }

    pub fn name(&self) -> &'schema str {
        match *self {
            Self::Argument(input_value) => input_value.name(),
            Self::BuiltinScalar(builtin) => builtin.name(),
            Self::Enum(enum_type) => enum_type.name(),
            Self::EnumValue(enum_value) => enum_value.name(),
            Self::Field(field) => field.name(),
            Self::InputObject(input_object) => input_object.name(),
            Self::Interface(interface) => interface.name(),
            Self::Object(object) => object.name(),
            Self::Scalar(scalar) => scalar.name(),
            Self::Union(union_type) => union_type.name(),
        }
    }
}
impl<'schema> std::convert::From<&'schema GraphQLType> for SchemaElement<'schema> {
    fn from(value: &'schema GraphQLType) -> Self {
        match value {
            GraphQLType::Bool
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::String => Self::BuiltinScalar(value),
            GraphQLType::Enum(t) => Self::Enum(t),
            GraphQLType::InputObject(t) => Self::InputObject(t),
            GraphQLType::Interface(t) => Self::Interface(t),
            GraphQLType::Object(t) => Self::Object(t),
            GraphQLType::Scalar(t) => Self::Scalar(t),
            GraphQLType::Union(t) => Self::Union(t),
        }
    }
}

macro_rules! impl_from_element_ref {
    ($element_type:ty, $variant:ident) => {
        impl<'schema> std::convert::From<&'schema $element_type> for SchemaElement<'schema> {
            fn from(value: &'schema $element_type) -> Self {
                Self::$variant(value)
            }
        }
    };
}
impl_from_element_ref!(InputValue, Argument);
impl_from_element_ref!(EnumType, Enum);
impl_from_element_ref!(EnumValue, EnumValue);
impl_from_element_ref!(Field, Field);
impl_from_element_ref!(InputObjectType, InputObject);
impl_from_element_ref!(InterfaceType, Interface);
impl_from_element_ref!(ObjectType, Object);
impl_from_element_ref!(ScalarType, Scalar);
impl_from_element_ref!(UnionType, Union);
