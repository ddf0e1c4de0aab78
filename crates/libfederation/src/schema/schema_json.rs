//! Serde representation of the JSON schema model accepted by
//! [`SchemaBuilder::load_json_str`](crate::schema::SchemaBuilder::load_json_str).

use crate::FederationDirective;
use crate::schema::SchemaBuildError;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InputValue;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use crate::Value;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug, serde::Deserialize)]
pub(super) struct SchemaJson {
    #[serde(default)]
    pub(super) federation: Option<FederationJson>,
    #[serde(default)]
    pub(super) mutation_type: Option<String>,
    #[serde(default)]
    pub(super) query_type: Option<String>,
    #[serde(default)]
    pub(super) subscription_type: Option<String>,
    #[serde(default)]
    types: Vec<TypeJson>,
}
impl SchemaJson {
    pub(super) fn into_types(self) -> Result<Vec<GraphQLType>> {
        self.types
            .into_iter()
            .map(TypeJson::into_graphql_type)
            .collect()
    }
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct FederationJson {
    #[serde(default)]
    pub(super) link_namespace: Option<String>,
    #[serde(default)]
    pub(super) version: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum TypeJson {
    Enum(EnumJson),
    InputObject(InputObjectJson),
    Interface(ObjectOrInterfaceJson),
    Object(ObjectOrInterfaceJson),
    Scalar(ScalarJson),
    Union(UnionJson),
}
impl TypeJson {
    fn into_graphql_type(self) -> Result<GraphQLType> {
        Ok(match self {
            TypeJson::Enum(json) => {
                let mut enum_type = EnumType::new(json.name);
                enum_type.description = json.description;
                enum_type.federation_directives = directives_from_json(json.directives);
                for value_json in json.values {
                    let mut value = EnumValue::new(value_json.name);
                    value.description = value_json.description;
                    value.federation_directives =
                        directives_from_json(value_json.directives);
                    enum_type = enum_type.with_value(value);
                }
                enum_type.into()
            },

            TypeJson::InputObject(json) => {
                let mut input_object = InputObjectType::new(json.name);
                input_object.description = json.description;
                input_object.federation_directives =
                    directives_from_json(json.directives);
                for field_json in json.fields {
                    input_object = input_object.with_field(field_json.into_input_value()?);
                }
                input_object.into()
            },

            TypeJson::Interface(json) => {
                let mut interface = InterfaceType::new(json.name);
                if let Some(description) = json.description {
                    interface = interface.with_description(description);
                }
                if let Some(directives) = directives_from_json(json.directives) {
                    interface = interface.with_federation_directives(directives);
                }
                for interface_name in json.implements {
                    interface = interface.implements(interface_name);
                }
                for field_json in json.fields {
                    interface = interface.with_field(field_json.into_field()?);
                }
                interface.into()
            },

            TypeJson::Object(json) => {
                let mut object = ObjectType::new(json.name);
                if let Some(description) = json.description {
                    object = object.with_description(description);
                }
                if let Some(directives) = directives_from_json(json.directives) {
                    object = object.with_federation_directives(directives);
                }
                for interface_name in json.implements {
                    object = object.implements(interface_name);
                }
                for field_json in json.fields {
                    object = object.with_field(field_json.into_field()?);
                }
                object.into()
            },

            TypeJson::Scalar(json) => {
                let mut scalar = ScalarType::new(json.name);
                scalar.description = json.description;
                scalar.federation_directives = directives_from_json(json.directives);
                scalar.into()
            },

            TypeJson::Union(json) => {
                let mut union_type = UnionType::new(json.name);
                union_type.description = json.description;
                union_type.federation_directives = directives_from_json(json.directives);
                union_type.members = json.members;
                union_type.into()
            },
        })
    }
}

#[derive(Debug, serde::Deserialize)]
struct DirectiveJson {
    #[serde(default)]
    arguments: Vec<DirectiveArgumentJson>,
    name: String,
}

#[derive(Debug, serde::Deserialize)]
struct DirectiveArgumentJson {
    name: String,
    values: serde_json::Value,
}

#[derive(Debug, serde::Deserialize)]
struct EnumJson {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    directives: Option<Vec<DirectiveJson>>,
    name: String,
    #[serde(default)]
    values: Vec<EnumValueJson>,
}

#[derive(Debug, serde::Deserialize)]
struct EnumValueJson {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    directives: Option<Vec<DirectiveJson>>,
    name: String,
}

#[derive(Debug, serde::Deserialize)]
struct FieldJson {
    #[serde(default)]
    arguments: Vec<InputValueJson>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    directives: Option<Vec<DirectiveJson>>,
    name: String,
    #[serde(rename = "type")]
    type_annotation: String,
}
impl FieldJson {
    fn into_field(self) -> Result<Field> {
        let type_annotation: TypeAnnotation = self.type_annotation.parse()?;
        let mut field = Field::new(self.name, type_annotation);
        field.description = self.description;
        field.federation_directives = directives_from_json(self.directives);
        for argument_json in self.arguments {
            field = field.with_argument(argument_json.into_input_value()?);
        }
        Ok(field)
    }
}

#[derive(Debug, serde::Deserialize)]
struct InputObjectJson {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    directives: Option<Vec<DirectiveJson>>,
    #[serde(default)]
    fields: Vec<InputValueJson>,
    name: String,
}

#[derive(Debug, serde::Deserialize)]
struct InputValueJson {
    #[serde(default)]
    default_value: Option<serde_json::Value>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    directives: Option<Vec<DirectiveJson>>,
    name: String,
    #[serde(rename = "type")]
    type_annotation: String,
}
impl InputValueJson {
    fn into_input_value(self) -> Result<InputValue> {
        let type_annotation: TypeAnnotation = self.type_annotation.parse()?;
        let mut input_value = InputValue::new(self.name, type_annotation);
        input_value.default_value = self.default_value.as_ref().map(Value::from_json);
        input_value.description = self.description;
        input_value.federation_directives = directives_from_json(self.directives);
        Ok(input_value)
    }
}

#[derive(Debug, serde::Deserialize)]
struct ObjectOrInterfaceJson {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    directives: Option<Vec<DirectiveJson>>,
    #[serde(default)]
    fields: Vec<FieldJson>,
    #[serde(default)]
    implements: Vec<String>,
    name: String,
}

#[derive(Debug, serde::Deserialize)]
struct ScalarJson {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    directives: Option<Vec<DirectiveJson>>,
    name: String,
}

#[derive(Debug, serde::Deserialize)]
struct UnionJson {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    directives: Option<Vec<DirectiveJson>>,
    #[serde(default)]
    members: Vec<String>,
    name: String,
}

/// A missing `directives` key maps to "no metadata source" (`None`), while an
/// explicit empty list maps to `Some(vec![])`.
fn directives_from_json(
    directives: Option<Vec<DirectiveJson>>,
) -> Option<Vec<FederationDirective>> {
    directives.map(|directives| {
        directives
            .into_iter()
            .map(|directive_json| {
                directive_json.arguments.iter().fold(
                    FederationDirective::new(directive_json.name.as_str()),
                    |directive, argument_json| directive.with_argument(
                        argument_json.name.as_str(),
                        Value::from_json(&argument_json.values),
                    ),
                )
            })
            .collect()
    })
}
