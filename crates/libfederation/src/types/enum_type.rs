use crate::FederationDirective;
use crate::types::EnumValue;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined within
/// some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) description: Option<String>,
    pub(crate) federation_directives: Option<Vec<FederationDirective>>,
    pub(crate) name: String,
    pub(crate) values: Vec<EnumValue>,
}
impl EnumType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            federation_directives: None,
            name: name.into(),
            values: vec![],
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_federation_directives(
        mut self,
        directives: Vec<FederationDirective>,
    ) -> Self {
        self.federation_directives = Some(directives);
        self
    }

    pub fn with_value(mut self, mut value: EnumValue) -> Self {
        value.enum_type_name = self.name.clone();
        self.values.push(value);
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn federation_directives(&self) -> Option<&[FederationDirective]> {
        self.federation_directives.as_deref()
    }

    /// The name of this [`EnumType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The values of this [`EnumType`] in declaration order.
    pub fn values(&self) -> &[EnumValue] {
        self.values.as_slice()
    }
}
