use crate::FederationDirective;

/// Represents an
/// [enum value](https://spec.graphql.org/October2021/#sec-Enum-Value) defined
/// within a specific [`EnumType`](crate::types::EnumType).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) description: Option<String>,
    pub(crate) enum_type_name: String,
    pub(crate) federation_directives: Option<Vec<FederationDirective>>,
    pub(crate) name: String,
}
impl EnumValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            enum_type_name: String::new(),
            federation_directives: None,
            name: name.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach federation directive metadata to this enum value.
    pub fn with_federation_directives(
        mut self,
        directives: Vec<FederationDirective>,
    ) -> Self {
        self.federation_directives = Some(directives);
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The name of the [`EnumType`](crate::types::EnumType) to which this
    /// value belongs.
    pub fn enum_type_name(&self) -> &str {
        self.enum_type_name.as_str()
    }

    pub fn federation_directives(&self) -> Option<&[FederationDirective]> {
        self.federation_directives.as_deref()
    }

    /// The name of this [`EnumValue`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
