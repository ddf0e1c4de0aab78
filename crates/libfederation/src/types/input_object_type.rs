use crate::FederationDirective;
use crate::types::InputValue;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects)
/// defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) description: Option<String>,
    pub(crate) federation_directives: Option<Vec<FederationDirective>>,
    pub(crate) fields: Vec<InputValue>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            federation_directives: None,
            fields: vec![],
            name: name.into(),
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

    pub fn with_field(mut self, field: InputValue) -> Self {
        self.fields.push(field);
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn federation_directives(&self) -> Option<&[FederationDirective]> {
        self.federation_directives.as_deref()
    }

    /// The input fields of this [`InputObjectType`] in declaration order.
    pub fn fields(&self) -> &[InputValue] {
        self.fields.as_slice()
    }

    /// The name of this [`InputObjectType`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
