use crate::FederationDirective;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use inherent::inherent;

/// Represents an
/// [interface type](https://spec.graphql.org/October2021/#sec-Interfaces)
/// defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceType(pub(super) ObjectOrInterfaceTypeData);
impl InterfaceType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(ObjectOrInterfaceTypeData::new(name.into()))
    }

    pub fn implements(mut self, interface_name: impl Into<String>) -> Self {
        self.0.interfaces.push(interface_name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    pub fn with_federation_directives(
        mut self,
        directives: Vec<FederationDirective>,
    ) -> Self {
        self.0.federation_directives = Some(directives);
        self
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.0.add_field(field);
        self
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for InterfaceType {
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    pub fn federation_directives(&self) -> Option<&[FederationDirective]> {
        self.0.federation_directives()
    }

    pub fn fields(&self) -> &[Field] {
        self.0.fields()
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    /// The name of this [`InterfaceType`].
    pub fn name(&self) -> &str {
        self.0.name()
    }
}
