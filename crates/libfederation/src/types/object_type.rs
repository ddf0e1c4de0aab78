use crate::FederationDirective;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectOrInterfaceTypeTrait;
use inherent::inherent;

/// Represents an
/// [object type](https://spec.graphql.org/October2021/#sec-Objects) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType(pub(super) ObjectOrInterfaceTypeData);
impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(ObjectOrInterfaceTypeData::new(name.into()))
    }

    /// Declare that this type implements the interface named
    /// `interface_name`.
    pub fn implements(mut self, interface_name: impl Into<String>) -> Self {
        self.0.interfaces.push(interface_name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    /// Attach federation directive metadata (e.g. `@key`) to this type.
    pub fn with_federation_directives(
        mut self,
        directives: Vec<FederationDirective>,
    ) -> Self {
        self.0.federation_directives = Some(directives);
        self
    }

    /// Append a field. Two fields sharing a name are tolerated here and only
    /// reported when the type's fields are resolved.
    pub fn with_field(mut self, field: Field) -> Self {
        self.0.add_field(field);
        self
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectType {
    /// The description of this [`ObjectType`] as defined in the schema.
    pub fn description(&self) -> Option<&str> {
        self.0.description()
    }

    /// The federation directives attached to this [`ObjectType`], or `None`
    /// if no metadata was ever attached.
    pub fn federation_directives(&self) -> Option<&[FederationDirective]> {
        self.0.federation_directives()
    }

    /// All fields declared on this [`ObjectType`] in declaration order,
    /// including any that share a name.
    pub fn fields(&self) -> &[Field] {
        self.0.fields()
    }

    /// The names of all interfaces implemented by this [`ObjectType`].
    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    /// The name of this [`ObjectType`].
    pub fn name(&self) -> &str {
        self.0.name()
    }
}
