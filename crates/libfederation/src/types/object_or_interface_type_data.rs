use crate::FederationDirective;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeTrait;
use inherent::inherent;

#[derive(Clone, Debug, PartialEq)]
pub(super) struct ObjectOrInterfaceTypeData {
    pub(super) description: Option<String>,
    pub(super) federation_directives: Option<Vec<FederationDirective>>,
    pub(super) fields: Vec<Field>,
    pub(super) interfaces: Vec<String>,
    pub(super) name: String,
}
impl ObjectOrInterfaceTypeData {
    pub(super) fn new(name: String) -> Self {
        Self {
            description: None,
            federation_directives: None,
            fields: vec![],
            interfaces: vec![],
            name,
        }
    }

    pub(super) fn add_field(&mut self, mut field: Field) {
        field.parent_type_name = self.name.clone();
        self.fields.push(field);
    }
}

#[inherent]
impl ObjectOrInterfaceTypeTrait for ObjectOrInterfaceTypeData {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn federation_directives(&self) -> Option<&[FederationDirective]> {
        self.federation_directives.as_deref()
    }

    pub fn fields(&self) -> &[Field] {
        self.fields.as_slice()
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.interfaces
            .iter()
            .map(|iface_name| iface_name.as_str())
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
