use crate::FederationDirective;
use crate::types::Field;

/// Accessors shared by [`ObjectType`](crate::types::ObjectType) and
/// [`InterfaceType`](crate::types::InterfaceType).
pub trait ObjectOrInterfaceTypeTrait {
    fn description(&self) -> Option<&str>;
    fn federation_directives(&self) -> Option<&[FederationDirective]>;
    fn fields(&self) -> &[Field];
    fn interface_names(&self) -> Vec<&str>;
    fn name(&self) -> &str;
}
