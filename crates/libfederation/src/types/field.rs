use crate::FederationDirective;
use crate::types::InputValue;
use crate::types::TypeAnnotation;

/// Represents a
/// [field](https://spec.graphql.org/October2021/#FieldsDefinition) defined on
/// an [`ObjectType`](crate::types::ObjectType) or an
/// [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) arguments: Vec<InputValue>,
    pub(crate) description: Option<String>,
    pub(crate) federation_directives: Option<Vec<FederationDirective>>,
    pub(crate) name: String,
    pub(crate) parent_type_name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    /// Creates a detached field. The parent type is recorded once the field is
    /// added to an object or interface type.
    pub fn new(
        name: impl Into<String>,
        type_annotation: impl Into<TypeAnnotation>,
    ) -> Self {
        Self {
            arguments: vec![],
            description: None,
            federation_directives: None,
            name: name.into(),
            parent_type_name: String::new(),
            type_annotation: type_annotation.into(),
        }
    }

    pub fn with_argument(mut self, argument: InputValue) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach federation directive metadata to this field.
    pub fn with_federation_directives(
        mut self,
        directives: Vec<FederationDirective>,
    ) -> Self {
        self.federation_directives = Some(directives);
        self
    }

    /// The arguments declared on this [`Field`], in declaration order.
    pub fn arguments(&self) -> &[InputValue] {
        self.arguments.as_slice()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The federation directives attached to this [`Field`], or `None` if no
    /// metadata was ever attached.
    pub fn federation_directives(&self) -> Option<&[FederationDirective]> {
        self.federation_directives.as_deref()
    }

    /// The public name of this [`Field`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The name of the object or interface type that declares this field.
    pub fn parent_type_name(&self) -> &str {
        self.parent_type_name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
