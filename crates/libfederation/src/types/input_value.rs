use crate::FederationDirective;
use crate::types::TypeAnnotation;
use crate::Value;

/// Represents an
/// [input value](https://spec.graphql.org/October2021/#InputValueDefinition):
/// either an argument declared on a [`Field`](crate::types::Field) or a field
/// of an [`InputObjectType`](crate::types::InputObjectType).
///
/// Both are built into the document through the same argument hook.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValue {
    pub(crate) default_value: Option<Value>,
    pub(crate) description: Option<String>,
    pub(crate) federation_directives: Option<Vec<FederationDirective>>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl InputValue {
    pub fn new(
        name: impl Into<String>,
        type_annotation: impl Into<TypeAnnotation>,
    ) -> Self {
        Self {
            default_value: None,
            description: None,
            federation_directives: None,
            name: name.into(),
            type_annotation: type_annotation.into(),
        }
    }

    pub fn with_default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach federation directive metadata to this input value.
    pub fn with_federation_directives(
        mut self,
        directives: Vec<FederationDirective>,
    ) -> Self {
        self.federation_directives = Some(directives);
        self
    }

    /// The default value of this [`InputValue`], if one is declared.
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The federation directives attached to this [`InputValue`], or `None` if
    /// no metadata was ever attached.
    pub fn federation_directives(&self) -> Option<&[FederationDirective]> {
        self.federation_directives.as_deref()
    }

    /// The name of this [`InputValue`].
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The [`TypeAnnotation`] specifying the schema-defined type of this
    /// [`InputValue`].
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
