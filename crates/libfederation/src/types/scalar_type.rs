use crate::FederationDirective;

/// Represents a custom
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars) defined
/// within some [`Schema`](crate::schema::Schema).
///
/// Built-in scalars (`Int`, `String`, ...) are represented by dedicated
/// [`GraphQLType`](crate::types::GraphQLType) variants instead.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) description: Option<String>,
    pub(crate) federation_directives: Option<Vec<FederationDirective>>,
    pub(crate) name: String,
}
impl ScalarType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            federation_directives: None,
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

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn federation_directives(&self) -> Option<&[FederationDirective]> {
        self.federation_directives.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
