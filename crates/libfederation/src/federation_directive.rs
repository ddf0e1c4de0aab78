use crate::Value;

/// A federation directive attached to a schema element by the code that
/// declares the schema (e.g. `@key`, `@shareable`, `@listSize`).
///
/// A [`FederationDirective`] is plain metadata: it carries the directive's
/// base (un-namespaced) name and its arguments in the order they were
/// attached. The document builder decides the emitted name when the directive
/// is merged into the output document.
#[derive(Clone, Debug, PartialEq)]
pub struct FederationDirective {
    pub(crate) arguments: Vec<FederationDirectiveArgument>,
    pub(crate) name: String,
}
impl FederationDirective {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            arguments: vec![],
            name: name.into(),
        }
    }

    /// Append an argument. Arguments are emitted in the order they were
    /// added.
    pub fn with_argument(
        mut self,
        name: impl Into<String>,
        values: impl Into<Value>,
    ) -> Self {
        self.arguments.push(FederationDirectiveArgument {
            name: name.into(),
            values: values.into(),
        });
        self
    }

    /// The arguments of this directive in attachment order.
    pub fn arguments(&self) -> &[FederationDirectiveArgument] {
        self.arguments.as_slice()
    }

    /// The base name of this directive, without any link namespace prefix.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

/// A single named argument of a [`FederationDirective`].
#[derive(Clone, Debug, PartialEq)]
pub struct FederationDirectiveArgument {
    pub(crate) name: String,
    pub(crate) values: Value,
}
impl FederationDirectiveArgument {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn values(&self) -> &Value {
        &self.values
    }
}
