use crate::document::baseline;
use crate::document::DirectiveTarget;
use crate::federation::UsedDirectives;
use crate::schema::FederationConfig;
use crate::types::SchemaElement;

/// Attaches the federation directives declared on a schema element to the
/// element's document node.
#[derive(Clone, Copy, Debug)]
pub struct DirectiveMerger<'schema> {
    federation: &'schema FederationConfig,
}
impl<'schema> DirectiveMerger<'schema> {
    pub fn new(federation: &'schema FederationConfig) -> Self {
        Self { federation }
    }

    /// The name a directive is emitted under.
    ///
    /// Namespacing only applies on federation versions that import
    /// directives through `@link`, and only when a namespace is configured:
    /// `key` becomes `federation__key` under the `federation` namespace.
    pub fn directive_name(&self, base_name: &str) -> String {
        match self.federation.link_namespace() {
            Some(namespace) if self.federation.version().supports_namespacing() =>
                format!("{namespace}__{base_name}"),
            _ => base_name.to_string(),
        }
    }

    /// Appends one directive application to `node` per federation directive
    /// declared on `element`, in declaration order, and records each base
    /// name in `used_directives`.
    ///
    /// Elements without directive metadata return `node` unchanged.
    pub fn merge_directives<'element, N: DirectiveTarget>(
        &self,
        node: N,
        element: impl Into<SchemaElement<'element>>,
        used_directives: &mut UsedDirectives,
    ) -> N {
        let element = element.into();
        let Some(directives) = element.federation_directives() else {
            return node;
        };

        directives.iter().fold(node, |node, directive| {
            used_directives.insert(directive.name());
            let emitted_name = self.directive_name(directive.name());
            log::trace!("Applying `@{emitted_name}` to `{}`", element.name());
            node.merge_directive(
                baseline::build_directive_node(emitted_name, directive.arguments())
            )
        })
    }
}
