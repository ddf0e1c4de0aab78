use crate::document::DocumentBuildError;
use crate::federation::FederatedDocument;
use crate::federation::FederatedDocumentBuilder;
use crate::federation::UsedDirectives;
use crate::schema::DEFAULT_LINK_NAMESPACE;
use crate::schema::FederationConfig;
use crate::schema::Schema;

/// Builds the federated document of `schema` and renders it as SDL.
///
/// See [`FederatedDocument::to_sdl`] for the exact output.
pub fn render_federated_sdl(schema: &Schema) -> Result<String, DocumentBuildError> {
    let federated = FederatedDocumentBuilder::new(schema).build()?;
    Ok(federated.to_sdl(schema.federation()))
}

impl FederatedDocument {
    /// Renders this document as SDL.
    ///
    /// Federation 2 subgraphs declare which version of the federation spec
    /// they link against, so on those versions the document is preceded by
    /// an `extend schema @link(..)` header (see [`link_header`]).
    pub fn to_sdl(&self, federation: &FederationConfig) -> String {
        let document = self.document().to_string();
        match link_header(federation, self.used_directives()) {
            Some(header) => format!("{header}\n\n{document}"),
            None => document,
        }
    }
}

/// The `extend schema @link(..)` header of a Federation 2 document, or `None`
/// on versions that predate `@link`.
///
/// Without a link namespace the used directives are imported by name, in
/// first-use order. With one, the directives are referenced through the
/// namespace instead, which is declared with `as:` unless it is the default
/// [`DEFAULT_LINK_NAMESPACE`].
pub fn link_header(
    federation: &FederationConfig,
    used_directives: &UsedDirectives,
) -> Option<String> {
    let version = federation.version();
    if !version.supports_namespacing() {
        return None;
    }

    let mut arguments = vec![format!("url: {}", string_literal(&version.link_url()))];
    match federation.link_namespace() {
        Some(namespace) => {
            if namespace != DEFAULT_LINK_NAMESPACE {
                arguments.push(format!("as: {}", string_literal(namespace)));
            }
        },

        None => {
            if !used_directives.is_empty() {
                let imports = used_directives
                    .iter()
                    .map(|name| string_literal(&format!("@{name}")))
                    .collect::<Vec<_>>();
                arguments.push(format!("import: [{}]", imports.join(", ")));
            }
        },
    }

    Some(format!("extend schema\n  @link({})", arguments.join(", ")))
}

/// JSON string escapes are a subset of GraphQL's, so a JSON-encoded string is
/// also a valid GraphQL string literal.
fn string_literal(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}
