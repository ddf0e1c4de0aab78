use indexmap::IndexSet;

/// The base names of the federation directives applied while building one
/// document, in the order each was first applied.
///
/// Names are always recorded without any link namespace prefix, so a caller
/// can decide which directive definitions to import regardless of how they
/// were emitted.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UsedDirectives(IndexSet<String>);
impl UsedDirectives {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, directive_name: &str) -> bool {
        self.0.contains(directive_name)
    }

    /// Record `directive_name`. Returns `false` if it was already recorded.
    pub fn insert(&mut self, directive_name: &str) -> bool {
        if self.0.contains(directive_name) {
            return false;
        }
        self.0.insert(directive_name.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
impl<'a> std::iter::IntoIterator for &'a UsedDirectives {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
