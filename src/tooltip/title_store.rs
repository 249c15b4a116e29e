use std::collections::HashMap;
use std::hash::Hash;

/// `title` values lifted off targets while their tooltip is showing
///
/// Filled on show, drained on hide.
#[derive(Debug, Clone)]
pub struct TitleStore<N> {
    saved: HashMap<N, String>,
}

impl<N> Default for TitleStore<N> {
    fn default() -> Self {
        Self {
            saved: HashMap::new(),
        }
    }
}

impl<N: Copy + Eq + Hash> TitleStore<N> {
    /// Save a value, replacing any earlier one for the same node
    pub fn save(&mut self, node: N, title: String) {
        self.saved.insert(node, title);
    }

    pub fn get(&self, node: N) -> Option<&str> {
        self.saved.get(&node).map(String::as_str)
    }

    pub fn take(&mut self, node: N) -> Option<String> {
        self.saved.remove(&node)
    }

    pub fn len(&self) -> usize {
        self.saved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }
}
