use std::collections::HashSet;

/// Session-lifetime state owned by the engine's constructor.
///
/// Tracks which resource nodes have already had their required libraries
/// checked, so the check runs at most once per identifier per session.
#[derive(Debug, Default)]
pub struct SessionContext {
    library_checked: HashSet<String>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn library_checked(&self, node_uri: &str) -> bool {
        self.library_checked.contains(node_uri)
    }

    /// Mark an identifier as checked. Grows monotonically for the life of
    /// the session; only restarting the host resets it.
    pub fn mark_library_checked(&mut self, node_uri: &str) {
        self.library_checked.insert(node_uri.to_string());
    }
}
