use super::DataStore;
use crate::error::Result;
use crate::model::Scope;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    lists: HashMap<Scope, Vec<String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn load_urls(&self, scope: Scope) -> Result<Vec<String>> {
        Ok(self.lists.get(&scope).cloned().unwrap_or_default())
    }

    fn save_urls(&mut self, scope: Scope, urls: &[String]) -> Result<()> {
        self.lists.insert(scope, urls.to_vec());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::store::BookmarkStore;

    /// A project-scoped store seeded with the given URLs.
    pub fn seeded_store(urls: &[&str]) -> BookmarkStore<InMemoryStore> {
        let mut backend = InMemoryStore::new();
        let urls: Vec<String> = urls.iter().map(|s| s.to_string()).collect();
        backend.save_urls(Scope::Project, &urls).unwrap();
        BookmarkStore::open(backend, Scope::Project).unwrap()
    }

    /// A store holding `count` distinct valid URLs.
    pub fn populated_store(count: usize) -> BookmarkStore<InMemoryStore> {
        let urls: Vec<String> = (0..count).map(|i| format!("https://site{}.com", i)).collect();
        let mut backend = InMemoryStore::new();
        backend.save_urls(Scope::Project, &urls).unwrap();
        BookmarkStore::open(backend, Scope::Project).unwrap()
    }
}
