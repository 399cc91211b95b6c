//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts where a bookmark list is persisted so
//! the rest of the crate never touches the filesystem directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one `bookmarks.json` per scope
//!   holding a JSON array of URL strings in insertion order.
//! - [`memory::InMemoryStore`]: in-memory storage for tests, no persistence.
//!
//! ## The owning store
//!
//! [`BookmarkStore`] wraps a backend and owns the canonical in-memory list.
//! Every mutation commits the full list, reloads it from the backend as the
//! new source of truth, and recomputes the page count. Callers therefore
//! always observe a state that round-tripped through persistence.
//!
//! An absent or malformed persisted list degrades to an empty one; loading
//! never fails the caller.

use crate::error::{MarksError, Result};
use crate::model::Scope;
use crate::pagination;

pub mod fs;
pub mod memory;

/// Abstract interface for bookmark list persistence.
pub trait DataStore {
    /// Load the persisted list for a scope. Absent or unparseable storage
    /// yields an empty list rather than an error.
    fn load_urls(&self, scope: Scope) -> Result<Vec<String>>;

    /// Persist the full list for a scope in a single write.
    fn save_urls(&mut self, scope: Scope, urls: &[String]) -> Result<()>;
}

/// The ordered bookmark list for one scope, kept in sync with its backend.
pub struct BookmarkStore<S: DataStore> {
    backend: S,
    scope: Scope,
    urls: Vec<String>,
    page_count: usize,
}

impl<S: DataStore> BookmarkStore<S> {
    pub fn open(backend: S, scope: Scope) -> Result<Self> {
        let urls = backend.load_urls(scope)?;
        let page_count = pagination::page_count(urls.len());
        Ok(Self {
            backend,
            scope,
            urls,
            page_count,
        })
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.urls.get(index).map(String::as_str)
    }

    /// Pages derived from the current list length, minimum 1.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Appends `url` at the end of the list.
    pub fn add(&mut self, url: String) -> Result<()> {
        let mut next = self.urls.clone();
        next.push(url);
        self.commit(next)
    }

    /// Overwrites the entry at `index`. Callers are expected to have
    /// re-validated the index against the current list.
    pub fn replace(&mut self, index: usize, url: String) -> Result<()> {
        if index >= self.urls.len() {
            return Err(MarksError::Store(format!(
                "no bookmark at position {}",
                index
            )));
        }
        let mut next = self.urls.clone();
        next[index] = url;
        self.commit(next)
    }

    /// Excises the entry at `index`, shifting all later entries down by one.
    /// Returns the removed URL. Positional identities taken before this call
    /// are invalid afterwards.
    pub fn remove(&mut self, index: usize) -> Result<String> {
        if index >= self.urls.len() {
            return Err(MarksError::Store(format!(
                "no bookmark at position {}",
                index
            )));
        }
        let mut next = self.urls.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        Ok(removed)
    }

    fn commit(&mut self, next: Vec<String>) -> Result<()> {
        self.backend.save_urls(self.scope, &next)?;
        self.urls = self.backend.load_urls(self.scope)?;
        self.page_count = pagination::page_count(self.urls.len());
        Ok(())
    }
}
