//! # API Facade
//!
//! Thin facade over the command layer and the single entry point for all
//! marks operations. It normalizes inputs (1-based display indexes to
//! 0-based list positions), dispatches to the right command, and returns
//! structured `Result<CmdResult>` values. No business logic, no I/O, no
//! presentation concerns.
//!
//! `MarksApi<S: DataStore>` is generic over the storage backend:
//! `MarksApi<FileStore>` in production, `MarksApi<InMemoryStore>` in tests.

use crate::commands;
use crate::config::MarksConfig;
use crate::error::{MarksError, Result};
use crate::store::{BookmarkStore, DataStore};

use crate::commands::helpers::to_position;

/// The main API facade for marks operations.
pub struct MarksApi<S: DataStore> {
    store: BookmarkStore<S>,
    paths: commands::MarksPaths,
}

impl<S: DataStore> MarksApi<S> {
    pub fn open(backend: S, scope: crate::model::Scope, paths: commands::MarksPaths) -> Result<Self> {
        Ok(Self {
            store: BookmarkStore::open(backend, scope)?,
            paths,
        })
    }

    pub fn add_bookmark(&mut self, url: String) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, url)
    }

    pub fn list_bookmarks(&self, page: usize) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, page)
    }

    /// `index` is 1-based as shown by `list`.
    pub fn edit_bookmark(&mut self, index: usize, url: String) -> Result<commands::CmdResult> {
        let position = to_position(index).ok_or(MarksError::BookmarkNotFound(index))?;
        commands::update::run(&mut self.store, position, url)
    }

    /// `index` is 1-based as shown by `list`.
    pub fn remove_bookmark(&mut self, index: usize, skip_confirm: bool) -> Result<commands::CmdResult> {
        let position = to_position(index).ok_or(MarksError::BookmarkNotFound(index))?;
        commands::remove::run(&mut self.store, position, skip_confirm)
    }

    /// The URL at a 1-based index, for clipboard and browser handoff.
    pub fn bookmark_at(&self, index: usize) -> Result<String> {
        to_position(index)
            .and_then(|position| self.store.get(position))
            .map(str::to_string)
            .ok_or(MarksError::BookmarkNotFound(index))
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, self.store.scope(), action)
    }

    pub fn load_config(&self) -> Result<MarksConfig> {
        MarksConfig::load(self.paths.scope_dir(self.store.scope())?)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths, self.store.scope())
    }

    pub fn paths(&self) -> &commands::MarksPaths {
        &self.paths
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, ListedBookmark, MarksPaths, MessageLevel};
