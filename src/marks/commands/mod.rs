use crate::config::MarksConfig;
use crate::error::{MarksError, Result};
use crate::model::Scope;
use crate::pagination::PageView;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod helpers;
pub mod init;
pub mod list;
pub mod remove;
pub mod update;

#[derive(Debug, Clone)]
pub struct MarksPaths {
    pub project: Option<PathBuf>,
    pub global: PathBuf,
}

impl MarksPaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => self
                .project
                .clone()
                .ok_or_else(|| MarksError::Store("Project scope is not available".to_string())),
            Scope::Global => Ok(self.global.clone()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A bookmark as displayed: its 1-based list index and URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedBookmark {
    pub index: usize,
    pub url: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<ListedBookmark>,
    pub listed: Vec<ListedBookmark>,
    pub page: Option<PageView>,
    pub config: Option<MarksConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, listed: Vec<ListedBookmark>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_page(mut self, page: PageView) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_config(mut self, config: MarksConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Whether any message reports a validation failure.
    pub fn has_error(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Error))
    }
}
