//! Form state: which entry the input targets and whether submission is open.
//!
//! The submit path never infers its mode from presentation state. It carries
//! an explicit [`EditSession`] and reduces per-field error flags through
//! [`FormState`] before any store mutation.

use std::collections::BTreeMap;

/// The id of the single URL field tracked by the form.
pub const URL_FIELD: &str = "url";

/// Whether the form targets a new entry or an existing list position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditSession {
    New,
    Editing(usize),
}

impl EditSession {
    /// Starts an edit session for `index`. Returns the session and the
    /// prefill value when the entry exists; a stale index is a silent no-op.
    pub fn begin(urls: &[String], index: usize) -> Option<(EditSession, String)> {
        urls.get(index)
            .map(|url| (EditSession::Editing(index), url.clone()))
    }

    /// Clears the session back to targeting a new entry.
    pub fn cancel(self) -> EditSession {
        EditSession::New
    }

    pub fn target(&self) -> Option<usize> {
        match self {
            EditSession::New => None,
            EditSession::Editing(index) => Some(*index),
        }
    }
}

/// What a submit should do to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAction {
    Append,
    Replace(usize),
}

/// Resolves a submit against the current list length. An edit target that
/// went stale falls back to append rather than overwriting an unrelated
/// entry.
pub fn submit_action(session: &EditSession, len: usize) -> SubmitAction {
    match session.target() {
        Some(index) if index < len => SubmitAction::Replace(index),
        _ => SubmitAction::Append,
    }
}

/// Per-field error flags. Submission is open iff no tracked field has an
/// active error. Pure reduction over the current flags, no history.
#[derive(Debug, Default)]
pub struct FormState {
    fields: BTreeMap<String, bool>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, id: &str, has_error: bool) {
        self.fields.insert(id.to_string(), has_error);
    }

    pub fn can_submit(&self) -> bool {
        !self.fields.values().any(|has_error| *has_error)
    }
}
