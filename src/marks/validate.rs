//! URL grammar and field validation.
//!
//! [`is_valid_url`] is a pure predicate over the accepted URL grammar:
//! optional http/https scheme, a labeled domain ending in a ≥2-letter TLD or
//! a dotted-quad IPv4 literal, then optional port, path, query, and fragment.
//! Matching is case-insensitive and anchored; there is no network lookup and
//! no octet-range checking.
//!
//! [`validate_url_field`] layers the submit-gating rules on top: empty beats
//! invalid beats duplicate, and the duplicate check is mode-aware so that an
//! unchanged value re-submitted while editing is not flagged against itself.

use crate::form::EditSession;
use once_cell::sync::Lazy;
use regex::Regex;

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(https?://)?((([a-z\d]([a-z\d-]*[a-z\d])*)\.)+[a-z]{2,}|((\d{1,3}\.){3}\d{1,3}))(:\d+)?(/[-a-z\d%_.~+]*)*(\?[;&a-z\d%_.~+=-]*)?(#[-a-z\d_]*)?$",
    )
    .expect("URL pattern is valid")
});

pub fn is_valid_url(s: &str) -> bool {
    URL_PATTERN.is_match(s)
}

/// Outcome of validating the URL field against the current list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Valid,
    Empty,
    InvalidUrl,
    Duplicate,
}

impl FieldStatus {
    pub fn is_error(&self) -> bool {
        !matches!(self, FieldStatus::Valid)
    }

    /// The inline message shown to the user, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            FieldStatus::Valid => None,
            FieldStatus::Empty => Some("This field cannot be empty"),
            FieldStatus::InvalidUrl => Some("Please provide a valid URL"),
            FieldStatus::Duplicate => Some("URL is already bookmarked"),
        }
    }
}

/// Validates the URL field, first match wins: empty, then grammar, then
/// duplicates. In edit mode the entry being edited does not count against
/// itself unless its value changed; a stale edit target falls back to the
/// new-entry rules.
pub fn validate_url_field(value: &str, session: &EditSession, urls: &[String]) -> FieldStatus {
    if value.is_empty() {
        return FieldStatus::Empty;
    }
    if !is_valid_url(value) {
        return FieldStatus::InvalidUrl;
    }

    let original = session.target().and_then(|i| urls.get(i));
    let duplicate = match original {
        None => urls.iter().any(|u| u == value),
        Some(original) => value != original && urls.iter().any(|u| u == value),
    };
    if duplicate {
        return FieldStatus::Duplicate;
    }

    FieldStatus::Valid
}
