use crate::commands::{CmdMessage, CmdResult, ListedBookmark};
use crate::error::Result;
use crate::form::EditSession;
use crate::store::{BookmarkStore, DataStore};

use super::helpers::gate_submission;

pub fn run<S: DataStore>(store: &mut BookmarkStore<S>, url: String) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if let Some(message) = gate_submission(&url, &EditSession::New, store.urls()) {
        result.add_message(CmdMessage::error(message));
        return Ok(result);
    }

    store.add(url.clone())?;
    result.add_message(CmdMessage::success(format!("Bookmark added: {}", url)));
    result.affected.push(ListedBookmark {
        index: store.len(),
        url,
    });
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::seeded_store;

    #[test]
    fn adds_a_valid_url() {
        let mut store = seeded_store(&[]);
        let result = run(&mut store, "https://a.com".into()).unwrap();

        assert!(!result.has_error());
        assert_eq!(store.urls(), &["https://a.com"]);
        assert_eq!(result.affected[0].index, 1);
    }

    #[test]
    fn rejects_a_duplicate_before_any_mutation() {
        let mut store = seeded_store(&["https://a.com"]);
        let result = run(&mut store, "https://a.com".into()).unwrap();

        assert!(result.has_error());
        assert_eq!(result.messages[0].content, "URL is already bookmarked");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn rejects_an_invalid_url_without_mutating() {
        let mut store = seeded_store(&[]);
        let result = run(&mut store, "not a url".into()).unwrap();

        assert!(result.has_error());
        assert_eq!(result.messages[0].content, "Please provide a valid URL");
        assert!(store.is_empty());
    }

    #[test]
    fn rejects_an_empty_value() {
        let mut store = seeded_store(&[]);
        let result = run(&mut store, String::new()).unwrap();

        assert_eq!(result.messages[0].content, "This field cannot be empty");
        assert!(store.is_empty());
    }
}
