use crate::commands::{CmdMessage, CmdResult, ListedBookmark};
use crate::error::Result;
use crate::form::{submit_action, EditSession, SubmitAction};
use crate::store::{BookmarkStore, DataStore};

use super::helpers::gate_submission;

/// Edits the bookmark at `position` (0-based) to `url`. A stale position is
/// a no-op; a target that goes stale between session start and submit falls
/// back to appending rather than overwriting an unrelated entry.
pub fn run<S: DataStore>(
    store: &mut BookmarkStore<S>,
    position: usize,
    url: String,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let session = match EditSession::begin(store.urls(), position) {
        Some((session, _prefill)) => session,
        None => {
            result.add_message(CmdMessage::warning(format!(
                "No bookmark at index {}",
                position + 1
            )));
            return Ok(result);
        }
    };

    if let Some(message) = gate_submission(&url, &session, store.urls()) {
        result.add_message(CmdMessage::error(message));
        return Ok(result);
    }

    match submit_action(&session, store.len()) {
        SubmitAction::Replace(index) => {
            store.replace(index, url.clone())?;
            result.add_message(CmdMessage::success(format!(
                "Bookmark updated ({}): {}",
                index + 1,
                url
            )));
            result.affected.push(ListedBookmark {
                index: index + 1,
                url,
            });
        }
        SubmitAction::Append => {
            store.add(url.clone())?;
            result.add_message(CmdMessage::success(format!("Bookmark added: {}", url)));
            result.affected.push(ListedBookmark {
                index: store.len(),
                url,
            });
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::seeded_store;

    #[test]
    fn edits_in_place() {
        let mut store = seeded_store(&["https://a.com", "https://b.com", "https://c.com"]);
        let result = run(&mut store, 1, "https://x.com".into()).unwrap();

        assert!(!result.has_error());
        assert_eq!(
            store.urls(),
            &["https://a.com", "https://x.com", "https://c.com"]
        );
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn resubmitting_the_unchanged_value_is_not_a_duplicate() {
        let mut store = seeded_store(&["https://a.com", "https://b.com"]);
        let result = run(&mut store, 1, "https://b.com".into()).unwrap();

        assert!(!result.has_error());
        assert_eq!(store.urls(), &["https://a.com", "https://b.com"]);
    }

    #[test]
    fn editing_to_another_entrys_value_is_rejected() {
        let mut store = seeded_store(&["https://a.com", "https://b.com"]);
        let result = run(&mut store, 1, "https://a.com".into()).unwrap();

        assert!(result.has_error());
        assert_eq!(result.messages[0].content, "URL is already bookmarked");
        assert_eq!(store.urls(), &["https://a.com", "https://b.com"]);
    }

    #[test]
    fn stale_position_is_a_no_op() {
        let mut store = seeded_store(&["https://a.com"]);
        let result = run(&mut store, 7, "https://b.com".into()).unwrap();

        assert_eq!(result.messages[0].content, "No bookmark at index 8");
        assert_eq!(store.urls(), &["https://a.com"]);
    }
}
