use crate::commands::{CmdMessage, CmdResult, ListedBookmark};
use crate::error::{MarksError, Result};
use crate::store::{BookmarkStore, DataStore};
use std::io::{self, Write};

/// Removes the bookmark at `position` (0-based) after confirmation. Later
/// entries shift down by one, so any index held before this call must be
/// re-derived from a fresh listing.
pub fn run<S: DataStore>(
    store: &mut BookmarkStore<S>,
    position: usize,
    skip_confirm: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let url = match store.get(position) {
        Some(url) => url.to_string(),
        None => {
            result.add_message(CmdMessage::warning(format!(
                "No bookmark at index {}",
                position + 1
            )));
            return Ok(result);
        }
    };

    if !skip_confirm {
        println!("Are you sure that you want to remove this bookmark?");
        println!("  {}. {}", position + 1, url);
        print!("[Y] To remove: ");
        io::stdout().flush().map_err(MarksError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(MarksError::Io)?;

        if input.trim() != "Y" {
            result.add_message(CmdMessage::info("Operation cancelled."));
            return Ok(result);
        }
    }

    let removed = store.remove(position)?;
    result.add_message(CmdMessage::success(format!(
        "Bookmark removed: {}",
        removed
    )));
    result.affected.push(ListedBookmark {
        index: position + 1,
        url: removed,
    });
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::seeded_store;

    #[test]
    fn removes_and_shifts_later_entries() {
        let mut store = seeded_store(&["https://a.com", "https://b.com", "https://c.com"]);
        let result = run(&mut store, 0, true).unwrap();

        assert_eq!(result.affected[0].url, "https://a.com");
        assert_eq!(store.urls(), &["https://b.com", "https://c.com"]);
    }

    #[test]
    fn stale_position_is_a_no_op() {
        let mut store = seeded_store(&["https://a.com"]);
        let result = run(&mut store, 4, true).unwrap();

        assert_eq!(result.messages[0].content, "No bookmark at index 5");
        assert_eq!(store.len(), 1);
    }
}
