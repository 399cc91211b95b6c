use crate::commands::{CmdMessage, CmdResult, ListedBookmark};
use crate::error::Result;
use crate::pagination::{page_slice, paginate};
use crate::store::{BookmarkStore, DataStore};

pub fn run<S: DataStore>(store: &BookmarkStore<S>, page: usize) -> Result<CmdResult> {
    let view = paginate(store.len(), page);

    if store.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("No bookmarks yet. Go add some!"));
        return Ok(result);
    }

    let listed = page_slice(store.urls(), &view)
        .iter()
        .enumerate()
        .map(|(offset, url)| ListedBookmark {
            index: view.start + offset + 1,
            url: url.clone(),
        })
        .collect();

    Ok(CmdResult::default().with_listed(listed).with_page(view))
}
