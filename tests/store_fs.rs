use marks::model::Scope;
use marks::store::fs::FileStore;
use marks::store::{BookmarkStore, DataStore};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, TempDir, FileStore) {
    let project_dir = TempDir::new().unwrap();
    let global_dir = TempDir::new().unwrap();
    let store = FileStore::new(
        Some(project_dir.path().to_path_buf()),
        global_dir.path().to_path_buf(),
    );
    (project_dir, global_dir, store)
}

fn urls(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn save_then_load_round_trips() {
    let (_proj, _glob, mut store) = setup();
    let list = urls(&["https://a.com", "https://b.com", "https://a.com/again"]);

    store.save_urls(Scope::Project, &list).unwrap();
    assert_eq!(store.load_urls(Scope::Project).unwrap(), list);
}

#[test]
fn absent_file_loads_as_empty() {
    let (_proj, _glob, store) = setup();
    assert!(store.load_urls(Scope::Project).unwrap().is_empty());
}

#[test]
fn malformed_content_loads_as_empty() {
    let (proj, _glob, store) = setup();
    fs::write(proj.path().join("bookmarks.json"), "not json at all").unwrap();
    assert!(store.load_urls(Scope::Project).unwrap().is_empty());
}

#[test]
fn mistyped_content_loads_as_empty() {
    let (proj, _glob, store) = setup();

    fs::write(proj.path().join("bookmarks.json"), "[1, 2, 3]").unwrap();
    assert!(store.load_urls(Scope::Project).unwrap().is_empty());

    fs::write(proj.path().join("bookmarks.json"), r#"{"a": 1}"#).unwrap();
    assert!(store.load_urls(Scope::Project).unwrap().is_empty());
}

#[test]
fn save_writes_a_json_string_array() {
    let (proj, _glob, mut store) = setup();
    store
        .save_urls(Scope::Project, &urls(&["https://a.com"]))
        .unwrap();

    let on_disk = fs::read_to_string(proj.path().join("bookmarks.json")).unwrap();
    let parsed: Vec<String> = serde_json::from_str(&on_disk).unwrap();
    assert_eq!(parsed, urls(&["https://a.com"]));
}

#[test]
fn scopes_do_not_share_data() {
    let (_proj, _glob, mut store) = setup();
    store
        .save_urls(Scope::Project, &urls(&["https://a.com"]))
        .unwrap();

    assert!(store.load_urls(Scope::Global).unwrap().is_empty());
}

#[test]
fn missing_project_root_is_a_store_error() {
    let global_dir = TempDir::new().unwrap();
    let mut store = FileStore::new(None, global_dir.path().to_path_buf());

    assert!(store.load_urls(Scope::Project).is_err());
    assert!(store
        .save_urls(Scope::Project, &urls(&["https://a.com"]))
        .is_err());
}

#[test]
fn bookmark_store_state_survives_reopening() {
    let (proj, glob, backend) = setup();

    let mut store = BookmarkStore::open(backend, Scope::Project).unwrap();
    store.add("https://a.com".to_string()).unwrap();
    store.add("https://b.com".to_string()).unwrap();
    store.remove(0).unwrap();

    let backend = FileStore::new(
        Some(proj.path().to_path_buf()),
        glob.path().to_path_buf(),
    );
    let reopened = BookmarkStore::open(backend, Scope::Project).unwrap();
    assert_eq!(reopened.urls(), &["https://b.com"]);
}
