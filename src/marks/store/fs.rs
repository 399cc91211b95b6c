use super::DataStore;
use crate::error::{MarksError, Result};
use crate::model::Scope;
use std::fs;
use std::path::{Path, PathBuf};

const DATA_FILENAME: &str = "bookmarks.json";

pub struct FileStore {
    project_root: Option<PathBuf>,
    global_root: PathBuf,
}

impl FileStore {
    pub fn new(project_root: Option<PathBuf>, global_root: PathBuf) -> Self {
        Self {
            project_root,
            global_root,
        }
    }

    fn scope_root(&self, scope: Scope) -> Result<&Path> {
        match scope {
            Scope::Project => self.project_root.as_deref().ok_or_else(|| {
                MarksError::Store("No project scope available".to_string())
            }),
            Scope::Global => Ok(&self.global_root),
        }
    }

    fn ensure_dir(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(MarksError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_urls(&self, scope: Scope) -> Result<Vec<String>> {
        let data_file = self.scope_root(scope)?.join(DATA_FILENAME);

        // Absent, unreadable, or non-conforming content all mean "no
        // bookmarks yet"; a broken data file never takes the listing down.
        let content = match fs::read_to_string(&data_file) {
            Ok(content) => content,
            Err(_) => return Ok(Vec::new()),
        };
        Ok(serde_json::from_str(&content).unwrap_or_default())
    }

    fn save_urls(&mut self, scope: Scope, urls: &[String]) -> Result<()> {
        let root = self.scope_root(scope)?;
        Self::ensure_dir(root)?;

        let content = serde_json::to_string_pretty(urls).map_err(MarksError::Serialization)?;
        fs::write(root.join(DATA_FILENAME), content).map_err(MarksError::Io)?;
        Ok(())
    }
}
