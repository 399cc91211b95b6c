use serde::{Deserialize, Serialize};

/// Where a bookmark list lives: the project-local `.marks/` directory or the
/// user-wide data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}
