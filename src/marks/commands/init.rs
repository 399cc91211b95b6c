use crate::commands::{CmdMessage, CmdResult, MarksPaths};
use crate::error::Result;
use crate::model::Scope;
use std::fs;

pub fn run(paths: &MarksPaths, scope: Scope) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    fs::create_dir_all(&dir)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized marks store at {}",
        dir.display()
    )));
    Ok(result)
}
