use crate::error::{MarksError, Result};
use std::env;
use std::process::Command;

#[cfg(target_os = "macos")]
const SYSTEM_OPENER: (&str, &[&str]) = ("open", &[]);

#[cfg(target_os = "windows")]
const SYSTEM_OPENER: (&str, &[&str]) = ("cmd", &["/C", "start", ""]);

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const SYSTEM_OPENER: (&str, &[&str]) = ("xdg-open", &[]);

/// Opens a URL in the user's browser: the configured command first, then
/// $BROWSER, then the platform opener.
pub fn open_url(url: &str, configured: Option<&str>) -> Result<()> {
    let chosen = configured
        .map(str::to_string)
        .or_else(|| env::var("BROWSER").ok());

    match chosen {
        Some(program) => launch(&program, &[], url),
        None => {
            let (program, args) = SYSTEM_OPENER;
            launch(program, args, url)
        }
    }
}

fn launch(program: &str, args: &[&str], url: &str) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .arg(url)
        .status()
        .map_err(|e| MarksError::Api(format!("Failed to launch {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(MarksError::Api(format!("{} exited with error", program)))
    }
}
