use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use marks::api::{CmdMessage, CmdResult, ConfigAction, MarksApi, MarksPaths, MessageLevel};
use marks::browser;
use marks::clipboard;
use marks::error::Result;
use marks::model::Scope;
use marks::pagination::parse_page;
use marks::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = init_api(&cli)?;

    match cli.command {
        Some(Commands::Add { url }) => handle_add(&mut api, url),
        Some(Commands::List { page }) => handle_list(&api, page),
        Some(Commands::Edit { index, url }) => handle_edit(&mut api, index, url),
        Some(Commands::Remove { index, yes }) => handle_remove(&mut api, index, yes),
        Some(Commands::Copy { index }) => handle_copy(&api, index),
        Some(Commands::Open { index }) => handle_open(&api, index),
        Some(Commands::Config { key, value }) => handle_config(&api, key, value),
        Some(Commands::Init) => handle_init(&api),
        None => handle_list(&api, None),
    }
}

fn init_api(cli: &Cli) -> Result<MarksApi<FileStore>> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project_marks_dir = cwd.join(".marks");

    let proj_dirs =
        ProjectDirs::from("com", "marks", "marks").expect("Could not determine data dir");
    let global_data_dir = proj_dirs.data_dir().to_path_buf();

    let scope = if cli.global {
        Scope::Global
    } else {
        Scope::Project
    };

    let store = FileStore::new(Some(project_marks_dir.clone()), global_data_dir.clone());
    let paths = MarksPaths {
        project: Some(project_marks_dir),
        global: global_data_dir,
    };
    MarksApi::open(store, scope, paths)
}

fn handle_add(api: &mut MarksApi<FileStore>, url: String) -> Result<()> {
    let result = api.add_bookmark(url)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &MarksApi<FileStore>, page: Option<String>) -> Result<()> {
    let result = api.list_bookmarks(parse_page(page.as_deref()))?;
    print_listing(&result);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(api: &mut MarksApi<FileStore>, index: usize, url: String) -> Result<()> {
    let result = api.edit_bookmark(index, url)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(api: &mut MarksApi<FileStore>, index: usize, yes: bool) -> Result<()> {
    let result = api.remove_bookmark(index, yes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_copy(api: &MarksApi<FileStore>, index: usize) -> Result<()> {
    let url = api.bookmark_at(index)?;
    clipboard::copy_url(&url)?;
    println!("{}", format!("Copied to clipboard: {}", url).green());
    Ok(())
}

fn handle_open(api: &MarksApi<FileStore>, index: usize) -> Result<()> {
    let url = api.bookmark_at(index)?;
    let config = api.load_config()?;
    browser::open_url(&url, config.browser.as_deref())?;
    println!("{}", format!("Opened: {}", url).green());
    Ok(())
}

fn handle_config(
    api: &MarksApi<FileStore>,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api.config(action)?;
    if let Some(config) = &result.config {
        println!(
            "browser = {}",
            config.get("browser").unwrap_or_default()
        );
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(api: &MarksApi<FileStore>) -> Result<()> {
    let result = api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;

fn print_listing(result: &CmdResult) {
    for entry in &result.listed {
        let idx_str = format!("{}. ", entry.index);
        let available = LINE_WIDTH.saturating_sub(4 + idx_str.width());
        println!("    {}{}", idx_str, truncate_to_width(&entry.url, available));
    }

    // An empty store prints its own message and no footer; an out-of-range
    // page still gets the footer around an empty, unlabeled view.
    let view = match &result.page {
        Some(view) => view,
        None => return,
    };

    println!();
    println!(
        "    {}",
        format!("Showing {} - {}", view.start, view.end).dimmed()
    );

    let mut footer = format!("Page {} of {}", view.effective_page, view.page_count);
    if view.has_previous() {
        footer.push_str("  ‹ prev");
    }
    if view.has_next() {
        footer.push_str("  next ›");
    }
    println!("    {}", footer.dimmed());
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
