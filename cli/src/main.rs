mod config;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use smartnotes_core::models::{format_tags, normalize_title, parse_tags};
use smartnotes_core::storage::DARK_THEME;
use smartnotes_core::{sort_for_display, NoteStore, SettingsStore};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::load_config;

#[derive(Parser, Debug)]
#[command(name = "smartnotes", version, about = "Tagged notes kept in a JSON file")]
struct Cli {
    /// Path to the TOML config file
    #[arg(long, default_value = "smartnotes.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List note titles, optionally filtered by title text and tag
    List {
        #[arg(short, long, default_value = "")]
        query: String,
        #[arg(short, long)]
        tag: Option<String>,
    },
    /// Print a note's content and tags
    Show { title: String },
    /// Create a new note
    Add {
        title: String,
        #[arg(short, long, default_value = "")]
        content: String,
        /// Comma-separated tags, e.g. "work, ideas"
        #[arg(short, long, default_value = "")]
        tags: String,
    },
    /// Replace a note's content and tags
    Update {
        title: String,
        #[arg(short, long)]
        content: String,
        /// Comma-separated tags; the current tags are kept when omitted
        #[arg(short, long)]
        tags: Option<String>,
    },
    /// Delete a note
    Delete { title: String },
    /// List every tag in use
    Tags,
    /// Show or change the theme preference
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },
    /// Copy the notes file somewhere else
    Backup { dest: PathBuf },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ThemeAction {
    Show,
    Toggle,
    Dark,
    Light,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = load_config(&cli.config)?;
    let mut notes = NoteStore::open(&config.notes_file);
    let mut settings = SettingsStore::open(&config.settings_file);

    let stdout = io::stdout();
    run(cli.command, &mut notes, &mut settings, &mut stdout.lock())
}

fn run<W: Write>(
    command: Command,
    notes: &mut NoteStore,
    settings: &mut SettingsStore,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::List { query, tag } => {
            let mut titles = notes.filter(&query, tag.as_deref());
            sort_for_display(&mut titles);
            for title in &titles {
                writeln!(out, "{}", title)?;
            }
            let tags = notes.tags_of(&titles);
            if !tags.is_empty() {
                writeln!(out, "\ntags: {}", format_tags(&tags))?;
            }
        }
        Command::Show { title } => {
            let note = notes.get(&title);
            writeln!(out, "# {}", title)?;
            writeln!(out, "tags: {}", format_tags(&note.tags))?;
            writeln!(out)?;
            writeln!(out, "{}", note.content)?;
        }
        Command::Add { title, content, tags } => {
            let title = normalize_title(&title)?;
            notes.add(&title, &content, parse_tags(&tags))?;
            writeln!(out, "Created note: {}", title)?;
        }
        Command::Update { title, content, tags } => {
            let tags = match tags {
                Some(tags) => parse_tags(&tags),
                None => notes.get(&title).tags,
            };
            if notes.update(&title, &content, tags) {
                writeln!(out, "Saved note: {}", title)?;
            } else {
                writeln!(out, "No note named '{}'", title)?;
            }
        }
        Command::Delete { title } => {
            if notes.delete(&title) {
                writeln!(out, "Deleted note: {}", title)?;
            } else {
                writeln!(out, "No note named '{}'", title)?;
            }
        }
        Command::Tags => {
            for tag in notes.all_tags() {
                writeln!(out, "{}", tag)?;
            }
        }
        Command::Theme { action } => {
            let dark = match action {
                ThemeAction::Show => settings.dark_theme(),
                ThemeAction::Toggle => settings.toggle_dark_theme(),
                ThemeAction::Dark => {
                    settings.set(DARK_THEME, true);
                    true
                }
                ThemeAction::Light => {
                    settings.set(DARK_THEME, false);
                    false
                }
            };
            writeln!(out, "theme: {}", if dark { "dark" } else { "light" })?;
        }
        Command::Backup { dest } => {
            notes.backup(&dest)?;
            writeln!(out, "Backed up {} to {}", notes.path().display(), dest.display())?;
        }
    }

    Ok(())
}
