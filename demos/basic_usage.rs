// Example: Basic usage of the smartnotes-core library
use std::fs;

use smartnotes_core::models::{format_tags, parse_tags};
use smartnotes_core::{sort_for_display, Error, NoteStore, SettingsStore};

fn main() -> anyhow::Result<()> {
    let notes_path = "basic_usage_notes.json";
    let settings_path = "basic_usage_settings.json";
    fs::remove_file(notes_path).ok(); // Clean up previous run
    fs::remove_file(settings_path).ok();

    println!("--- Basic Usage of smartnotes-core ---");

    // ========== Open Stores ==========
    println!("\n1. Opening stores...");
    let mut notes = NoteStore::open(notes_path);
    let mut settings = SettingsStore::open(settings_path);
    println!("   ✓ {} notes, dark theme: {}", notes.len(), settings.dark_theme());

    // ========== Create Notes ==========
    println!("\n2. Creating notes...");
    notes.add("Work Plan", "<p>Ship the release</p>", parse_tags("urgent, work"))?;
    notes.add("Workout", "Run 5k", parse_tags("health"))?;
    notes.add("groceries", "milk, eggs", parse_tags("home, urgent"))?;
    println!("   ✓ Created {} notes", notes.len());

    match notes.add("Workout", "again", vec![]) {
        Err(Error::DuplicateTitle(title)) => println!("   ✓ Rejected duplicate: {}", title),
        other => println!("   ✗ Unexpected result: {:?}", other),
    }

    // ========== Filter ==========
    println!("\n3. Filtering...");
    let mut all = notes.filter("", None);
    sort_for_display(&mut all);
    println!("   All notes: {:?}", all);
    println!("   'wor' tagged urgent: {:?}", notes.filter("wor", Some("urgent")));
    println!("   Tags: {}", format_tags(&notes.all_tags()));

    // ========== Update & Delete ==========
    println!("\n4. Updating and deleting...");
    notes.update("Workout", "Run 10k", parse_tags("health, urgent"));
    println!("   ✓ Workout tags: {}", format_tags(&notes.get("Workout").tags));
    notes.delete("groceries");
    println!("   ✓ Remaining: {:?}", notes.titles());

    // ========== Settings ==========
    println!("\n5. Settings...");
    let dark = settings.toggle_dark_theme();
    println!("   ✓ Dark theme now: {}", dark);

    // ========== Reload ==========
    println!("\n6. Reloading from disk...");
    let reloaded = NoteStore::open(notes_path);
    println!("   ✓ Reloaded titles: {:?}", reloaded.titles());
    println!("   ✓ Dark theme persisted: {}", SettingsStore::open(settings_path).dark_theme());

    fs::remove_file(notes_path).ok();
    fs::remove_file(settings_path).ok();
    Ok(())
}
