//! History commands: list, show, select, clear.
//!
//! Entries are addressed either by id or by their 1-based position in
//! `history list` (1 is the newest).

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use dialoguer::Confirm;

use tubeseo_types::content::{HISTORY_CAPACITY, HistoryItem};

use super::render;
use crate::state::AppState;

/// List saved generations, newest first.
pub async fn list(state: &AppState, json: bool) -> Result<()> {
    let items = state.studio.history().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!();
        println!(
            "  {} No history yet. Generate something with: {}",
            style("i").blue().bold(),
            style("tubeseo generate <topic>").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("#").fg(Color::White),
        Cell::new("Topic").fg(Color::White),
        Cell::new("Title").fg(Color::White),
        Cell::new("Created").fg(Color::White),
    ]);

    for (i, item) in items.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1).fg(Color::DarkGrey),
            Cell::new(render::truncate(&item.video_topic, 30)).fg(Color::Cyan),
            Cell::new(render::truncate(&item.content.title, 50)).fg(Color::White),
            Cell::new(render::local_time(item)).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} of {} entries · restore one with: {}",
        style(items.len()).bold(),
        HISTORY_CAPACITY,
        style("tubeseo history select <#>").yellow()
    );
    println!();
    Ok(())
}

/// Show one saved generation in full.
pub async fn show(state: &AppState, entry: &str, json: bool) -> Result<()> {
    let items = state.studio.history().await;
    let item = find_entry(&items, entry)
        .with_context(|| format!("History entry '{entry}' not found"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
        return Ok(());
    }

    println!();
    println!(
        "  {}  {}",
        style("Created:").bold(),
        render::local_time(item)
    );
    println!("  {}  {}", style("ID:").bold(), style(&item.id).dim());
    render::print_content(&item.video_topic, &item.content);
    Ok(())
}

/// Restore a saved generation as the current session.
pub async fn select(state: &AppState, entry: &str, json: bool) -> Result<()> {
    let items = state.studio.history().await;
    let id = find_entry(&items, entry)
        .map(|item| item.id.clone())
        .with_context(|| format!("History entry '{entry}' not found"))?;

    let restored = state.studio.select_history(&id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&restored)?);
        return Ok(());
    }

    println!();
    render::success(&format!(
        "Restored '{}'",
        style(&restored.current_topic).cyan()
    ));
    if let Some(content) = &restored.current_content {
        render::print_content(&restored.current_topic, content);
    }
    Ok(())
}

/// Delete every saved generation, with confirmation.
pub async fn clear(state: &AppState, force: bool, json: bool) -> Result<()> {
    let count = state.studio.history().await.len();

    if !force && !json {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete {} history entr{}?",
                style(count).red().bold(),
                if count == 1 { "y" } else { "ies" }
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    state.studio.clear_history().await;

    if json {
        println!("{}", serde_json::json!({ "cleared": count }));
    } else {
        println!("  {} History cleared.", style("x").red().bold());
    }
    Ok(())
}

/// Look up an entry by 1-based position or by id.
fn find_entry<'a>(items: &'a [HistoryItem], entry: &str) -> Option<&'a HistoryItem> {
    let entry = entry.trim();
    if let Ok(position) = entry.parse::<usize>() {
        return position.checked_sub(1).and_then(|i| items.get(i));
    }
    items.iter().find(|item| item.id == entry)
}
