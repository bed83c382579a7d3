//! Shared terminal rendering: spinner, content blocks and score tables.

use std::path::Path;
use std::time::Duration;

use chrono::Local;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use tubeseo_types::content::{AlternativeTitle, GeneratedContent, HistoryItem, ScoreRating};

/// Spinner shown while a request is in flight.
pub fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

pub fn success(message: &str) {
    println!("  {} {message}", style("✓").green().bold());
}

pub fn failure(label: &str, error: &dyn std::fmt::Display) {
    eprintln!("  {} {label}: {error}", style("✗").red().bold());
}

/// Print every field of generated content.
pub fn print_content(topic: &str, content: &GeneratedContent) {
    println!();
    println!("  {}  {}", style("Topic:").bold(), style(topic).cyan());
    println!();
    println!("  {}", style("Title").bold().underlined());
    println!("  {}", style(&content.title).cyan().bold());
    println!(
        "  {}",
        style(format!("{} characters", content.title.chars().count())).dim()
    );
    println!();
    println!("  {}", style("Description").bold().underlined());
    for line in content.description.lines() {
        println!("  {line}");
    }
    println!();
    println!("  {}", style("Hashtags").bold().underlined());
    println!("  {}", style(content.hashtags.join(" ")).blue());
    println!();
    println!("  {}", style("Keywords").bold().underlined());
    println!("  {}", content.keywords.join(", "));
    println!();
    println!("  {}", style("Pinned comment").bold().underlined());
    for line in content.pinned_comment.lines() {
        println!("  {line}");
    }
    println!();
}

/// Print alternative titles with colored SEO scores.
pub fn print_alternatives(titles: &[AlternativeTitle]) {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("#").fg(Color::White),
        Cell::new("Alternative title").fg(Color::White),
        Cell::new("SEO score").fg(Color::White),
    ]);

    for (i, title) in titles.iter().enumerate() {
        let color = match title.rating() {
            ScoreRating::High => Color::Green,
            ScoreRating::Medium => Color::Yellow,
            ScoreRating::Low => Color::Red,
        };
        table.add_row(vec![
            Cell::new(i + 1).fg(Color::DarkGrey),
            Cell::new(&title.title).fg(Color::Cyan),
            Cell::new(format!("{}/100", title.seo_score)).fg(color),
        ]);
    }

    println!();
    println!("{table}");
    println!();
}

pub fn print_thumbnail_saved(path: &Path, bytes: usize, mime_type: &str) {
    success(&format!(
        "Thumbnail saved to {} ({}, {} KB)",
        style(path.display()).cyan(),
        mime_type,
        bytes.div_ceil(1024)
    ));
}

/// Timestamp of a history entry in local time.
pub fn local_time(item: &HistoryItem) -> String {
    item.created_at()
        .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Shorten `text` to at most `max` characters, ending with `...`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}
