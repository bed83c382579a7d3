//! Current-session commands: show, topic, clear.

use anyhow::Result;
use console::style;
use dialoguer::Confirm;

use super::render;
use crate::state::AppState;

/// Show the current topic and content.
pub async fn show(state: &AppState, json: bool) -> Result<()> {
    let session = state.studio.snapshot().await.session;

    if json {
        println!("{}", serde_json::to_string_pretty(&session)?);
        return Ok(());
    }

    match &session.current_content {
        Some(content) => render::print_content(&session.current_topic, content),
        None if session.current_topic.is_empty() => {
            println!();
            println!(
                "  {} Nothing here yet. Start with: {}",
                style("i").blue().bold(),
                style("tubeseo generate <topic>").yellow()
            );
            println!();
        }
        None => {
            println!();
            println!(
                "  {}  {}",
                style("Topic:").bold(),
                style(&session.current_topic).cyan()
            );
            println!(
                "  {}",
                style("No content generated for this topic yet.").dim()
            );
            println!();
        }
    }

    println!(
        "  {}",
        style(format!(
            "{} · {} · {}",
            state.studio.client().provider_name(),
            state.config.provider.text_model,
            state.data_dir.display()
        ))
        .dim()
    );
    Ok(())
}

/// Replace the current topic without generating.
pub async fn set_topic(state: &AppState, topic: &str, json: bool) -> Result<()> {
    state.studio.set_topic(topic).await;

    if json {
        println!("{}", serde_json::json!({ "currentTopic": topic }));
    } else {
        render::success(&format!("Topic set to '{}'", style(topic).cyan()));
    }
    Ok(())
}

/// Clear topic and content, with confirmation.
pub async fn clear(state: &AppState, force: bool, json: bool) -> Result<()> {
    if !force && !json {
        let confirmed = Confirm::new()
            .with_prompt("Clear the current topic and generated content?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("  Cancelled.");
            return Ok(());
        }
    }

    state.studio.clear_all().await;

    if json {
        println!("{}", serde_json::json!({ "cleared": true }));
    } else {
        render::success("Session cleared.");
    }
    Ok(())
}
