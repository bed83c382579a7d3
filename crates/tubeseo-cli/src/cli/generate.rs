//! Generation commands: primary content, alternative titles, thumbnails.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use console::style;
use serde_json::{Value, json};

use tubeseo_core::generation::client::MISSING_TOPIC_MESSAGE;
use tubeseo_infra::filesystem::{default_thumbnail_path, save_thumbnail};
use tubeseo_types::content::AlternativeTitle;
use tubeseo_types::error::GenerationError;
use tubeseo_types::thumbnail::ThumbnailImage;

use super::ThumbnailArgs;
use super::render;
use crate::state::AppState;

/// Generate primary content, optionally followed by alternatives and a
/// thumbnail running concurrently.
///
/// # Examples
///
/// ```bash
/// tubeseo generate how to brew pour-over coffee
/// tubeseo generate "home espresso" --instruction "friendly tone" --alternatives --thumbnail
/// ```
pub async fn generate(
    state: &AppState,
    topic: &str,
    instruction: Option<&str>,
    with_alternatives: bool,
    with_thumbnail: bool,
    thumbnail_args: &ThumbnailArgs,
    json: bool,
) -> Result<()> {
    if topic.trim().is_empty() {
        bail!(GenerationError::InvalidInput(
            MISSING_TOPIC_MESSAGE.to_string()
        ));
    }
    state.require_api_key()?;

    let spinner = render::spinner("Generating content...");
    let outcome = state.studio.generate(topic, instruction).await;
    spinner.finish_and_clear();
    let content = outcome?;

    let spinner = (with_alternatives || with_thumbnail).then(|| {
        render::spinner(match (with_alternatives, with_thumbnail) {
            (true, true) => "Generating alternative titles and thumbnail...",
            (true, false) => "Generating alternative titles...",
            _ => "Generating thumbnail...",
        })
    });
    let options = thumbnail_args.to_options(Some(&content.title));
    let (alternatives, thumbnail) = tokio::join!(
        async {
            if with_alternatives {
                Some(state.studio.generate_alternatives().await)
            } else {
                None
            }
        },
        async {
            if with_thumbnail {
                Some(state.studio.generate_thumbnail(options).await)
            } else {
                None
            }
        },
    );
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let saved = match thumbnail {
        Some(Ok(image)) => Some(write_thumbnail(&image, thumbnail_args.output.clone()).await),
        Some(Err(e)) => Some(Err(anyhow::Error::new(e))),
        None => None,
    };

    let mut failures = 0;

    if json {
        let mut output = json!({
            "topic": topic,
            "content": content,
        });
        if let Some(result) = &alternatives {
            output["alternatives"] = match result {
                Ok(titles) => json!(titles),
                Err(e) => error_json(e),
            };
        }
        if let Some(result) = &saved {
            output["thumbnail"] = match result {
                Ok(saved) => saved.to_json(),
                Err(e) => json!({ "error": format!("{e:#}") }),
            };
        }
        println!("{}", serde_json::to_string_pretty(&output)?);
        failures += alternatives.as_ref().is_some_and(Result::is_err) as usize;
        failures += saved.as_ref().is_some_and(Result::is_err) as usize;
    } else {
        render::print_content(topic, &content);

        match &alternatives {
            Some(Ok(titles)) => {
                println!("  {}", style("Alternative titles").bold().underlined());
                render::print_alternatives(titles);
            }
            Some(Err(e)) => {
                render::failure("Alternative titles", e);
                failures += 1;
            }
            None => {}
        }

        match &saved {
            Some(Ok(saved)) => saved.print(),
            Some(Err(e)) => {
                render::failure("Thumbnail", &format!("{e:#}"));
                failures += 1;
            }
            None => {}
        }

        println!(
            "  {}",
            style("Saved to history. Browse with: tubeseo history list").dim()
        );
        println!();
    }

    if failures > 0 {
        bail!("{failures} follow-up generation(s) failed");
    }
    Ok(())
}

/// Suggest scored alternatives to the current title.
pub async fn alternatives(state: &AppState, json: bool) -> Result<()> {
    state.require_api_key()?;

    let spinner = render::spinner("Generating alternative titles...");
    let outcome = state.studio.generate_alternatives().await;
    spinner.finish_and_clear();
    let titles: Vec<AlternativeTitle> = outcome?;

    if json {
        println!("{}", serde_json::to_string_pretty(&titles)?);
        return Ok(());
    }

    if let Some(content) = state.studio.snapshot().await.session.current_content {
        println!();
        println!(
            "  {}  {}",
            style("Current title:").bold(),
            style(&content.title).cyan()
        );
    }
    render::print_alternatives(&titles);
    Ok(())
}

/// Generate a thumbnail for the current topic and write it to disk.
///
/// # Examples
///
/// ```bash
/// tubeseo thumbnail --style vibrant --text "TOP 10"
/// tubeseo thumbnail --prompt "a steaming cup of coffee at sunrise" -o cover.png
/// ```
pub async fn thumbnail(state: &AppState, args: &ThumbnailArgs, json: bool) -> Result<()> {
    state.require_api_key()?;

    let session = state.studio.snapshot().await.session;
    let current_title = session.current_content.as_ref().map(|c| c.title.as_str());
    let options = args.to_options(current_title);

    let spinner = render::spinner("Generating thumbnail...");
    let outcome = state.studio.generate_thumbnail(options).await;
    spinner.finish_and_clear();
    let image = outcome?;

    let saved = write_thumbnail(&image, args.output.clone()).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&saved.to_json())?);
    } else {
        println!();
        saved.print();
        println!();
    }
    Ok(())
}

struct SavedThumbnail {
    path: PathBuf,
    bytes: usize,
    mime_type: String,
}

impl SavedThumbnail {
    fn to_json(&self) -> Value {
        json!({
            "path": self.path.display().to_string(),
            "bytes": self.bytes,
            "mimeType": self.mime_type,
        })
    }

    fn print(&self) {
        render::print_thumbnail_saved(&self.path, self.bytes, &self.mime_type);
    }
}

async fn write_thumbnail(image: &ThumbnailImage, output: Option<PathBuf>) -> Result<SavedThumbnail> {
    let path = output.unwrap_or_else(|| default_thumbnail_path(image));
    let bytes = save_thumbnail(&path, image)
        .await
        .with_context(|| format!("Failed to write thumbnail to {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes, "thumbnail written");
    Ok(SavedThumbnail {
        path,
        bytes,
        mime_type: image.mime_type.clone(),
    })
}

fn error_json(error: &GenerationError) -> Value {
    json!({ "error": error.to_string() })
}
