//! CLI command definitions for the `tubeseo` binary.
//!
//! Uses clap derive macros for argument parsing. Each invocation restores the
//! persisted session, runs one action, and exits.

pub mod generate;
pub mod history;
pub mod render;
pub mod session;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use tubeseo_types::thumbnail::{ThumbnailOptions, ThumbnailStyle};

/// Generate YouTube titles, descriptions, hashtags and thumbnails.
#[derive(Parser)]
#[command(name = "tubeseo", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true, env = "TUBESEO_OTEL")]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate title, description, hashtags, keywords and a pinned comment.
    #[command(alias = "gen")]
    Generate {
        /// What the video is about.
        #[arg(required = true, num_args = 1..)]
        topic: Vec<String>,

        /// Extra instruction appended to the prompt (tone, audience, ...).
        #[arg(short, long)]
        instruction: Option<String>,

        /// Also generate alternative titles.
        #[arg(long)]
        alternatives: bool,

        /// Also generate a thumbnail.
        #[arg(long)]
        thumbnail: bool,

        #[command(flatten)]
        thumbnail_args: ThumbnailArgs,
    },

    /// Suggest scored alternatives to the current title.
    #[command(alias = "alts")]
    Alternatives,

    /// Generate a 16:9 thumbnail for the current topic.
    Thumbnail {
        #[command(flatten)]
        args: ThumbnailArgs,
    },

    /// Show the current topic and generated content.
    Show,

    /// Set the current topic without generating.
    Topic {
        /// New topic text.
        #[arg(required = true, num_args = 1..)]
        topic: Vec<String>,
    },

    /// Clear the current topic and content.
    Clear {
        /// Skip confirmation prompt.
        #[arg(long)]
        force: bool,
    },

    /// Browse and restore previous generations.
    History {
        #[command(subcommand)]
        action: HistoryCommand,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum HistoryCommand {
    /// List saved generations, newest first.
    #[command(alias = "ls")]
    List,

    /// Show one saved generation.
    Show {
        /// History entry id, or its 1-based position in `history list`.
        entry: String,
    },

    /// Restore a saved generation as the current session.
    Select {
        /// History entry id, or its 1-based position in `history list`.
        entry: String,
    },

    /// Delete every saved generation.
    Clear {
        /// Skip confirmation prompt.
        #[arg(long)]
        force: bool,
    },
}

/// Thumbnail options shared by `thumbnail` and `generate --thumbnail`.
#[derive(Args, Debug, Clone, Default)]
pub struct ThumbnailArgs {
    /// Visual style: cinematic, vibrant, minimalist or photorealistic.
    /// Unknown names fall back to cinematic.
    #[arg(long, default_value_t = ThumbnailStyle::Cinematic, value_parser = parse_style)]
    pub style: ThumbnailStyle,

    /// Text to overlay on the image (defaults to the current title).
    #[arg(long, conflicts_with = "no_text")]
    pub text: Option<String>,

    /// Generate the image without any text overlay.
    #[arg(long)]
    pub no_text: bool,

    /// Full custom prompt; replaces style and overlay text.
    #[arg(long, conflicts_with_all = ["style", "text", "no_text"])]
    pub prompt: Option<String>,

    /// Where to write the image (defaults to ./thumbnail.<ext>).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ThumbnailArgs {
    /// Build generation options. `current_title` pre-fills the overlay text.
    pub fn to_options(&self, current_title: Option<&str>) -> ThumbnailOptions {
        let text_overlay = if self.no_text {
            None
        } else {
            self.text
                .clone()
                .or_else(|| current_title.map(str::to_string))
        };
        ThumbnailOptions {
            style: self.style,
            text_overlay,
            custom_prompt: self.prompt.clone(),
        }
    }
}

fn parse_style(s: &str) -> Result<ThumbnailStyle, String> {
    Ok(ThumbnailStyle::parse_lossy(s))
}

/// Join multi-word positional input back into one string.
pub fn join_words(words: &[String]) -> String {
    words.join(" ")
}
