//! tubeseo CLI entry point.
//!
//! Binary name: `tubeseo`
//!
//! Parses CLI arguments, sets up tracing, restores the persisted session,
//! then dispatches to the appropriate command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands, HistoryCommand, join_words};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,tubeseo=debug",
        _ => "trace",
    };
    tubeseo_observe::tracing_setup::init_tracing(filter, cli.otel)
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "tubeseo", &mut std::io::stdout());
        return Ok(());
    }

    let result = run(cli).await;
    tubeseo_observe::tracing_setup::shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let state = AppState::init().await?;
    tracing::debug!(data_dir = %state.data_dir.display(), "state initialized");

    match cli.command {
        Commands::Generate {
            topic,
            instruction,
            alternatives,
            thumbnail,
            thumbnail_args,
        } => {
            cli::generate::generate(
                &state,
                &join_words(&topic),
                instruction.as_deref(),
                alternatives,
                thumbnail,
                &thumbnail_args,
                cli.json,
            )
            .await?;
        }

        Commands::Alternatives => {
            cli::generate::alternatives(&state, cli.json).await?;
        }

        Commands::Thumbnail { args } => {
            cli::generate::thumbnail(&state, &args, cli.json).await?;
        }

        Commands::Show => {
            cli::session::show(&state, cli.json).await?;
        }

        Commands::Topic { topic } => {
            cli::session::set_topic(&state, &join_words(&topic), cli.json).await?;
        }

        Commands::Clear { force } => {
            cli::session::clear(&state, force, cli.json).await?;
        }

        Commands::History { action } => match action {
            HistoryCommand::List => cli::history::list(&state, cli.json).await?,
            HistoryCommand::Show { entry } => cli::history::show(&state, &entry, cli.json).await?,
            HistoryCommand::Select { entry } => {
                cli::history::select(&state, &entry, cli.json).await?
            }
            HistoryCommand::Clear { force } => cli::history::clear(&state, force, cli.json).await?,
        },

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
