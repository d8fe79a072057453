//! Chat-input replay harness
//!
//! Drives a [`ChatInput`] from a scripted list of events and prints the
//! state the rendering layer would see after each one.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::fs;

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use serde::Serialize;
use tracing::{info, warn};

use chat_input_state::ChatInput;
use chat_input_state::config::{AppConfig, Cli};
use chat_input_state::events::{EventOutcome, InputEvent};
use chat_input_state::telemetry;

#[derive(Serialize)]
struct Step<'a> {
    step: usize,
    event: &'a InputEvent,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<EventOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    state: chat_input_state::ChatInputSnapshot,
}

fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    let cli = Cli::parse();
    let config = AppConfig::load_from_cli(&cli).context("failed to load configuration")?;
    telemetry::init(&config.logging);

    info!(
        name: "replay.config.loaded",
        max_files = config.attachments.max_files,
        max_file_size = config.drag_drop.max_file_size,
        "Configuration loaded"
    );

    let events: Vec<InputEvent> = match &cli.script {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read script {}", path.display()))?;
            serde_yaml::from_str(&raw)
                .with_context(|| format!("failed to parse script {}", path.display()))?
        }
        None => Vec::new(),
    };

    let mut input = ChatInput::new(config.options());
    println!("{}", serde_json::to_string(&input.snapshot())?);

    for (index, event) in events.iter().enumerate() {
        let (outcome, error) = match input.apply(event.clone()) {
            Ok(outcome) => (Some(outcome), None),
            Err(err) => {
                warn!(name: "replay.event.rejected", step = index + 1, code = err.code(), error = %err, "Event rejected");
                (None, Some(err.to_string()))
            }
        };

        let step = Step {
            step: index + 1,
            event,
            outcome,
            error,
            state: input.snapshot(),
        };
        println!("{}", serde_json::to_string(&step)?);
    }

    info!(name: "replay.finished", steps = events.len(), "Replay finished");
    Ok(())
}
