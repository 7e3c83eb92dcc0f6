//! `slot` CLI — rank meeting slots and query free time from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Rank slots for a proposal (stdin → stdout)
//! slot suggest < request.json
//!
//! # From file to file
//! slot suggest -i request.json -o suggestions.json
//!
//! # List free gaps in a window
//! slot free -i window.json
//!
//! # Only the first free gap of at least the requested length
//! slot free --first -i window.json
//!
//! # One participant's own free time, ignoring everyone else's commitments
//! slot free --participant alice -i window.json
//! ```
//!
//! The `suggest` request is `{"proposal": {...}, "busy_intervals": [...]}`;
//! the `free` request is `{"busy_intervals": [...], "window_start": ...,
//! "window_end": ..., "min_duration_minutes": 30}`. Timestamps are RFC 3339.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use slot_engine::{free_slots, participant_free_slots, suggest_times, BusyInterval, ProposalSpec};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "slot", version, about = "Meeting slot suggestion CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank candidate meeting slots for a scheduling request
    Suggest {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// List free gaps between busy intervals within a window
    Free {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Print only the first qualifying free slot
        #[arg(long)]
        first: bool,
        /// Restrict the view to one participant's own commitments
        #[arg(long)]
        participant: Option<String>,
    },
}

/// Wire format for `slot suggest`.
#[derive(Deserialize)]
struct SuggestRequest {
    proposal: ProposalSpec,
    busy_intervals: Vec<BusyInterval>,
}

/// Wire format for `slot free`.
#[derive(Deserialize)]
struct FreeRequest {
    busy_intervals: Vec<BusyInterval>,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    #[serde(default)]
    min_duration_minutes: Option<i64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Suggest { input, output } => {
            let raw = read_input(input.as_deref())?;
            let request: SuggestRequest =
                serde_json::from_str(&raw).context("Failed to parse scheduling request")?;

            let suggestions = suggest_times(&request.proposal, &request.busy_intervals)
                .context("Failed to compute slot suggestions")?;

            let pretty = serde_json::to_string_pretty(&suggestions)?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Free {
            input,
            output,
            first,
            participant,
        } => {
            let raw = read_input(input.as_deref())?;
            let request: FreeRequest =
                serde_json::from_str(&raw).context("Failed to parse free-time request")?;

            let gaps = match participant.as_deref() {
                Some(id) => participant_free_slots(
                    &request.busy_intervals,
                    id,
                    request.window_start,
                    request.window_end,
                ),
                None => free_slots(
                    &request.busy_intervals,
                    request.window_start,
                    request.window_end,
                ),
            };

            let min_duration = request.min_duration_minutes.unwrap_or(0);
            let mut free: Vec<_> = gaps
                .into_iter()
                .filter(|slot| slot.duration_minutes >= min_duration)
                .collect();

            let pretty = if first {
                let first_slot = if free.is_empty() {
                    None
                } else {
                    Some(free.remove(0))
                };
                serde_json::to_string_pretty(&first_slot)?
            } else {
                serde_json::to_string_pretty(&free)?
            };
            write_output(output.as_deref(), &pretty)?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
