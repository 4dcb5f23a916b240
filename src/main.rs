//! # MoodTunes
//!
//! Builds playlists from a music library to match how you feel.
//!
//! ## Usage
//!
//! ```bash
//! # Show the library
//! moodtunes library
//!
//! # Build, shuffle and save a playlist
//! moodtunes mood relaxed --shuffle --save "Evening"
//!
//! # Use your own songs and moods
//! moodtunes --catalog songs.json --profiles moods.json mood focused
//! ```

use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::{debug, info};
use moodtunes::cli;
use moodtunes::completion;
use moodtunes::config::RuntimeConfig;
use moodtunes::display::{self, TerminalRenderer};
use moodtunes::session::{LoggingStore, SaveOutcome, Session};
use std::path::PathBuf;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Main entry point for the MoodTunes application.
///
/// # Logging
///
/// Controlled via `RUST_LOG`:
/// - `RUST_LOG=debug moodtunes mood happy` - Enable debug logging
/// - `RUST_LOG=moodtunes::algorithm=trace moodtunes mood sad` - Per-song scores
fn main() -> Result<()> {
    env_logger::init();

    let cli::Args { catalog, profiles, command } = cli::Args::parse();

    match command {
        cli::Command::Library => {
            let config = load_config(catalog, profiles)?;
            print!("{}", display::render_library(&config.load_catalog()?));
        }
        cli::Command::Moods => {
            let config = load_config(catalog, profiles)?;
            print!("{}", display::render_moods(&config.load_profiles()?));
        }
        cli::Command::CompleteMoods => {
            let config = load_config(catalog, profiles)?;
            completion::print_mood_completions(&config.load_profiles()?);
        }
        cli::Command::Completion { shell } => {
            let mut cmd = cli::Args::command();
            completion::generate_completions(completion::shell_to_completion_shell(&shell), &mut cmd);
        }
        cli::Command::Mood { mood, shuffle, seed, play, save } => {
            let config = load_config(catalog, profiles)?;
            let mut session = Session::new(config.load_catalog()?, config.load_profiles()?);
            session.subscribe(Box::new(TerminalRenderer));

            if !session.select_mood(&mood) {
                return Ok(());
            }

            if shuffle {
                println!();
                match seed {
                    Some(seed) => session.shuffle_with(&mut StdRng::seed_from_u64(seed)),
                    None => session.shuffle(),
                }
            }

            if play {
                println!("{}", session.play());
            }

            if let Some(name) = save {
                let name = name.unwrap_or_else(|| session.default_save_name());
                match session.save(&name, &mut LoggingStore)? {
                    SaveOutcome::Saved { name } => println!("Playlist '{name}' saved successfully!"),
                    SaveOutcome::Cancelled => info!("Save cancelled"),
                }
            }
        }
    }

    Ok(())
}

fn load_config(catalog: Option<PathBuf>, profiles: Option<PathBuf>) -> Result<RuntimeConfig> {
    let config = RuntimeConfig::resolve(catalog, profiles)?;
    debug!("Runtime configuration: {config:?}");
    Ok(config)
}
