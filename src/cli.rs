//! # Command-Line Interface Module
//!
//! Defines the MoodTunes command line with Clap derive macros.
//!
//! ## Commands
//!
//! - `library`: Show every song in the catalog
//! - `moods`: List the supported moods and their target attributes
//! - `mood`: Build a playlist for a mood, optionally shuffling, playing or saving it
//! - `completion`: Generate shell completion scripts
//!
//! ## Examples
//!
//! ```bash
//! moodtunes library
//! moodtunes mood happy --shuffle
//! moodtunes mood focused --save "Deep Work"
//! moodtunes --catalog ~/music/catalog.json mood sad
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Main application arguments structure.
#[derive(Parser, Debug)]
#[command(name = "moodtunes")]
#[command(about = "MoodTunes: mood-based playlists from your music library")]
#[command(version)]
pub struct Args {
    /// Song catalog JSON file (defaults to the built-in library)
    #[arg(long, global = true, env = "MOODTUNES_CATALOG", value_hint = clap::ValueHint::FilePath)]
    pub catalog: Option<PathBuf>,

    /// Mood profile JSON file (defaults to the built-in moods)
    #[arg(long, global = true, env = "MOODTUNES_PROFILES", value_hint = clap::ValueHint::FilePath)]
    pub profiles: Option<PathBuf>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Enumeration of all available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the music library
    Library,

    /// List supported moods
    Moods,

    /// Create a playlist for a mood
    ///
    /// Songs are scored against the mood's tempo, energy and valence. Strong
    /// matches come first; weaker ones pad short playlists up to five songs.
    Mood {
        /// Mood to build the playlist for (see `moodtunes moods`)
        #[arg(value_hint = clap::ValueHint::Other)]
        mood: String,

        /// Shuffle the playlist after building it
        #[arg(short, long)]
        shuffle: bool,

        /// Seed for a reproducible shuffle
        #[arg(long, requires = "shuffle")]
        seed: Option<u64>,

        /// Start playing the playlist
        #[arg(short, long)]
        play: bool,

        /// Save the playlist; the name defaults to "<mood> Mix"
        #[arg(long, num_args = 0..=1, value_name = "NAME")]
        save: Option<Option<String>>,
    },

    /// Generate shell completions
    ///
    /// Usage: moodtunes completion bash > ~/.local/share/bash-completion/completions/moodtunes
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },

    /// List mood names for completion (hidden command)
    #[command(hide = true)]
    CompleteMoods,
}
