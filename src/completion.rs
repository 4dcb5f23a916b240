//! # Shell Completion Module
//!
//! Static completion scripts come from clap_complete. Mood names are dynamic
//! (users may supply their own profile file) and are printed by the hidden
//! `complete-moods` command.
//!
//! ## Usage
//!
//! ```bash
//! moodtunes completion bash > ~/.local/share/bash-completion/completions/moodtunes
//! moodtunes completion zsh > ~/.config/zsh/completions/_moodtunes
//! ```

use crate::cli::Shell;
use crate::mood::MoodProfiles;
use clap::Command;
use clap_complete::{generate, Generator, Shell as CompletionShell};
use std::io;

/// Generate shell completions for the given shell
pub fn generate_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

/// Convert our Shell enum to clap_complete's Shell enum
#[must_use]
pub fn shell_to_completion_shell(shell: &Shell) -> CompletionShell {
    match shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    }
}

/// Mood names in table order, quoted when they contain whitespace.
#[must_use]
pub fn mood_completions(profiles: &MoodProfiles) -> Vec<String> {
    profiles
        .moods()
        .map(|mood| {
            if mood.contains(char::is_whitespace) {
                format!("\"{}\"", mood.replace('"', "\\\""))
            } else {
                mood.to_string()
            }
        })
        .collect()
}

/// Print available mood names, one per line
pub fn print_mood_completions(profiles: &MoodProfiles) {
    for mood in mood_completions(profiles) {
        println!("{mood}");
    }
}
