//! Mood-based playlist matching.
//!
//! Core modules:
//! - [`song`] - Song records and attribute enums
//! - [`mood`] - Mood profiles and the mood table
//! - [`algorithm`] - Match scoring
//! - [`playlist`] - Playlist generation and shuffling
//! - [`session`] - Session state, observers and playlist stores
//!
//! ### Supporting Modules
//!
//! - [`config`] - Catalog and profile loading
//! - [`display`] - Terminal rendering
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//!
//! ## Quick Start Example
//!
//! ```
//! use moodtunes::mood::MoodProfiles;
//! use moodtunes::playlist::{generate_playlist, shuffle};
//! use moodtunes::song::builtin_catalog;
//!
//! let catalog = builtin_catalog();
//! let profiles = MoodProfiles::default();
//!
//! let mut playlist = generate_playlist("happy", &profiles, &catalog);
//! assert_eq!(playlist[0].title, "Happy Days");
//!
//! shuffle(&mut playlist);
//! assert_eq!(playlist.len(), 5);
//! ```
//!
//! ## Matching
//!
//! Each song is scored against the mood profile: tempo and energy are worth
//! 2 points each, valence 3, and an instrumental song earns 3 more when the
//! mood prefers instrumentals. Songs scoring 4 or more make the playlist.
//! Playlists shorter than five songs are padded with songs matching any one
//! of tempo, energy or valence. Finally, songs sharing the mood's valence
//! move to the front, keeping their relative order.
//!
//! Unknown moods produce an empty playlist. [`playlist::match_mood`] reports
//! them separately for callers that need to know.

pub mod algorithm;
pub mod cli;
pub mod completion;
pub mod config;
pub mod display;
pub mod mood;
pub mod playlist;
pub mod session;
pub mod song;
