//! Session state owned by the front end.
//!
//! The catalog and mood table are read-only for the lifetime of a session.
//! The current playlist is replaced wholesale on every mood selection and may
//! be shuffled in place afterwards. Front ends subscribe through
//! [`SessionObserver`]; saving goes through a [`PlaylistStore`].

use crate::algorithm::MatchingContext;
use crate::mood::MoodProfiles;
use crate::playlist::{self, Playlist};
use crate::song::{Catalog, Song};
use anyhow::Result;
use log::{debug, info};
use rand::Rng;

/// Receives session events, typically to re-render.
pub trait SessionObserver {
    fn mood_selected(&mut self, mood: &str, known: bool);

    fn playlist_updated(&mut self, mood: &str, playlist: &[Song]);
}

/// Destination for saved playlists.
pub trait PlaylistStore {
    /// Stores `playlist` under `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the playlist.
    fn save(&mut self, name: &str, mood: &str, playlist: &[Song]) -> Result<()>;
}

/// Placeholder store: acknowledges saves in the log and keeps nothing.
#[derive(Debug, Default)]
pub struct LoggingStore;

impl PlaylistStore for LoggingStore {
    fn save(&mut self, name: &str, mood: &str, playlist: &[Song]) -> Result<()> {
        info!("Saving playlist: {name} ({} songs, mood: {mood})", playlist.len());
        Ok(())
    }
}

/// Outcome of a save request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved { name: String },
    /// Empty name given.
    Cancelled,
}

pub struct Session {
    catalog: Catalog,
    profiles: MoodProfiles,
    context: MatchingContext,
    mood: Option<String>,
    playlist: Playlist,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl Session {
    #[must_use]
    pub fn new(catalog: Catalog, profiles: MoodProfiles) -> Self {
        info!("Music library loaded with {} songs.", catalog.len());
        Self {
            catalog,
            profiles,
            context: MatchingContext::default(),
            mood: None,
            playlist: Vec::new(),
            observers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: MatchingContext) -> Self {
        self.context = context;
        self
    }

    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    #[must_use]
    pub fn catalog(&self) -> &[Song] {
        &self.catalog
    }

    #[must_use]
    pub fn profiles(&self) -> &MoodProfiles {
        &self.profiles
    }

    #[must_use]
    pub fn mood(&self) -> Option<&str> {
        self.mood.as_deref()
    }

    #[must_use]
    pub fn playlist(&self) -> &[Song] {
        &self.playlist
    }

    /// Selects a mood and replaces the current playlist with its matches.
    ///
    /// Returns `false` when the mood has no profile; the playlist is then empty.
    pub fn select_mood(&mut self, mood: &str) -> bool {
        debug!("User selected mood: {mood}");
        let outcome = playlist::match_mood_with(mood, &self.profiles, &self.catalog, &self.context);
        let known = !outcome.is_unknown_mood();

        self.mood = Some(mood.to_string());
        self.playlist = outcome.into_playlist();

        for observer in &mut self.observers {
            observer.mood_selected(mood, known);
        }
        self.notify_playlist();

        known
    }

    /// Shuffles the current playlist in place with the thread RNG.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        playlist::shuffle_with(&mut self.playlist, rng);
        self.notify_playlist();
    }

    /// Message acknowledging playback of the current playlist. No audio is produced.
    #[must_use]
    pub fn play(&self) -> String {
        info!("Playing current playlist");
        format!("Now playing your {} playlist!", self.mood.as_deref().unwrap_or_default())
    }

    /// Name suggested for saving: `"<mood> Mix"`.
    #[must_use]
    pub fn default_save_name(&self) -> String {
        format!("{} Mix", self.mood.as_deref().unwrap_or_default())
    }

    /// Hands the current playlist to `store` under `name`.
    ///
    /// A blank name cancels the save without touching the store.
    ///
    /// # Errors
    ///
    /// Propagates any error from the store.
    pub fn save(&self, name: &str, store: &mut dyn PlaylistStore) -> Result<SaveOutcome> {
        let name = name.trim();
        if name.is_empty() {
            debug!("Save cancelled: empty playlist name");
            return Ok(SaveOutcome::Cancelled);
        }

        store.save(name, self.mood.as_deref().unwrap_or_default(), &self.playlist)?;
        Ok(SaveOutcome::Saved {
            name: name.to_string(),
        })
    }

    fn notify_playlist(&mut self) {
        let mood = self.mood.as_deref().unwrap_or_default();
        for observer in &mut self.observers {
            observer.playlist_updated(mood, &self.playlist);
        }
    }
}
