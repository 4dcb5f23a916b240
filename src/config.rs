//! # Configuration Module
//!
//! Locates and loads the song catalog and mood table.
//!
//! Both default to built-in data. Users can override them with JSON files,
//! either passed explicitly (`--catalog`, `--profiles`) or dropped into the
//! platform config directory:
//! - Linux: `~/.config/moodtunes/`
//! - macOS: `~/Library/Application Support/moodtunes/`
//! - Windows: `%APPDATA%\moodtunes\`
//!
//! ## File Formats
//!
//! `catalog.json` is an array of songs:
//!
//! ```json
//! [{ "id": 1, "title": "Happy Days", "artist": "Sunshine Band", "tempo": "upbeat",
//!    "energy": "high", "valence": "positive", "genre": "pop", "duration": 180 }]
//! ```
//!
//! `profiles.json` maps mood keys to profiles:
//!
//! ```json
//! { "focused": { "tempo": "medium", "energy": "medium", "valence": "neutral", "instrumental": true } }
//! ```

use crate::mood::MoodProfiles;
use crate::song::{builtin_catalog, Catalog};
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const CATALOG_FILE: &str = "catalog.json";
pub const PROFILES_FILE: &str = "profiles.json";

/// Returns the platform config directory for MoodTunes.
///
/// The directory is not created; missing files simply mean built-in data.
///
/// # Errors
///
/// Returns an error if the system config directory cannot be determined.
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!(
            "Could not determine system config directory. Please ensure your platform supports standard config directories."
        ))?;

    Ok(config_dir.join("moodtunes"))
}

/// Where catalog and profile data come from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Catalog JSON file; built-in catalog when `None`.
    pub catalog_path: Option<PathBuf>,
    /// Mood profile JSON file; built-in moods when `None`.
    pub profiles_path: Option<PathBuf>,
}

impl RuntimeConfig {
    /// Uses the explicit paths when given, otherwise any files present in
    /// the config directory.
    ///
    /// # Errors
    ///
    /// Returns an error if a fallback is needed and the config directory cannot be determined.
    pub fn resolve(catalog: Option<PathBuf>, profiles: Option<PathBuf>) -> Result<Self> {
        if catalog.is_some() && profiles.is_some() {
            return Ok(Self::with_paths(catalog, profiles));
        }

        let config_dir = get_config_dir()?;
        Ok(Self::resolve_in(&config_dir, catalog, profiles))
    }

    /// Like [`RuntimeConfig::resolve`] against a specific directory.
    #[must_use]
    pub fn resolve_in(config_dir: &Path, catalog: Option<PathBuf>, profiles: Option<PathBuf>) -> Self {
        let existing = |name: &str| {
            let candidate = config_dir.join(name);
            candidate.is_file().then_some(candidate)
        };

        Self {
            catalog_path: catalog.or_else(|| existing(CATALOG_FILE)),
            profiles_path: profiles.or_else(|| existing(PROFILES_FILE)),
        }
    }

    #[must_use]
    pub fn with_paths(catalog_path: Option<PathBuf>, profiles_path: Option<PathBuf>) -> Self {
        Self {
            catalog_path,
            profiles_path,
        }
    }

    /// Loads the configured catalog, or the built-in one.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured file cannot be read or parsed.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => load_catalog(path),
            None => {
                debug!("No catalog file configured, using built-in library");
                Ok(builtin_catalog())
            }
        }
    }

    /// Loads the configured mood table, or the built-in one.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured file cannot be read or parsed.
    pub fn load_profiles(&self) -> Result<MoodProfiles> {
        match &self.profiles_path {
            Some(path) => load_profiles(path),
            None => {
                debug!("No profiles file configured, using built-in moods");
                Ok(MoodProfiles::default())
            }
        }
    }
}

/// Reads a catalog JSON file.
///
/// # Errors
///
/// Returns an error if the file is unreadable, malformed, or repeats a song id.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
    let catalog: Catalog = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid catalog JSON in {}", path.display()))?;

    let mut ids = HashSet::with_capacity(catalog.len());
    if let Some(dup) = catalog.iter().find(|song| !ids.insert(song.id)) {
        anyhow::bail!("Duplicate song id {} in catalog {}", dup.id, path.display());
    }

    info!("Loaded {} songs from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Reads a mood profile JSON file.
///
/// # Errors
///
/// Returns an error if the file is unreadable or malformed.
pub fn load_profiles(path: &Path) -> Result<MoodProfiles> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profiles file {}", path.display()))?;
    let profiles: MoodProfiles = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid mood profile JSON in {}", path.display()))?;

    info!("Loaded {} moods from {}", profiles.len(), path.display());
    Ok(profiles)
}
