//! Mood profiles: the target attributes each mood maps to.

use crate::song::{Energy, Tempo, Valence};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Target attribute values for one mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodProfile {
    pub tempo: Tempo,
    pub energy: Energy,
    pub valence: Valence,
    /// Prefer instrumental songs.
    #[serde(default)]
    pub instrumental: bool,
}

impl MoodProfile {
    #[must_use]
    pub const fn new(tempo: Tempo, energy: Energy, valence: Valence) -> Self {
        Self {
            tempo,
            energy,
            valence,
            instrumental: false,
        }
    }

    #[must_use]
    pub const fn preferring_instrumental(mut self) -> Self {
        self.instrumental = true;
        self
    }
}

/// Mapping from mood key to profile.
///
/// Keys are matched exactly. Iteration is in key order so listings are stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoodProfiles {
    profiles: BTreeMap<String, MoodProfile>,
}

impl MoodProfiles {
    /// An empty table.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            profiles: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn get(&self, mood: &str) -> Option<&MoodProfile> {
        self.profiles.get(mood)
    }

    #[must_use]
    pub fn contains(&self, mood: &str) -> bool {
        self.profiles.contains_key(mood)
    }

    /// Adds or replaces a mood, returning the previous profile if any.
    pub fn insert(&mut self, mood: impl Into<String>, profile: MoodProfile) -> Option<MoodProfile> {
        self.profiles.insert(mood.into(), profile)
    }

    pub fn moods(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MoodProfile)> {
        self.profiles.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// The five built-in moods: happy, sad, focused, energetic, relaxed.
impl Default for MoodProfiles {
    fn default() -> Self {
        let mut table = Self::empty();
        table.insert("happy", MoodProfile::new(Tempo::Upbeat, Energy::High, Valence::Positive));
        table.insert("sad", MoodProfile::new(Tempo::Slow, Energy::Low, Valence::Negative));
        table.insert(
            "focused",
            MoodProfile::new(Tempo::Medium, Energy::Medium, Valence::Neutral).preferring_instrumental(),
        );
        table.insert("energetic", MoodProfile::new(Tempo::Fast, Energy::High, Valence::Positive));
        table.insert("relaxed", MoodProfile::new(Tempo::Slow, Energy::Low, Valence::Positive));
        table
    }
}
