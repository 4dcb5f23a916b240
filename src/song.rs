//! Song records and the attribute enums the matcher compares.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Perceived speed of a song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tempo {
    Slow,
    Medium,
    Upbeat,
    Fast,
}

/// How intense a song feels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Energy {
    Low,
    Medium,
    High,
}

/// Emotional tone of a song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Valence {
    Negative,
    Neutral,
    Positive,
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Slow => "slow",
            Self::Medium => "medium",
            Self::Upbeat => "upbeat",
            Self::Fast => "fast",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Energy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Valence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Positive => "positive",
        };
        f.write_str(name)
    }
}

/// A catalogued song.
///
/// Identity is `id`; the catalog source guarantees uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: u32,
    pub title: String,
    pub artist: String,
    pub tempo: Tempo,
    pub energy: Energy,
    pub valence: Valence,
    pub genre: String,
    /// Length in seconds.
    pub duration: u32,
    /// Absent in catalog files means `false`.
    #[serde(default)]
    pub instrumental: bool,
}

impl Song {
    /// Duration as `M:SS`.
    #[must_use]
    pub fn formatted_duration(&self) -> String {
        format_duration(self.duration)
    }
}

/// Formats seconds as `M:SS`, minutes unpadded.
#[must_use]
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Ordered list of songs; insertion order is preserved and meaningful.
pub type Catalog = Vec<Song>;

#[allow(clippy::too_many_arguments)]
fn song(
    id: u32,
    title: &str,
    artist: &str,
    tempo: Tempo,
    energy: Energy,
    valence: Valence,
    genre: &str,
    duration: u32,
    instrumental: bool,
) -> Song {
    Song {
        id,
        title: title.to_string(),
        artist: artist.to_string(),
        tempo,
        energy,
        valence,
        genre: genre.to_string(),
        duration,
        instrumental,
    }
}

/// The built-in sample library used when no catalog file is configured.
#[must_use]
pub fn builtin_catalog() -> Catalog {
    use Energy as E;
    use Tempo as T;
    use Valence as V;

    vec![
        song(1, "Happy Days", "Sunshine Band", T::Upbeat, E::High, V::Positive, "pop", 180, false),
        song(2, "Blue Monday", "Melancholy Group", T::Slow, E::Low, V::Negative, "indie", 210, false),
        song(3, "Study Session", "Focus Ensemble", T::Medium, E::Medium, V::Neutral, "instrumental", 195, true),
        song(4, "Energy Boost", "Power Trio", T::Fast, E::High, V::Positive, "rock", 165, false),
        song(5, "Ocean Waves", "Calm Collective", T::Slow, E::Low, V::Positive, "ambient", 240, false),
        song(6, "Dancing Queen", "Party People", T::Upbeat, E::High, V::Positive, "disco", 185, false),
        song(7, "Rainy Day", "Melancholy Group", T::Slow, E::Low, V::Negative, "indie", 205, false),
        song(8, "Deep Focus", "Concentration Masters", T::Medium, E::Medium, V::Neutral, "electronic", 220, true),
        song(9, "Workout Mix", "Cardio Kings", T::Fast, E::High, V::Positive, "electronic", 175, false),
        song(10, "Sunset Chill", "Lounge Lizards", T::Slow, E::Low, V::Positive, "lofi", 230, false),
    ]
}
