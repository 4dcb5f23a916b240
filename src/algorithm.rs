//! Match scoring between songs and mood profiles.
//!
//! A song earns points for every attribute it shares with the active profile.
//! The weights and thresholds live in [`MatchingContext`] so callers can tune them.

use crate::mood::MoodProfile;
use crate::song::Song;

/// Type-safe matching context with immutable parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingContext {
    pub weights: WeightConfig,
    /// Minimum score for inclusion in the primary pass.
    pub inclusion_threshold: u32,
    /// Playlist size the backfill pass pads towards.
    pub backfill_target: usize,
}

/// Points awarded per matching attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightConfig {
    pub tempo: u32,
    pub energy: u32,
    pub valence: u32,
    pub instrumental: u32,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            tempo: 2,
            energy: 2,
            valence: 3,
            instrumental: 3,
        }
    }
}

impl Default for MatchingContext {
    fn default() -> Self {
        Self {
            weights: WeightConfig::default(),
            inclusion_threshold: 4,
            backfill_target: 5,
        }
    }
}

/// Weighted count of attribute agreements between `song` and `profile`.
///
/// The instrumental bonus only applies when the profile asks for instrumental
/// songs and the song is one.
///
/// # Examples
///
/// ```
/// use moodtunes::algorithm::{calculate_match_score, MatchingContext};
/// use moodtunes::mood::MoodProfiles;
/// use moodtunes::song::builtin_catalog;
///
/// let profiles = MoodProfiles::default();
/// let focused = profiles.get("focused").unwrap();
/// let study_session = &builtin_catalog()[2];
///
/// let score = calculate_match_score(study_session, focused, &MatchingContext::default());
/// assert_eq!(score, 10);
/// ```
#[must_use]
pub fn calculate_match_score(song: &Song, profile: &MoodProfile, context: &MatchingContext) -> u32 {
    let weights = &context.weights;

    let score: u32 = [
        (song.tempo == profile.tempo, weights.tempo),
        (song.energy == profile.energy, weights.energy),
        (song.valence == profile.valence, weights.valence),
        (profile.instrumental && song.instrumental, weights.instrumental),
    ]
    .into_iter()
    .filter_map(|(matched, points)| matched.then_some(points))
    .sum();

    log::trace!("Song `{}' scored {} against profile {:?}.", song.title, score, profile);
    score
}

/// Whether a song is good enough for the primary pass.
#[inline]
#[must_use]
pub fn meets_threshold(score: u32, context: &MatchingContext) -> bool {
    score >= context.inclusion_threshold
}

/// Loose backfill predicate: tempo OR energy OR valence agrees.
#[inline]
#[must_use]
pub fn matches_any_criterion(song: &Song, profile: &MoodProfile) -> bool {
    song.tempo == profile.tempo || song.energy == profile.energy || song.valence == profile.valence
}

#[inline]
#[must_use]
pub fn matches_valence(song: &Song, profile: &MoodProfile) -> bool {
    song.valence == profile.valence
}

/// Scores every song lazily, preserving catalog order.
#[must_use = "Iterator should be consumed to calculate scores"]
pub fn batch_calculate_scores<'a>(
    songs: &'a [Song],
    profile: &'a MoodProfile,
    context: &'a MatchingContext,
) -> impl Iterator<Item = (&'a Song, u32)> + 'a {
    songs
        .iter()
        .map(move |song| (song, calculate_match_score(song, profile, context)))
}
