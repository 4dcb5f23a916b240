//! Playlist generation for a selected mood.
//!
//! Matching runs in three steps over the catalog:
//!
//! 1. **Primary pass**: keep every song whose match score reaches the inclusion threshold.
//! 2. **Backfill pass**: if that left fewer than `backfill_target` songs, walk the
//!    catalog again and add songs agreeing on tempo, energy or valence until the
//!    target is reached or the catalog runs out.
//! 3. **Ranking**: stable partition putting valence matches first.
//!
//! The functions here are pure: the catalog is never mutated and identical inputs
//! give identical playlists. Randomness only enters through [`shuffle`].

use crate::algorithm::{self, MatchingContext};
use crate::mood::{MoodProfile, MoodProfiles};
use crate::song::Song;
use rand::Rng;
use std::collections::HashSet;

/// Ranked songs drawn from a catalog, best match first.
pub type Playlist = Vec<Song>;

/// Result of matching that keeps "unknown mood" apart from "nothing matched".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The mood key has no profile.
    UnknownMood,
    /// The mood is known but no song qualified.
    Empty,
    Ranked(Playlist),
}

impl MatchOutcome {
    /// Collapses to a playlist, treating both failure cases as empty.
    #[must_use]
    pub fn into_playlist(self) -> Playlist {
        match self {
            Self::Ranked(songs) => songs,
            Self::UnknownMood | Self::Empty => Vec::new(),
        }
    }

    #[must_use]
    pub const fn is_unknown_mood(&self) -> bool {
        matches!(self, Self::UnknownMood)
    }
}

/// Builds the playlist for `mood` with the default matching parameters.
///
/// Unknown moods yield an empty playlist rather than an error. Use
/// [`match_mood`] when the caller needs to tell the two cases apart.
///
/// # Examples
///
/// ```
/// use moodtunes::mood::MoodProfiles;
/// use moodtunes::playlist::generate_playlist;
/// use moodtunes::song::builtin_catalog;
///
/// let catalog = builtin_catalog();
/// let playlist = generate_playlist("sad", &MoodProfiles::default(), &catalog);
/// let titles: Vec<&str> = playlist.iter().map(|s| s.title.as_str()).collect();
/// assert_eq!(titles, ["Blue Monday", "Rainy Day", "Ocean Waves", "Sunset Chill"]);
/// ```
#[must_use]
pub fn generate_playlist(mood: &str, profiles: &MoodProfiles, catalog: &[Song]) -> Playlist {
    generate_playlist_with(mood, profiles, catalog, &MatchingContext::default())
}

/// Same as [`generate_playlist`] with explicit matching parameters.
#[must_use]
pub fn generate_playlist_with(
    mood: &str,
    profiles: &MoodProfiles,
    catalog: &[Song],
    context: &MatchingContext,
) -> Playlist {
    match_mood_with(mood, profiles, catalog, context).into_playlist()
}

/// Tri-state variant of [`generate_playlist`].
#[must_use]
pub fn match_mood(mood: &str, profiles: &MoodProfiles, catalog: &[Song]) -> MatchOutcome {
    match_mood_with(mood, profiles, catalog, &MatchingContext::default())
}

#[must_use]
pub fn match_mood_with(
    mood: &str,
    profiles: &MoodProfiles,
    catalog: &[Song],
    context: &MatchingContext,
) -> MatchOutcome {
    log::debug!("Creating playlist for mood: {mood}");

    let Some(profile) = profiles.get(mood) else {
        log::info!("Unknown mood: {mood}");
        return MatchOutcome::UnknownMood;
    };

    let playlist = rank_for_profile(profile, catalog, context);
    log::info!("Created playlist with {} songs for mood: {mood}", playlist.len());

    if playlist.is_empty() {
        MatchOutcome::Empty
    } else {
        MatchOutcome::Ranked(playlist)
    }
}

/// Runs the primary pass, backfill and ranking against a resolved profile.
#[must_use]
pub fn rank_for_profile(profile: &MoodProfile, catalog: &[Song], context: &MatchingContext) -> Playlist {
    let mut selected = primary_pass(profile, catalog, context);

    if selected.len() < context.backfill_target {
        backfill(&mut selected, profile, catalog, context.backfill_target);
    }

    // `sort_by_key` is stable, so discovery order survives within each group.
    selected.sort_by_key(|song| !algorithm::matches_valence(song, profile));

    selected.into_iter().cloned().collect()
}

fn primary_pass<'a>(profile: &MoodProfile, catalog: &'a [Song], context: &MatchingContext) -> Vec<&'a Song> {
    catalog
        .iter()
        .filter(|song| {
            let score = algorithm::calculate_match_score(song, profile, context);
            algorithm::meets_threshold(score, context)
        })
        .collect()
}

fn backfill<'a>(selected: &mut Vec<&'a Song>, profile: &MoodProfile, catalog: &'a [Song], target: usize) {
    let mut seen: HashSet<u32> = selected.iter().map(|song| song.id).collect();

    for song in catalog {
        if selected.len() >= target {
            break;
        }
        if seen.contains(&song.id) {
            continue;
        }
        if algorithm::matches_any_criterion(song, profile) {
            log::trace!("Backfilling `{}'.", song.title);
            seen.insert(song.id);
            selected.push(song);
        }
    }
}

/// Uniform in-place Fisher–Yates shuffle using the thread-local RNG.
pub fn shuffle<T>(items: &mut [T]) {
    shuffle_with(items, &mut rand::thread_rng());
}

/// Fisher–Yates shuffle driven by the given RNG.
///
/// For each index `i` from the end down to 1, swaps it with a uniformly
/// chosen `j` in `0..=i`.
pub fn shuffle_with<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
    log::debug!("Playlist shuffled");
}
