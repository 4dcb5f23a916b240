//! # Integration Tests for MoodTunes
//!
//! End-to-end checks across configuration loading, matching, sessions and rendering.

use anyhow::Result;
use moodtunes::config::{self, RuntimeConfig};
use moodtunes::mood::MoodProfiles;
use moodtunes::playlist::{generate_playlist, match_mood, MatchOutcome};
use moodtunes::song::{builtin_catalog, Song};
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const CUSTOM_CATALOG: &str = r#"[
    { "id": 11, "title": "Night Drive", "artist": "Neon", "tempo": "fast", "energy": "medium",
      "valence": "neutral", "genre": "synthwave", "duration": 250 },
    { "id": 12, "title": "Piano Notes", "artist": "Keys", "tempo": "medium", "energy": "low",
      "valence": "neutral", "genre": "classical", "duration": 301, "instrumental": true },
    { "id": 13, "title": "Stadium", "artist": "Loud", "tempo": "fast", "energy": "high",
      "valence": "positive", "genre": "rock", "duration": 199 }
]"#;

const CUSTOM_PROFILES: &str = r#"{
    "study": { "tempo": "medium", "energy": "low", "valence": "neutral", "instrumental": true },
    "drive": { "tempo": "fast", "energy": "medium", "valence": "neutral" }
}"#;

/// Test helper to write config files into a temporary directory
fn create_config_dir() -> Result<(TempDir, PathBuf, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let catalog_path = temp_dir.path().join(config::CATALOG_FILE);
    let profiles_path = temp_dir.path().join(config::PROFILES_FILE);

    fs::write(&catalog_path, CUSTOM_CATALOG)?;
    fs::write(&profiles_path, CUSTOM_PROFILES)?;

    Ok((temp_dir, catalog_path, profiles_path))
}

fn ids(playlist: &[Song]) -> Vec<u32> {
    playlist.iter().map(|s| s.id).collect()
}

#[cfg(test)]
mod matching_tests {
    use super::*;

    #[test]
    fn test_every_builtin_mood_yields_catalog_songs_without_duplicates() {
        let catalog = builtin_catalog();
        let catalog_ids: HashSet<u32> = catalog.iter().map(|s| s.id).collect();
        let profiles = MoodProfiles::default();

        for mood in profiles.moods() {
            let playlist = generate_playlist(mood, &profiles, &catalog);
            let unique: HashSet<u32> = playlist.iter().map(|s| s.id).collect();

            assert_eq!(unique.len(), playlist.len(), "duplicates in {mood} playlist");
            assert!(unique.is_subset(&catalog_ids), "{mood} playlist has songs outside the catalog");
            for song in &playlist {
                let original = catalog.iter().find(|s| s.id == song.id).unwrap();
                assert_eq!(original, song, "songs must be copied unchanged");
            }
        }
    }

    #[test]
    fn test_valence_matches_precede_the_rest() {
        let catalog = builtin_catalog();
        let profiles = MoodProfiles::default();

        for (mood, profile) in profiles.iter() {
            let playlist = generate_playlist(mood, &profiles, &catalog);
            let first_miss = playlist.iter().position(|s| s.valence != profile.valence);
            if let Some(first_miss) = first_miss {
                assert!(
                    playlist[first_miss..].iter().all(|s| s.valence != profile.valence),
                    "{mood}: a valence match follows a non-match"
                );
            }
        }
    }

    #[test]
    fn test_happy_exact_matches_outscore_energy_boost() {
        use moodtunes::algorithm::{calculate_match_score, MatchingContext};

        let catalog = builtin_catalog();
        let profiles = MoodProfiles::default();
        let happy = profiles.get("happy").unwrap();
        let context = MatchingContext::default();
        let score_of = |title: &str| {
            let song = catalog.iter().find(|s| s.title == title).unwrap();
            calculate_match_score(song, happy, &context)
        };

        assert_eq!(score_of("Happy Days"), 7);
        assert_eq!(score_of("Dancing Queen"), 7);
        assert_eq!(score_of("Energy Boost"), 5);

        // Ranking only partitions by valence, so catalog order holds inside the group.
        let playlist = generate_playlist("happy", &profiles, &catalog);
        let titles: Vec<&str> = playlist.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Happy Days", "Energy Boost", "Dancing Queen", "Workout Mix", "Ocean Waves"]);
    }

    #[test]
    fn test_unknown_mood_ignores_catalog_contents() {
        let profiles = MoodProfiles::default();
        assert!(generate_playlist("melancholic", &profiles, &builtin_catalog()).is_empty());
        assert!(generate_playlist("melancholic", &profiles, &[]).is_empty());
        assert_eq!(match_mood("", &profiles, &builtin_catalog()), MatchOutcome::UnknownMood);
    }
}

#[cfg(test)]
mod config_integration_tests {
    use super::*;

    #[test]
    fn test_custom_files_drive_matching() -> Result<()> {
        let (_temp_dir, catalog_path, profiles_path) = create_config_dir()?;
        let config = RuntimeConfig::with_paths(Some(catalog_path), Some(profiles_path));

        let catalog = config.load_catalog()?;
        let profiles = config.load_profiles()?;
        assert_eq!(catalog.len(), 3);
        assert!(catalog[1].instrumental);
        assert!(!catalog[0].instrumental);

        // Piano Notes scores 10; Night Drive backfills on valence; Stadium matches nothing.
        let study = generate_playlist("study", &profiles, &catalog);
        assert_eq!(ids(&study), vec![12, 11]);

        // Built-in moods are replaced, not merged.
        assert!(generate_playlist("happy", &profiles, &catalog).is_empty());
        Ok(())
    }

    #[test]
    fn test_config_dir_files_are_discovered() -> Result<()> {
        let (temp_dir, catalog_path, profiles_path) = create_config_dir()?;
        let config = RuntimeConfig::resolve_in(temp_dir.path(), None, None);

        assert_eq!(config.catalog_path, Some(catalog_path));
        assert_eq!(config.profiles_path, Some(profiles_path));
        Ok(())
    }

    #[test]
    fn test_missing_config_dir_files_fall_back_to_builtin() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = RuntimeConfig::resolve_in(temp_dir.path(), None, None);

        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.load_catalog()?.len(), 10);
        Ok(())
    }

    #[test]
    fn test_duplicate_ids_are_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("dupes.json");
        fs::write(
            &path,
            r#"[
                { "id": 1, "title": "A", "artist": "X", "tempo": "slow", "energy": "low",
                  "valence": "neutral", "genre": "g", "duration": 1 },
                { "id": 1, "title": "B", "artist": "Y", "tempo": "fast", "energy": "high",
                  "valence": "positive", "genre": "g", "duration": 2 }
            ]"#,
        )?;

        let err = config::load_catalog(&path).unwrap_err();
        assert!(err.to_string().contains("Duplicate song id 1"));
        Ok(())
    }

    #[test]
    fn test_malformed_profiles_report_the_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json")?;

        let err = config::load_profiles(&path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
        Ok(())
    }
}

#[cfg(test)]
mod session_integration_tests {
    use super::*;
    use moodtunes::display::render_playlist;
    use moodtunes::session::{LoggingStore, SaveOutcome, Session};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_select_shuffle_save_workflow() -> Result<()> {
        let mut session = Session::new(builtin_catalog(), MoodProfiles::default());
        assert!(session.select_mood("relaxed"));
        assert_eq!(ids(session.playlist()), vec![5, 10, 1, 2, 7]);

        session.shuffle_with(&mut StdRng::seed_from_u64(2024));
        let mut shuffled = ids(session.playlist());
        shuffled.sort_unstable();
        assert_eq!(shuffled, vec![1, 2, 5, 7, 10]);

        let name = session.default_save_name();
        let outcome = session.save(&name, &mut LoggingStore)?;
        assert_eq!(outcome, SaveOutcome::Saved { name: "relaxed Mix".to_string() });

        let rendered = render_playlist("relaxed", session.playlist());
        assert_eq!(rendered.lines().count(), 2 + 5);
        Ok(())
    }

    #[test]
    fn test_reselecting_mood_undoes_shuffle() {
        let mut session = Session::new(builtin_catalog(), MoodProfiles::default());
        session.select_mood("happy");
        let ranked = ids(session.playlist());

        session.shuffle_with(&mut StdRng::seed_from_u64(5));
        session.select_mood("happy");
        assert_eq!(ids(session.playlist()), ranked);
    }
}
