//! # MoodTunes Performance Benchmarks
//!
//! ## Benchmark Categories
//!
//! - **Algorithm Performance**: Single and batch match scoring
//! - **Playlist Generation**: Full matching across catalog sizes
//! - **Shuffle**: Fisher–Yates over playlists of different lengths
//!
//! ## Running Benchmarks
//!
//! ```bash
//! cargo bench
//! cargo bench playlist
//! ```

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use moodtunes::algorithm::{self, MatchingContext};
use moodtunes::mood::MoodProfiles;
use moodtunes::playlist;
use moodtunes::song::{Energy, Song, Tempo, Valence};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

const TEMPOS: [Tempo; 4] = [Tempo::Slow, Tempo::Medium, Tempo::Upbeat, Tempo::Fast];
const ENERGIES: [Energy; 3] = [Energy::Low, Energy::Medium, Energy::High];
const VALENCES: [Valence; 3] = [Valence::Negative, Valence::Neutral, Valence::Positive];

/// Helper function to create a synthetic catalog cycling through every attribute
fn create_test_catalog(count: usize) -> Vec<Song> {
    (1..=count)
        .map(|i| Song {
            id: i as u32,
            title: format!("Song {i:04}"),
            artist: format!("Artist {}", (i - 1) / 20 + 1),
            tempo: TEMPOS[i % TEMPOS.len()],
            energy: ENERGIES[(i / 4) % ENERGIES.len()],
            valence: VALENCES[(i / 12) % VALENCES.len()],
            genre: "test".to_string(),
            duration: 120 + (i % 180) as u32,
            instrumental: i % 7 == 0,
        })
        .collect()
}

/// Benchmark algorithm scoring performance
fn benchmark_algorithm_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("algorithm_scoring");
    let profiles = MoodProfiles::default();
    let profile = *profiles.get("focused").expect("built-in mood");
    let context = MatchingContext::default();

    let song = create_test_catalog(1)[0].clone();
    group.bench_function("single_song_score", |b| {
        b.iter(|| algorithm::calculate_match_score(black_box(&song), black_box(&profile), black_box(&context)))
    });

    for size in [10, 100, 1000] {
        let songs = create_test_catalog(size);
        group.bench_with_input(BenchmarkId::new("batch_scoring", size), &songs, |b, songs| {
            b.iter(|| {
                algorithm::batch_calculate_scores(black_box(songs), &profile, &context).collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Benchmark end-to-end playlist generation
fn benchmark_playlist_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("playlist_generation");
    let profiles = MoodProfiles::default();

    for size in [10, 100, 1000, 5000] {
        let catalog = create_test_catalog(size);
        group.bench_with_input(BenchmarkId::new("happy", size), &catalog, |b, catalog| {
            b.iter(|| playlist::generate_playlist(black_box("happy"), &profiles, black_box(catalog)))
        });
    }

    // Sparse matches force the backfill pass.
    let catalog = create_test_catalog(1000);
    group.bench_function("focused_backfill_1000", |b| {
        b.iter(|| playlist::generate_playlist(black_box("focused"), &profiles, black_box(&catalog)))
    });

    group.finish();
}

/// Benchmark shuffling
fn benchmark_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffle");
    let mut rng = StdRng::seed_from_u64(42);

    for size in [5, 50, 1000] {
        let catalog = create_test_catalog(size);
        group.bench_with_input(BenchmarkId::new("fisher_yates", size), &catalog, |b, catalog| {
            b.iter_batched(
                || catalog.clone(),
                |mut songs| {
                    playlist::shuffle_with(&mut songs, &mut rng);
                    songs
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_algorithm_scoring,
    benchmark_playlist_generation,
    benchmark_shuffle
);

criterion_main!(benches);
