//! Plain-text rendering of the library and playlists for the terminal.

use crate::mood::MoodProfiles;
use crate::session::SessionObserver;
use crate::song::Song;
use std::fmt::Write;

const EMPTY_PLAYLIST: &str = "No songs found for this mood. Try another mood!";

/// Renders the whole catalog as a Title/Artist/Genre/Duration table.
#[must_use]
pub fn render_library(catalog: &[Song]) -> String {
    let mut out = String::from("Music Library\n");

    let title_w = column_width("Title", catalog.iter().map(|s| s.title.as_str()));
    let artist_w = column_width("Artist", catalog.iter().map(|s| s.artist.as_str()));
    let genre_w = column_width("Genre", catalog.iter().map(|s| s.genre.as_str()));

    let _ = writeln!(out, "{:<title_w$}  {:<artist_w$}  {:<genre_w$}  Duration", "Title", "Artist", "Genre");
    for song in catalog {
        let _ = writeln!(
            out,
            "{:<title_w$}  {:<artist_w$}  {:<genre_w$}  {}",
            song.title,
            song.artist,
            song.genre,
            song.formatted_duration()
        );
    }
    out
}

/// Renders a mood playlist as a numbered table, or the empty-state notice.
#[must_use]
pub fn render_playlist(mood: &str, playlist: &[Song]) -> String {
    let mut out = format!("Your \"{mood}\" Mood Playlist\n");

    if playlist.is_empty() {
        out.push_str(EMPTY_PLAYLIST);
        out.push('\n');
        return out;
    }

    let index_w = playlist.len().to_string().len().max(1);
    let title_w = column_width("Title", playlist.iter().map(|s| s.title.as_str()));
    let artist_w = column_width("Artist", playlist.iter().map(|s| s.artist.as_str()));

    let _ = writeln!(out, "{:>index_w$}  {:<title_w$}  {:<artist_w$}  Duration", "#", "Title", "Artist");
    for (i, song) in playlist.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>index_w$}  {:<title_w$}  {:<artist_w$}  {}",
            i + 1,
            song.title,
            song.artist,
            song.formatted_duration()
        );
    }
    out
}

/// One line per mood with its target attributes.
#[must_use]
pub fn render_moods(profiles: &MoodProfiles) -> String {
    let mut out = String::new();
    for (mood, profile) in profiles.iter() {
        let _ = write!(
            out,
            "{mood}: tempo={}, energy={}, valence={}",
            profile.tempo, profile.energy, profile.valence
        );
        if profile.instrumental {
            out.push_str(", instrumental");
        }
        out.push('\n');
    }
    out
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values.map(|v| v.chars().count()).max().unwrap_or(0).max(header.len())
}

/// Prints session events to stdout.
#[derive(Debug, Default)]
pub struct TerminalRenderer;

impl SessionObserver for TerminalRenderer {
    fn mood_selected(&mut self, mood: &str, known: bool) {
        if !known {
            println!("Unknown mood: {mood}");
        }
    }

    fn playlist_updated(&mut self, mood: &str, playlist: &[Song]) {
        print!("{}", render_playlist(mood, playlist));
    }
}
