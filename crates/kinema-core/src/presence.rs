//! Presence payload rendering.
//!
//! Turns the parser and resolver outcomes into exactly one of four
//! payload variants, in strictly decreasing fidelity: resolved,
//! parsed-only, unrecognized, idle. Every render stamps a fresh start
//! timestamp; the sink uses it to show elapsed time.

use std::time::{SystemTime, UNIX_EPOCH};

use kinema_parse::MovieFile;

use crate::models::{Button, MetadataRecord, PresencePayload};

/// "Now playing" icon shown as the small image while a file plays.
const MOVIE_ICON: &str = "https://ccross.github.io/VLCMovieDiscordRPCUpdater/movie.png";
/// Icon for the idle variant.
const STOP_ICON: &str = "https://ccross.github.io/VLCMovieDiscordRPCUpdater/stop.png";
/// Generic large image used when no poster is available.
const PLACEHOLDER_IMAGE: &str = "https://example.com/large_image.png";

/// Deep-link template keyed by IMDb ID.
const LETTERBOXD_URL: &str = "https://letterboxd.com/imdb/";

/// Discord rejects text fields longer than this.
const MAX_TEXT_LEN: usize = 128;

/// Plain character cut, deliberately not word-aware.
fn truncate(text: &str) -> String {
    text.chars().take(MAX_TEXT_LEN).collect()
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

/// Render the payload for a playing file.
///
/// Variant selection: both parse and metadata present → resolved; parse
/// only → filename fallback; no parse → unrecognized. The metadata
/// argument is ignored when the parse is absent.
pub fn render(parsed: Option<&MovieFile>, meta: Option<&MetadataRecord>) -> PresencePayload {
    match (parsed, meta) {
        (Some(_), Some(meta)) => render_resolved(meta),
        (Some(movie), None) => render_parsed_only(movie),
        (None, _) => render_unrecognized(),
    }
}

fn render_resolved(meta: &MetadataRecord) -> PresencePayload {
    let details = format!("Watching: {} ({})", meta.title, meta.year);
    let state = format!("Directed by {} | {}", meta.director, meta.genre);
    let letterboxd_url = format!("{LETTERBOXD_URL}{}/", meta.imdb_id);

    PresencePayload {
        details: truncate(&details),
        state: truncate(&state),
        large_image: meta.poster_url.clone(),
        large_text: meta.title.clone(),
        small_image: MOVIE_ICON.to_string(),
        small_text: meta.title.clone(),
        start: unix_now(),
        buttons: vec![Button {
            label: "View on Letterboxd".to_string(),
            url: letterboxd_url,
        }],
    }
}

fn render_parsed_only(movie: &MovieFile) -> PresencePayload {
    let details = format!("Watching: {} ({})", movie.title, movie.year);

    PresencePayload {
        details: truncate(&details),
        state: "No additional info available".to_string(),
        large_image: PLACEHOLDER_IMAGE.to_string(),
        large_text: movie.title.clone(),
        small_image: MOVIE_ICON.to_string(),
        small_text: movie.title.clone(),
        start: unix_now(),
        buttons: Vec::new(),
    }
}

fn render_unrecognized() -> PresencePayload {
    PresencePayload {
        details: "Watching a movie".to_string(),
        state: "Filename format not recognized".to_string(),
        large_image: PLACEHOLDER_IMAGE.to_string(),
        large_text: String::new(),
        small_image: MOVIE_ICON.to_string(),
        small_text: "Unknown Movie".to_string(),
        start: unix_now(),
        buttons: Vec::new(),
    }
}

/// Render the payload for a stopped or paused player.
pub fn render_idle() -> PresencePayload {
    PresencePayload {
        details: "VLC is idle".to_string(),
        state: "No media playing".to_string(),
        large_image: PLACEHOLDER_IMAGE.to_string(),
        large_text: String::new(),
        small_image: STOP_ICON.to_string(),
        small_text: "Nothing Playing".to_string(),
        start: unix_now(),
        buttons: Vec::new(),
    }
}
