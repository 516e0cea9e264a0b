use serde::{Deserialize, Serialize};

/// One observation of the player, taken per poll and then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSnapshot {
    /// Whether VLC reports `state == "playing"`.
    pub is_playing: bool,
    /// Filename of the current item, when the status exposes one.
    pub filename: Option<String>,
}

/// Normalized movie metadata from the lookup service.
///
/// Textual fields that the service omitted carry the literal
/// `"Unknown"`; an absent external ID or poster is an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub title: String,
    pub year: String,
    pub director: String,
    pub genre: String,
    pub imdb_id: String,
    pub poster_url: String,
}

/// An action button attached to a presence payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub label: String,
    pub url: String,
}

/// The status blob pushed to the presence sink.
///
/// Field names mirror the wire shape Discord expects: details/state as
/// the two text rows, large/small image with hover text, a start
/// timestamp for the elapsed counter, and at most one button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresencePayload {
    pub details: String,
    pub state: String,
    pub large_image: String,
    pub large_text: String,
    pub small_image: String,
    pub small_text: String,
    /// Unix seconds at render time. Re-stamped on every render.
    pub start: i64,
    pub buttons: Vec<Button>,
}
