use serde::Deserialize;

use kinema_core::models::MetadataRecord;

/// Raw OMDb search-by-title response body.
///
/// OMDb signals success with a string `"Response"` flag and reports
/// errors ("Movie not found!", bad key) in the same 200 body. Absent
/// text fields fall back to `"Unknown"`; an absent IMDb ID or poster
/// falls back to the empty string so downstream URL building degrades
/// quietly.
#[derive(Debug, Deserialize)]
pub struct OmdbMovie {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
    #[serde(rename = "Title", default = "unknown")]
    pub title: String,
    #[serde(rename = "Year", default = "unknown")]
    pub year: String,
    #[serde(rename = "Director", default = "unknown")]
    pub director: String,
    #[serde(rename = "Genre", default = "unknown")]
    pub genre: String,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    #[serde(rename = "Poster", default)]
    pub poster: String,
}

fn unknown() -> String {
    "Unknown".to_string()
}

impl OmdbMovie {
    /// The flag is the literal string `"True"` on success.
    pub fn is_success(&self) -> bool {
        self.response == "True"
    }

    pub fn into_record(self) -> MetadataRecord {
        MetadataRecord {
            title: self.title,
            year: self.year,
            director: self.director,
            genre: self.genre,
            imdb_id: self.imdb_id,
            poster_url: self.poster,
        }
    }
}
