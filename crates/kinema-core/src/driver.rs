//! Change-detection driver.
//!
//! Owns the only mutable state in the process: the last-seen filename
//! and the payload rendered for it. The pipeline (parse → resolve →
//! render) runs exactly once per filename transition; every other poll
//! either re-sends the cached payload or the idle variant.

use tracing::{debug, info, warn};

use crate::error::KinemaError;
use crate::models::{PlayerSnapshot, PresencePayload};
use crate::presence;
use crate::traits::{MetadataSource, PresenceSink};

/// Filename substituted when the player is playing but the status body
/// carries no filename.
const UNNAMED_FILE: &str = "Unknown";

/// What a single tick did, for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Player not playing; idle payload sent, cursor untouched.
    Idle,
    /// Same file as last tick; cached payload re-sent (if any).
    Unchanged,
    /// New file, parsed and resolved against the metadata service.
    Resolved { title: String, year: String },
    /// New file, parsed, but the metadata lookup came back empty.
    ParsedOnly { title: String, year: String },
    /// New file outside the naming convention.
    Unrecognized { filename: String },
}

/// Holds the filename cursor and drives the pipeline per poll.
#[derive(Debug, Default)]
pub struct Driver {
    last_filename: Option<String>,
    current: Option<PresencePayload>,
}

impl Driver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one player snapshot.
    ///
    /// The cursor is deliberately not cleared on idle: resuming the
    /// same file later re-sends the cached payload without another
    /// metadata lookup.
    pub async fn tick<S, K>(
        &mut self,
        snapshot: &PlayerSnapshot,
        source: &S,
        sink: &mut K,
    ) -> Result<TickOutcome, KinemaError>
    where
        S: MetadataSource,
        K: PresenceSink,
    {
        if !snapshot.is_playing {
            sink.update(&presence::render_idle())?;
            return Ok(TickOutcome::Idle);
        }

        let filename = snapshot.filename.as_deref().unwrap_or(UNNAMED_FILE);

        if self.last_filename.as_deref() == Some(filename) {
            debug!(filename = %filename, "Filename unchanged, re-sending cached presence");
            if let Some(payload) = &self.current {
                sink.update(payload)?;
            }
            return Ok(TickOutcome::Unchanged);
        }

        self.last_filename = Some(filename.to_string());

        let parsed = kinema_parse::parse(filename);
        let meta = match &parsed {
            Some(movie) => source.resolve(&movie.title, &movie.year).await,
            None => None,
        };

        let outcome = match (&parsed, &meta) {
            (Some(_), Some(meta)) => {
                info!(title = %meta.title, year = %meta.year, "Resolved movie metadata");
                TickOutcome::Resolved {
                    title: meta.title.clone(),
                    year: meta.year.clone(),
                }
            }
            (Some(movie), None) => {
                info!(title = %movie.title, year = %movie.year, "Metadata unavailable, using filename info");
                TickOutcome::ParsedOnly {
                    title: movie.title.clone(),
                    year: movie.year.clone(),
                }
            }
            (None, _) => {
                warn!(filename = %filename, "Filename outside naming convention");
                TickOutcome::Unrecognized {
                    filename: filename.to_string(),
                }
            }
        };

        let payload = presence::render(parsed.as_ref(), meta.as_ref());
        self.current = Some(payload.clone());
        sink.update(&payload)?;

        Ok(outcome)
    }
}
