use serde::Deserialize;

use kinema_core::models::PlayerSnapshot;

/// Subset of VLC's `/requests/status.json` body that kinema reads.
///
/// The `information` tree only exists while something is loaded, and
/// its depth varies with the media type, so every level is optional.
#[derive(Debug, Deserialize)]
pub struct VlcStatus {
    pub state: String,
    pub information: Option<Information>,
}

#[derive(Debug, Deserialize)]
pub struct Information {
    pub category: Option<Category>,
}

#[derive(Debug, Deserialize)]
pub struct Category {
    pub meta: Option<Meta>,
}

#[derive(Debug, Deserialize)]
pub struct Meta {
    pub filename: Option<String>,
}

impl VlcStatus {
    pub fn is_playing(&self) -> bool {
        self.state == "playing"
    }

    pub fn filename(&self) -> Option<&str> {
        self.information
            .as_ref()?
            .category
            .as_ref()?
            .meta
            .as_ref()?
            .filename
            .as_deref()
    }

    /// Flatten into the per-poll snapshot the driver consumes.
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            is_playing: self.is_playing(),
            filename: self.filename().map(str::to_string),
        }
    }
}
