//! Discord Rich Presence sink.
//!
//! Wraps a `DiscordIpcClient` opened once at startup and closed at
//! shutdown. The poll loop is strictly sequential, so the IPC client is
//! driven directly rather than from a dedicated thread.

use discord_rich_presence::{activity, DiscordIpc, DiscordIpcClient};
use tracing::debug;

use kinema_core::error::KinemaError;
use kinema_core::models::PresencePayload;
use kinema_core::traits::PresenceSink;

pub struct DiscordSink {
    client: DiscordIpcClient,
}

impl DiscordSink {
    /// Open the IPC connection to a running Discord client.
    pub fn connect(client_id: &str) -> Result<Self, KinemaError> {
        let mut client = DiscordIpcClient::new(client_id);
        client
            .connect()
            .map_err(|e| KinemaError::Presence(format!("cannot connect to Discord: {e}")))?;
        debug!("Connected to Discord IPC");
        Ok(Self { client })
    }

    /// Close the IPC connection. Errors at shutdown are only logged.
    pub fn close(&mut self) {
        if let Err(e) = self.client.close() {
            debug!(error = %e, "Error closing Discord IPC");
        }
    }
}

impl PresenceSink for DiscordSink {
    fn update(&mut self, payload: &PresencePayload) -> Result<(), KinemaError> {
        self.client
            .set_activity(to_activity(payload))
            .map_err(|e| KinemaError::Presence(e.to_string()))
    }
}

/// Map a rendered payload onto the Discord activity wire shape.
fn to_activity(payload: &PresencePayload) -> activity::Activity<'_> {
    let mut act = activity::Activity::new()
        .details(&payload.details)
        .state(&payload.state)
        .timestamps(activity::Timestamps::new().start(payload.start))
        .assets(
            activity::Assets::new()
                .large_image(&payload.large_image)
                .large_text(&payload.large_text)
                .small_image(&payload.small_image)
                .small_text(&payload.small_text),
        );

    if !payload.buttons.is_empty() {
        act = act.buttons(
            payload
                .buttons
                .iter()
                .map(|b| activity::Button::new(&b.label, &b.url))
                .collect(),
        );
    }

    act
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinema_core::models::Button;

    fn payload() -> PresencePayload {
        PresencePayload {
            details: "Watching: Parasite (2019)".into(),
            state: "Directed by Bong Joon Ho | Thriller".into(),
            large_image: "http://x/p.jpg".into(),
            large_text: "Parasite".into(),
            small_image: "https://ccross.github.io/VLCMovieDiscordRPCUpdater/movie.png".into(),
            small_text: "Parasite".into(),
            start: 1_724_000_000,
            buttons: vec![Button {
                label: "View on Letterboxd".into(),
                url: "https://letterboxd.com/imdb/tt6751668/".into(),
            }],
        }
    }

    #[test]
    fn test_activity_wire_shape() {
        let payload = payload();
        let value = serde_json::to_value(to_activity(&payload)).unwrap();

        assert_eq!(value["details"], "Watching: Parasite (2019)");
        assert_eq!(value["state"], "Directed by Bong Joon Ho | Thriller");
        assert_eq!(value["timestamps"]["start"], 1_724_000_000);
        assert_eq!(value["assets"]["large_image"], "http://x/p.jpg");
        assert_eq!(value["assets"]["small_text"], "Parasite");
        assert_eq!(value["buttons"][0]["label"], "View on Letterboxd");
        assert_eq!(
            value["buttons"][0]["url"],
            "https://letterboxd.com/imdb/tt6751668/"
        );
    }

    #[test]
    fn test_buttonless_payload_omits_buttons() {
        let mut payload = payload();
        payload.buttons.clear();
        let value = serde_json::to_value(to_activity(&payload)).unwrap();
        assert!(value.get("buttons").is_none());
    }
}
