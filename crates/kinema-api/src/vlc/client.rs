use std::time::Duration;

use reqwest::Client;

use kinema_core::models::PlayerSnapshot;

use super::error::VlcError;
use super::types::VlcStatus;

/// Keeps an unreachable or wedged player from stalling the poll loop.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for VLC's HTTP status interface.
///
/// VLC authenticates with HTTP basic auth using an empty username and
/// the password configured under *Interfaces → Lua HTTP*.
pub struct VlcClient {
    status_url: String,
    password: String,
    http: Client,
}

impl VlcClient {
    pub fn new(host: &str, port: u16, password: String) -> Result<Self, VlcError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            status_url: format!("http://{host}:{port}/requests/status.json"),
            password,
            http,
        })
    }

    /// Fetch one status snapshot from the player.
    pub async fn status(&self) -> Result<PlayerSnapshot, VlcError> {
        let resp = self
            .http
            .get(&self.status_url)
            .basic_auth("", Some(&self.password))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(VlcError::Api { status, message });
        }

        let body: VlcStatus = resp
            .json()
            .await
            .map_err(|e| VlcError::Parse(e.to_string()))?;

        Ok(body.snapshot())
    }
}
