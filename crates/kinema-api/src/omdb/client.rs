use std::time::Duration;

use reqwest::Client;

use kinema_core::models::MetadataRecord;
use kinema_core::traits::MetadataSource;

use super::error::OmdbError;
use super::types::OmdbMovie;

const BASE_URL: &str = "http://www.omdbapi.com/";

/// The service occasionally hangs; a bounded timeout keeps one slow
/// lookup from stalling the whole poll loop.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// OMDb title-and-year lookup client. No caching, no retries; the next
/// poll cycle is the retry mechanism.
pub struct OmdbClient {
    api_key: String,
    http: Client,
}

impl OmdbClient {
    pub fn new(api_key: String) -> Result<Self, OmdbError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { api_key, http })
    }

    /// Look up a movie by exact title and year.
    pub async fn lookup(&self, title: &str, year: &str) -> Result<MetadataRecord, OmdbError> {
        let resp = self
            .http
            .get(BASE_URL)
            .query(&[("t", title), ("y", year), ("apikey", self.api_key.as_str())])
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(OmdbError::Api { status, message });
        }

        let body: OmdbMovie = resp
            .json()
            .await
            .map_err(|e| OmdbError::Parse(e.to_string()))?;

        if !body.is_success() {
            let reason = body.error.unwrap_or_else(|| "unspecified error".into());
            return Err(OmdbError::NotFound(reason));
        }

        Ok(body.into_record())
    }
}

impl MetadataSource for OmdbClient {
    async fn resolve(&self, title: &str, year: &str) -> Option<MetadataRecord> {
        match self.lookup(title, year).await {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(title = %title, year = %year, error = %e, "Movie lookup failed");
                None
            }
        }
    }
}
