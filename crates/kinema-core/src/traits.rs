//! Trait seams between the pipeline and its I/O backends.
//!
//! The driver is written against these traits so the real OMDb client
//! and Discord connection can be swapped for in-memory fakes in tests.

use std::future::Future;

use crate::error::KinemaError;
use crate::models::{MetadataRecord, PresencePayload};

/// A movie metadata lookup service.
pub trait MetadataSource: Send + Sync {
    /// Resolve a (title, year) pair to a metadata record.
    ///
    /// Every failure mode — service unreachable, error response, no
    /// match — collapses to `None`; callers only see the binary
    /// resolved/unresolved distinction.
    fn resolve(
        &self,
        title: &str,
        year: &str,
    ) -> impl Future<Output = Option<MetadataRecord>> + Send;
}

/// A destination for rendered presence payloads.
pub trait PresenceSink {
    /// Push a payload, overwriting whatever was shown before.
    fn update(&mut self, payload: &PresencePayload) -> Result<(), KinemaError>;
}
