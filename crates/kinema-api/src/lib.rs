//! HTTP clients for the two external services kinema talks to:
//! VLC's status interface and the OMDb movie database.

pub mod omdb;
pub mod vlc;
