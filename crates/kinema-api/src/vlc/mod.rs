pub mod client;
pub mod error;
pub mod types;

pub use client::VlcClient;
pub use error::VlcError;
