pub mod config;
pub mod driver;
pub mod error;
pub mod models;
pub mod presence;
pub mod traits;
