use thiserror::Error;

#[derive(Debug, Error)]
pub enum KinemaError {
    #[error("config error: {0}")]
    Config(String),

    #[error("player status error: {0}")]
    Player(String),

    #[error("metadata lookup error: {0}")]
    Metadata(String),

    #[error("presence error: {0}")]
    Presence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
