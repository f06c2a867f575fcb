use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Request lifecycle
    #[error("no transport available, acquisition failed at construction")]
    NotConnected,
    #[error("server answered with HTTP status {0}")]
    HttpStatus(u16),
    #[error("unknown response format: {0}")]
    UnknownFormat(String),

    // Wrapped external errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    // Transport pass-through for backend crates
    #[error("transfer failed: {0}")]
    Transfer(Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T> = std::result::Result<T, Error>;
