use thiserror::Error;

pub type PbinResult<T> = Result<T, PbinError>;

#[derive(Debug, Error)]
pub enum PbinError {
    #[error("secure random source unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("encryption failed: {0}")]
    Encryption(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid expiration identifier: {0:?}")]
    InvalidExpiration(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("server rejected paste (status {status}): {message}")]
    ServerRejection { status: u16, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PbinError {
    /// True for failures that happened before anything left the machine.
    pub fn is_local(&self) -> bool {
        !matches!(self, Self::Transport(_) | Self::ServerRejection { .. })
    }
}
