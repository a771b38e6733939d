use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, Error)]
pub enum LoggerError {
    /// Startup validation failure. Fatal before the loop starts.
    #[error("configuration: {0}")]
    Config(String),

    /// Non-2xx response from the remote store.
    #[error("remote store returned {status} for {path}: {body}")]
    RemoteStatus {
        path: String,
        status: u16,
        body: String,
    },

    /// Transport failure (connect, TLS, timeout). Recoverable per call.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}
