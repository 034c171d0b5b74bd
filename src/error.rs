/// Failure classes surfaced by the client and the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or invalid credential, detected before any request is made
    #[error("configuration error: {0}")]
    Config(String),

    /// Credential rejected by the remote service
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Network-level failure reaching the remote service
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Error status, malformed body or empty response from the remote service
    #[error("upstream error: {0}")]
    Upstream(String),
}

pub type Result<T> = std::result::Result<T, Error>;
