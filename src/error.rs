use thiserror::Error;

/// Failure to get any response out of the server. A response that did
/// arrive, whatever its status, is never an error.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid url {0}: {1}")]
    InvalidUrl(String, #[source] url::ParseError),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("a submission is already in flight")]
    Busy,

    #[error(transparent)]
    Transport(#[from] TransportError),
}
