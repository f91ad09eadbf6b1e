use thiserror::Error;

/// Why the catalog could not be fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("catalog request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("catalog request returned HTTP {status}")]
    Status { status: u16 },
    #[error("catalog response could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write to clipboard: {0}")]
    Write(#[source] std::io::Error),
    #[error("host clipboard rejected the text: {0}")]
    Host(String),
}
