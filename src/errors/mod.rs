use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    // Request building errors
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    // Transport-level failure (DNS, connection, TLS)
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    // Non-2xx HTTP response from the remote API
    #[error("Remote API error: {status} {status_text}")]
    Remote { status: u16, status_text: String },

    // Response body did not match the expected wire shape
    #[error("Response decoding failed: {0}")]
    Decode(#[from] serde_json::Error),

    // Share errors
    #[error("Share failed: {0}")]
    Share(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

pub type NewsResult<T> = Result<T, NewsError>;
