use thiserror::Error;

#[derive(Debug, Error)]
pub enum RozhlasError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} when fetching {url}")]
    Status { status: u16, url: String },

    /// An expected-unique page element is missing or duplicated. Indicates
    /// upstream markup drift and aborts the whole request.
    #[error("unexpected page structure: {0}")]
    Structure(String),

    #[error("invalid {layout} timestamp {raw:?}")]
    Timestamp {
        layout: &'static str,
        raw: String,
        source: chrono::ParseError,
    },

    /// The parsed wall-clock time falls into a DST gap and names no instant.
    #[error("timestamp {raw:?} does not exist in Europe/Prague")]
    InvalidLocalTime { raw: String },

    #[error("invalid selector: {0}")]
    Selector(String),
}
