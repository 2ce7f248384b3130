/// Errors raised inside the data-access layer.
///
/// Repositories never hand these to callers: reads turn them into empty
/// results and writes into `None`/`false`, after logging.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("Backend error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The response did not have the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// The configured endpoint could not be turned into a request URL.
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
