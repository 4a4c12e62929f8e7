use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure: connect, TLS, timeout, or a non-2xx status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Slack answered `ok: false`; `code` is the platform's error string
    /// (e.g. `invalid_auth`, `ratelimited`).
    #[error("Slack API error: {code}")]
    Api { code: String },

    /// The payload did not match the expected wire shape.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub fn api(code: impl Into<String>) -> Self {
        Self::Api { code: code.into() }
    }
}
