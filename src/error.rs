/// All errors that can occur when talking to the companion backend.
#[derive(thiserror::Error, Debug)]
pub enum PitchsideError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The upstream sports-data provider rejected the call with HTTP 429.
    ///
    /// Callers normally surface this as a "try again in 60 seconds" state
    /// rather than an error banner.
    #[error("rate limited for {url}")]
    RateLimited { url: String },

    /// Server rejected the call with HTTP 401 or 403.
    ///
    /// Whether this ends the session or merely prompts a re-login is the
    /// caller's policy; comment endpoints conventionally get the latter.
    #[error("authentication required for {url}")]
    Unauthorized { url: String },

    /// Failed to decode a JSON response body.
    #[error("failed to decode response from {url}: {source}")]
    Json {
        url: String,
        source: reqwest::Error,
    },
}

impl PitchsideError {
    /// True for HTTP 429 responses from the upstream provider.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, PitchsideError::RateLimited { .. })
    }

    /// True for HTTP 401/403 responses.
    pub fn is_auth(&self) -> bool {
        matches!(self, PitchsideError::Unauthorized { .. })
    }
}

pub type Result<T> = std::result::Result<T, PitchsideError>;
