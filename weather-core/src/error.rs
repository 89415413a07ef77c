use thiserror::Error;

/// Failures surfaced by the upstream weather provider.
///
/// Status translation to the service's own HTTP responses happens in the
/// server handlers; this enum only captures what went wrong upstream.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Upstream answered 404 for the requested location.
    #[error("city not found")]
    CityNotFound,

    /// Upstream rejected the configured API key (401).
    #[error("invalid API key")]
    InvalidApiKey,

    /// Upstream answered with any other non-200 status.
    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),

    /// The 10-second client timeout elapsed before a response arrived.
    #[error("request timed out")]
    Timeout,

    /// Transport-level failure other than a timeout.
    #[error("{0}")]
    Network(String),

    /// Upstream answered 200 but the payload was missing expected fields.
    #[error("malformed upstream payload: {0}")]
    MalformedPayload(String),
}
