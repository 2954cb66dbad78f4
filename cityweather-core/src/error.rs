use thiserror::Error;

/// Fieldless tag for a [`LookupError`], convenient for matching and display
/// decisions without destructuring the detail payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    MissingInput,
    MissingCredential,
    InvalidResponseBody,
    AuthenticationFailed,
    CityNotFound,
    ApiError,
    ConnectionFailed,
    TimedOut,
    NetworkError,
    IncompleteResponse,
    Unexpected,
}

/// Classified failure of a single weather lookup.
///
/// Every way a lookup can go wrong maps to exactly one variant; none of them
/// abort the process. The caller renders the message and may retry by
/// invoking the lookup again.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("no city name provided")]
    MissingInput,

    #[error("no API key provided; set OPENWEATHER_API_KEY or configure one")]
    MissingCredential,

    #[error("weather service returned an unparseable response body")]
    InvalidResponseBody,

    #[error("authentication failed: {detail}")]
    AuthenticationFailed { detail: String },

    #[error("city not found: {detail}")]
    CityNotFound { detail: String },

    #[error("weather service error (status {code}): {detail}")]
    ApiError { code: i64, detail: String },

    #[error("could not connect to the weather service")]
    ConnectionFailed,

    #[error("request to the weather service timed out")]
    TimedOut,

    #[error("network error: {detail}")]
    NetworkError { detail: String },

    #[error("weather service response was missing required fields")]
    IncompleteResponse,

    #[error("unexpected error: {detail}")]
    Unexpected { detail: String },
}

impl LookupError {
    pub fn kind(&self) -> FailureKind {
        match self {
            LookupError::MissingInput => FailureKind::MissingInput,
            LookupError::MissingCredential => FailureKind::MissingCredential,
            LookupError::InvalidResponseBody => FailureKind::InvalidResponseBody,
            LookupError::AuthenticationFailed { .. } => FailureKind::AuthenticationFailed,
            LookupError::CityNotFound { .. } => FailureKind::CityNotFound,
            LookupError::ApiError { .. } => FailureKind::ApiError,
            LookupError::ConnectionFailed => FailureKind::ConnectionFailed,
            LookupError::TimedOut => FailureKind::TimedOut,
            LookupError::NetworkError { .. } => FailureKind::NetworkError,
            LookupError::IncompleteResponse => FailureKind::IncompleteResponse,
            LookupError::Unexpected { .. } => FailureKind::Unexpected,
        }
    }

    /// Detail text for variants that carry one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            LookupError::AuthenticationFailed { detail }
            | LookupError::CityNotFound { detail }
            | LookupError::ApiError { detail, .. }
            | LookupError::NetworkError { detail }
            | LookupError::Unexpected { detail } => Some(detail),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        // Connection failures are classified before timeouts: a timed-out
        // connect counts as a connection failure, not a timeout.
        if err.is_connect() {
            LookupError::ConnectionFailed
        } else if err.is_timeout() {
            LookupError::TimedOut
        } else if err.is_builder() {
            LookupError::Unexpected { detail: err.to_string() }
        } else {
            LookupError::NetworkError { detail: err.to_string() }
        }
    }
}
