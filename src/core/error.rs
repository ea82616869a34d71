use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Failures fall into three families: network errors ([`GfError::Http`]),
/// non-success HTTP statuses ([`GfError::Unauthorized`], [`GfError::NotFound`],
/// [`GfError::RateLimited`], [`GfError::ServerError`], [`GfError::Status`]) and
/// payload errors ([`GfError::Data`]). None of them are retried by the client.
#[derive(Debug, Error)]
pub enum GfError {
    /// An error occurred while sending the request or reading the response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server rejected the credentials (HTTP 401 or 403).
    #[error("Unauthorized ({status}) at {endpoint}: {message}")]
    Unauthorized {
        /// The HTTP status code (401 or 403).
        status: u16,
        /// The endpoint that returned the error.
        endpoint: String,
        /// The message returned by the server.
        message: String,
    },

    /// The requested resource was not found (HTTP 404).
    #[error("Not found at {endpoint}: {message}")]
    NotFound {
        /// The endpoint that returned the error.
        endpoint: String,
        /// The message returned by the server.
        message: String,
    },

    /// The server is throttling requests (HTTP 429).
    #[error("Rate limited at {endpoint}: {message}")]
    RateLimited {
        /// The endpoint that returned the error.
        endpoint: String,
        /// The message returned by the server.
        message: String,
    },

    /// The server failed to process the request (HTTP 5xx).
    #[error("Server error {status} at {endpoint}: {message}")]
    ServerError {
        /// The HTTP status code.
        status: u16,
        /// The endpoint that returned the error.
        endpoint: String,
        /// The message returned by the server.
        message: String,
    },

    /// The server returned any other unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {endpoint}: {message}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The endpoint that returned the error.
        endpoint: String,
        /// The message returned by the server.
        message: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("Data format unexpected at {endpoint}: {message}")]
    Data {
        /// The endpoint whose response failed to decode.
        endpoint: String,
        /// The decoder's description of the problem.
        message: String,
    },

    /// Exchanging the access token for a session token failed.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// A parameter was rejected before any request was sent.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// A required configuration value is missing from the environment.
    #[error("Missing configuration: {0}")]
    MissingConfig(String),
}

impl GfError {
    /// The HTTP status code carried by this error, if it stems from a non-2xx response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. }
            | Self::ServerError { status, .. }
            | Self::Status { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            Self::RateLimited { .. } => Some(429),
            _ => None,
        }
    }

    /// The endpoint involved in the failure, when known.
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { endpoint, .. }
            | Self::NotFound { endpoint, .. }
            | Self::RateLimited { endpoint, .. }
            | Self::ServerError { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Data { endpoint, .. } => Some(endpoint),
            _ => None,
        }
    }

    /// `true` if the server answered with a non-success status.
    #[must_use]
    pub const fn is_http_status(&self) -> bool {
        self.status().is_some()
    }

    /// `true` if the response arrived but its body could not be decoded.
    #[must_use]
    pub const fn is_payload(&self) -> bool {
        matches!(self, Self::Data { .. })
    }

    /// Maps a non-success status to the matching variant.
    pub(crate) fn from_status(status: u16, endpoint: String, message: String) -> Self {
        match status {
            401 | 403 => Self::Unauthorized {
                status,
                endpoint,
                message,
            },
            404 => Self::NotFound { endpoint, message },
            429 => Self::RateLimited { endpoint, message },
            500..=599 => Self::ServerError {
                status,
                endpoint,
                message,
            },
            _ => Self::Status {
                status,
                endpoint,
                message,
            },
        }
    }
}
