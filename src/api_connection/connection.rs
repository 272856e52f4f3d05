use std::error::Error;
use std::fmt;

/// Failure modes shared by both upstream clients. `ApiError` keeps the
/// upstream status and body for server-side logs; callers never see them.
#[derive(Debug)]
pub enum ApiConnectionError {
    ApiError {
        status: reqwest::StatusCode,
        error_body: String,
    },
    NetworkError(reqwest::Error),
    SerializationError(serde_json::Error),
    MissingApiKey(String),
}

impl fmt::Display for ApiConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiConnectionError::ApiError { status, error_body } => {
                write!(f, "Upstream returned {}: {}", status, error_body)
            }
            ApiConnectionError::NetworkError(err) => write!(f, "Network error: {}", err),
            ApiConnectionError::SerializationError(err) => {
                write!(f, "Could not decode upstream response: {}", err)
            }
            ApiConnectionError::MissingApiKey(key_name) => {
                write!(f, "API key not set in environment: {}", key_name)
            }
        }
    }
}

impl Error for ApiConnectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiConnectionError::NetworkError(err) => Some(err),
            ApiConnectionError::SerializationError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiConnectionError {
    fn from(err: reqwest::Error) -> Self {
        ApiConnectionError::NetworkError(err)
    }
}

impl From<serde_json::Error> for ApiConnectionError {
    fn from(err: serde_json::Error) -> Self {
        ApiConnectionError::SerializationError(err)
    }
}
