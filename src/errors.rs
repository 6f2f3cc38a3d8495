use thiserror::Error;

use crate::implementations::config::ConfigError;

/// Custom error types for the Vattavada client
#[derive(Debug, Error)]
pub enum StayError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: {status} - {message}")]
    Http { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("Admin session required, run `login` first")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<reqwest::Error> for StayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StayError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            StayError::Http {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            StayError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for StayError {
    fn from(err: serde_json::Error) -> Self {
        StayError::Decode(err.to_string())
    }
}

/// Form and request validation failures, raised before any network call
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Minimum guests ({min}) cannot be greater than maximum guests ({max})")]
    InvalidGuestRange { min: u32, max: u32 },

    #[error("Field {field} is not a valid number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Unknown property type: {0}")]
    UnknownPropertyType(String),

    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("Check-out date must be after check-in date")]
    InvalidDateRange,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AuthError {
    #[error("Invalid login credentials")]
    InvalidCredentials,

    #[error("No admin credentials are configured")]
    NotConfigured,

    #[error("Could not persist the session flag: {0}")]
    Persist(String),
}

/// Result type specific to Vattavada operations
pub type StayResult<T> = Result<T, StayError>;

/// Recoverable vs. non-recoverable errors
pub trait RecoverableError {
    fn is_recoverable(&self) -> bool;
    fn recovery_strategy(&self) -> Option<String>;
}

impl RecoverableError for StayError {
    // Nothing here is fatal; every failure leaves the caller able to retry.
    fn is_recoverable(&self) -> bool {
        true
    }

    fn recovery_strategy(&self) -> Option<String> {
        match self {
            StayError::Network(_) => Some("Check that the backend is reachable and retry".to_string()),
            StayError::Http { status, .. } if *status >= 500 => {
                Some("The backend reported an internal error, retry later".to_string())
            }
            StayError::Validation(_) => Some("Correct the input and submit again".to_string()),
            StayError::Auth(AuthError::InvalidCredentials) => {
                Some("Retry with the correct login id and password".to_string())
            }
            StayError::Auth(AuthError::NotConfigured) => Some(
                "Set VATTAVADA_ADMIN_LOGIN_ID and VATTAVADA_ADMIN_PASSWORD or add `admin` to the config file"
                    .to_string(),
            ),
            StayError::Unauthorized => Some("Run `vattavada login`".to_string()),
            StayError::Config(_) => Some("Fix the configuration file and retry".to_string()),
            _ => None,
        }
    }
}

/// Recovery hint for the first `StayError` in an error chain.
///
/// Context added with `anyhow::Context` keeps the inner error reachable, so a
/// wrapped failure still yields its hint.
pub fn recovery_hint(error: &anyhow::Error) -> Option<String> {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<StayError>())
        .and_then(|e| e.recovery_strategy())
}
