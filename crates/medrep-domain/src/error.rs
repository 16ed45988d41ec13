//! Error handling types

use crate::value_objects::FieldErrors;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for medrep
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Transport-level failure: timeout, refused connection, unexpected status
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The backend rejected the credential (HTTP 401)
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Message reported by the backend
        message: String,
    },

    /// The backend refused access to the resource (HTTP 403)
    #[error("Forbidden: {message}")]
    Forbidden {
        /// Message reported by the backend
        message: String,
    },

    /// The backend rejected the request (other 4xx)
    #[error("Request rejected ({status}): {message}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Message reported by the backend
        message: String,
    },

    /// The backend failed while handling the request (5xx)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Message reported by the backend
        message: String,
    },

    /// A success response whose body does not honour the contract
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Description of what was missing or malformed
        message: String,
    },

    /// Persisted session storage failure
    #[error("Storage error: {message}")]
    Storage {
        /// Description of the storage error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure failure not covered by a more specific variant
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Client-side form validation failed; nothing was sent
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// Login was rejected
    #[error(transparent)]
    Login(#[from] LoginError),

    /// An authenticated operation was attempted without a session
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },
}

// Basic error creation methods
impl Error {
    /// Create a network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Create a network error with source
    pub fn network_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an unauthorized error
    pub fn unauthorized<S: Into<String>>(message: S) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create an invalid response error
    pub fn invalid_response<S: Into<String>>(message: S) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage {
            message: message.into(),
            source: None,
        }
    }

    /// Create a storage error with source
    pub fn storage_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Storage {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Classification helpers
impl Error {
    /// True when the backend answered 401
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// True for transport failures that a user may retry by hand
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Server { .. })
    }

    /// Short human-readable message suitable for a notification
    pub fn user_message(&self) -> String {
        match self {
            Self::Network { .. } => "Unable to reach the server. Please try again.".to_string(),
            Self::Unauthorized { message }
            | Self::Forbidden { message }
            | Self::Rejected { message, .. } => message.clone(),
            Self::Server { .. } => "The server failed to handle the request.".to_string(),
            Self::InvalidResponse { .. } => "Invalid response from server".to_string(),
            Self::Login(err) => err.message.clone(),
            Self::Validation(errors) => errors.to_string(),
            Self::NotAuthenticated => "Please sign in to continue.".to_string(),
            other => other.to_string(),
        }
    }
}

/// Uniform login failure
///
/// Every way a login can go wrong (network, timeout, rejected credentials,
/// malformed reply) is folded into this one shape carrying a message for display.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct LoginError {
    /// Human-readable reason
    pub message: String,
}

impl LoginError {
    /// Create a login error with the given message
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<Error> for LoginError {
    fn from(err: Error) -> Self {
        match err {
            Error::Login(inner) => inner,
            Error::Unauthorized { message } if !message.is_empty() => Self::new(message),
            Error::Unauthorized { .. } => Self::new("Invalid email or password"),
            other => Self::new(other.user_message()),
        }
    }
}
