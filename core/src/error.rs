use http::StatusCode;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// The error type for fireblocks operations.
///
/// Whether `status` and `response` are populated tells a caller which side
/// of the wire failed: a request that never reached the server carries
/// neither, while a rejected request carries the status code and whatever
/// JSON payload the service returned.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    status: Option<StatusCode>,
    response: Option<Value>,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Credentials exist but are invalid/malformed
    CredentialInvalid,

    /// A token could not be produced; no request was sent
    SigningFailed,

    /// Request cannot be built (invalid path, header value, etc.)
    RequestInvalid,

    /// The request never completed a round trip (connection error, timeout)
    TransportFailed,

    /// The server replied but the body was not parseable JSON
    ResponseInvalid,

    /// The server replied with a non-success status (strict mode only)
    ApiRejected,

    /// Unexpected errors
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            response: None,
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attach the HTTP status code of the failing response
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// Attach the parsed response payload of the failing response
    pub fn with_response(mut self, response: Value) -> Self {
        self.response = Some(response);
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// HTTP status code of the failing response, if one arrived
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Parsed JSON payload of the failing response, if one arrived
    pub fn response(&self) -> Option<&Value> {
        self.response.as_ref()
    }

    /// Machine error code from the response payload, if the service sent one
    pub fn code(&self) -> Option<i64> {
        self.response.as_ref()?.get("code")?.as_i64()
    }

    /// Check if this error happened before any network I/O
    pub fn is_pre_flight(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::CredentialInvalid | ErrorKind::SigningFailed | ErrorKind::RequestInvalid
        )
    }
}

// Convenience constructors
impl Error {
    /// Create a credential invalid error
    pub fn credential_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialInvalid, message)
    }

    /// Create a signing failed error
    pub fn signing_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SigningFailed, message)
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a transport failed error
    pub fn transport_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TransportFailed, message)
    }

    /// Create a response invalid error
    pub fn response_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ResponseInvalid, message)
    }

    /// Create an api rejected error
    pub fn api_rejected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ApiRejected, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::CredentialInvalid => write!(f, "invalid credentials"),
            ErrorKind::SigningFailed => write!(f, "token signing failed"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::TransportFailed => write!(f, "transport failed"),
            ErrorKind::ResponseInvalid => write!(f, "invalid response"),
            ErrorKind::ApiRejected => write!(f, "request rejected by the api"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
