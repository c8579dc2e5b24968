//! Error handling for the swordward crate.
use std::{error::Error as StdError, fmt};

use reqwest::StatusCode;

/// Error type for the swordward crate.
#[derive(Debug)]
pub struct SwordWardError {
    /// Inner error.
    inner: Box<Inner>,
}

impl SwordWardError {
    /// Create a new error.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            inner: Box::new(Inner {
                kind,
                status: None,
                source: None,
            }),
        }
    }

    /// Create a new error of the given kind with a source.
    pub(crate) fn new_with_source<E>(kind: ErrorKind, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::new(kind).with_source(source)
    }

    /// Attach a source error.
    pub(crate) fn with_source<E>(mut self, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        self.inner.source = Some(source.into());
        self
    }

    /// Attach the HTTP status of the response that caused the error.
    pub(crate) fn with_status(mut self, status: StatusCode) -> Self {
        self.inner.status = Some(status);
        self
    }

    /// The kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }

    /// The HTTP status of the response, if the error came from one.
    pub fn status(&self) -> Option<StatusCode> {
        self.inner.status
    }

    /// Returns true if this is an [`ErrorKind::InvalidResponse`] error.
    pub fn is_invalid_response(&self) -> bool {
        matches!(self.inner.kind, ErrorKind::InvalidResponse)
    }
}

/// Type alias for a boxed error.
pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;

/// Inner error type for the swordward crate.
#[derive(Debug)]
struct Inner {
    /// Error kind.
    kind: ErrorKind,

    /// Status of the offending response
    status: Option<StatusCode>,

    /// Source error.
    source: Option<BoxError>,
}

/// Kinds of [`SwordWardError`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The request was malformed.
    BadRequest,

    /// The credentials were missing or rejected.
    Unauthorized,

    /// The credentials lack permission.
    Forbidden,

    /// The status was not 200, or the body did not decode.
    InvalidResponse,

    /// The server failed.
    InternalServerError,

    /// The server is unavailable.
    ServiceUnavailable,

    /// Free-form error text.
    Custom(String),

    /// A value could not be encoded.
    BadEncoding,

    /// The request could not be sent, or the response body could not be read.
    Transport,

    /// The configuration could not be located, read or parsed.
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::BadRequest => write!(f, "bad request"),
            ErrorKind::Unauthorized => write!(f, "unauthorized"),
            ErrorKind::Forbidden => write!(f, "forbidden"),
            ErrorKind::InvalidResponse => write!(f, "invalid response"),
            ErrorKind::InternalServerError => write!(f, "internal server error"),
            ErrorKind::ServiceUnavailable => write!(f, "service unavailable"),
            ErrorKind::Custom(message) => write!(f, "{message}"),
            ErrorKind::BadEncoding => write!(f, "bad encoding"),
            ErrorKind::Transport => write!(f, "transport error"),
            ErrorKind::Config => write!(f, "configuration error"),
        }
    }
}

impl fmt::Display for SwordWardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.kind)?;
        if let Some(status) = self.inner.status {
            write!(f, " (status {})", status.as_u16())?;
        }
        if let Some(source) = &self.inner.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl StdError for SwordWardError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source.as_ref().map(|e| &**e as _)
    }
}

impl From<ErrorKind> for SwordWardError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<&str> for SwordWardError {
    fn from(message: &str) -> Self {
        Self::new(ErrorKind::Custom(message.to_string()))
    }
}

impl From<String> for SwordWardError {
    fn from(message: String) -> Self {
        Self::new(ErrorKind::Custom(message))
    }
}

impl From<reqwest::Error> for SwordWardError {
    fn from(e: reqwest::Error) -> Self {
        Self::new_with_source(ErrorKind::Transport, e)
    }
}

impl From<serde_json::Error> for SwordWardError {
    fn from(e: serde_json::Error) -> Self {
        Self::new_with_source(ErrorKind::BadEncoding, e)
    }
}

impl From<std::io::Error> for SwordWardError {
    fn from(e: std::io::Error) -> Self {
        Self::new_with_source(ErrorKind::Config, e)
    }
}

impl From<toml::de::Error> for SwordWardError {
    fn from(e: toml::de::Error) -> Self {
        Self::new_with_source(ErrorKind::Config, e)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn custom_from_str() {
        let err: SwordWardError = "something broke".into();
        assert_eq!(err.kind(), &ErrorKind::Custom("something broke".to_string()));
        assert_eq!(err.to_string(), "something broke");
        assert!(err.source().is_none());
    }

    #[test]
    fn invalid_response_with_status() {
        let err = SwordWardError::new(ErrorKind::InvalidResponse).with_status(StatusCode::NOT_FOUND);
        assert!(err.is_invalid_response());
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(err.to_string(), "invalid response (status 404)");
    }

    #[test]
    fn decode_failure_keeps_source() {
        let parse_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = SwordWardError::new_with_source(ErrorKind::InvalidResponse, parse_err);
        assert!(err.is_invalid_response());
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("invalid response: "));
    }

    #[test]
    fn io_error_is_config() {
        let err: SwordWardError = std::io::Error::other("missing").into();
        assert_eq!(err.kind(), &ErrorKind::Config);
    }
}
