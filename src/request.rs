//! Request descriptor
use clap::ValueEnum;
use serde::Serialize;
use url::Url;

use crate::errors::{ErrorKind, SwordWardError};
use crate::github::GITHUB_MEDIA_TYPE;

/// HTTP method of a request
#[derive(ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// `GET`
    #[default]
    Get,
    /// `POST`
    Post,
    /// `PATCH`
    Patch,
    /// `UPDATE`, an application-defined verb sent as is
    Update,
    /// `DELETE`
    Delete,
}

impl Method {
    /// Name of the method on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Update => "UPDATE",
            Method::Delete => "DELETE",
        }
    }

    /// Whether a request with this method carries a body
    pub fn carries_body(&self) -> bool {
        matches!(self, Method::Post | Method::Update | Method::Patch)
    }

    /// Convert to the transport's method type
    pub(crate) fn to_reqwest(self) -> Result<reqwest::Method, SwordWardError> {
        let method = match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
            Method::Update => reqwest::Method::from_bytes(self.as_str().as_bytes()).map_err(|e| {
                SwordWardError::new_with_source(
                    ErrorKind::Custom(format!("Invalid method {}", self.as_str())),
                    e,
                )
            })?,
        };
        Ok(method)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Value of the `Content-Type` header
#[derive(ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// `application/json`
    #[default]
    Json,
    /// `application/vnd.github+json`
    Github,
}

impl ContentType {
    /// Header value
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::Github => GITHUB_MEDIA_TYPE,
        }
    }
}

/// Everything needed to issue one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Target URL
    url: Url,

    /// HTTP method
    method: Method,

    /// Content type header value
    content_type: ContentType,

    /// Raw body
    body: Option<Vec<u8>>,

    /// Bearer token
    auth_header: Option<String>,

    /// Send the GitHub API headers
    github_mode: bool,
}

impl Request {
    /// Create a request with no body, no token and `application/json` content type
    pub fn new(url: Url, method: Method) -> Self {
        Self {
            url,
            method,
            content_type: ContentType::default(),
            body: None,
            auth_header: None,
            github_mode: false,
        }
    }

    /// Set the content type
    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    /// Set the raw body. It is only sent for `POST`, `PATCH` and `UPDATE`.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `value` as JSON and use it as the body
    /// # Errors
    /// Error if `value` can't be serialized
    pub fn json<B: Serialize + ?Sized>(self, value: &B) -> Result<Self, SwordWardError> {
        let bytes = serde_json::to_vec(value)?;
        Ok(self.body(bytes))
    }

    /// Set the bearer token. An empty token is treated as no token.
    pub fn auth_header(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.auth_header = if token.is_empty() { None } else { Some(token) };
        self
    }

    /// Enable or disable the GitHub API headers
    pub fn github_mode(mut self, enabled: bool) -> Self {
        self.github_mode = enabled;
        self
    }

    /// Target URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// HTTP method
    pub fn method(&self) -> Method {
        self.method
    }

    /// Content type
    pub fn get_content_type(&self) -> ContentType {
        self.content_type
    }

    /// Bearer token, if any
    pub fn get_auth_header(&self) -> Option<&str> {
        self.auth_header.as_deref()
    }

    /// Whether the GitHub API headers are sent
    pub fn is_github_mode(&self) -> bool {
        self.github_mode
    }

    /// The body that goes on the wire: the given body for mutating methods, nothing otherwise
    pub fn outgoing_body(&self) -> Option<&[u8]> {
        if self.method.carries_body() {
            self.body.as_deref()
        } else {
            None
        }
    }
}
