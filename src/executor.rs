//! Request executor
use log::{debug, error};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ConfigData;
use crate::errors::{ErrorKind, SwordWardError};
use crate::github::{GITHUB_API_HEADER, GITHUB_API_VERSION, GITHUB_MEDIA_TYPE};
use crate::request::{Method, Request};

/// Default `User-Agent` header
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Issues one request per call and decodes the JSON response.
///
/// Cloning is cheap and clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct Core {
    /// Reqwest client
    client: reqwest::Client,

    /// `User-Agent` header value
    user_agent: String,
}

impl Default for Core {
    fn default() -> Self {
        Self::new()
    }
}

impl Core {
    /// Create a new Core
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Create a Core on top of an existing client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Create a Core from the configuration file data
    pub fn from_config(config: &ConfigData) -> Self {
        match &config.user_agent {
            Some(user_agent) => Self::new().user_agent(user_agent.clone()),
            None => Self::new(),
        }
    }

    /// Set the `User-Agent` header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the outgoing request without sending it
    /// # Errors
    /// Error if a header value is invalid
    pub fn build_request(&self, request: &Request) -> Result<reqwest::Request, SwordWardError> {
        let mut builder = self
            .client
            .request(request.method().to_reqwest()?, request.url().clone())
            .header(USER_AGENT, self.user_agent.as_str());
        if let Some(token) = request.get_auth_header() {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if request.is_github_mode() {
            builder = builder
                .header(GITHUB_API_HEADER, GITHUB_API_VERSION)
                .header(ACCEPT, GITHUB_MEDIA_TYPE);
        }
        builder = builder.header(CONTENT_TYPE, request.get_content_type().as_str());
        if let Some(body) = request.outgoing_body() {
            builder = builder.body(body.to_vec());
        }
        Ok(builder.build()?)
    }

    /// Send `request` and decode the response body as `T`.
    ///
    /// Only a `200 OK` response is accepted.
    /// # Errors
    /// - [`ErrorKind::Transport`] if the request can't be sent or the body can't be read
    /// - [`ErrorKind::InvalidResponse`] if the status isn't 200 or the body doesn't decode as `T`
    pub async fn request<T: DeserializeOwned>(&self, request: &Request) -> Result<T, SwordWardError> {
        let outgoing = self.build_request(request)?;
        debug!("{} {}", outgoing.method(), outgoing.url());
        let response = self.client.execute(outgoing).await?;
        let status = response.status();
        if status != StatusCode::OK {
            debug!("{} {} answered {}", request.method(), request.url(), status);
            return Err(SwordWardError::new(ErrorKind::InvalidResponse).with_status(status));
        }
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            error!("Unable to decode response of {}: {e}", request.url());
            SwordWardError::new_with_source(ErrorKind::InvalidResponse, e).with_status(status)
        })
    }

    /// `GET` `url` with no token and decode the response
    /// # Errors
    /// Same as [`Core::request`]
    pub async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, SwordWardError> {
        self.request(&Request::new(url, Method::Get)).await
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::request::ContentType;

    fn url() -> Url {
        Url::parse("https://api.example.com/items").unwrap()
    }

    fn body_bytes(request: &reqwest::Request) -> Option<&[u8]> {
        request.body().and_then(|b| b.as_bytes())
    }

    #[test]
    fn plain_get_headers() {
        let core = Core::new();
        let built = core.build_request(&Request::new(url(), Method::Get)).unwrap();
        assert_eq!(built.method(), reqwest::Method::GET);
        assert_eq!(built.url().as_str(), "https://api.example.com/items");
        assert_eq!(built.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(built.headers()[USER_AGENT], DEFAULT_USER_AGENT);
        assert!(built.headers().get(AUTHORIZATION).is_none());
        assert!(built.headers().get(ACCEPT).is_none());
        assert!(built.headers().get(GITHUB_API_HEADER).is_none());
        assert_eq!(built.headers().len(), 2);
        assert!(built.body().is_none());
    }

    #[test]
    fn post_with_token_and_body() {
        let core = Core::new();
        let request = Request::new(url(), Method::Post)
            .body("{\"name\":\"x\"}")
            .auth_header("tok");
        let built = core.build_request(&request).unwrap();
        assert_eq!(built.method(), reqwest::Method::POST);
        assert_eq!(built.headers()[AUTHORIZATION], "Bearer tok");
        assert_eq!(built.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(body_bytes(&built), Some(&b"{\"name\":\"x\"}"[..]));
    }

    #[test]
    fn body_dropped_for_get_and_delete() {
        let core = Core::new();
        for method in [Method::Get, Method::Delete] {
            let request = Request::new(url(), method).body("payload");
            let built = core.build_request(&request).unwrap();
            assert!(built.body().is_none(), "{method} should not carry a body");
        }
        for method in [Method::Post, Method::Patch, Method::Update] {
            let request = Request::new(url(), method).body("payload");
            let built = core.build_request(&request).unwrap();
            assert_eq!(built.method().as_str(), method.as_str());
            assert_eq!(body_bytes(&built), Some(&b"payload"[..]));
        }
    }

    #[test]
    fn github_mode_headers() {
        let core = Core::new();
        let request = Request::new(url(), Method::Get).github_mode(true);
        let built = core.build_request(&request).unwrap();
        assert_eq!(built.headers()[GITHUB_API_HEADER], "2022-11-28");
        assert_eq!(built.headers()[ACCEPT], "application/vnd.github+json");
        assert_eq!(built.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn github_content_type() {
        let core = Core::new().user_agent("tester");
        let request = Request::new(url(), Method::Get).content_type(ContentType::Github);
        let built = core.build_request(&request).unwrap();
        assert_eq!(built.headers()[CONTENT_TYPE], "application/vnd.github+json");
        assert_eq!(built.headers()[USER_AGENT], "tester");
    }

    #[test]
    fn invalid_token_is_rejected() {
        let core = Core::new();
        let request = Request::new(url(), Method::Get).auth_header("bad\ntoken");
        let err = core.build_request(&request).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Transport);
    }

    #[test]
    fn from_config_user_agent() {
        let config = ConfigData {
            user_agent: Some("my-agent".to_string()),
            ..Default::default()
        };
        let core = Core::from_config(&config);
        let built = core.build_request(&Request::new(url(), Method::Get)).unwrap();
        assert_eq!(built.headers()[USER_AGENT], "my-agent");
    }
}
