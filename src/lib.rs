//! # swordward
//!
//! Issue one HTTP request and decode its JSON response.
//!
//! A [`Request`] carries the URL, the method, the content type, an optional
//! body, an optional bearer token and an optional GitHub mode. [`Core::request`]
//! sends it, accepts only a `200 OK` response and decodes the body into any
//! type implementing [`serde::de::DeserializeOwned`].
//!
//! ```no_run
//! use serde::Deserialize;
//! use swordward::{Core, Method, Request};
//!
//! #[derive(Deserialize)]
//! struct Item {
//!     id: u64,
//! }
//!
//! # async fn run() -> Result<(), swordward::SwordWardError> {
//! let url = url::Url::parse("https://api.example.com/items").map_err(|e| e.to_string())?;
//! let request = Request::new(url, Method::Post)
//!     .body(r#"{"name":"x"}"#)
//!     .auth_header("tok");
//! let item: Item = Core::new().request(&request).await?;
//! println!("{}", item.id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Usage
//!
//! ```txt
//! Usage: swordward [OPTIONS] <URL>
//!
//! Arguments:
//!   <URL>  Target URL
//!
//! Options:
//!  -X, --method <METHOD>              HTTP method [default: get] [possible values: get, post, patch, update, delete]
//!  -d, --data <DATA>                  Request body (sent only for post, patch and update)
//!  -t, --token <TOKEN>                Bearer token (defaults to the one in the config file)
//!  -g, --github                       Send the GitHub API headers
//!      --content-type <CONTENT_TYPE>  Content type of the body [default: json] [possible values: json, github]
//!  -c, --config <CONFIG>              Custom configuration file path
//!      --show-config-path             Show the current config path
//!  -v, --verbose...                   Verbose mode (-v, -vv)
//!  -h, --help                         Print help
//! ```

#![warn(clippy::all, rust_2018_idioms)]
#![deny(
    missing_docs,
    clippy::all,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![warn(clippy::multiple_crate_versions)]

pub(crate) mod cli;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod executor;
pub(crate) mod github;
pub(crate) mod request;

pub use cli::{request_from_config, swordward_main, SwordWardCli};
pub use config::{Config, ConfigData};
pub use errors::{ErrorKind, SwordWardError};
pub use executor::{Core, DEFAULT_USER_AGENT};
pub use github::{GITHUB_API_HEADER, GITHUB_API_VERSION, GITHUB_MEDIA_TYPE};
pub use request::{ContentType, Method, Request};
