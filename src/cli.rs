//! Command line options for the swordward tool
use crate::{
    config::Config,
    errors::SwordWardError,
    executor::Core,
    request::{ContentType, Method, Request},
};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use url::Url;

/// swordward - Send one HTTP request and print the JSON response
#[derive(Parser, Default, Clone, Debug)]
pub struct SwordWardCli {
    /// Target URL
    #[arg(required_unless_present = "show_config_path")]
    pub url: Option<Url>,

    /// HTTP method
    #[arg(short = 'X', long, value_enum, default_value_t = Method::Get)]
    pub method: Method,

    /// Request body (sent only for post, patch and update)
    #[arg(short, long)]
    pub data: Option<String>,

    /// Bearer token (defaults to the one in the config file)
    #[arg(short, long)]
    pub token: Option<String>,

    /// Send the GitHub API headers
    #[arg(short, long)]
    pub github: bool,

    /// Content type of the body
    #[arg(long, value_enum, default_value_t = ContentType::Json)]
    pub content_type: ContentType,

    /// Custom configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Show the current config path
    #[arg(long)]
    pub show_config_path: bool,

    /// Verbose mode (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SwordWardCli {
    /// Log level matching the verbosity
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Build the request described by the CLI arguments and the config file
/// # Errors
/// Error if no URL was given
pub fn request_from_config(config: &Config) -> Result<Request, SwordWardError> {
    let args = &config.cli_args;
    let url = args.url.clone().ok_or("No URL given")?;
    let mut request = Request::new(url, args.method)
        .content_type(args.content_type)
        .github_mode(config.github_mode());
    if let Some(token) = config.token() {
        request = request.auth_header(token);
    }
    if let Some(data) = &args.data {
        request = request.body(data.as_bytes());
    }
    Ok(request)
}

/// Run the swordward tool with the provided command line options
/// # Errors
/// Error if the config can't be loaded, the request fails, or the output can't be encoded
pub async fn swordward_main(args: SwordWardCli) -> Result<(), SwordWardError> {
    let config = Config::try_new(args)?;
    if config.cli_args.show_config_path {
        println!("{}", config.config_path.display());
        return Ok(());
    }
    let request = request_from_config(&config)?;
    let core = Core::from_config(&config.config_data);
    let value: serde_json::Value = core.request(&request).await?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
