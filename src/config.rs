//! Configuration handling
use std::{
    fs::{create_dir_all, read_to_string, File},
    io::Write,
    path::PathBuf,
};

use home::home_dir;
use serde::{Deserialize, Serialize};

use crate::{
    cli::SwordWardCli,
    errors::{ErrorKind, SwordWardError},
};

/// Configuration data
#[derive(Default, Clone, Debug)]
pub struct Config {
    /// path to the configuration file
    pub config_path: PathBuf,

    /// actual configuration data
    pub config_data: ConfigData,

    /// CLI arguments
    pub cli_args: SwordWardCli,
}

/// Content of the configuration file
#[derive(Deserialize, Serialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct ConfigData {
    /// Default bearer token
    pub token: Option<String>,

    /// `User-Agent` header value
    pub user_agent: Option<String>,

    /// Send the GitHub API headers by default
    pub github_mode: Option<bool>,
}

impl Config {
    /// Create a new Config object from the CLI arguments
    /// # Errors
    /// Error if the config file can't be opened or parsed
    pub fn try_new(cli_args: SwordWardCli) -> Result<Self, SwordWardError> {
        let config_path = match cli_args.config.clone() {
            Some(p) => p,
            None => Self::get_config_path()?,
        };
        let contents = read_to_string(&config_path).map_err(|e| {
            SwordWardError::new_with_source(
                ErrorKind::Config,
                format!("Unable to open {}: {e}", config_path.display()),
            )
        })?;
        let config_data = toml::from_str(&contents)?;
        Ok(Config {
            config_path,
            config_data,
            cli_args,
        })
    }

    /// Get the path to the config file, creating an empty one if needed
    /// # Errors
    /// Error if the home directory can't be found or the file can't be created
    pub fn get_config_path() -> Result<PathBuf, SwordWardError> {
        let home_dir = match home_dir() {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => {
                return Err(SwordWardError::new_with_source(
                    ErrorKind::Config,
                    "Unable to get your home dir! home::home_dir() isn't working",
                ))
            }
        };
        let config_directory = home_dir.join(".config").join(".swordward");
        let config_path = config_directory.join("config.toml");
        create_dir_all(config_directory)?;
        if !config_path.exists() {
            let mut file = File::create(&config_path)?;
            file.write_all(b"")?;
        }
        Ok(config_path)
    }

    /// Bearer token to use: the CLI one, else the configured one
    pub fn token(&self) -> Option<&str> {
        self.cli_args
            .token
            .as_deref()
            .or(self.config_data.token.as_deref())
    }

    /// Whether to send the GitHub API headers
    pub fn github_mode(&self) -> bool {
        self.cli_args.github || self.config_data.github_mode.unwrap_or(false)
    }
}
