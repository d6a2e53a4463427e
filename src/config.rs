use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILE, GITHUB_API_URL, LINEAR_API_URL};
use crate::error::{LinkError, LinkResult};

/// Optional on-disk fallback for the Linear key, `~/.linear-pr-link.json`.
/// CI environments normally pass everything through the environment instead.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    pub linear_api_key: Option<String>,
}

/// Fully resolved run configuration. Clients receive this explicitly;
/// nothing reads ambient globals after construction.
#[derive(Debug, Clone)]
pub struct LinkConfig {
    pub github_token: String,
    pub linear_api_key: String,
    pub github_api_url: String,
    pub linear_api_url: String,
}

impl LinkConfig {
    /// Resolve credentials and endpoints from the environment. Each missing
    /// credential fails with its own message so CI logs point at the exact
    /// variable to set.
    pub fn from_env() -> LinkResult<Self> {
        let github_token = env::var("GITHUB_TOKEN").map_err(|_| {
            LinkError::MissingConfig(
                "GitHub token not found. Set the GITHUB_TOKEN environment variable.".to_string(),
            )
        })?;

        let linear_api_key = get_linear_api_key()?;

        Ok(LinkConfig {
            github_token,
            linear_api_key,
            github_api_url: env::var("LINK_GITHUB_API_URL")
                .unwrap_or_else(|_| GITHUB_API_URL.to_string()),
            linear_api_url: env::var("LINK_LINEAR_API_URL")
                .unwrap_or_else(|_| LINEAR_API_URL.to_string()),
        })
    }
}

pub fn load_config_file_from(path: &Path) -> ConfigFile {
    if path.exists() {
        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => ConfigFile::default(),
        }
    } else {
        ConfigFile::default()
    }
}

fn load_config_file() -> ConfigFile {
    match dirs::home_dir() {
        Some(home) => load_config_file_from(&home.join(CONFIG_FILE)),
        None => ConfigFile::default(),
    }
}

fn get_linear_api_key() -> LinkResult<String> {
    // First check environment variable
    if let Ok(key) = env::var("LINEAR_API_KEY") {
        return Ok(key);
    }

    // Then check config file
    if let Some(key) = load_config_file().linear_api_key {
        return Ok(key);
    }

    Err(LinkError::MissingConfig(format!(
        "Linear API key not found. Set the LINEAR_API_KEY environment variable or add it to ~/{}.",
        CONFIG_FILE
    )))
}
