use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

const SEARCH_URL: &str = "https://careers.mastercard.com/us/en/search-results";

/// Runtime settings, loaded once from a YAML file at startup.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub chrome_path: String,
    pub keywords: String,
    pub location: String,
}

impl Config {
    /// The search-results URL for the configured keywords.
    pub fn search_url(&self) -> String {
        format!("{SEARCH_URL}?keywords={}", self.keywords)
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    serde_yaml::from_str(&raw)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}
