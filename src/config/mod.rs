//! Environment-based configuration
//!
//! All settings come from the process environment; a `.env` file in the working
//! directory is merged in first when present. Both settings are optional: without
//! a token the tool is limited to public repositories and unauthenticated API
//! rate limits.

use std::env;

pub const DEFAULT_API_ENDPOINT: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct Settings {
    /// Bearer credential for the GitHub API, also spliced into clone URLs.
    pub token: Option<String>,
    /// API base endpoint. Overridden by `GITHUB_ENTERPRISE_URL` for self-hosted
    /// deployments.
    pub api_endpoint: String,
}

impl Settings {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let token = env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());
        let api_endpoint = env::var("GITHUB_ENTERPRISE_URL")
            .ok()
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string());

        Self { token, api_endpoint }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self { token: None, api_endpoint: DEFAULT_API_ENDPOINT.to_string() }
    }
}
