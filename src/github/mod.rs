//! GitHub repository listing
//!
//! Thin blocking client over the REST API. Only the organization-repositories
//! endpoint is needed; pagination is handled transparently and the full
//! descriptor list is materialized before any filtering happens.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use serde::Deserialize;

const PER_PAGE: usize = 100;
const USER_AGENT: &str = concat!("org-loc/", env!("CARGO_PKG_VERSION"));

/// One repository as reported by the listing API. Read-only; never mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct Repo {
    pub name: String,
    pub archived: bool,
    pub updated_at: DateTime<Utc>,
    pub clone_url: String,
}

pub struct GitHubClient {
    base_url: String,
    token: Option<String>,
    client: Client,
}

impl GitHubClient {
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed building HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(str::to_string),
            client,
        })
    }

    /// List every source repository of `org` (forks excluded), following
    /// pagination until a short page signals exhaustion.
    pub fn organization_repositories(&self, org: &str) -> Result<Vec<Repo>> {
        let mut repos = Vec::new();
        let mut page = 1usize;

        loop {
            let url = format!("{}/orgs/{}/repos", self.base_url, org);
            tracing::debug!("fetching page {page} of {url}");

            let per_page = PER_PAGE.to_string();
            let page_number = page.to_string();
            let mut request = self
                .client
                .get(&url)
                .header("Accept", "application/vnd.github+json")
                .query(&[
                    ("type", "sources"),
                    ("per_page", per_page.as_str()),
                    ("page", page_number.as_str()),
                ]);
            if let Some(token) = &self.token {
                request = request.bearer_auth(token);
            }

            let response = request
                .send()
                .with_context(|| format!("Failed listing repositories for {org}"))?
                .error_for_status()
                .with_context(|| format!("Repository listing for {org} was rejected"))?;

            let batch: Vec<Repo> =
                response.json().context("Failed decoding repository listing")?;
            let exhausted = batch.len() < PER_PAGE;
            repos.extend(batch);

            if exhausted {
                break;
            }
            page += 1;
        }

        Ok(repos)
    }
}
