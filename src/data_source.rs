use crate::config::Config;
use crate::error::Result;
use crate::github::client::GitHubClient;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// A repository as reported by the hosting provider. Fields the provider
/// promises are still optional here so normalization can reject gaps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RemoteRepository {
    pub id: u64,
    pub name: Option<String>,
    pub url: Option<String>,
    pub watchers_count: Option<u32>,
    pub stargazers_count: Option<u32>,
    pub forks_count: Option<u32>,
    pub open_issues_count: Option<u32>,
    pub fork: Option<bool>,
    pub updated_at: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub language: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest<'a> {
    pub account: &'a str,
    pub page: u32,
    pub per_page: u8,
}

#[derive(Clone, Debug, Default)]
pub struct RepoPage {
    pub items: Vec<RemoteRepository>,
    /// Set only when the response for this page says more pages follow.
    pub next_page: Option<u32>,
}

#[async_trait]
pub trait RepositoryProvider: Send + Sync {
    /// Lists one page of repositories owned by `request.account`, most
    /// recently updated first.
    async fn list_page(&self, request: &PageRequest<'_>) -> Result<RepoPage>;
}

pub fn init_github_client(config: &Config) -> Result<GitHubClient> {
    GitHubClient::new(config.api_base.as_deref())
}
