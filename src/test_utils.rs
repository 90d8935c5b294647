#![cfg(test)]

use crate::data_source::{PageRequest, RemoteRepository, RepoPage, RepositoryProvider};
use crate::error::{DevstatsError, Result};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::atomic::{AtomicU32, Ordering};

pub fn make_remote_repo(id: u64) -> RemoteRepository {
    RemoteRepository {
        id,
        name: Some(format!("repo-{id}")),
        url: Some(format!("https://github.com/octo/repo-{id}")),
        watchers_count: Some(1),
        stargazers_count: Some(2),
        forks_count: Some(3),
        open_issues_count: Some(4),
        fork: Some(false),
        updated_at: Some(Utc.with_ymd_and_hms(2021, 3, 5, 12, 0, 0).unwrap()),
        description: Some(format!("description {id}")),
        language: Some("Rust".to_string()),
    }
}

/// Serves canned pages and counts every request it receives.
pub struct FakeProvider {
    pages: Vec<Vec<RemoteRepository>>,
    fail_on_page: Option<u32>,
    calls: AtomicU32,
}

impl FakeProvider {
    pub fn from_pages(pages: Vec<Vec<RemoteRepository>>) -> Self {
        Self {
            pages,
            fail_on_page: None,
            calls: AtomicU32::new(0),
        }
    }

    /// `total` repositories split into pages of `page_size`. An empty
    /// account still answers with one empty page.
    pub fn with_repos(total: usize, page_size: usize) -> Self {
        let repos: Vec<RemoteRepository> = (1..=total as u64).map(make_remote_repo).collect();
        let mut pages: Vec<Vec<RemoteRepository>> =
            repos.chunks(page_size).map(|c| c.to_vec()).collect();
        if pages.is_empty() {
            pages.push(Vec::new());
        }
        Self::from_pages(pages)
    }

    pub fn failing_on(mut self, page: u32) -> Self {
        self.fail_on_page = Some(page);
        self
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RepositoryProvider for FakeProvider {
    async fn list_page(&self, request: &PageRequest<'_>) -> Result<RepoPage> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_on_page == Some(request.page) {
            return Err(DevstatsError::Fetch(format!(
                "simulated failure on page {}",
                request.page
            )));
        }

        let idx = request.page.saturating_sub(1) as usize;
        let items = self.pages.get(idx).cloned().unwrap_or_default();
        let next_page = if idx + 1 < self.pages.len() {
            Some(request.page + 1)
        } else {
            None
        };

        Ok(RepoPage { items, next_page })
    }
}
