use crate::data_source::RemoteRepository;
use crate::error::{DevstatsError, Result};
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// One exported CSV row. Field order is the column order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub name: String,
    pub url: String,
    pub watcher_count: u32,
    pub star_count: u32,
    pub fork_count: u32,
    pub open_issue_count: u32,
    /// Never populated; the listing endpoint carries no pull request count.
    pub pull_request_count: u32,
    pub is_fork: bool,
    pub language: String,
    pub description: String,
    pub last_updated: String,
}

impl Record {
    pub const HEADERS: [&'static str; 11] = [
        "name",
        "url",
        "watcherCount",
        "starCount",
        "forkCount",
        "openIssueCount",
        "pullRequestCount",
        "isFork",
        "language",
        "description",
        "lastUpdated",
    ];
}

pub fn normalize(repo: &RemoteRepository) -> Result<Record> {
    let label = repo
        .name
        .clone()
        .unwrap_or_else(|| format!("id {}", repo.id));
    let missing = |field: &'static str| DevstatsError::Schema {
        repo: label.clone(),
        field,
    };

    let updated_at = repo.updated_at.ok_or_else(|| missing("updated_at"))?;

    Ok(Record {
        name: repo.name.clone().ok_or_else(|| missing("name"))?,
        url: repo.url.clone().ok_or_else(|| missing("url"))?,
        watcher_count: repo.watchers_count.ok_or_else(|| missing("watchers_count"))?,
        star_count: repo
            .stargazers_count
            .ok_or_else(|| missing("stargazers_count"))?,
        fork_count: repo.forks_count.ok_or_else(|| missing("forks_count"))?,
        open_issue_count: repo
            .open_issues_count
            .ok_or_else(|| missing("open_issues_count"))?,
        pull_request_count: 0,
        is_fork: repo.fork.ok_or_else(|| missing("fork"))?,
        language: repo.language.clone().unwrap_or_default(),
        description: repo.description.clone().unwrap_or_default(),
        last_updated: updated_at.format(DATE_FORMAT).to_string(),
    })
}

pub fn normalize_all(repos: &[RemoteRepository]) -> Result<Vec<Record>> {
    repos.iter().map(normalize).collect()
}
