use crate::data_source::RemoteRepository;

impl From<octocrab::models::Repository> for RemoteRepository {
    fn from(repo: octocrab::models::Repository) -> Self {
        // GitHub reports language as a bare JSON string or null.
        let language = repo
            .language
            .as_ref()
            .and_then(|v| v.as_str())
            .map(str::to_owned);

        Self {
            id: repo.id.0,
            name: Some(repo.name),
            url: repo.html_url.map(|u| u.to_string()),
            watchers_count: repo.watchers_count,
            stargazers_count: repo.stargazers_count,
            forks_count: repo.forks_count,
            open_issues_count: repo.open_issues_count,
            fork: repo.fork,
            updated_at: repo.updated_at,
            description: repo.description,
            language,
        }
    }
}
