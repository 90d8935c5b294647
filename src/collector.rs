use crate::data_source::{PageRequest, RemoteRepository, RepositoryProvider};
use crate::error::{DevstatsError, Result};
use std::collections::HashSet;

/// Walks every page the provider offers for `account` and returns the
/// repositories in provider order. Any failed page aborts the whole run.
pub async fn collect_repositories<P>(
    provider: &P,
    account: &str,
    per_page: u8,
) -> Result<Vec<RemoteRepository>>
where
    P: RepositoryProvider + ?Sized,
{
    let mut repos = Vec::new();
    let mut seen: HashSet<u64> = HashSet::new();
    let mut page = 1u32;

    loop {
        let request = PageRequest {
            account,
            page,
            per_page,
        };
        let result = provider.list_page(&request).await?;

        tracing::debug!(
            account,
            page,
            items = result.items.len(),
            more = result.next_page.is_some(),
            "fetched page"
        );

        for repo in result.items {
            if seen.insert(repo.id) {
                repos.push(repo);
            } else {
                tracing::debug!(id = repo.id, "skipping repository seen on an earlier page");
            }
        }

        match result.next_page {
            Some(next) if next > page => page = next,
            Some(next) => {
                return Err(DevstatsError::Fetch(format!(
                    "pagination did not advance: page {page} pointed at page {next}"
                )));
            }
            None => break,
        }
    }

    tracing::info!("fetched {} repositories for account {account}", repos.len());
    Ok(repos)
}
