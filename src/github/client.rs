use crate::data_source::{PageRequest, RepoPage, RemoteRepository, RepositoryProvider};
use crate::error::{DevstatsError, Result};
use async_trait::async_trait;
use octocrab::params::repos::Sort;
use octocrab::params::users::repos::Type;
use octocrab::params::Direction;
use octocrab::Octocrab;

#[derive(Clone)]
pub struct GitHubClient {
    octo: Octocrab,
}

impl GitHubClient {
    pub fn new(api_base: Option<&str>) -> Result<Self> {
        let mut builder = Octocrab::builder();
        if let Some(base) = api_base {
            builder = builder
                .base_uri(base)
                .map_err(|e| {
                    DevstatsError::Fetch(format!("invalid api base {base:?}: {}", headline(&e)))
                })?;
        }
        let octo = builder.build().map_err(fetch_err)?;

        Ok(Self { octo })
    }
}

#[async_trait]
impl RepositoryProvider for GitHubClient {
    async fn list_page(&self, request: &PageRequest<'_>) -> Result<RepoPage> {
        let result = self
            .octo
            .users(request.account.to_owned())
            .repos()
            .r#type(Type::Owner)
            .sort(Sort::Updated)
            .direction(Direction::Descending)
            .per_page(request.per_page)
            .page(request.page)
            .send()
            .await
            .map_err(fetch_err)?;

        let next_page = result.next.as_ref().map(|_| request.page + 1);
        let items = result.items.into_iter().map(RemoteRepository::from).collect();

        Ok(RepoPage { items, next_page })
    }
}

/// First line of an octocrab error; its display can carry a captured
/// backtrace.
fn headline(e: &octocrab::Error) -> String {
    e.to_string().lines().next().unwrap_or_default().to_string()
}

fn fetch_err(e: octocrab::Error) -> DevstatsError {
    let message = match &e {
        octocrab::Error::GitHub { source, .. } => {
            format!("GitHub returned {}: {}", source.status_code, source.message)
        }
        other => headline(other),
    };
    DevstatsError::Fetch(message)
}
