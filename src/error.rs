use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevstatsError {
    #[error("fetch error: {0}")]
    Fetch(String),

    #[error("schema error: repository {repo:?} is missing required field `{field}`")]
    Schema { repo: String, field: &'static str },

    #[error("output error: {0}")]
    Output(String),

    #[error("input error: {0}")]
    Input(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DevstatsError>;
