use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("snapshot source is unavailable: {0}")]
    Unavailable(String),
    #[error("snapshot data is invalid: {0}")]
    InvalidData(String),
}

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("group '{0}' was not found")]
    GroupNotFound(String),
    #[error("failed to load group snapshot")]
    Repository(#[from] RepositoryError),
}
