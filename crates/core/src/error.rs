use crate::document::validate::ValidationError;
use crate::store::StoreError;

/// Failure kinds surfaced by the sync handler and the page resolver.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("document store unavailable: {0}")]
    Upstream(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, Error>;
