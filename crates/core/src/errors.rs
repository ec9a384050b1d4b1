use thiserror::Error;

#[derive(Error, Debug)]
pub enum KitchenError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] eyre::Report),
}

pub type KitchenResult<T> = Result<T, KitchenError>;
