use thiserror::Error;

use crate::quotes::QuoteError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the aggregation engine
#[derive(Error, Debug)]
pub enum Error {
    #[error("Quote operation failed: {0}")]
    Quote(#[from] QuoteError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate token in listing: {0}")]
    DuplicateToken(String),
}
