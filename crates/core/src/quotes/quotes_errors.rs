//! Quote-related error types.

use thiserror::Error;

/// Errors raised while ingesting raw quote data.
///
/// The aggregation pipelines themselves are infallible; this covers the
/// edge where chain responses are parsed into decimals.
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Invalid decimal quote: {0}")]
    InvalidDecimal(String),
}
