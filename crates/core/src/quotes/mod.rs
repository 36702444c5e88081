//! Quotes module - keyed numeric lookups resolved by the refresh layer.

mod quotes_errors;
mod quotes_model;


// Re-export the public interface
pub use quotes_errors::QuoteError;
pub use quotes_model::{any_loading, parse_quote, QuoteProvider, QuoteSnapshot};
