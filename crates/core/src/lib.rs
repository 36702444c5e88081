//! Tokenfolio Core - portfolio aggregation and ranking engine.
//!
//! This crate turns a token listing plus raw per-token quotes (balances,
//! prices, prior-period price snapshots, staked totals, APR figures) into
//! the derived records a dashboard displays: valued holdings with
//! day-over-day change, a ranked staking list, and the portfolio total
//! used for allocation ratios.
//!
//! Quote fetching, wallet interaction, rendering, and string formatting
//! all live outside this crate; the engine is a set of pure, synchronous
//! functions over already-resolved decimal quotes.

pub mod constants;
pub mod errors;
pub mod listing;
pub mod portfolio;
pub mod quotes;
pub mod utils;

// Re-export common types from the listing and portfolio modules
pub use listing::*;
pub use portfolio::*;
pub use quotes::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
