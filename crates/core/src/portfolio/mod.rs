//! Portfolio module - the holdings and staking aggregation pipelines.
//!
//! Both pipelines consume the token listing plus quote providers and emit
//! plain display records. Everything here is recomputed wholesale from the
//! latest quote snapshot on every refresh cycle; no derived state is ever
//! cached between invocations.

mod change_calculator;
mod holdings_model;
mod holdings_service;
mod staking_model;
mod staking_service;

#[cfg(test)]
mod staking_service_tests;

// Re-export the public interface
pub use change_calculator::calc_change;
pub use holdings_model::{HoldingRecord, HoldingsView};
pub use holdings_service::aggregate_holdings;
pub use staking_model::{AprTable, StakeRecord};
pub use staking_service::{aggregate_stake_ranking, pin_featured_first, sort_by_apr_desc};
