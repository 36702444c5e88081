//! Staking rank aggregation pipeline.

use log::debug;
use rust_decimal::Decimal;

use crate::listing::Listing;
use crate::quotes::QuoteProvider;

use super::staking_model::{AprTable, StakeRecord};

/// Builds the ranked staking list: one row per listed token, featured
/// token first, remainder in strict APR-descending order.
///
/// No row is ever excluded, so the output length always equals the listing
/// length. Unresolved staked/stakable/total-staked quotes degrade to zero,
/// and a token absent from the APR table ranks with APR zero.
pub fn aggregate_stake_ranking(
    listing: &Listing,
    staked_balances: &dyn QuoteProvider,
    stakable_balances: &dyn QuoteProvider,
    total_staked: &dyn QuoteProvider,
    apr_by_token: &AprTable,
    featured_symbol: &str,
) -> Vec<StakeRecord> {
    debug!(
        "Aggregating stake ranking for {} listed tokens.",
        listing.len()
    );

    let mut records: Vec<StakeRecord> = listing
        .iter()
        .map(|descriptor| {
            let token = &descriptor.token;
            StakeRecord {
                token: token.clone(),
                symbol: descriptor.symbol.clone(),
                name: descriptor.name.clone(),
                status: descriptor.status,
                staked: staked_balances.find(token).unwrap_or(Decimal::ZERO) > Decimal::ZERO,
                stakable: stakable_balances.find(token).unwrap_or(Decimal::ZERO) > Decimal::ZERO,
                apr: apr_by_token.get(token).copied().unwrap_or(Decimal::ZERO),
                total_staked: total_staked.find(token).unwrap_or(Decimal::ZERO),
                featured: descriptor.symbol == featured_symbol,
            }
        })
        .collect();

    // Two stable passes, in this order. Merging them into one comparator
    // would change the observable order whenever the featured token is not
    // also the APR leader.
    sort_by_apr_desc(&mut records);
    pin_featured_first(&mut records);

    records
}

/// Stable sort by APR, highest first. Listing order breaks ties.
pub fn sort_by_apr_desc(records: &mut [StakeRecord]) {
    records.sort_by(|a, b| b.apr.cmp(&a.apr));
}

/// Stable pass moving the featured token ahead of the whole sequence.
pub fn pin_featured_first(records: &mut [StakeRecord]) {
    records.sort_by_key(|record| !record.featured);
}
