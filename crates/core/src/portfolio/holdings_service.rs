//! Holdings aggregation pipeline.

use log::{debug, warn};
use rust_decimal::Decimal;

use crate::listing::Listing;
use crate::quotes::QuoteProvider;

use super::change_calculator::calc_change;
use super::holdings_model::{HoldingRecord, HoldingsView};

/// Enriches the listing with balances and prices, drops empty positions,
/// and totals the remainder.
///
/// Per descriptor, in listing order: the balance and price quotes are
/// attached (an unresolved quote values at zero), `change` is computed
/// against the prior-period price snapshot, rows with `balance <= 0` are
/// filtered out, and `total` is the exact decimal sum of `value` over the
/// surviving rows. The output keeps listing order; any further sorting is
/// a caller concern.
///
/// Pure function of its inputs, no I/O. Whether all quotes have arrived is
/// a separate flag the caller derives from the providers themselves.
pub fn aggregate_holdings(
    listing: &Listing,
    balances: &dyn QuoteProvider,
    prices: &dyn QuoteProvider,
    prior_prices: &dyn QuoteProvider,
) -> HoldingsView {
    debug!("Aggregating holdings for {} listed tokens.", listing.len());

    let records: Vec<HoldingRecord> = listing
        .iter()
        .map(|descriptor| {
            let token = &descriptor.token;
            let balance = balances.find(token).unwrap_or(Decimal::ZERO);
            let price_quote = prices.find(token);
            let price = price_quote.unwrap_or(Decimal::ZERO);

            if balance > Decimal::ZERO && price_quote.is_none() {
                warn!("No price quote for held token {}; valuing at zero.", token);
            }

            // An unresolved price values the row at zero, but the change
            // figure still distinguishes "no quote yet" from a real zero.
            let change = calc_change(price_quote, prior_prices.find(token));

            HoldingRecord::new(descriptor, balance, price, change)
        })
        .filter(|record| record.balance > Decimal::ZERO)
        .collect();

    let total: Decimal = records.iter().map(|record| record.value).sum();

    debug!(
        "Holdings aggregation kept {} of {} rows, total value {}.",
        records.len(),
        listing.len(),
        total
    );

    HoldingsView { records, total }
}
