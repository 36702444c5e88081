//! Holdings view models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::RATIO_PRECISION;
use crate::listing::{ListingStatus, TokenDescriptor, TokenId};
use crate::utils::decimal_serde::{decimal_serde, decimal_serde_option};

/// One displayed holding: a listed token enriched with its balance, price
/// and derived valuation figures.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingRecord {
    pub token: TokenId,
    pub symbol: String,
    pub name: String,
    pub status: ListingStatus,
    #[serde(with = "decimal_serde")]
    pub balance: Decimal,
    #[serde(with = "decimal_serde")]
    pub price: Decimal,
    /// Always `balance × price`; never mutated independently.
    #[serde(with = "decimal_serde")]
    pub value: Decimal,
    /// Fractional change against the prior-period price, `None` while the
    /// baseline is unresolved.
    #[serde(with = "decimal_serde_option")]
    pub change: Option<Decimal>,
}

impl HoldingRecord {
    pub(crate) fn new(
        descriptor: &TokenDescriptor,
        balance: Decimal,
        price: Decimal,
        change: Option<Decimal>,
    ) -> Self {
        HoldingRecord {
            token: descriptor.token.clone(),
            symbol: descriptor.symbol.clone(),
            name: descriptor.name.clone(),
            status: descriptor.status,
            balance,
            price,
            value: balance * price,
            change,
        }
    }

    /// Share of the portfolio total this holding represents, rounded for
    /// display. Undefined unless the total is strictly positive.
    pub fn ratio(&self, total: Decimal) -> Option<Decimal> {
        if total > Decimal::ZERO {
            Some((self.value / total).round_dp(RATIO_PRECISION))
        } else {
            None
        }
    }
}

/// Holdings pipeline output: surviving records in listing order plus the
/// portfolio total used for ratio computation.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingsView {
    pub records: Vec<HoldingRecord>,
    #[serde(with = "decimal_serde")]
    pub total: Decimal,
}

impl HoldingsView {
    /// Whether any surviving record carries a change figure. The display
    /// layer hides the change column when every baseline is unresolved.
    pub fn has_change_data(&self) -> bool {
        self.records.iter().any(|record| record.change.is_some())
    }
}
