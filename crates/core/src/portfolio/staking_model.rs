//! Staking view models.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::listing::{ListingStatus, TokenId};
use crate::utils::decimal_serde::decimal_serde;

/// Annualized yield per token. A token missing from the table ranks with
/// APR zero.
pub type AprTable = HashMap<TokenId, Decimal>;

/// One staking position row.
///
/// Every listed token appears in the ranking; `staked` and `stakable` are
/// display flags, not filters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StakeRecord {
    pub token: TokenId,
    pub symbol: String,
    pub name: String,
    pub status: ListingStatus,
    pub staked: bool,
    pub stakable: bool,
    #[serde(with = "decimal_serde")]
    pub apr: Decimal,
    #[serde(with = "decimal_serde")]
    pub total_staked: Decimal,
    /// The distinguished token pinned first in rank order; the display
    /// layer emphasizes its card.
    pub featured: bool,
}
