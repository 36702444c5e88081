//! Quote provider abstraction and the snapshot implementation.
//!
//! A quote is the latest known numeric value for one dimension of a token
//! (balance, price, staked total). A provider that has not resolved a
//! token yet answers `None`; `None` is never conflated with a resolved
//! zero, since "still loading" and "confirmed empty" render differently.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::quotes_errors::QuoteError;
use crate::listing::TokenId;

/// Keyed lookup from token id to the latest known decimal quantity.
pub trait QuoteProvider {
    /// Latest resolved value for the token, or `None` while absent or
    /// pending.
    fn find(&self, token: &TokenId) -> Option<Decimal>;

    /// Whether the backing refresh is still in flight.
    fn is_loading(&self) -> bool;
}

/// Map-backed quote provider, filled by the refresh layer once per cycle
/// and handed to the aggregators as a complete snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSnapshot {
    quotes: HashMap<TokenId, Decimal>,
    as_of: DateTime<Utc>,
    loading: bool,
}

impl QuoteSnapshot {
    pub fn new(as_of: DateTime<Utc>) -> Self {
        Self {
            quotes: HashMap::new(),
            as_of,
            loading: false,
        }
    }

    /// Builder-style insert, used by refresh glue and tests.
    pub fn with_quote(mut self, token: impl Into<TokenId>, value: Decimal) -> Self {
        self.quotes.insert(token.into(), value);
        self
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn insert(&mut self, token: TokenId, value: Decimal) {
        self.quotes.insert(token, value);
    }

    pub fn remove(&mut self, token: &TokenId) -> Option<Decimal> {
        self.quotes.remove(token)
    }

    /// When the refresh cycle resolved this snapshot.
    pub fn as_of(&self) -> DateTime<Utc> {
        self.as_of
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

impl Default for QuoteSnapshot {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl QuoteProvider for QuoteSnapshot {
    fn find(&self, token: &TokenId) -> Option<Decimal> {
        self.quotes.get(token).copied()
    }

    fn is_loading(&self) -> bool {
        self.loading
    }
}

/// Parses a raw decimal-string quote as it arrives from the chain.
pub fn parse_quote(raw: &str) -> Result<Decimal, QuoteError> {
    Decimal::from_str(raw.trim()).map_err(|_| QuoteError::InvalidDecimal(raw.to_string()))
}

/// True when any of the given providers is still resolving.
///
/// The aggregators have no loading concept of their own; callers derive
/// this flag to decide whether the current cycle's output is complete.
pub fn any_loading(providers: &[&dyn QuoteProvider]) -> bool {
    providers.iter().any(|provider| provider.is_loading())
}
