//! Token listing domain models.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Unique on-chain token identifier.
///
/// This is the canonical identity key for a token within the engine. It is
/// the contract address or denom, not the ticker: symbols are display
/// labels and carry no uniqueness guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TokenId(pub String);

impl TokenId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TokenId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TokenId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for TokenId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Listing status of a token.
///
/// Delisted tokens stay in the listing so existing positions remain
/// visible; the display layer badges them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingStatus {
    #[default]
    Listed,
    Delisted,
}

impl ListingStatus {
    /// Returns the wire string representation (SCREAMING_SNAKE_CASE).
    pub const fn as_wire_str(&self) -> &'static str {
        match self {
            ListingStatus::Listed => "LISTED",
            ListingStatus::Delisted => "DELISTED",
        }
    }

    /// Parses a listing status from its wire string.
    pub fn from_wire_str(s: &str) -> Option<Self> {
        match s {
            "LISTED" => Some(ListingStatus::Listed),
            "DELISTED" => Some(ListingStatus::Delisted),
            _ => None,
        }
    }
}

/// Tradable token descriptor, supplied by the external registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDescriptor {
    pub token: TokenId,
    pub symbol: String,
    pub name: String,
    pub status: ListingStatus,
}

/// Ordered set of token descriptors, de-duplicated by token id.
///
/// Order is significant: the holdings pipeline emits rows in listing order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Listing {
    items: Vec<TokenDescriptor>,
}

impl Listing {
    /// Builds a listing, rejecting duplicate token ids.
    ///
    /// The upstream registry is expected to de-duplicate already; this
    /// constructor makes that assumption checkable at the boundary instead
    /// of letting a duplicate silently produce double rows downstream.
    pub fn new(items: Vec<TokenDescriptor>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.token.clone()) {
                return Err(ValidationError::DuplicateToken(item.token.to_string()));
            }
        }
        Ok(Self { items })
    }

    pub fn iter(&self) -> impl Iterator<Item = &TokenDescriptor> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, token: &TokenId) -> Option<&TokenDescriptor> {
        self.items.iter().find(|item| &item.token == token)
    }

    /// Display symbol for a token id, if listed.
    pub fn symbol_of(&self, token: &TokenId) -> Option<&str> {
        self.get(token).map(|item| item.symbol.as_str())
    }
}

impl<'a> IntoIterator for &'a Listing {
    type Item = &'a TokenDescriptor;
    type IntoIter = std::slice::Iter<'a, TokenDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
