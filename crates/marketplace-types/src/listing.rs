//! Listings and marketplace configuration as returned by contract queries.

use serde::{Deserialize, Serialize};

use crate::{BlockInfo, Coin, Expiration};

/// Sale terms of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingConfig {
    pub price: Coin,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<Expiration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<Expiration>,
}

impl ListingConfig {
    /// Fixed price, open immediately, no end.
    pub fn fixed_price(price: Coin) -> Self {
        Self {
            price,
            start_time: None,
            end_time: None,
        }
    }

    pub fn with_start_time(mut self, start_time: Expiration) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn with_end_time(mut self, end_time: Expiration) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// False only when both bounds are set, comparable, and `start >= end`.
    /// Mirrors the contract's own check; the client never enforces it.
    pub fn is_valid(&self) -> bool {
        match (&self.start_time, &self.end_time) {
            (Some(start), Some(end)) => !matches!(
                start.partial_cmp(end),
                Some(std::cmp::Ordering::Greater | std::cmp::Ordering::Equal)
            ),
            _ => true,
        }
    }
}

/// A token offered for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// NFT contract holding the token.
    pub contract_address: String,
    pub token_id: String,
    pub listing_config: ListingConfig,
    pub seller: String,
}

impl Listing {
    /// Listings without an end time never expire.
    pub fn is_expired(&self, block: &BlockInfo) -> bool {
        self.listing_config
            .end_time
            .is_some_and(|end| end.is_expired(block))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingsResponse {
    pub listings: Vec<Listing>,
}

impl ListingsResponse {
    /// Cursor for the next `start_after`, if this page was non-empty.
    pub fn last_token_id(&self) -> Option<&str> {
        self.listings.last().map(|l| l.token_id.as_str())
    }
}

/// Marketplace-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub owner: String,
    pub collection_code_id: u64,
}
