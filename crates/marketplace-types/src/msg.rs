//! Contract entry-point messages.
//!
//! Each enum variant serializes to a single-key object named after the
//! operation in snake_case, e.g. `{"list_nft": {"contract_address": ...}}`.

use serde::{Deserialize, Serialize};

use crate::ListingConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstantiateMsg {
    pub owner: String,
    /// Code id used when the marketplace instantiates new collections.
    pub collection_code_id: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrateMsg {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    ListNft {
        contract_address: String,
        token_id: String,
        listing_config: ListingConfig,
    },
    Buy {
        contract_address: String,
        token_id: String,
    },
    Cancel {
        contract_address: String,
        token_id: String,
    },
    CreateCollection {
        name: String,
        symbol: String,
    },
    MintNft {
        contract_address: String,
        token_id: String,
        token_uri: String,
    },
}

impl ExecuteMsg {
    /// Wire discriminant.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListNft { .. } => "list_nft",
            Self::Buy { .. } => "buy",
            Self::Cancel { .. } => "cancel",
            Self::CreateCollection { .. } => "create_collection",
            Self::MintNft { .. } => "mint_nft",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Config {},
    ListingsByContractAddress {
        contract_address: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start_after: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,
    },
    Listing {
        contract_address: String,
        token_id: String,
    },
}

impl QueryMsg {
    /// Wire discriminant.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Config {} => "config",
            Self::ListingsByContractAddress { .. } => "listings_by_contract_address",
            Self::Listing { .. } => "listing",
        }
    }
}
