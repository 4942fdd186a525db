//! # Aura Marketplace Client
//!
//! Typed bindings for the NFT marketplace contract. Queries and executions
//! map one-to-one onto contract messages and are handed to an injected
//! connection that owns signing and transport.
//!
//! ## Quick Start
//! ```bash
//! MARKETPLACE_CONTRACT_ADDRESS=aura1... cargo run --bin marketplace -- config
//! ```
//!
//! ## Operations
//! - Queries: `get_config`, `list_listings_by_contract`, `get_listing`
//! - Executes: `list_nft`, `buy`, `cancel`, `create_collection`, `mint_nft`
//! - Paging: `collect_listings` follows the listings cursor to the end

mod client;
pub mod config;
pub mod connection;
mod error;
mod fee;
mod paging;
mod result;
pub mod rpc;

pub use client::{MarketplaceClient, MarketplaceQueryClient};
pub use crate::config::Config;
pub use connection::{ExecuteRequest, QueryConnection, SigningConnection};
pub use error::{Error, Result};
pub use fee::{ExecOptions, Fee, StdFee};
pub use paging::collect_listings;
pub use result::{Attribute, Event, ExecuteResult};
pub use rpc::LcdClient;

pub use marketplace_types as types;
