//! Wire types of the Aura NFT marketplace contract.
//! No network dependency. Usable by clients, indexers and tooling alike.

mod coin;
mod expiration;
mod listing;
mod msg;

pub use coin::{Coin, Uint128};
pub use expiration::{BlockInfo, Expiration, Timestamp};
pub use listing::{Config, Listing, ListingConfig, ListingsResponse};
pub use msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
