//! Typed marketplace client.
//!
//! One method per contract entry point. Each call builds exactly one
//! message, makes exactly one round trip, and returns the connection's
//! answer as-is: no caching, retries or local state.

use marketplace_types::{Config, ExecuteMsg, Listing, ListingConfig, ListingsResponse, QueryMsg};
use serde::de::DeserializeOwned;
use std::ops::Deref;
use tracing::{debug, info, warn};

use crate::connection::{ExecuteRequest, QueryConnection, SigningConnection};
use crate::{Error, ExecOptions, ExecuteResult, Result};

/// Read-only access to a marketplace contract.
pub struct MarketplaceQueryClient<C> {
    client: C,
    contract_address: String,
}

impl<C: QueryConnection> MarketplaceQueryClient<C> {
    pub fn new(client: C, contract_address: impl Into<String>) -> Self {
        Self {
            client,
            contract_address: contract_address.into(),
        }
    }

    /// Marketplace contract every request is sent to.
    pub fn contract_address(&self) -> &str {
        &self.contract_address
    }

    pub fn connection(&self) -> &C {
        &self.client
    }

    pub async fn get_config(&self) -> Result<Config> {
        self.query(&QueryMsg::Config {}).await
    }

    /// One page of listings under `contract_address`, ordered by the
    /// contract. `start_after` is an exclusive token-id cursor.
    pub async fn list_listings_by_contract(
        &self,
        contract_address: &str,
        limit: Option<u32>,
        start_after: Option<&str>,
    ) -> Result<ListingsResponse> {
        self.query(&QueryMsg::ListingsByContractAddress {
            contract_address: contract_address.to_owned(),
            start_after: start_after.map(str::to_owned),
            limit,
        })
        .await
    }

    pub async fn get_listing(&self, contract_address: &str, token_id: &str) -> Result<Listing> {
        self.query(&QueryMsg::Listing {
            contract_address: contract_address.to_owned(),
            token_id: token_id.to_owned(),
        })
        .await
    }

    async fn query<T: DeserializeOwned>(&self, msg: &QueryMsg) -> Result<T> {
        let query = serde_json::to_value(msg).map_err(|e| Error::Encoding(e.to_string()))?;
        debug!(contract = %self.contract_address, query = msg.name(), "Querying contract");

        let response = self
            .client
            .query_contract_smart(&self.contract_address, &query)
            .await
            .inspect_err(|e| {
                warn!(contract = %self.contract_address, query = msg.name(), error = %e, "Query failed")
            })?;

        serde_json::from_value(response)
            .map_err(|e| Error::Query(format!("malformed {} response: {e}", msg.name())))
    }
}

/// Signing access to a marketplace contract. Also exposes every query of
/// [`MarketplaceQueryClient`] through `Deref`.
pub struct MarketplaceClient<C> {
    inner: MarketplaceQueryClient<C>,
    sender: String,
}

impl<C: SigningConnection> MarketplaceClient<C> {
    pub fn new(client: C, sender: impl Into<String>, contract_address: impl Into<String>) -> Self {
        Self {
            inner: MarketplaceQueryClient::new(client, contract_address),
            sender: sender.into(),
        }
    }

    /// Identity every execution is attributed to.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Create or replace the listing of `token_id` under `contract_address`.
    pub async fn list_nft(
        &self,
        contract_address: &str,
        token_id: &str,
        listing_config: ListingConfig,
        options: ExecOptions,
    ) -> Result<ExecuteResult> {
        self.execute(
            ExecuteMsg::ListNft {
                contract_address: contract_address.to_owned(),
                token_id: token_id.to_owned(),
                listing_config,
            },
            options,
        )
        .await
    }

    /// Attached funds must cover the listing price.
    pub async fn buy(
        &self,
        contract_address: &str,
        token_id: &str,
        options: ExecOptions,
    ) -> Result<ExecuteResult> {
        self.execute(
            ExecuteMsg::Buy {
                contract_address: contract_address.to_owned(),
                token_id: token_id.to_owned(),
            },
            options,
        )
        .await
    }

    pub async fn cancel(
        &self,
        contract_address: &str,
        token_id: &str,
        options: ExecOptions,
    ) -> Result<ExecuteResult> {
        self.execute(
            ExecuteMsg::Cancel {
                contract_address: contract_address.to_owned(),
                token_id: token_id.to_owned(),
            },
            options,
        )
        .await
    }

    pub async fn create_collection(
        &self,
        name: &str,
        symbol: &str,
        options: ExecOptions,
    ) -> Result<ExecuteResult> {
        self.execute(
            ExecuteMsg::CreateCollection {
                name: name.to_owned(),
                symbol: symbol.to_owned(),
            },
            options,
        )
        .await
    }

    pub async fn mint_nft(
        &self,
        contract_address: &str,
        token_id: &str,
        token_uri: &str,
        options: ExecOptions,
    ) -> Result<ExecuteResult> {
        self.execute(
            ExecuteMsg::MintNft {
                contract_address: contract_address.to_owned(),
                token_id: token_id.to_owned(),
                token_uri: token_uri.to_owned(),
            },
            options,
        )
        .await
    }

    async fn execute(&self, msg: ExecuteMsg, options: ExecOptions) -> Result<ExecuteResult> {
        let payload = serde_json::to_value(&msg).map_err(|e| Error::Encoding(e.to_string()))?;
        let ExecOptions { fee, memo, funds } = options;
        let contract = self.inner.contract_address();

        info!(
            contract = %contract,
            sender = %self.sender,
            action = msg.name(),
            fee = %fee,
            funds = funds.len(),
            "Submitting execute"
        );

        let result = self
            .inner
            .connection()
            .execute(ExecuteRequest {
                sender: self.sender.clone(),
                contract_address: contract.to_owned(),
                msg: payload,
                fee,
                memo,
                funds,
            })
            .await
            .inspect_err(|e| warn!(contract = %contract, action = msg.name(), error = %e, "Execute failed"))?;

        info!(
            tx_hash = %result.transaction_hash,
            height = result.height,
            gas_wanted = result.gas_wanted,
            gas_used = result.gas_used,
            "Execute confirmed"
        );
        Ok(result)
    }
}

impl<C> Deref for MarketplaceClient<C> {
    type Target = MarketplaceQueryClient<C>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
