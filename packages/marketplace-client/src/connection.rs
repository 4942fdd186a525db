//! Chain connection capabilities consumed by the client.
//!
//! Signing, gas estimation and broadcasting live behind these traits; the
//! client only builds payloads and hands them over.

use async_trait::async_trait;
use marketplace_types::Coin;
use serde_json::Value;
use std::sync::Arc;

use crate::{ExecuteResult, Fee, Result};

/// Smart-query access to deployed contracts.
#[async_trait]
pub trait QueryConnection: Send + Sync {
    /// Send `query` to `contract_address` and return the decoded JSON response.
    ///
    /// Transport failures map to `Error::Connection`; rejections by the
    /// contract (including missing entries) map to `Error::Query`.
    async fn query_contract_smart(&self, contract_address: &str, query: &Value) -> Result<Value>;
}

/// One execute submission, exactly as handed to the signing connection.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecuteRequest {
    pub sender: String,
    pub contract_address: String,
    pub msg: Value,
    pub fee: Fee,
    pub memo: Option<String>,
    pub funds: Vec<Coin>,
}

/// A connection holding a signer that can submit transactions.
#[async_trait]
pub trait SigningConnection: QueryConnection {
    /// Sign, broadcast and wait for inclusion of a single execute message.
    ///
    /// Contract rejections and failed submissions map to
    /// `Error::Execution` with the chain's message unmodified.
    async fn execute(&self, request: ExecuteRequest) -> Result<ExecuteResult>;
}

#[async_trait]
impl<T: QueryConnection + ?Sized> QueryConnection for Arc<T> {
    async fn query_contract_smart(&self, contract_address: &str, query: &Value) -> Result<Value> {
        (**self).query_contract_smart(contract_address, query).await
    }
}

#[async_trait]
impl<T: SigningConnection + ?Sized> SigningConnection for Arc<T> {
    async fn execute(&self, request: ExecuteRequest) -> Result<ExecuteResult> {
        (**self).execute(request).await
    }
}
