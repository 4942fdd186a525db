//! Smart queries over a Cosmos SDK LCD (REST) endpoint.
//!
//! `GET {base}/cosmwasm/wasm/v1/contract/{address}/smart/{query}` where
//! `query` is the base64url-encoded JSON message. One request per call, no
//! retries or failover.

use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE as BASE64_URL_ENGINE;
use base64::Engine;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

use crate::connection::QueryConnection;
use crate::{Error, Result};

/// Successful smart-query body.
#[derive(Deserialize)]
struct SmartQueryResponse {
    data: Option<Value>,
}

/// gRPC-gateway error body returned on rejected queries. Proxies in front
/// of the node answer with other shapes, so every field is required.
#[derive(Deserialize)]
struct GatewayStatus {
    code: i64,
    message: String,
    #[allow(dead_code)]
    details: Vec<Value>,
}

/// Query-only connection to an LCD endpoint.
#[derive(Debug, Clone)]
pub struct LcdClient {
    http: reqwest::Client,
    base_url: String,
}

impl LcdClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("HTTP client init failed: {e}")))?;
        info!(lcd = base_url, timeout_secs = timeout.as_secs(), "LCD client initialized");
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn smart_query_url(&self, contract_address: &str, query: &Value) -> Result<String> {
        let bytes = serde_json::to_vec(query).map_err(|e| Error::Encoding(e.to_string()))?;
        Ok(format!(
            "{}/cosmwasm/wasm/v1/contract/{}/smart/{}",
            self.base_url,
            contract_address,
            BASE64_URL_ENGINE.encode(bytes)
        ))
    }
}

#[async_trait]
impl QueryConnection for LcdClient {
    async fn query_contract_smart(&self, contract_address: &str, query: &Value) -> Result<Value> {
        let url = self.smart_query_url(contract_address, query)?;
        let start = std::time::Instant::now();

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Connection(format!("failed to read response body: {e}")))?;

        debug!(
            contract = contract_address,
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "LCD smart query"
        );

        if !status.is_success() {
            return Err(match serde_json::from_str::<GatewayStatus>(&body) {
                Ok(rejection) if rejection.code != 0 => {
                    debug!(code = rejection.code, "Query rejected by node");
                    Error::Query(rejection.message)
                }
                _ => Error::Connection(format!("HTTP {status}: {body}")),
            });
        }

        let parsed: SmartQueryResponse = serde_json::from_str(&body)
            .map_err(|e| Error::Query(format!("malformed smart query response: {e}")))?;
        parsed
            .data
            .ok_or_else(|| Error::Query("smart query response has no data".into()))
    }
}
