//! Signing client against a recording connection: one payload per call,
//! wire naming, options pass-through, failures reported verbatim.

use anyhow::Result;
use marketplace_client::{Error, ExecOptions, Fee, MarketplaceClient, StdFee};
use marketplace_types::{Coin, Expiration, ListingConfig, Timestamp};
use serde_json::json;
use std::sync::Arc;

use crate::utils::{tx_result, RecordingConnection, MARKETPLACE, NFT, SENDER};

fn client(conn: RecordingConnection) -> MarketplaceClient<RecordingConnection> {
    MarketplaceClient::new(conn, SENDER, MARKETPLACE)
}

#[tokio::test]
async fn test_cancel_payload_and_addressing() -> Result<()> {
    let market = client(RecordingConnection::new().respond_to_execute(Ok(tx_result("AB12"))));

    let res = market.cancel("aura1nft...", "42", ExecOptions::default()).await?;

    assert_eq!(res.transaction_hash, "AB12");
    let execs = market.connection().executions();
    assert_eq!(execs.len(), 1);
    assert_eq!(execs[0].contract_address, MARKETPLACE);
    assert_eq!(execs[0].sender, SENDER);
    assert_eq!(
        execs[0].msg,
        json!({"cancel": {"contract_address": "aura1nft...", "token_id": "42"}})
    );
    Ok(())
}

#[tokio::test]
async fn test_mint_nft_payload() -> Result<()> {
    let market = client(RecordingConnection::new().respond_to_execute(Ok(tx_result("CD34"))));

    market
        .mint_nft("aura1nft...", "7", "ipfs://x", ExecOptions::default())
        .await?;

    assert_eq!(
        market.connection().executions()[0].msg,
        json!({"mint_nft": {
            "contract_address": "aura1nft...",
            "token_id": "7",
            "token_uri": "ipfs://x"
        }})
    );
    Ok(())
}

#[tokio::test]
async fn test_list_nft_payload() -> Result<()> {
    let market = client(RecordingConnection::new().respond_to_execute(Ok(tx_result("EF56"))));
    let terms = ListingConfig::fixed_price(Coin::new(2_500_000, "uaura"))
        .with_start_time(Expiration::AtTime(Timestamp::from_seconds(1_700_000_000)))
        .with_end_time(Expiration::AtHeight(9_999_999));

    market.list_nft(NFT, "3", terms, ExecOptions::default()).await?;

    let execs = market.connection().executions();
    assert_eq!(execs.len(), 1);
    let msg = &execs[0].msg;
    let body = msg["list_nft"].as_object().expect("list_nft discriminant");
    assert_eq!(msg.as_object().unwrap().len(), 1);
    let mut keys: Vec<&str> = body.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, vec!["contract_address", "listing_config", "token_id"]);
    assert_eq!(
        msg,
        &json!({"list_nft": {
            "contract_address": NFT,
            "token_id": "3",
            "listing_config": {
                "price": {"denom": "uaura", "amount": "2500000"},
                "start_time": {"at_time": "1700000000000000000"},
                "end_time": {"at_height": 9999999}
            }
        }})
    );
    Ok(())
}

#[tokio::test]
async fn test_create_collection_and_reply_attribute() -> Result<()> {
    let mut result = tx_result("0A0B");
    result.events = serde_json::from_value(json!([
        {"type": "wasm", "attributes": [
            {"key": "method", "value": "create_collection"},
            {"key": "name", "value": "Aura Cats"}
        ]},
        {"type": "wasm", "attributes": [
            {"key": "action", "value": "create_collection_reply"},
            {"key": "collection_contract", "value": "aura1newcol"}
        ]}
    ]))?;
    let market = client(RecordingConnection::new().respond_to_execute(Ok(result)));

    let res = market
        .create_collection("Aura Cats", "ACAT", ExecOptions::default())
        .await?;

    assert_eq!(res.collection_contract(), Some("aura1newcol"));
    assert_eq!(
        market.connection().executions()[0].msg,
        json!({"create_collection": {"name": "Aura Cats", "symbol": "ACAT"}})
    );
    Ok(())
}

#[tokio::test]
async fn test_buy_passes_options_through() -> Result<()> {
    let market = client(RecordingConnection::new().respond_to_execute(Ok(tx_result("BEEF"))));
    let fee = StdFee::new(vec![Coin::new(7_500, "uaura")], 300_000);
    let options = ExecOptions::default()
        .with_fee(fee.clone())
        .with_memo("buy #5")
        .with_funds(vec![Coin::new(1_000_000, "uaura")]);

    market.buy(NFT, "5", options).await?;

    let exec = &market.connection().executions()[0];
    assert_eq!(exec.msg, json!({"buy": {"contract_address": NFT, "token_id": "5"}}));
    assert_eq!(exec.fee, Fee::Fixed(fee));
    assert_eq!(exec.memo.as_deref(), Some("buy #5"));
    assert_eq!(exec.funds, vec![Coin::new(1_000_000, "uaura")]);
    Ok(())
}

#[tokio::test]
async fn test_default_options_are_auto_fee_no_memo_no_funds() -> Result<()> {
    let market = client(RecordingConnection::new().respond_to_execute(Ok(tx_result("01"))));

    market.cancel(NFT, "1", ExecOptions::default()).await?;

    let exec = &market.connection().executions()[0];
    assert_eq!(exec.fee, Fee::Auto);
    assert!(exec.memo.is_none());
    assert!(exec.funds.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_rejected_submission_reported_verbatim_once() {
    let detail = "failed to execute message; message index: 0: Unauthorized: execute wasm contract failed";
    let market = client(
        RecordingConnection::new()
            .respond_to_execute(Err(Error::Execution(detail.into())))
            .respond_to_execute(Ok(tx_result("SHOULD_NOT_BE_USED"))),
    );

    let err = market
        .cancel(NFT, "42", ExecOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Execution(_)));
    assert_eq!(err.detail(), detail);
    assert_eq!(market.connection().executions().len(), 1);
}

#[tokio::test]
async fn test_transport_failure_reported_verbatim_once() {
    let market = client(
        RecordingConnection::new()
            .respond_to_execute(Err(Error::Connection("broadcast timed out".into()))),
    );

    let err = market
        .buy(NFT, "1", ExecOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Connection(ref m) if m == "broadcast timed out"));
    assert_eq!(market.connection().executions().len(), 1);
}

#[tokio::test]
async fn test_signing_client_exposes_queries() -> Result<()> {
    let market = client(
        RecordingConnection::new()
            .respond_to_query(Ok(json!({"owner": "aura1owner", "collection_code_id": 1}))),
    );

    let config = market.get_config().await?;

    assert_eq!(config.collection_code_id, 1);
    assert_eq!(market.contract_address(), MARKETPLACE);
    assert!(market.connection().executions().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_concurrent_calls_each_submit_once() -> Result<()> {
    let conn = Arc::new(
        RecordingConnection::new()
            .respond_to_execute(Ok(tx_result("T1")))
            .respond_to_execute(Ok(tx_result("T2"))),
    );
    let market = MarketplaceClient::new(conn.clone(), SENDER, MARKETPLACE);

    let (a, b) = tokio::join!(
        market.cancel(NFT, "1", ExecOptions::default()),
        market.cancel(NFT, "2", ExecOptions::default()),
    );
    a?;
    b?;

    let mut ids: Vec<String> = conn
        .executions()
        .iter()
        .map(|e| e.msg["cancel"]["token_id"].as_str().unwrap().to_string())
        .collect();
    ids.sort();
    assert_eq!(ids, vec!["1", "2"]);
    Ok(())
}
