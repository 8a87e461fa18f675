//! Relay lifecycle scenarios, each run as one ordered batch of calls.

use relay_minifier::models::{CallReceipt, CallValue, ReceiptType, RelayStatus};

use crate::integration::common::context::{confirm_relay_call, create_relay_call, deploy_registry};

#[tokio::test]
async fn test_create_new_relay_successfully() {
    let registry = deploy_registry().await;

    let receipts = registry
        .execute_batch(vec![create_relay_call("ethereum", b"testMessageHash", 256)])
        .await;

    assert_eq!(receipts[0].result_type, ReceiptType::Ok);
    assert_eq!(receipts[0].value, CallValue::Uint(0));
}

#[tokio::test]
async fn test_confirm_existing_relay() {
    let registry = deploy_registry().await;

    let receipts = registry
        .execute_batch(vec![
            create_relay_call("polygon", b"confirmMessageHash", 128),
            confirm_relay_call(0),
        ])
        .await;

    assert_eq!(receipts[1].result_type, ReceiptType::Ok);
    assert_eq!(receipts[1].value, CallValue::Bool(true));
    assert_eq!(
        registry.get_relay(0).await.unwrap().status,
        RelayStatus::Confirmed
    );
}

#[tokio::test]
async fn test_reject_invalid_relay_creation() {
    let registry = deploy_registry().await;

    let receipts = registry
        .execute_batch(vec![create_relay_call("", b"", 0)])
        .await;

    assert_eq!(receipts[0].result_type, ReceiptType::Err);
    assert_eq!(receipts[0].value, CallValue::Uint(101));
}

#[tokio::test]
async fn test_rejected_creation_does_not_consume_an_id() {
    let registry = deploy_registry().await;

    let receipts = registry
        .execute_batch(vec![
            create_relay_call("", b"", 0),
            create_relay_call("ethereum", b"testMessageHash", 256),
        ])
        .await;

    assert_eq!(receipts, vec![CallReceipt::err(101), CallReceipt::ok(0u64)]);
}

#[tokio::test]
async fn test_state_persists_across_batches() {
    let registry = deploy_registry().await;

    let first = registry
        .execute_batch(vec![
            create_relay_call("ethereum", b"a", 1),
            create_relay_call("polygon", b"b", 2),
        ])
        .await;
    let second = registry
        .execute_batch(vec![
            confirm_relay_call(1),
            create_relay_call("base", b"c", 3),
            confirm_relay_call(1),
            confirm_relay_call(9),
        ])
        .await;

    assert_eq!(first, vec![CallReceipt::ok(0u64), CallReceipt::ok(1u64)]);
    assert_eq!(
        second,
        vec![
            CallReceipt::ok(true),
            CallReceipt::ok(2u64),
            CallReceipt::err(103),
            CallReceipt::err(102),
        ]
    );

    let statuses: Vec<RelayStatus> = registry
        .list_relays()
        .await
        .unwrap()
        .into_iter()
        .map(|relay| relay.status)
        .collect();
    assert_eq!(
        statuses,
        vec![RelayStatus::Pending, RelayStatus::Confirmed, RelayStatus::Pending]
    );
}
