use axum::http::StatusCode;
use optic_ledger::api;
use optic_ledger::datasource::MockChainSource;
use optic_ledger::db::init_db;
use optic_ledger::domain::{Address, SelfIdentity};
use optic_ledger::{Repository, ThresholdEstimator};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

struct TestApp {
    app: axum::Router,
    _temp: TempDir,
}

async fn setup_test_app() -> TestApp {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_string_lossy()
        .to_string();
    let pool = init_db(&db_path).await.expect("init_db failed");
    let repo = Arc::new(Repository::new(pool));

    let state = api::AppState::new(
        repo,
        Arc::new(MockChainSource::new()),
        SelfIdentity::new(Address::new("aaaaa-aa".to_string())).unwrap(),
        ThresholdEstimator::new(100, 10).unwrap(),
    );

    TestApp {
        app: api::create_router(state),
        _temp: temp_dir,
    }
}

async fn request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = axum::http::Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(axum::body::Body::from(b.to_string()))
            .unwrap(),
        None => builder.body(axum::body::Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

#[tokio::test]
async fn test_lists_are_empty_initially() {
    let t = setup_test_app().await;
    for uri in [
        "/v1/withdrawals",
        "/v1/collected-fees",
        "/v1/swaps",
        "/v1/liquidity-actions",
    ] {
        let (status, body) = request(&t.app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body, json!([]), "{}", uri);
    }
}

#[tokio::test]
async fn test_liquidity_action_scenario() {
    let t = setup_test_app().await;

    let (status, body) = request(
        &t.app,
        "POST",
        "/v1/liquidity-actions",
        Some(json!({
            "key": "P1-1",
            "amount0": 500,
            "amount1": 500,
            "timestamp": 1000,
            "positionId": 1,
            "poolId": "P1"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["key"], "P1-1");

    let (status, body) = request(&t.app, "GET", "/v1/liquidity-actions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "amount0": 500,
            "amount1": 500,
            "timestamp": 1000,
            "positionId": 1,
            "poolId": "P1"
        }])
    );
}

#[tokio::test]
async fn test_swap_recorded_once_and_duplicate_conflicts() {
    let t = setup_test_app().await;
    let swap = json!({
        "key": "0xabc",
        "amount0": 10,
        "amount1": 20,
        "timestamp": 1700000000,
        "fee": 3,
        "txHash": "0xabc"
    });

    let (status, _) = request(&t.app, "POST", "/v1/swaps", Some(swap.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let mut retry = swap.clone();
    retry["fee"] = json!(99);
    let (status, body) = request(&t.app, "POST", "/v1/swaps", Some(retry)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("0xabc"));

    let (_, body) = request(&t.app, "GET", "/v1/swaps", None).await;
    let swaps = body.as_array().unwrap();
    assert_eq!(swaps.len(), 1);
    assert_eq!(swaps[0]["fee"], 3);
    assert_eq!(swaps[0]["txHash"], "0xabc");
}

#[tokio::test]
async fn test_withdrawal_key_is_derived() {
    let t = setup_test_app().await;

    let (status, body) = request(
        &t.app,
        "POST",
        "/v1/withdrawals",
        Some(json!({
            "amount0": 100,
            "amount1": 0,
            "to": "2vxsx-fae",
            "timestamp": 42
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["key"], "100-0-2vxsx-fae");

    let (status, body) = request(&t.app, "GET", "/v1/withdrawals/100-0-2vxsx-fae", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["to"], "2vxsx-fae");
    assert_eq!(body["timestamp"], 42);
}

#[tokio::test]
async fn test_retried_withdrawal_conflicts() {
    let t = setup_test_app().await;
    let body = json!({ "amount0": 5, "amount1": 5, "to": "2vxsx-fae", "timestamp": 1 });

    let (first, _) = request(&t.app, "POST", "/v1/withdrawals", Some(body.clone())).await;
    let (second, _) = request(&t.app, "POST", "/v1/withdrawals", Some(body)).await;
    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::CONFLICT);

    let (_, list) = request(&t.app, "GET", "/v1/withdrawals", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_withdrawal_with_invalid_address_rejected() {
    let t = setup_test_app().await;
    let (status, _) = request(
        &t.app,
        "POST",
        "/v1/withdrawals",
        Some(json!({ "amount0": 1, "amount1": 1, "to": "", "timestamp": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_key_rejected() {
    let t = setup_test_app().await;
    let (status, _) = request(
        &t.app,
        "POST",
        "/v1/collected-fees",
        Some(json!({ "key": "", "amount0": 1, "amount1": 1, "timestamp": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_collected_fees_listed_in_key_order() {
    let t = setup_test_app().await;
    for (key, ts) in [("pos-2", 200), ("pos-3", 300), ("pos-1", 100)] {
        let (status, _) = request(
            &t.app,
            "POST",
            "/v1/collected-fees",
            Some(json!({ "key": key, "amount0": 1, "amount1": 2, "timestamp": ts })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = request(&t.app, "GET", "/v1/collected-fees", None).await;
    let timestamps: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["timestamp"].as_u64().unwrap())
        .collect();
    assert_eq!(timestamps, vec![100, 200, 300]);
}

#[tokio::test]
async fn test_missing_record_is_404() {
    let t = setup_test_app().await;
    let (status, body) = request(&t.app, "GET", "/v1/swaps/0xmissing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("0xmissing"));
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    let t = setup_test_app().await;
    let (status, _) = request(
        &t.app,
        "POST",
        "/v1/swaps",
        Some(json!({ "key": "k", "amount0": -1 })),
    )
    .await;
    assert!(status.is_client_error());

    let (_, list) = request(&t.app, "GET", "/v1/swaps", None).await;
    assert_eq!(list, json!([]));
}
