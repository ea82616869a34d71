use crate::common;
use chrono::{TimeZone, Utc};
use ghostfolio_rs::{ActivityType, CreateOrder, DataSource, GfError, ImportRequest};
use httpmock::Method::{POST, PUT};
use serde_json::json;

fn msft_buy() -> CreateOrder {
    CreateOrder {
        account_id: Some("acc-1".into()),
        comment: None,
        currency: "USD".into(),
        data_source: DataSource::Yahoo,
        date: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        fee: 0.0,
        quantity: 5.0,
        symbol: "MSFT".into(),
        activity_type: ActivityType::Buy,
        unit_price: 410.25,
    }
}

fn msft_buy_json() -> serde_json::Value {
    json!({
        "accountId": "acc-1",
        "currency": "USD",
        "dataSource": "YAHOO",
        "date": "2024-03-01T00:00:00Z",
        "fee": 0.0,
        "quantity": 5.0,
        "symbol": "MSFT",
        "type": "BUY",
        "unitPrice": 410.25
    })
}

#[tokio::test]
async fn import_posts_activities_and_returns_them() {
    let server = common::setup_server();
    let import_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/import")
            .header("authorization", common::bearer(common::JWT))
            .json_body(json!({ "activities": [msft_buy_json()] }));
        then.status(201)
            .header("content-type", "application/json")
            .body(common::fixture("import"));
    });

    let client = common::preauthed_client(&server);
    let resp = client
        .import_transactions(&ImportRequest::new(vec![msft_buy()]))
        .await
        .unwrap();
    import_mock.assert();

    assert_eq!(resp.activities.len(), 1);
    assert_eq!(resp.activities[0]["symbol"], "MSFT");
    assert_eq!(resp.activities[0]["unitPrice"], 410.25);
}

#[tokio::test]
async fn import_with_empty_response_body_succeeds() {
    let server = common::setup_server();
    let import_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/import");
        then.status(201);
    });

    let client = common::preauthed_client(&server);
    let resp = client
        .import_transactions(&ImportRequest::from(vec![msft_buy()]))
        .await
        .unwrap();
    import_mock.assert();
    assert!(resp.activities.is_empty());
}

#[tokio::test]
async fn rejected_import_carries_validation_messages() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/import");
        then.status(400)
            .header("content-type", "application/json")
            .body(
                r#"{"statusCode":400,"error":"Bad Request","message":["activities.0.symbol must be a string","activities.0.fee must not be less than 0"]}"#,
            );
    });

    let client = common::preauthed_client(&server);
    let err = client
        .import_transactions(&ImportRequest::new(vec![msft_buy()]))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(400));
    match err {
        GfError::Status { endpoint, message, .. } => {
            assert_eq!(endpoint, "import");
            assert_eq!(
                message,
                "activities.0.symbol must be a string; activities.0.fee must not be less than 0"
            );
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn create_order_posts_one_activity() {
    let server = common::setup_server();
    let create_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/order")
            .json_body(msft_buy_json());
        then.status(201)
            .header("content-type", "application/json")
            .body(common::fixture("order_created"));
    });

    let client = common::preauthed_client(&server);
    let created = client.create_order(&msft_buy()).await.unwrap();
    create_mock.assert();

    assert_eq!(created.id, "ord-9");
    assert_eq!(created.activity_type, ActivityType::Buy);
    assert_eq!(created.unit_price, Some(410.25));
    assert_eq!(created.is_draft, Some(false));
}

#[tokio::test]
async fn update_order_puts_to_the_id_path() {
    let server = common::setup_server();
    let mut body = msft_buy_json();
    body["id"] = json!("ord-9");
    let update_mock = server.mock(|when, then| {
        when.method(PUT).path("/api/v1/order/ord-9").json_body(body);
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("order_created"));
    });

    let client = common::preauthed_client(&server);
    let updated = client.update_order("ord-9", &msft_buy()).await.unwrap();
    update_mock.assert();
    assert_eq!(updated.id, "ord-9");
}

#[tokio::test]
async fn update_order_without_id_sends_nothing() {
    let server = common::setup_server();
    let any = server.mock(|_when, then| {
        then.status(200).body("{}");
    });

    let client = common::preauthed_client(&server);
    let err = client.update_order("", &msft_buy()).await.unwrap_err();

    assert!(matches!(err, GfError::InvalidParams(_)), "got {err:?}");
    assert_eq!(any.hits(), 0);
}
