use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dealerdesk::domain::report::ReportFilter;
use dealerdesk::gateway::types::{Activation, BundlePurchase};
use dealerdesk::gateway::{GatewayClient, GatewayError, ReportSession};

fn client_for(server: &MockServer) -> GatewayClient {
    GatewayClient::new(&server.uri(), "test-key", Duration::from_secs(5)).expect("gateway client")
}

fn activation_rows() -> serde_json::Value {
    json!([
        {
            "msisdn": "256771234567",
            "product": "starter-pack",
            "status": "Active",
            "dealer_code": "KLA-01",
            "activated_at": "2026-07-01 10:00:00"
        },
        {
            "msisdn": "256772000000",
            "bnumber": "0772000000",
            "imei": "356091804123452",
            "product": "data-sim",
            "status": "Pending",
            "activated_at": "2026-07-02 11:30:00"
        },
        {
            "msisdn": "256773000000",
            "product": "starter-pack",
            "status": "Active",
            "activated_at": "2026-07-03 09:15:00"
        }
    ])
}

#[tokio::test]
async fn fetch_report_sends_descriptor_and_decodes_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/activations"))
        .and(query_param("page", "1"))
        .and(query_param("pageSize", "15"))
        .and(query_param("msisdn", "256771234567"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": activation_rows(),
            "totalcount": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let mut filter = ReportFilter::default();
    filter.set_search_text("256771234567");
    filter.apply_search();

    let page = client
        .fetch_report::<Activation>("activations", &filter.descriptor())
        .await
        .expect("report page");

    assert_eq!(page.total_count, 3);
    assert_eq!(page.rows.len(), 3);
    assert_eq!(page.rows[0].msisdn, "256771234567");
    assert_eq!(page.rows[1].bnumber.as_deref(), Some("0772000000"));

    // The unclassifiable parameter never reached the wire.
    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].url.query().unwrap_or("").contains("bnumber"));
}

#[tokio::test]
async fn rejection_messages_pass_through_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bundles"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Insufficient airtime for bundle DAILY-1GB",
            "statusCode": 422
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let purchase = BundlePurchase {
        msisdn: "256771234567".to_string(),
        bundle_code: "DAILY-1GB".to_string(),
    };

    let err = client.purchase_bundle(&purchase).await.unwrap_err();
    match err {
        GatewayError::Rejected { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "Insufficient airtime for bundle DAILY-1GB");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn session_refresh_keeps_last_page_when_gateway_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/activations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": activation_rows(),
            "totalcount": 3
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let session: ReportSession<Activation> = ReportSession::new();
    let filter = ReportFilter::default();

    let page = session
        .refresh(&client, "activations", &filter)
        .await
        .expect("first refresh")
        .expect("page");
    assert_eq!(page.total_count, 3);

    // A dead gateway fails the refresh but the session keeps its rows.
    let dead =
        GatewayClient::new("http://127.0.0.1:1", "test-key", Duration::from_millis(200)).unwrap();
    let result = session.refresh(&dead, "activations", &filter).await;
    assert!(result.is_err());

    let retained = session.snapshot().expect("retained page");
    assert_eq!(retained.total_count, 3);
}

#[tokio::test]
async fn balance_query_includes_msisdn() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/balance"))
        .and(query_param("msisdn", "256771234567"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "msisdn": "256771234567",
            "balance": "12500",
            "currency": "UGX"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let msisdn = dealerdesk::domain::types::Msisdn::new("0771234567").unwrap();

    let balance = client.balance(&msisdn).await.expect("balance");
    assert_eq!(balance.balance, "12500");
    assert_eq!(balance.currency, "UGX");
}
