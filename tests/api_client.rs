use mstatili_site::domain::entities::ContactRequest;
use mstatili_site::domain::gateways::BackendGateway;
use mstatili_site::error::ApiError;
use mstatili_site::infrastructure::api_client::{ApiClient, HttpBackendGateway};
use serde_json::{Value, json};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request() -> ContactRequest {
    ContactRequest {
        name: "Jane".to_string(),
        email: "jane@example.org".to_string(),
        phone: None,
        company: None,
        service: Some("consultation".to_string()),
        message: "Hello".to_string(),
        website: String::new(),
    }
}

async fn gateway(server: &MockServer, timeout: Duration) -> HttpBackendGateway {
    HttpBackendGateway::new(ApiClient::with_timeout(&server.uri(), timeout).unwrap())
}

#[tokio::test]
async fn test_submit_contact_decodes_receipt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Thanks", "success": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let receipt = gateway(&server, Duration::from_secs(5))
        .await
        .submit_contact(&request())
        .await
        .unwrap();

    assert_eq!(receipt.message, "Thanks");
    assert_eq!(receipt.success, Some(true));
}

#[tokio::test]
async fn test_http_error_keeps_status_and_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"detail": "Invalid email"})))
        .mount(&server)
        .await;

    let err = gateway(&server, Duration::from_secs(5))
        .await
        .submit_contact(&request())
        .await
        .unwrap_err();

    match &err {
        ApiError::Http { status, detail } => {
            assert_eq!(*status, 422);
            assert_eq!(detail.as_deref(), Some("Invalid email"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.detail(), Some("Invalid email"));
}

#[tokio::test]
async fn test_structured_detail_is_not_exposed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({"detail": [{"loc": ["body", "email"], "msg": "bad"}]})),
        )
        .mount(&server)
        .await;

    let err = gateway(&server, Duration::from_secs(5))
        .await
        .submit_contact(&request())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Http { status: 422, detail: None }));
    assert_eq!(err.detail(), None);
}

#[tokio::test]
async fn test_unexpected_success_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let err = gateway(&server, Duration::from_secs(5))
        .await
        .submit_contact(&request())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_slow_backend_is_network_error_and_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "late"}))
                .set_delay(Duration::from_secs(2)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = gateway(&server, Duration::from_millis(200))
        .await
        .submit_contact(&request())
        .await
        .unwrap_err();

    match &err {
        ApiError::Network(reason) => assert_eq!(reason, "request timed out after 200ms"),
        other => panic!("expected a network error, got {other:?}"),
    }
    assert_eq!(err.detail(), None);
}

#[tokio::test]
async fn test_health_check_follows_root_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Welcome"})))
        .mount(&server)
        .await;

    assert!(gateway(&server, Duration::from_secs(5)).await.health_check().await);

    let down = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&down)
        .await;

    assert!(!gateway(&down, Duration::from_secs(5)).await.health_check().await);
}

#[tokio::test]
async fn test_get_decodes_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/services"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"services": []})))
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).unwrap();
    let body: Value = client.get("/api/services").await.unwrap();

    assert_eq!(body["services"], json!([]));
}
