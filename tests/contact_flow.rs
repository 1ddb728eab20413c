mod common;

use axum::http::StatusCode;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERIC_FAILURE: &str = "Failed to send. Please try again, or email us directly.";

#[tokio::test]
async fn test_successful_submission_redirects_to_thank_you() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .and(body_partial_json(json!({
            "name": "Jane Wanjiku",
            "email": "jane@example.org",
            "company": "Acme Ltd",
            "website": ""
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Thank you for your inquiry! We'll get back to you soon.",
            "success": true
        })))
        .expect(1)
        .mount(&backend)
        .await;

    let server = common::create_server_with_backend(&backend.uri(), Duration::from_secs(5));

    let response = server.post("/contact").form(&common::valid_form()).await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/thank-you");
}

#[tokio::test]
async fn test_backend_detail_is_shown_verbatim() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"detail": "Invalid email"})))
        .expect(1)
        .mount(&backend)
        .await;

    let server = common::create_server_with_backend(&backend.uri(), Duration::from_secs(5));

    let response = server.post("/contact").form(&common::valid_form()).await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("role=\"alert\">Invalid email</div>"));
    // Input survives the failure.
    assert!(body.contains("value=\"Jane Wanjiku\""));
    assert!(body.contains("We need a monthly reporting pack."));
}

#[tokio::test]
async fn test_backend_error_without_detail_shows_generic_message() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .expect(1)
        .mount(&backend)
        .await;

    let server = common::create_server_with_backend(&backend.uri(), Duration::from_secs(5));

    let response = server.post("/contact").form(&common::valid_form()).await;

    response.assert_status_ok();
    assert!(response.text().contains(GENERIC_FAILURE));
}

#[tokio::test]
async fn test_backend_timeout_shows_generic_message() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "late"}))
                .set_delay(Duration::from_secs(2)),
        )
        .expect(1)
        .mount(&backend)
        .await;

    let server = common::create_server_with_backend(&backend.uri(), Duration::from_millis(200));

    let response = server.post("/contact").form(&common::valid_form()).await;

    response.assert_status_ok();
    assert!(response.text().contains(GENERIC_FAILURE));
}

#[tokio::test]
async fn test_unreachable_backend_shows_generic_message() {
    // Nothing listens on port 9 (discard) in the test environment.
    let server =
        common::create_server_with_backend("http://127.0.0.1:9", Duration::from_secs(2));

    let response = server.post("/contact").form(&common::valid_form()).await;

    response.assert_status_ok();
    assert!(response.text().contains(GENERIC_FAILURE));
}

#[tokio::test]
async fn test_invalid_input_never_reaches_backend() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&backend)
        .await;

    let server = common::create_server_with_backend(&backend.uri(), Duration::from_secs(5));

    let response = server
        .post("/contact")
        .form(&[
            ("name", "   "),
            ("email", "jane@example.org"),
            ("message", ""),
            ("website", ""),
        ])
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.text();
    assert!(body.contains("Please enter your name."));
    assert!(body.contains("Please tell us what you need help with."));
    assert!(!body.contains(GENERIC_FAILURE));
}

#[tokio::test]
async fn test_malformed_email_is_rejected_locally() {
    let (server, backend, _) = common::create_test_server();

    let mut form = common::valid_form();
    form[1] = ("email", "jane-at-example");

    let response = server.post("/contact").form(&form).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.text().contains("Please enter a valid email address."));
    assert!(backend.submitted().is_empty());
}

#[tokio::test]
async fn test_submission_sends_trimmed_optional_fields() {
    let (server, backend, _) = common::create_test_server();

    let mut form = common::valid_form();
    form[4] = ("service", "dashboards-reporting");

    let response = server.post("/contact").form(&form).await;

    response.assert_status(StatusCode::SEE_OTHER);
    let submitted = backend.submitted();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].phone, None);
    assert_eq!(submitted[0].service.as_deref(), Some("dashboards-reporting"));
    assert_eq!(submitted[0].website, "");
}

#[tokio::test]
async fn test_service_query_preselects_option() {
    let (server, _, _) = common::create_test_server();

    let body = server
        .get("/contact")
        .add_query_param("service", "dashboards-reporting")
        .await
        .text();

    assert!(body.contains("value=\"dashboards-reporting\" selected"));
}

#[tokio::test]
async fn test_unknown_service_query_is_ignored() {
    let (server, _, _) = common::create_test_server();

    let response = server
        .get("/contact")
        .add_query_param("service", "pricing")
        .await;

    response.assert_status_ok();
    assert!(!response.text().contains(" selected>"));
}

#[tokio::test]
async fn test_timeout_keeps_fields_and_stays_on_contact_page() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&backend)
        .await;

    let server = common::create_server_with_backend(&backend.uri(), Duration::from_millis(200));

    let response = server
        .post("/contact")
        .form(&[
            ("name", "Jane"),
            ("email", "jane@x.com"),
            ("message", "Need help"),
            ("website", ""),
        ])
        .await;

    response.assert_status_ok();
    assert!(response.headers().get("location").is_none());
    let body = response.text();
    assert!(body.contains("value=\"Jane\""));
    assert!(body.contains("value=\"jane@x.com\""));
    assert!(body.contains(">Need help</textarea>"));
    assert!(body.contains(GENERIC_FAILURE));
}

#[tokio::test]
async fn test_repeated_identical_submission_reaches_backend_once() {
    let (server, backend, _) = common::create_test_server();

    let first = server.post("/contact").form(&common::valid_form()).await;
    let second = server.post("/contact").form(&common::valid_form()).await;

    first.assert_status(StatusCode::SEE_OTHER);
    second.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(second.header("location"), "/thank-you");
    assert_eq!(backend.submitted().len(), 1);
}

#[tokio::test]
async fn test_resubmission_after_failure_is_sent_again() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&backend)
        .await;

    let server = common::create_server_with_backend(&backend.uri(), Duration::from_secs(5));

    server.post("/contact").form(&common::valid_form()).await.assert_status_ok();
    server.post("/contact").form(&common::valid_form()).await.assert_status_ok();
}
