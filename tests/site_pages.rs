mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_static_pages_render() {
    let (server, _, _) = common::create_test_server();

    for path in [
        "/",
        "/services",
        "/case-studies",
        "/insights",
        "/about",
        "/contact",
        "/thank-you",
    ] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::OK, "GET {path}");
        assert!(response.text().contains("Mstatili"), "GET {path}");
    }
}

#[tokio::test]
async fn test_home_lists_latest_posts() {
    let (server, _, _) = common::create_test_server();

    let body = server.get("/").await.text();

    assert!(body.contains("/insights/data-quality-that-sticks"));
    assert!(body.contains("/insights/digital-strategy-for-trust"));
}

#[tokio::test]
async fn test_home_alias_redirects_permanently() {
    let (server, _, _) = common::create_test_server();

    let response = server.get("/home").await;

    response.assert_status(StatusCode::PERMANENT_REDIRECT);
    assert_eq!(response.header("location"), "/");
}

#[tokio::test]
async fn test_service_detail_by_slug() {
    let (server, _, _) = common::create_test_server();

    let response = server.get("/services/dashboards-reporting").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("Dashboards &amp; Reporting"));
    assert!(body.contains("/contact?service=dashboards-reporting"));
}

#[tokio::test]
async fn test_unknown_service_slug_is_not_found() {
    let (server, _, _) = common::create_test_server();

    let response = server.get("/services/not-a-service").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body = response.text();
    assert!(body.contains("Service not found"));
    assert!(body.contains("href=\"/services\""));
}

#[tokio::test]
async fn test_unknown_case_study_and_article_are_not_found() {
    let (server, _, _) = common::create_test_server();

    let response = server.get("/case-studies/missing").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("Case study not found"));

    let response = server.get("/insights/missing").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().contains("Article not found"));
}

#[tokio::test]
async fn test_unknown_route_renders_not_found_page() {
    let (server, _, _) = common::create_test_server();

    let response = server.get("/pricing").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body = response.text();
    assert!(body.contains("Page not found"));
    assert!(body.contains("/pricing"));
}

#[tokio::test]
async fn test_case_studies_category_filter() {
    let (server, _, _) = common::create_test_server();

    let all = server.get("/case-studies").await.text();
    assert!(all.contains("2 result(s)"));

    let response = server
        .get("/case-studies")
        .add_query_param("category", "M&E")
        .await;
    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("1 result(s)"));
    assert!(body.contains("/case-studies/performance-reporting-framework"));
    assert!(!body.contains("/case-studies/nextstepke-career-decision-support\""));
}

#[tokio::test]
async fn test_case_studies_all_category_means_no_filter() {
    let (server, _, _) = common::create_test_server();

    let body = server
        .get("/case-studies")
        .add_query_param("category", "All")
        .await
        .text();

    assert!(body.contains("2 result(s)"));
}

#[tokio::test]
async fn test_case_studies_unknown_category_is_empty_not_error() {
    let (server, _, _) = common::create_test_server();

    let response = server
        .get("/case-studies")
        .add_query_param("category", "Blockchain")
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("0 result(s)"));
}

#[tokio::test]
async fn test_insights_search_is_case_insensitive() {
    let (server, _, _) = common::create_test_server();

    let body = server
        .get("/insights")
        .add_query_param("q", "  DASHBOARD ")
        .await
        .text();

    assert!(body.contains("1 result(s)"));
    assert!(body.contains("/insights/dashboards-managers-use"));
}

#[tokio::test]
async fn test_insights_search_without_matches() {
    let (server, _, _) = common::create_test_server();

    let response = server
        .get("/insights")
        .add_query_param("q", "quantum")
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("0 result(s)"));
}

#[tokio::test]
async fn test_article_renders_markdown_body() {
    let (server, _, _) = common::create_test_server();

    let response = server.get("/insights/data-quality-that-sticks").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("<h2>Why data quality keeps failing</h2>"));
    assert!(body.contains("Related insights"));
    assert!(body.contains("/insights/dashboards-managers-use"));
    assert!(body.contains("/insights/digital-strategy-for-trust"));
}

#[tokio::test]
async fn test_static_assets_are_served() {
    let (server, _, _) = common::create_test_server();

    let response = server.get("/static/site.css").await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_service_detail_shows_title_and_one_liner() {
    let (server, _, _) = common::create_test_server();

    let response = server.get("/services/data-strategy-governance").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("Data Strategy &amp; Governance"));
    assert!(body.contains("Clear KPIs, defined data sources, and practical rules"));
}
