//! CORS and auxiliary endpoint tests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use edge_cleanup::{create_router, RouterConfig};

use super::test_utils::{body_json, png_data_uri, solid_image};

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let router = create_router(RouterConfig::new().with_tracing(false));

    let request = Request::builder()
        .method("POST")
        .uri("/process-image")
        .header("origin", "https://anywhere.example")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "image": png_data_uri(&solid_image(4, 4, [9, 9, 9])) }).to_string(),
        ))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
    assert!(response
        .headers()
        .get("access-control-allow-credentials")
        .is_none());
}

#[tokio::test]
async fn test_cors_preflight() {
    let router = create_router(RouterConfig::new().with_tracing(false));

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/process-image")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
    let methods = response
        .headers()
        .get("access-control-allow-methods")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(methods.contains("POST"));
}

#[tokio::test]
async fn test_cors_restricted_origin() {
    let router = create_router(
        RouterConfig::new()
            .with_tracing(false)
            .with_cors_origins(vec!["https://allowed.example".to_string()]),
    );

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .header("origin", "https://allowed.example")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "https://allowed.example"
    );
}

#[tokio::test]
async fn test_health_endpoint() {
    let router = create_router(RouterConfig::new().with_tracing(false));

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_get_process_image_not_allowed() {
    let router = create_router(RouterConfig::new().with_tracing(false));

    let request = Request::builder()
        .uri("/process-image")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_body_over_limit_rejected() {
    let router = create_router(
        RouterConfig::new()
            .with_tracing(false)
            .with_body_limit(2048),
    );

    let image = png_data_uri(&solid_image(64, 64, [1, 2, 3]));
    let padding = "A".repeat(4096);
    let request = Request::builder()
        .method("POST")
        .uri("/process-image")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "image": image, "padding": padding }).to_string(),
        ))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Failed to process image" })
    );
}

#[tokio::test]
async fn test_body_within_limit_accepted() {
    let router = create_router(
        RouterConfig::new()
            .with_tracing(false)
            .with_body_limit(64 * 1024),
    );

    let request = Request::builder()
        .method("POST")
        .uri("/process-image")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "image": png_data_uri(&solid_image(8, 8, [1, 2, 3])) }).to_string(),
        ))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
