//! API integration tests for successful image processing.
//!
//! Tests verify:
//! - Response shape and data-URI format
//! - Dimension preservation and grayscale edge structure
//! - Default parameters and kernel-size normalization
//! - Determinism

use axum::http::StatusCode;
use serde_json::json;

use super::test_utils::{
    data_uri, decode_processed, encode_jpeg, encode_png, pattern_image, png_data_uri, post_json,
    solid_image, square_image,
};

// =============================================================================
// Basic Processing
// =============================================================================

#[tokio::test]
async fn test_flat_image_yields_black_output() {
    let input = solid_image(10, 10, [180, 40, 90]);

    let (status, body) = post_json(json!({ "image": png_data_uri(&input) })).await;
    assert_eq!(status, StatusCode::OK);

    let uri = body["processedImage"].as_str().unwrap();
    assert!(uri.starts_with("data:image/png;base64,"));

    let output = decode_processed(uri);
    assert_eq!(output.dimensions(), (10, 10));
    assert!(output.pixels().all(|p| p.0 == [0, 0, 0]));
}

#[tokio::test]
async fn test_response_has_only_processed_image() {
    let (status, body) = post_json(json!({ "image": png_data_uri(&square_image(16)) })).await;
    assert_eq!(status, StatusCode::OK);

    let obj = body.as_object().unwrap();
    assert_eq!(obj.len(), 1);
    assert!(obj.contains_key("processedImage"));
}

#[tokio::test]
async fn test_square_produces_edges() {
    let (status, body) = post_json(json!({
        "image": png_data_uri(&square_image(40)),
        "gaussianBlur": 3
    }))
    .await;
    assert_eq!(status, StatusCode::OK);

    let output = decode_processed(body["processedImage"].as_str().unwrap());
    assert!(output.pixels().any(|p| p.0 == [255, 255, 255]));
    assert!(output.pixels().any(|p| p.0 == [0, 0, 0]));
}

#[tokio::test]
async fn test_dimensions_preserved() {
    for (w, h) in [(1, 1), (3, 17), (33, 20), (64, 48)] {
        let image = png_data_uri(&pattern_image(w, h));
        let (status, body) = post_json(json!({ "image": image })).await;
        assert_eq!(status, StatusCode::OK);

        let output = decode_processed(body["processedImage"].as_str().unwrap());
        assert_eq!(output.dimensions(), (w, h));
    }
}

#[tokio::test]
async fn test_output_channels_are_equal() {
    let (status, body) = post_json(json!({
        "image": png_data_uri(&pattern_image(48, 32)),
        "gaussianBlur": 3,
        "cannyLowerThreshold": 10,
        "cannyUpperThreshold": 50
    }))
    .await;
    assert_eq!(status, StatusCode::OK);

    let output = decode_processed(body["processedImage"].as_str().unwrap());
    for p in output.pixels() {
        assert_eq!(p[0], p[1]);
        assert_eq!(p[1], p[2]);
        assert!(p[0] == 0 || p[0] == 255);
    }
}

#[tokio::test]
async fn test_jpeg_input_accepted() {
    let jpeg = encode_jpeg(&square_image(32), 90);
    let (status, body) = post_json(json!({ "image": data_uri("image/jpeg", &jpeg) })).await;
    assert_eq!(status, StatusCode::OK);

    let output = decode_processed(body["processedImage"].as_str().unwrap());
    assert_eq!(output.dimensions(), (32, 32));
}

#[tokio::test]
async fn test_declared_mime_type_is_ignored() {
    let png = encode_png(&square_image(24));

    let (_, as_png) = post_json(json!({ "image": data_uri("image/png", &png) })).await;
    let (_, as_tiff) = post_json(json!({ "image": data_uri("image/tiff", &png) })).await;

    assert_eq!(as_png["processedImage"], as_tiff["processedImage"]);
}

// =============================================================================
// Parameters
// =============================================================================

#[tokio::test]
async fn test_defaults_match_explicit_parameters() {
    let image = png_data_uri(&pattern_image(40, 40));

    let (_, implicit) = post_json(json!({ "image": image })).await;
    let (_, explicit) = post_json(json!({
        "image": image,
        "gaussianBlur": 7,
        "cannyLowerThreshold": 30,
        "cannyUpperThreshold": 100
    }))
    .await;

    assert_eq!(implicit["processedImage"], explicit["processedImage"]);
}

#[tokio::test]
async fn test_even_kernel_matches_next_odd() {
    let image = png_data_uri(&pattern_image(40, 40));

    for k in [2, 4, 6, 10] {
        let (_, even) = post_json(json!({ "image": image, "gaussianBlur": k })).await;
        let (_, odd) = post_json(json!({ "image": image, "gaussianBlur": k + 1 })).await;
        assert_eq!(even["processedImage"], odd["processedImage"], "kernel {}", k);
    }
}

#[tokio::test]
async fn test_numeric_strings_are_coerced() {
    let image = png_data_uri(&pattern_image(30, 30));

    let (status, as_strings) = post_json(json!({
        "image": image,
        "gaussianBlur": "5",
        "cannyLowerThreshold": "20",
        "cannyUpperThreshold": "60"
    }))
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, as_numbers) = post_json(json!({
        "image": image,
        "gaussianBlur": 5,
        "cannyLowerThreshold": 20,
        "cannyUpperThreshold": 60
    }))
    .await;

    assert_eq!(as_strings["processedImage"], as_numbers["processedImage"]);
}

#[tokio::test]
async fn test_inverted_thresholds_accepted() {
    let (status, body) = post_json(json!({
        "image": png_data_uri(&square_image(32)),
        "cannyLowerThreshold": 200,
        "cannyUpperThreshold": 10
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["processedImage"].is_string());
}

#[tokio::test]
async fn test_processing_is_deterministic() {
    let request = json!({
        "image": png_data_uri(&pattern_image(50, 30)),
        "gaussianBlur": 9,
        "cannyLowerThreshold": 15,
        "cannyUpperThreshold": 45
    });

    let (_, first) = post_json(request.clone()).await;
    let (_, second) = post_json(request).await;
    assert_eq!(first, second);
}
