//! Router tests for the compliance server
//!
//! Requests are driven through the full router with `oneshot`, including
//! multipart uploads built by hand.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use compliance_engine::ComplianceEngine;
use pretty_assertions::assert_eq;
use serde_json::Value;
use shared_types::{DocumentFormat, ExtractedText, ExtractionError, TextExtractor};
use tower::ServiceExt;

use crate::{build_router, AppState};

const BOUNDARY: &str = "compliance-test-boundary";

fn state() -> AppState {
    AppState::new(ComplianceEngine::new().unwrap(), 5_000, 600)
}

fn multipart_body(filename: &str, content_type: &str, content: &str, document_type: Option<&str>) -> String {
    let mut body = String::new();
    if let Some(document_type) = document_type {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"document_type\"\r\n\r\n{document_type}\r\n"
        ));
    }
    body.push_str(&format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n{content}\r\n--{BOUNDARY}--\r\n"
    ));
    body
}

fn upload_request(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/upload-document")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_root_and_health() {
    let app = build_router(state());

    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "SEC Marketing Rule Checker API");

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "compliance-server");
}

#[tokio::test]
async fn test_upload_analyzes_and_records_document() {
    let app = build_router(state());
    let body = multipart_body(
        "flyer.txt",
        "text/plain",
        "This strategy offers guaranteed returns with no risk",
        Some("rfp"),
    );

    let (status, record) = send(&app, upload_request(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["id"], 1);
    assert_eq!(record["filename"], "flyer.txt");
    assert_eq!(record["document_type"], "rfp");
    assert_eq!(record["analysis"]["overall_score"], 40);
    assert_eq!(record["analysis"]["compliance_status"], "non_compliant");
    assert_eq!(record["analysis"]["findings"].as_array().unwrap().len(), 3);
    assert_eq!(record["analysis"]["document_stats"]["format"], "txt");
    assert_eq!(record["analysis"]["document_stats"]["word_count"], 8);
    assert!(record["analysis"]["analyzed_at"].is_string());

    let (status, documents) = send(&app, get("/documents")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(documents.as_array().unwrap().len(), 1);

    let (status, fetched) = send(&app, get("/documents/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, record);
}

#[tokio::test]
async fn test_document_type_defaults_to_advertisement() {
    let app = build_router(state());
    let body = multipart_body("note.txt", "text/plain; charset=utf-8", "Quarterly update", None);

    let (status, record) = send(&app, upload_request(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(record["document_type"], "advertisement");
    assert_eq!(record["analysis"]["overall_score"], 100);
    assert_eq!(record["analysis"]["compliance_status"], "compliant");
}

#[tokio::test]
async fn test_unknown_document_is_404() {
    let app = build_router(state());
    let (status, body) = send(&app, get("/documents/7")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Document not found");
    assert_eq!(body["code"], "DOCUMENT_NOT_FOUND");
}

#[tokio::test]
async fn test_rejects_unsupported_content_type() {
    let app = build_router(state());
    let body = multipart_body("chart.png", "image/png", "not really a png", None);

    let (status, body) = send(&app, upload_request(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "File type not supported. Please upload PDF, Word, or text files."
    );

    let (_, documents) = send(&app, get("/documents")).await;
    assert!(documents.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_rejects_oversized_upload() {
    let mut state = state();
    state.max_upload_bytes = 16;
    let app = build_router(state);
    let body = multipart_body("long.txt", "text/plain", &"a".repeat(64), None);

    let (status, body) = send(&app, upload_request(body)).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["code"], "FILE_TOO_LARGE");
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("File size exceeds maximum limit of 0MB"));
}

#[tokio::test]
async fn test_body_beyond_stream_limit_reports_sizes() {
    let mut state = state();
    state.max_upload_bytes = 16;
    let app = build_router(state);
    let body = multipart_body("deck.txt", "text/plain", &"a".repeat(2 * 1024 * 1024), None);
    let content_length = body.len();

    let request = Request::builder()
        .method("POST")
        .uri("/upload-document")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header(header::CONTENT_LENGTH, content_length)
        .body(Body::from(body))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["code"], "FILE_TOO_LARGE");
    assert_eq!(
        body["error"],
        "File size exceeds maximum limit of 0MB. File size: 2.0MB"
    );
}

/// Extractor that outlives any reasonable analysis timeout
struct SlowExtractor;

impl TextExtractor for SlowExtractor {
    fn extract(
        &self,
        _bytes: &[u8],
        format: DocumentFormat,
    ) -> Result<ExtractedText, ExtractionError> {
        std::thread::sleep(Duration::from_millis(300));
        Ok(ExtractedText::new("", 1, format))
    }
}

#[tokio::test]
async fn test_slow_analysis_times_out_without_recording() {
    let mut state = state();
    state.extractor = Arc::new(SlowExtractor);
    state.analysis_timeout = Duration::from_millis(10);
    let app = build_router(state);
    let body = multipart_body("memo.txt", "text/plain", "Quarterly update", None);

    let (status, body) = send(&app, upload_request(body)).await;
    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    assert_eq!(body["code"], "TIMEOUT");
    assert_eq!(body["error"], "Analysis timeout after 10ms");

    let (_, documents) = send(&app, get("/documents")).await;
    assert!(documents.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_unsupported_extension_becomes_extraction_finding() {
    let app = build_router(state());
    let body = multipart_body("slides.pptx", "text/plain", "guaranteed returns", None);

    let (status, record) = send(&app, upload_request(body)).await;
    assert_eq!(status, StatusCode::OK);

    let analysis = &record["analysis"];
    assert_eq!(analysis["overall_score"], 0);
    assert_eq!(analysis["compliance_status"], "error");
    assert_eq!(analysis["findings"][0]["rule_type"], "extraction_error");
    assert_eq!(
        analysis["findings"][0]["description"],
        "Unsupported file format: .pptx"
    );
    assert_eq!(
        analysis["recommendations"][0],
        "Upload a valid PDF, Word, or text document"
    );
}

#[tokio::test]
async fn test_upload_without_file_field() {
    let app = build_router(state());
    let body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"document_type\"\r\n\r\nrfi\r\n--{BOUNDARY}--\r\n"
    );

    let (status, body) = send(&app, upload_request(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_REQUEST");
}

#[tokio::test]
async fn test_rules_listing_covers_every_category() {
    let app = build_router(state());
    let (status, body) = send(&app, get("/api/rules")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["version"], "206(4)-1/2024.1");
    let categories = body["categories"].as_array().unwrap();
    let names: Vec<&str> = categories
        .iter()
        .map(|c| c["rule_type"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "performance_advertising",
            "hypothetical_performance",
            "testimonials_endorsements",
            "substantiation",
            "anti_fraud",
            "third_party_ratings",
        ]
    );
    assert_eq!(categories[4]["groups"][1]["role"], "omission_indicators");
    assert_eq!(categories[5]["groups"][0]["kind"], "keyword");
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// Any plain-text upload is analyzed and scored within bounds
        #[test]
        fn text_uploads_always_score(content in "[a-zA-Z0-9 .,%-]{0,300}") {
            let runtime = tokio::runtime::Runtime::new().unwrap();
            let (status, record) = runtime.block_on(async {
                let app = build_router(state());
                send(&app, upload_request(multipart_body("ad.txt", "text/plain", &content, None))).await
            });

            prop_assert_eq!(status, StatusCode::OK);
            let score = record["analysis"]["overall_score"].as_u64().unwrap();
            prop_assert!(score <= 100);
            prop_assert_ne!(record["analysis"]["compliance_status"].as_str(), Some("error"));
        }
    }
}
