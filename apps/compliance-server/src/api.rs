//! API handlers for the compliance server

use axum::{
    body::Bytes,
    extract::{multipart::MultipartError, Multipart, Path, Query, State},
    http::{header, HeaderMap},
    Json,
};
use chrono::Utc;
use compliance_engine::catalog::PatternGroup;
use compliance_engine::RuleCatalog;
use serde::{Deserialize, Serialize};
use shared_types::{DocumentFormat, DocumentType, RuleType};
use tracing::{debug, info};

use crate::error::ServerError;
use crate::store::{AnalysisRecord, DocumentRecord, NewDocument};
use crate::AppState;

/// Content types accepted on upload
const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
];

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Handler: GET /
pub async fn handle_root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "SEC Marketing Rule Checker API",
    })
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "compliance-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Query parameters for upload; the multipart field takes precedence
#[derive(Deserialize, Default)]
pub struct UploadParams {
    pub document_type: Option<String>,
}

struct Upload {
    filename: String,
    bytes: Bytes,
}

/// Strip parameters such as `; charset=utf-8` from a content type
fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}

/// Handler: POST /upload-document
pub async fn handle_upload_document(
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<DocumentRecord>, ServerError> {
    let uploaded_at = Utc::now();
    let content_length = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<usize>().ok());
    let multipart_error =
        |err: MultipartError| ServerError::from_multipart(err, state.max_upload_bytes, content_length);
    let mut document_type = params.document_type;
    let mut upload = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let content_type = media_type(field.content_type().unwrap_or_default());
                if !ALLOWED_CONTENT_TYPES.contains(&content_type.as_str()) {
                    return Err(ServerError::UnsupportedFileType);
                }
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(multipart_error)?;
                upload = Some(Upload { filename, bytes });
            }
            Some("document_type") => {
                document_type = Some(field.text().await.map_err(multipart_error)?)
            }
            other => debug!("Ignoring multipart field {:?}", other),
        }
    }

    let Upload { filename, bytes } = upload
        .ok_or_else(|| ServerError::InvalidRequest("missing 'file' field".to_string()))?;

    if bytes.len() > state.max_upload_bytes {
        return Err(ServerError::file_too_large(
            state.max_upload_bytes,
            Some(bytes.len()),
        ));
    }

    let document_type = document_type
        .as_deref()
        .map(DocumentType::parse)
        .unwrap_or_default();
    let file_size = bytes.len();

    info!(
        "Upload: filename={}, size={}, type={:?}",
        filename, file_size, document_type
    );

    let format = DocumentFormat::from_filename(&filename);
    let engine = state.engine.clone();
    let extractor = state.extractor.clone();
    let task = tokio::task::spawn_blocking(move || {
        let extracted = format.and_then(|format| extractor.extract(&bytes, format));
        engine.analyze_extraction(extracted)
    });

    // On timeout the blocking task is detached, not cancelled; its result is dropped
    let result = tokio::time::timeout(state.analysis_timeout, task)
        .await
        .map_err(|_| ServerError::Timeout(state.analysis_timeout.as_millis() as u64))?
        .map_err(|e| ServerError::Internal(e.to_string()))?;

    let record = state
        .store
        .insert(NewDocument {
            filename,
            document_type,
            file_size,
            uploaded_at,
            analysis: AnalysisRecord {
                result,
                analyzed_at: Utc::now(),
            },
        })
        .await;

    Ok(Json(record))
}

/// Handler: GET /documents
pub async fn handle_list_documents(State(state): State<AppState>) -> Json<Vec<DocumentRecord>> {
    Json(state.store.list().await)
}

/// Handler: GET /documents/:id
pub async fn handle_get_document(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DocumentRecord>, ServerError> {
    state
        .store
        .get(id)
        .await
        .map(Json)
        .ok_or(ServerError::DocumentNotFound(id))
}

#[derive(Serialize)]
pub struct CategoryInfo {
    pub rule_type: RuleType,
    pub groups: Vec<PatternGroup>,
}

#[derive(Serialize)]
pub struct RulesResponse {
    pub version: &'static str,
    pub categories: Vec<CategoryInfo>,
}

/// Handler: GET /api/rules
pub async fn handle_list_rules(State(state): State<AppState>) -> Json<RulesResponse> {
    let categories = state
        .engine
        .catalog()
        .iter()
        .map(|rules| CategoryInfo {
            rule_type: rules.rule_type(),
            groups: rules.pattern_groups(),
        })
        .collect();

    Json(RulesResponse {
        version: RuleCatalog::VERSION,
        categories,
    })
}
