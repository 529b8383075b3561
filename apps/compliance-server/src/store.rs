//! In-memory record of analyzed uploads

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared_types::{AnalysisResult, DocumentType};
use tokio::sync::RwLock;

/// Analysis outcome as stored with a document
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRecord {
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub analyzed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentRecord {
    pub id: u64,
    pub filename: String,
    pub document_type: DocumentType,
    pub file_size: usize,
    pub uploaded_at: DateTime<Utc>,
    pub analysis: AnalysisRecord,
}

/// A document ready to be recorded; the store assigns the id
pub struct NewDocument {
    pub filename: String,
    pub document_type: DocumentType,
    pub file_size: usize,
    pub uploaded_at: DateTime<Utc>,
    pub analysis: AnalysisRecord,
}

/// Records live for the life of the process and are never evicted.
#[derive(Default)]
pub struct DocumentStore {
    documents: RwLock<Vec<DocumentRecord>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a document. Ids start at 1 and follow upload order.
    pub async fn insert(&self, doc: NewDocument) -> DocumentRecord {
        let mut documents = self.documents.write().await;
        let record = DocumentRecord {
            id: documents.len() as u64 + 1,
            filename: doc.filename,
            document_type: doc.document_type,
            file_size: doc.file_size,
            uploaded_at: doc.uploaded_at,
            analysis: doc.analysis,
        };
        documents.push(record.clone());
        record
    }

    pub async fn list(&self) -> Vec<DocumentRecord> {
        self.documents.read().await.clone()
    }

    pub async fn get(&self, id: u64) -> Option<DocumentRecord> {
        self.documents
            .read()
            .await
            .iter()
            .find(|doc| doc.id == id)
            .cloned()
    }
}
