//! Hosted knowledge collection (vector store) helpers.
//!
//! Wraps the remote file-upload and collection-creation calls behind a
//! trait, and converts every failure into a status record instead of an
//! error: callers always get a report, never a propagated failure.

mod openai;

pub use openai::OpenAiKnowledgeBackend;

use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Descriptor of a hosted knowledge collection.
///
/// All identifiers are opaque strings; validity is the remote service's
/// concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreDetails {
    /// Collection ID assigned by the service.
    pub id: String,
    /// Collection name.
    pub name: String,
    /// When the collection was created.
    pub created_at: DateTime<Utc>,
    /// Number of files fully processed into the collection.
    pub file_count: u32,
}

/// Status of a single file upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Success,
    Failed,
}

/// Per-file upload report. Failures are data, not errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadReport {
    /// File name (not the full path).
    pub file: String,
    pub status: UploadStatus,
    /// Failure description; always present when status is `Failed`.
    pub error: Option<String>,
}

/// Outcome of creating a knowledge collection.
#[derive(Debug, Clone)]
pub enum BootstrapOutcome {
    Created(StoreDetails),
    Failed { error: String },
}

/// Remote operations behind the knowledge helpers.
///
/// The production implementation talks to the OpenAI Files and Vector
/// Stores APIs; tests substitute a mock to simulate remote outcomes.
#[async_trait]
pub trait KnowledgeBackend: Send + Sync {
    /// Upload file content, returning the assigned file ID.
    async fn create_file(&self, file_name: &str, bytes: Vec<u8>) -> Result<String>;

    /// Attach an uploaded file to a collection.
    async fn attach_file(&self, store_id: &str, file_id: &str) -> Result<()>;

    /// Create a named collection and return its descriptor.
    async fn create_store(&self, name: &str) -> Result<StoreDetails>;
}

/// Knowledge collection helper over an injected backend.
pub struct KnowledgeStore {
    backend: Arc<dyn KnowledgeBackend>,
}

impl KnowledgeStore {
    /// Create a new helper over the given backend.
    pub fn new(backend: Arc<dyn KnowledgeBackend>) -> Self {
        Self { backend }
    }

    /// Upload a local file and attach it to a collection.
    ///
    /// Any failure (missing file, upload rejection, attach rejection) is
    /// logged and returned as a `Failed` report with a non-empty error.
    pub async fn upload_file(&self, path: &Path, store_id: &str) -> UploadReport {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match self.try_upload(path, &file_name, store_id).await {
            Ok(file_id) => {
                info!("Uploaded {} as {} to store {}", file_name, file_id, store_id);
                UploadReport {
                    file: file_name,
                    status: UploadStatus::Success,
                    error: None,
                }
            }
            Err(e) => {
                warn!("Error with {}: {}", file_name, e);
                UploadReport {
                    file: file_name,
                    status: UploadStatus::Failed,
                    error: Some(e.to_string()),
                }
            }
        }
    }

    async fn try_upload(&self, path: &Path, file_name: &str, store_id: &str) -> Result<String> {
        let bytes = tokio::fs::read(path).await?;
        let file_id = self.backend.create_file(file_name, bytes).await?;
        self.backend.attach_file(store_id, &file_id).await?;
        Ok(file_id)
    }

    /// Create a named collection.
    ///
    /// Failure is logged and returned as an outcome, never raised.
    pub async fn bootstrap(&self, name: &str) -> BootstrapOutcome {
        match self.backend.create_store(name).await {
            Ok(details) => {
                info!("Knowledge collection created: {} ({})", details.name, details.id);
                BootstrapOutcome::Created(details)
            }
            Err(e) => {
                warn!("Error creating knowledge collection: {}", e);
                BootstrapOutcome::Failed {
                    error: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SvarError;
    use std::io::Write;

    /// Mock backend with per-call failure switches.
    #[derive(Default)]
    struct MockBackend {
        fail_create_file: bool,
        fail_attach: bool,
        fail_create_store: bool,
    }

    #[async_trait]
    impl KnowledgeBackend for MockBackend {
        async fn create_file(&self, _file_name: &str, _bytes: Vec<u8>) -> Result<String> {
            if self.fail_create_file {
                Err(SvarError::OpenAI("file upload rejected".to_string()))
            } else {
                Ok("file-123".to_string())
            }
        }

        async fn attach_file(&self, _store_id: &str, _file_id: &str) -> Result<()> {
            if self.fail_attach {
                Err(SvarError::OpenAI("attach rejected".to_string()))
            } else {
                Ok(())
            }
        }

        async fn create_store(&self, name: &str) -> Result<StoreDetails> {
            if self.fail_create_store {
                Err(SvarError::OpenAI("store creation rejected".to_string()))
            } else {
                Ok(StoreDetails {
                    id: "vs_abc123".to_string(),
                    name: name.to_string(),
                    created_at: Utc::now(),
                    file_count: 0,
                })
            }
        }
    }

    fn store(backend: MockBackend) -> KnowledgeStore {
        KnowledgeStore::new(Arc::new(backend))
    }

    fn temp_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "product catalogue").unwrap();
        file
    }

    #[tokio::test]
    async fn test_upload_missing_file_reports_failure() {
        let store = store(MockBackend::default());
        let report = store
            .upload_file(Path::new("/no/such/catalogue.pdf"), "vs_abc123")
            .await;

        assert_eq!(report.file, "catalogue.pdf");
        assert_eq!(report.status, UploadStatus::Failed);
        assert!(!report.error.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upload_remote_rejection_reports_failure() {
        let file = temp_file();
        let store = store(MockBackend {
            fail_create_file: true,
            ..Default::default()
        });
        let report = store.upload_file(file.path(), "vs_abc123").await;

        assert_eq!(report.status, UploadStatus::Failed);
        assert!(report.error.unwrap().contains("file upload rejected"));
    }

    #[tokio::test]
    async fn test_upload_attach_rejection_reports_failure() {
        let file = temp_file();
        let store = store(MockBackend {
            fail_attach: true,
            ..Default::default()
        });
        let report = store.upload_file(file.path(), "vs_abc123").await;

        assert_eq!(report.status, UploadStatus::Failed);
        assert!(report.error.unwrap().contains("attach rejected"));
    }

    #[tokio::test]
    async fn test_upload_success() {
        let file = temp_file();
        let store = store(MockBackend::default());
        let report = store.upload_file(file.path(), "vs_abc123").await;

        assert_eq!(report.status, UploadStatus::Success);
        assert!(report.error.is_none());
    }

    #[tokio::test]
    async fn test_bootstrap_success_returns_details() {
        let store = store(MockBackend::default());
        match store.bootstrap("ACME Shop Product Knowledge Base").await {
            BootstrapOutcome::Created(details) => {
                assert_eq!(details.id, "vs_abc123");
                assert_eq!(details.name, "ACME Shop Product Knowledge Base");
                assert_eq!(details.file_count, 0);
            }
            BootstrapOutcome::Failed { error } => panic!("unexpected failure: {}", error),
        }
    }

    #[tokio::test]
    async fn test_bootstrap_failure_is_reported_not_raised() {
        let store = store(MockBackend {
            fail_create_store: true,
            ..Default::default()
        });
        match store.bootstrap("ACME Shop Product Knowledge Base").await {
            BootstrapOutcome::Failed { error } => {
                assert!(error.contains("store creation rejected"))
            }
            BootstrapOutcome::Created(_) => panic!("expected failure outcome"),
        }
    }
}
