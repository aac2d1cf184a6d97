//! OpenAI-backed knowledge collection implementation.
//!
//! Files are uploaded through the Files API with the `assistants` purpose,
//! then attached to a hosted vector store.

use super::{KnowledgeBackend, StoreDetails};
use crate::error::{Result, SvarError};
use async_openai::types::{
    CreateFileRequest, CreateVectorStoreFileRequest, CreateVectorStoreRequestArgs, FileInput,
    FilePurpose,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Knowledge backend over the OpenAI Files and Vector Stores APIs.
pub struct OpenAiKnowledgeBackend {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
}

impl OpenAiKnowledgeBackend {
    /// Create a new backend using the given client.
    pub fn new(client: async_openai::Client<async_openai::config::OpenAIConfig>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl KnowledgeBackend for OpenAiKnowledgeBackend {
    async fn create_file(&self, file_name: &str, bytes: Vec<u8>) -> Result<String> {
        debug!("Uploading {} ({} bytes)", file_name, bytes.len());

        let request = CreateFileRequest {
            file: FileInput::from_vec_u8(file_name.to_string(), bytes),
            purpose: FilePurpose::Assistants,
        };

        let file = self
            .client
            .files()
            .create(request)
            .await
            .map_err(|e| SvarError::OpenAI(format!("File upload failed: {}", e)))?;

        Ok(file.id)
    }

    async fn attach_file(&self, store_id: &str, file_id: &str) -> Result<()> {
        debug!("Attaching {} to store {}", file_id, store_id);

        let request = CreateVectorStoreFileRequest {
            file_id: file_id.to_string(),
            ..Default::default()
        };

        self.client
            .vector_stores()
            .files(store_id)
            .create(request)
            .await
            .map_err(|e| SvarError::OpenAI(format!("File attach failed: {}", e)))?;

        Ok(())
    }

    async fn create_store(&self, name: &str) -> Result<StoreDetails> {
        let request = CreateVectorStoreRequestArgs::default()
            .name(name)
            .build()
            .map_err(|e| SvarError::Knowledge(format!("Failed to build request: {}", e)))?;

        let store = self
            .client
            .vector_stores()
            .create(request)
            .await
            .map_err(|e| SvarError::OpenAI(format!("Store creation failed: {}", e)))?;

        // The requested name is echoed back; keeping it from the request
        // sidesteps response-field nullability.
        Ok(StoreDetails {
            id: store.id,
            name: name.to_string(),
            created_at: DateTime::from_timestamp(store.created_at as i64, 0)
                .unwrap_or_else(Utc::now),
            file_count: store.file_counts.completed as u32,
        })
    }
}
