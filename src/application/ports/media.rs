// src/application/ports/media.rs
use crate::application::error::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;

/// An uploaded binary payload, typically a post image.
#[derive(Debug, Clone)]
pub struct MediaBlob {
    pub bytes: Bytes,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
}

impl MediaBlob {
    pub fn new(bytes: Bytes) -> Self {
        Self {
            bytes,
            file_name: None,
            content_type: None,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Blob storage for post media.
///
/// `store` must not hand back a path unless the bytes are durable. `delete`
/// is idempotent: a missing path is not an error, so callers can retry
/// cleanup freely.
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn store(&self, blob: MediaBlob) -> ApplicationResult<String>;
    async fn delete(&self, path: &str) -> ApplicationResult<()>;
}
