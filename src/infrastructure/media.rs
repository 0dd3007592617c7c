// src/infrastructure/media.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::media::{MediaBlob, MediaStore},
};
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::{fs, io::AsyncWriteExt};
use uuid::Uuid;

const MEDIA_NAMESPACE: &str = "posts";

/// Blob store backed by a local directory. Paths handed out are relative to
/// the media root and namespaced under `posts/`.
pub struct LocalMediaStore {
    root: PathBuf,
}

impl LocalMediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, relative: &str) -> ApplicationResult<PathBuf> {
        let candidate = Path::new(relative);
        let traversal = candidate
            .components()
            .any(|part| !matches!(part, Component::Normal(_)));
        if traversal {
            return Err(ApplicationError::storage(format!(
                "refusing non-relative media path: {relative}"
            )));
        }
        Ok(self.root.join(candidate))
    }

    fn blob_name(blob: &MediaBlob) -> String {
        let extension = blob
            .file_name
            .as_deref()
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
            .map(str::to_lowercase);

        match extension {
            Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
            None => Uuid::new_v4().to_string(),
        }
    }
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    async fn store(&self, blob: MediaBlob) -> ApplicationResult<String> {
        let relative = format!("{MEDIA_NAMESPACE}/{}", Self::blob_name(&blob));
        let target = self.resolve(&relative)?;

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|err| ApplicationError::storage(err.to_string()))?;
        }

        // Write to a sibling temp file and rename so a crash mid-write never
        // leaves a referenced half-blob at the final path.
        let staging = target.with_extension("tmp");
        let mut file = fs::File::create(&staging)
            .await
            .map_err(|err| ApplicationError::storage(err.to_string()))?;
        file.write_all(&blob.bytes)
            .await
            .map_err(|err| ApplicationError::storage(err.to_string()))?;
        file.sync_all()
            .await
            .map_err(|err| ApplicationError::storage(err.to_string()))?;
        drop(file);

        fs::rename(&staging, &target)
            .await
            .map_err(|err| ApplicationError::storage(err.to_string()))?;

        Ok(relative)
    }

    async fn delete(&self, path: &str) -> ApplicationResult<()> {
        let target = self.resolve(path)?;
        match fs::remove_file(&target).await {
            Ok(()) => Ok(()),
            // Idempotent: a blob that is already gone needs no cleanup.
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ApplicationError::storage(err.to_string())),
        }
    }
}
