use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use models::Comment;
use tokio::fs;

use crate::errors::ServiceError;
use crate::storage::CommentStore;

/// JSON file-backed comment store.
///
/// Persists the collection as a single JSON array. Every `load_all` reads the
/// file fresh and every `save_all` rewrites it completely, so readers of the
/// file never observe a half-applied mutation.
pub struct JsonFileStore {
    file_path: PathBuf,
}

impl JsonFileStore {
    /// Initialize the store from a path. Creates parent directories and seeds
    /// an empty `[]` document when the file does not exist yet.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        if fs::metadata(&file_path).await.is_err() {
            let empty: Vec<Comment> = Vec::new();
            let data = serde_json::to_vec(&empty)
                .map_err(|e| ServiceError::StorageWrite(e.to_string()))?;
            fs::write(&file_path, data)
                .await
                .map_err(|e| ServiceError::StorageWrite(e.to_string()))?;
        }

        Ok(Arc::new(Self { file_path }))
    }
}

#[async_trait]
impl CommentStore for JsonFileStore {
    async fn load_all(&self) -> Result<Vec<Comment>, ServiceError> {
        let bytes = fs::read(&self.file_path)
            .await
            .map_err(|e| ServiceError::StorageRead(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| ServiceError::StorageRead(e.to_string()))
    }

    async fn save_all(&self, comments: &[Comment]) -> Result<(), ServiceError> {
        let data =
            serde_json::to_vec(comments).map_err(|e| ServiceError::StorageWrite(e.to_string()))?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| ServiceError::StorageWrite(e.to_string()))
    }
}
