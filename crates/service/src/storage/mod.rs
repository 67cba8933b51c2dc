//! Storage abstraction for the comment collection.
//!
//! The whole collection lives in one JSON document: `load_all` reads and
//! parses it fresh, `save_all` replaces it wholesale. There is deliberately
//! no partial write and no in-memory caching, so the file on disk is always
//! a self-consistent snapshot between operations.

use async_trait::async_trait;
use models::Comment;

use crate::errors::ServiceError;

pub mod json_file;

/// Durable storage of the full comment collection as one document.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Read and parse the entire collection. Fails with `StorageRead` when
    /// the document is missing, unreadable, or not a valid comment array.
    async fn load_all(&self) -> Result<Vec<Comment>, ServiceError>;

    /// Serialize the full collection and replace the document. Fails with
    /// `StorageWrite` on serialization or I/O failure.
    async fn save_all(&self, comments: &[Comment]) -> Result<(), ServiceError>;
}

/// Simple in-memory store for tests and doc examples.
pub mod mock {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    pub struct MemoryStore {
        comments: Mutex<Vec<Comment>>,
    }

    impl MemoryStore {
        pub fn with_comments(comments: Vec<Comment>) -> Self {
            Self { comments: Mutex::new(comments) }
        }

        /// Current contents, for assertions.
        pub fn snapshot(&self) -> Vec<Comment> {
            self.comments.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CommentStore for MemoryStore {
        async fn load_all(&self) -> Result<Vec<Comment>, ServiceError> {
            Ok(self.comments.lock().unwrap().clone())
        }

        async fn save_all(&self, comments: &[Comment]) -> Result<(), ServiceError> {
            *self.comments.lock().unwrap() = comments.to_vec();
            Ok(())
        }
    }
}
