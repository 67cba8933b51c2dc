use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use models::{Comment, CommentDraft, CommentPatch};

use super::rules;
use crate::errors::ServiceError;
use crate::storage::CommentStore;

/// Duplicate check against the existing collection.
///
/// Finds the FIRST comment whose email matches the draft's
/// case-insensitively. No match means the draft is unique. A match is a
/// duplicate only when `body`, `name`, and `postId` of that same comment all
/// agree as well (case-insensitive on the stringified values); a different
/// comment from the same address stays allowed. Later comments sharing the
/// email are never consulted.
pub fn is_unique(draft: &CommentDraft, existing: &[Comment]) -> bool {
    let email = match draft.email.as_deref() {
        Some(e) => e.to_lowercase(),
        None => return true,
    };
    let candidate = match existing.iter().find(|c| c.email.to_lowercase() == email) {
        Some(c) => c,
        None => return true,
    };

    let same = |stored: &str, field: &Option<String>| {
        field.as_deref().map_or(false, |v| v.to_lowercase() == stored.to_lowercase())
    };
    !(same(&candidate.body, &draft.body)
        && same(&candidate.name, &draft.name)
        && draft.post_id.map_or(false, |p| p == candidate.post_id))
}

/// Comment business service independent of the web framework.
///
/// Every operation loads the collection fresh from the store and every
/// mutation writes it back whole. Mutating operations additionally serialize
/// on an internal lock so two interleaved load-modify-save cycles cannot
/// clobber each other; reads stay lock-free.
pub struct CommentService<S: CommentStore> {
    store: Arc<S>,
    mutate: tokio::sync::Mutex<()>,
}

impl<S: CommentStore> CommentService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store, mutate: tokio::sync::Mutex::new(()) }
    }

    /// The full collection, in insertion order.
    pub async fn list(&self) -> Result<Vec<Comment>, ServiceError> {
        self.store.load_all().await
    }

    /// Fetch one comment by its id.
    pub async fn get(&self, id: &str) -> Result<Comment, ServiceError> {
        let comments = self.store.load_all().await?;
        comments
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| ServiceError::not_found(id))
    }

    /// Validate the draft, enforce the duplicate rule, mint an id, and append.
    ///
    /// # Examples
    /// ```
    /// use service::comments::service::CommentService;
    /// use service::storage::mock::MemoryStore;
    /// use models::CommentDraft;
    /// use std::sync::Arc;
    /// let svc = CommentService::new(Arc::new(MemoryStore::default()));
    /// let draft = CommentDraft {
    ///     name: Some("Ann".into()),
    ///     email: Some("a@x.com".into()),
    ///     body: Some("Hi".into()),
    ///     post_id: Some(1),
    /// };
    /// let comment = tokio_test::block_on(svc.create(draft)).unwrap();
    /// assert!(!comment.id.is_empty());
    /// assert_eq!(comment.post_id, 1);
    /// ```
    #[instrument(skip(self, draft))]
    pub async fn create(&self, draft: CommentDraft) -> Result<Comment, ServiceError> {
        if let Some(message) = rules::first_violation(&draft) {
            return Err(ServiceError::Validation(message.to_string()));
        }

        let _guard = self.mutate.lock().await;
        let mut comments = self.store.load_all().await?;
        if !is_unique(&draft, &comments) {
            debug!("create rejected by duplicate rule");
            return Err(ServiceError::Duplicate);
        }

        let comment = draft.into_comment(Uuid::new_v4().to_string());
        comments.push(comment.clone());
        self.store.save_all(&comments).await?;
        info!(id = %comment.id, post_id = comment.post_id, "comment_created");
        Ok(comment)
    }

    /// Shallow-merge the patch into the record addressed by `patch.id`.
    ///
    /// # Examples
    /// ```
    /// use service::comments::service::CommentService;
    /// use service::storage::mock::MemoryStore;
    /// use models::{CommentDraft, CommentPatch};
    /// use std::sync::Arc;
    /// let svc = CommentService::new(Arc::new(MemoryStore::default()));
    /// let draft = CommentDraft {
    ///     name: Some("Ann".into()),
    ///     email: Some("a@x.com".into()),
    ///     body: Some("Hi".into()),
    ///     post_id: Some(1),
    /// };
    /// let created = tokio_test::block_on(svc.create(draft)).unwrap();
    /// let patch = CommentPatch {
    ///     id: created.id.clone(),
    ///     name: None,
    ///     email: None,
    ///     body: Some("Edited".into()),
    ///     post_id: None,
    /// };
    /// let merged = tokio_test::block_on(svc.update(patch)).unwrap();
    /// assert_eq!(merged.body, "Edited");
    /// assert_eq!(merged.name, "Ann");
    /// ```
    #[instrument(skip(self, patch), fields(id = %patch.id))]
    pub async fn update(&self, patch: CommentPatch) -> Result<Comment, ServiceError> {
        let _guard = self.mutate.lock().await;
        let mut comments = self.store.load_all().await?;
        let idx = comments
            .iter()
            .position(|c| c.id == patch.id)
            .ok_or_else(|| ServiceError::not_found(&patch.id))?;

        comments[idx].apply(patch);
        let merged = comments[idx].clone();
        self.store.save_all(&comments).await?;
        info!(id = %merged.id, "comment_updated");
        Ok(merged)
    }

    /// Remove the comment with the given id and return it.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<Comment, ServiceError> {
        let _guard = self.mutate.lock().await;
        let comments = self.store.load_all().await?;
        let (kept, mut removed): (Vec<Comment>, Vec<Comment>) =
            comments.into_iter().partition(|c| c.id != id);
        if removed.is_empty() {
            return Err(ServiceError::not_found(id));
        }

        self.store.save_all(&kept).await?;
        let comment = removed.remove(0);
        info!(id = %comment.id, "comment_deleted");
        Ok(comment)
    }
}
