use serde::{Deserialize, Serialize};

/// A reader comment attached to a post.
///
/// Wire and on-disk field names are fixed: `id, name, email, body, postId`.
/// `id` is minted server-side on create and never changes afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub name: String,
    pub email: String,
    pub body: String,
    #[serde(rename = "postId")]
    pub post_id: u64,
}

/// Create payload: everything except `id`, which the service mints.
///
/// All fields are optional at the parse boundary so the validator, not the
/// deserializer, reports missing fields in the contract's precedence order.
/// Unknown keys (including a client-supplied `id`) are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub body: Option<String>,
    #[serde(rename = "postId")]
    pub post_id: Option<u64>,
}

/// Partial update payload, addressed by `id`.
///
/// `None` fields keep the stored value; applying a patch never touches `id`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CommentPatch {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub body: Option<String>,
    #[serde(rename = "postId")]
    pub post_id: Option<u64>,
}

impl CommentDraft {
    /// True when no field was supplied at all (an empty `{}` payload).
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.body.is_none() && self.post_id.is_none()
    }

    /// Materialize a `Comment` under a freshly minted id.
    ///
    /// Callers are expected to have validated the draft first; absent fields
    /// fall back to empty/zero rather than panicking.
    pub fn into_comment(self, id: String) -> Comment {
        Comment {
            id,
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            body: self.body.unwrap_or_default(),
            post_id: self.post_id.unwrap_or_default(),
        }
    }
}

impl Comment {
    /// Shallow-merge the patch: `Some` fields overwrite, `None` fields stay.
    /// The record's `id` is immutable and deliberately not part of the merge.
    pub fn apply(&mut self, patch: CommentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(body) = patch.body {
            self.body = body;
        }
        if let Some(post_id) = patch.post_id {
            self.post_id = post_id;
        }
    }
}
