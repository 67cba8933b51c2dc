//! Required-field validation for create payloads.
//!
//! The checks are an ordered rule table evaluated top to bottom, first match
//! wins, so the precedence (payload, name, body, email, postId) is explicit
//! and testable on its own.

use models::CommentDraft;

/// A single rule: the draft fails with `message` when `violated` holds.
struct Rule {
    violated: fn(&CommentDraft) -> bool,
    message: &'static str,
}

const RULES: &[Rule] = &[
    Rule { violated: |d| d.is_empty(), message: "Payload is required" },
    Rule { violated: |d| is_blank(&d.name), message: "Name is required" },
    Rule { violated: |d| is_blank(&d.body), message: "Body is required" },
    Rule { violated: |d| is_blank(&d.email), message: "Email is required" },
    Rule { violated: |d| d.post_id.unwrap_or(0) == 0, message: "PostId is required" },
];

// Empty string counts as missing; whitespace does not (source truthiness).
fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, str::is_empty)
}

/// Message of the first violated rule, or `None` when the draft is valid.
pub fn first_violation(draft: &CommentDraft) -> Option<&'static str> {
    RULES.iter().find(|rule| (rule.violated)(draft)).map(|rule| rule.message)
}
