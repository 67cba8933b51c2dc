//! Comments module: validation rules, the duplicate check, and the CRUD
//! service orchestrating them over an injected store.

pub mod rules;
pub mod service;

pub use service::CommentService;
