//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Keeps validation and entity definitions in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod comments;
pub mod errors;
pub mod runtime;
pub mod storage;
