//! # Backend collaborators — identity service and document store
//!
//! The app never talks to its hosted backend directly. Screens go through two
//! async traits, so the same workflow code runs against the Firebase REST
//! clients in the `api` crate or the in-memory [`crate::MemoryBackend`] used
//! in tests.
//!
//! | Trait | Methods |
//! |-------|---------|
//! | [`IdentityService`] | `verify_credentials` — exchanges email + password for a [`Session`]. |
//! | [`DocumentStore`] | `list_documents` / `get_document` — slash-separated paths such as `"usuarios/{uid}"`. |
//!
//! Both report every failure as a [`BackendError`]; callers do not distinguish
//! transient from permanent failures.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Document;

/// Any failure reported by the hosted backend or while talking to it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BackendError {
    /// The identity service rejected the request: "INVALID_LOGIN_CREDENTIALS"
    #[error("authentication failed: {code}")]
    Auth { code: String },

    #[error("backend returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("backend is not configured: {0}")]
    Config(String),
}

/// Session identity returned by the identity service.
///
/// Opaque to the screens: only `user_id` is used to locate the profile, and the
/// tokens are handed back to the document store to authorize reads.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub id_token: String,
    pub refresh_token: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .finish_non_exhaustive()
    }
}

/// Async trait for verifying credentials.
pub trait IdentityService {
    fn verify_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<Session, BackendError>>;
}

/// Async trait for reading documents.
pub trait DocumentStore {
    /// List every document directly under a collection path.
    fn list_documents(
        &self,
        collection_path: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Document>, BackendError>>;

    /// Fetch one document; `Ok(None)` when it does not exist.
    fn get_document(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Result<Option<Document>, BackendError>>;
}
