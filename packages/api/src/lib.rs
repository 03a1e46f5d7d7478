//! # API crate — backend access and screen workflows for Rastreio
//!
//! The app has no server of its own: every read and the sign-in go straight to
//! the hosted Firebase project over REST. This crate holds those clients and
//! the two workflows the screens run on top of them.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Identity Toolkit email/password sign-in ([`FirebaseAuth`]) and the shared [`SessionHandle`] |
//! | [`firestore`] | Read-only Firestore REST client ([`FirestoreClient`]) and typed-value decoding |
//! | [`config`] | Loads [`store::BackendConfig`] from `rastreio.toml` and `FIREBASE_*` variables |
//! | [`login`] | Login workflow: validation, identity check, profile read, home routing |
//! | [`signs`] | Alarm-sign workflow: administrator scan and screen state |
//!
//! The workflows are generic over [`store::IdentityService`] and
//! [`store::DocumentStore`], so they run unchanged against
//! [`store::MemoryBackend`] in tests.

pub mod auth;
pub mod config;
pub mod firestore;
pub mod login;
pub mod signs;

pub use auth::{FirebaseAuth, SessionHandle};
pub use firestore::FirestoreClient;
pub use login::{login, Alert, Credentials, HomeRoute, LoginError, SignedIn};
pub use signs::{fetch_signs, SignCard, SignsState};

pub use store::{BackendConfig, BackendError, DisplayGroup, RouteParams, Session, UserType};

/// Both backend clients, sharing one HTTP connection pool and one session.
#[derive(Clone, Debug)]
pub struct Backend {
    pub identity: FirebaseAuth,
    pub documents: FirestoreClient,
    pub session: SessionHandle,
}

impl Backend {
    pub fn new(config: BackendConfig) -> Self {
        let http = reqwest::Client::new();
        let session = SessionHandle::new();
        Self {
            identity: FirebaseAuth::new(http.clone(), config.clone(), session.clone()),
            documents: FirestoreClient::new(http, config, session.clone()),
            session,
        }
    }

    /// Run the login workflow against this backend.
    ///
    /// A failed attempt leaves no session behind, even when the identity
    /// check itself succeeded.
    pub async fn login(&self, credentials: &Credentials) -> Result<SignedIn, LoginError> {
        let result = login::login(&self.identity, &self.documents, credentials).await;
        if result.is_err() {
            self.session.clear();
        }
        result
    }

    /// Run the alarm-sign scan against this backend.
    pub async fn fetch_signs(
        &self,
        key: &store::CombinationKey,
    ) -> Result<Vec<DisplayGroup>, BackendError> {
        signs::fetch_signs(&self.documents, key).await
    }
}

pub(crate) fn transport_error(e: reqwest::Error) -> BackendError {
    BackendError::Transport(e.to_string())
}
