//! # Backend configuration — `rastreio.toml`
//!
//! Describes how the app reaches its hosted backend. The file is optional:
//! the `api` crate layers environment variables on top of it, and a missing
//! file is equivalent to [`BackendConfig::default`].
//!
//! ## Structure
//!
//! ```toml
//! [firebase]
//! api_key = "AIza..."
//! project_id = "rastreio-app"
//! database = "(default)"
//! # auth_emulator = "http://127.0.0.1:9099"
//! # firestore_emulator = "http://127.0.0.1:8080"
//! ```
//!
//! The emulator entries replace the production endpoints, which is how the
//! app is pointed at the local Firebase emulator suite (or a mock server in
//! tests).

use serde::{Deserialize, Serialize};

use crate::repo::BackendError;

/// Production identity service endpoint.
pub const IDENTITY_TOOLKIT_URL: &str = "https://identitytoolkit.googleapis.com";

/// Production document database endpoint.
pub const FIRESTORE_URL: &str = "https://firestore.googleapis.com";

/// Top-level configuration stored in `rastreio.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default)]
    pub firebase: FirebaseConfig,
}

/// Firebase project settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FirebaseConfig {
    /// Web API key of the project
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default = "default_database")]
    pub database: String,
    /// Base URL replacing the identity service endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_emulator: Option<String>,
    /// Base URL replacing the document database endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firestore_emulator: Option<String>,
}

fn default_database() -> String {
    "(default)".to_string()
}

impl Default for FirebaseConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            project_id: String::new(),
            database: default_database(),
            auth_emulator: None,
            firestore_emulator: None,
        }
    }
}

impl BackendConfig {
    /// Create a config for the given project.
    pub fn new(api_key: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            firebase: FirebaseConfig {
                api_key: api_key.into(),
                project_id: project_id.into(),
                ..FirebaseConfig::default()
            },
        }
    }

    /// Builder method to route both services to emulators at the same base URL.
    pub fn with_emulator(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.firebase.auth_emulator = Some(base_url.clone());
        self.firebase.firestore_emulator = Some(base_url);
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "rastreio.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Check that the settings every request needs are present.
    pub fn validate(&self) -> Result<(), BackendError> {
        if self.firebase.api_key.trim().is_empty() {
            return Err(BackendError::Config("firebase.api_key is not set".to_string()));
        }
        if self.firebase.project_id.trim().is_empty() {
            return Err(BackendError::Config(
                "firebase.project_id is not set".to_string(),
            ));
        }
        Ok(())
    }

    /// Base URL of the identity service, emulator first.
    pub fn identity_base_url(&self) -> String {
        match &self.firebase.auth_emulator {
            // The auth emulator serves the REST API under its own prefix
            Some(base) => format!(
                "{}/identitytoolkit.googleapis.com",
                base.trim_end_matches('/')
            ),
            None => IDENTITY_TOOLKIT_URL.to_string(),
        }
    }

    /// Base URL of the document database, emulator first.
    pub fn firestore_base_url(&self) -> String {
        match &self.firebase.firestore_emulator {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => FIRESTORE_URL.to_string(),
        }
    }

    /// Resource prefix of every document path:
    /// `projects/{project}/databases/{database}/documents`
    pub fn documents_root(&self) -> String {
        format!(
            "projects/{}/databases/{}/documents",
            self.firebase.project_id, self.firebase.database
        )
    }
}
