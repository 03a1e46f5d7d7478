//! # Login workflow — credentials, identity check, profile routing
//!
//! [`login`] is what the login screen runs on submit:
//!
//! 1. Reject empty email or password locally ([`LoginError::MissingFields`]);
//!    the identity service is never called.
//! 2. Exchange the credentials for a [`Session`] through the [`IdentityService`].
//! 3. Read the profile at `usuarios/{userId}` through the [`DocumentStore`].
//! 4. Route on `tipoUsuario`: `"populacao"` → [`HomeRoute::Populacao`],
//!    `"saude"` → [`HomeRoute::Saude`], anything else is an error.
//!
//! Identity and profile stay separate lookups: the session only supplies the
//! user id that keys the profile read.
//!
//! Each [`LoginError`] maps to the blocking alert the screen shows via
//! [`LoginError::alert`].

use store::models::profile_path;
use store::{BackendError, DocumentStore, IdentityService, Session, UserProfile, UserType};
use thiserror::Error;

/// Title of every login alert.
pub const ALERT_TITLE: &str = "Erro";

/// Email and password as typed on the login screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

/// Home screen a signed-in user is sent to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeRoute {
    /// General population home
    Populacao,
    /// Health professional home
    Saude,
}

impl HomeRoute {
    pub fn path(&self) -> &'static str {
        match self {
            HomeRoute::Populacao => "/TelaDeHomeUsuario",
            HomeRoute::Saude => "/TelaDeHomeProfissional",
        }
    }
}

/// A successful login.
#[derive(Clone, Debug, PartialEq)]
pub struct SignedIn {
    pub session: Session,
    pub route: HomeRoute,
}

/// Why a login attempt did not navigate anywhere.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoginError {
    #[error("email and password are required")]
    MissingFields,

    #[error("no profile document for user {user_id}")]
    ProfileNotFound { user_id: String },

    #[error("unknown user type: {0:?}")]
    UnknownUserType(Option<String>),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// A blocking notification for the user.
#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

impl LoginError {
    /// User-facing message. Backend failures collapse into one generic text.
    pub fn user_message(&self) -> &'static str {
        match self {
            LoginError::MissingFields => "Por favor, preencha todos os campos.",
            LoginError::ProfileNotFound { .. } => "Documento do usuário não encontrado.",
            LoginError::UnknownUserType(_) => "Tipo de usuário desconhecido.",
            LoginError::Backend(_) => {
                "Falha ao realizar login. Verifique suas credenciais e tente novamente."
            }
        }
    }

    pub fn alert(&self) -> Alert {
        Alert::new(ALERT_TITLE, self.user_message())
    }
}

/// Authenticate and resolve the home route.
pub async fn login<I, D>(
    identity: &I,
    documents: &D,
    credentials: &Credentials,
) -> Result<SignedIn, LoginError>
where
    I: IdentityService,
    D: DocumentStore,
{
    if !credentials.is_complete() {
        return Err(LoginError::MissingFields);
    }

    let session = identity
        .verify_credentials(&credentials.email, &credentials.password)
        .await?;

    let Some(document) = documents.get_document(&profile_path(&session.user_id)).await? else {
        return Err(LoginError::ProfileNotFound {
            user_id: session.user_id,
        });
    };
    let profile: UserProfile = document.decode()?;

    let route = match profile.user_type() {
        UserType::Populacao => HomeRoute::Populacao,
        UserType::Saude => HomeRoute::Saude,
        UserType::Unknown(value) => return Err(LoginError::UnknownUserType(value)),
    };

    tracing::info!(user_id = %session.user_id, route = route.path(), "signed in");
    Ok(SignedIn { session, route })
}
