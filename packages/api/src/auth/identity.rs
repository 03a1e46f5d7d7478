//! # Firebase Authentication — email + password sign-in
//!
//! [`FirebaseAuth`] implements [`IdentityService`] over the Identity Toolkit
//! REST API:
//!
//! 1. `POST {base}/v1/accounts:signInWithPassword?key={api_key}` with
//!    `{email, password, returnSecureToken: true}`.
//! 2. On success the response carries `localId` (the user id), `idToken` and
//!    `refreshToken`; they become a [`Session`], which is also stored in the
//!    shared [`SessionHandle`] so later document reads are authorized.
//! 3. On failure the body is `{"error": {"code": 400, "message": "INVALID_LOGIN_CREDENTIALS"}}`;
//!    the message becomes [`BackendError::Auth`]. Bodies that do not follow
//!    that shape are reported as [`BackendError::Http`].

use reqwest::Client;
use serde::{Deserialize, Serialize};
use store::{BackendConfig, BackendError, IdentityService, Session};

use super::session::SessionHandle;
use crate::transport_error;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    id_token: String,
    #[serde(default)]
    refresh_token: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Identity Toolkit client.
#[derive(Clone, Debug)]
pub struct FirebaseAuth {
    http: Client,
    config: BackendConfig,
    session: SessionHandle,
}

impl FirebaseAuth {
    pub fn new(http: Client, config: BackendConfig, session: SessionHandle) -> Self {
        Self {
            http,
            config,
            session,
        }
    }

    fn sign_in_url(&self) -> String {
        format!(
            "{}/v1/accounts:signInWithPassword",
            self.config.identity_base_url()
        )
    }
}

impl IdentityService for FirebaseAuth {
    async fn verify_credentials(&self, email: &str, password: &str) -> Result<Session, BackendError> {
        self.config.validate()?;

        let response = self
            .http
            .post(self.sign_in_url())
            .query(&[("key", self.config.firebase.api_key.as_str())])
            .json(&SignInRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(auth_error(status.as_u16(), body));
        }

        let signed_in: SignInResponse = response
            .json()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))?;

        let session = Session {
            user_id: signed_in.local_id,
            id_token: signed_in.id_token,
            refresh_token: signed_in.refresh_token,
        };
        self.session.set(session.clone());
        Ok(session)
    }
}

fn auth_error(status: u16, body: String) -> BackendError {
    match serde_json::from_str::<ErrorEnvelope>(&body) {
        Ok(envelope) => BackendError::Auth {
            code: envelope.error.message,
        },
        Err(_) => BackendError::Http { status, body },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_envelope() {
        let err = auth_error(
            400,
            r#"{"error":{"code":400,"message":"INVALID_LOGIN_CREDENTIALS","errors":[]}}"#.to_string(),
        );
        assert_eq!(
            err,
            BackendError::Auth {
                code: "INVALID_LOGIN_CREDENTIALS".to_string()
            }
        );
    }

    #[test]
    fn test_auth_error_unstructured_body() {
        let err = auth_error(502, "Bad Gateway".to_string());
        assert_eq!(
            err,
            BackendError::Http {
                status: 502,
                body: "Bad Gateway".to_string()
            }
        );
    }

    #[test]
    fn test_sign_in_request_shape() {
        let body = serde_json::to_value(SignInRequest {
            email: "ana@example.com",
            password: "segredo",
            return_secure_token: true,
        })
        .unwrap();
        assert_eq!(body["returnSecureToken"], true);
        assert_eq!(body["email"], "ana@example.com");
    }
}
