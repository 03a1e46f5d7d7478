//! Authentication context and hooks for the UI.

use api::HomeRoute;
use dioxus::prelude::*;

use crate::backend::make_backend;

/// Who is signed in, as far as the screens are concerned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user_id: Option<String>,
    /// Email the user signed in with
    pub email: Option<String>,
    /// Home screen resolved from the user's profile
    pub home: Option<HomeRoute>,
}

impl AuthState {
    pub fn signed_in(signed_in: &api::SignedIn, email: impl Into<String>) -> Self {
        Self {
            user_id: Some(signed_in.session.user_id.clone()),
            email: Some(email.into()),
            home: Some(signed_in.route),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user_id.is_some()
    }

    /// Greeting line for the home screens.
    pub fn greeting(&self) -> Option<String> {
        self.email.as_ref().map(|email| format!("Olá, {email}"))
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component for the auth state and the backend clients.
/// Wrap your app with this component before any view that signs in or reads data.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(AuthState::default);
    use_context_provider(|| auth_state);
    use_context_provider(make_backend);

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{Session, SignedIn};

    fn signed_in() -> SignedIn {
        SignedIn {
            session: Session {
                user_id: "u1".to_string(),
                id_token: "token".to_string(),
                refresh_token: "refresh".to_string(),
            },
            route: HomeRoute::Saude,
        }
    }

    #[test]
    fn test_default_state_is_signed_out() {
        let state = AuthState::default();
        assert!(!state.is_signed_in());
        assert!(state.greeting().is_none());
    }

    #[test]
    fn test_signed_in_state_greets_by_email() {
        let state = AuthState::signed_in(&signed_in(), "ana@example.com");
        assert!(state.is_signed_in());
        assert_eq!(state.home, Some(HomeRoute::Saude));
        assert_eq!(state.greeting().as_deref(), Some("Olá, ana@example.com"));
    }
}
