use api::{Alert, Credentials, HomeRoute};
use dioxus::prelude::*;

use super::AlertDialog;
use crate::{use_auth, use_backend, AuthState, LoadingGuard, Spinner};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shared login view.
///
/// Signs in with email and password, then reads the user's profile to pick a
/// home screen. Platform packages navigate from `on_signed_in`; every failure
/// is shown as a blocking alert and nothing navigates.
#[component]
pub fn LoginView(on_signed_in: EventHandler<HomeRoute>) -> Element {
    let backend = use_backend();
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut senha = use_signal(String::new);
    let loading = use_signal(|| false);
    let mut alert = use_signal(|| Option::<Alert>::None);

    let handle_login = move |_| {
        if *loading.peek() {
            return;
        }
        // Raised before the task exists so a second tap is ignored
        let guard = LoadingGuard::start(loading);
        let backend = backend.clone();
        spawn(async move {
            let _loading = guard;
            let credentials = Credentials::new(email(), senha());

            match backend.login(&credentials).await {
                Ok(signed_in) => {
                    auth.set(AuthState::signed_in(&signed_in, credentials.email.clone()));
                    on_signed_in.call(signed_in.route);
                }
                Err(e) => {
                    tracing::error!("Login failed: {}", e);
                    alert.set(Some(e.alert()));
                }
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "screen screen--login",

            h1 { class: "screen-title", "Login" }

            input {
                class: "text-input",
                r#type: "email",
                placeholder: "Email",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }

            input {
                class: "text-input",
                r#type: "password",
                placeholder: "Senha",
                value: senha(),
                oninput: move |evt: FormEvent| senha.set(evt.value()),
            }

            if loading() {
                Spinner {}
            } else {
                button {
                    class: "primary-button",
                    onclick: handle_login,
                    "Entrar"
                }
            }
        }

        if let Some(current) = alert() {
            AlertDialog {
                alert: current,
                on_close: move |_| alert.set(None),
            }
        }
    }
}
