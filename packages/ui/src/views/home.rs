use api::HomeRoute;
use dioxus::prelude::*;

use crate::use_auth;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Home screen for both kinds of account.
///
/// Health professionals get the entry point to patient tracking; the
/// population home only greets the user. Without a signed-in user the view
/// calls `on_signed_out` so the platform can go back to the login screen.
#[component]
pub fn HomeView(
    kind: HomeRoute,
    #[props(default)] on_track_patient: EventHandler<()>,
    #[props(default)] on_signed_out: EventHandler<()>,
) -> Element {
    let auth = use_auth();

    use_effect(move || {
        if !auth.read().is_signed_in() {
            on_signed_out.call(());
        }
    });

    let greeting = auth.read().greeting();
    let (title, subtitle) = match kind {
        HomeRoute::Populacao => (
            "Bem-vindo",
            "Conheça os sinais de alarme e fatores de risco do câncer.",
        ),
        HomeRoute::Saude => (
            "Área do Profissional",
            "Acompanhe seus pacientes e consulte sinais de alarme.",
        ),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "screen",
            h1 { class: "screen-title", "{title}" }
            if let Some(greeting) = greeting {
                p { class: "screen-greeting", "{greeting}" }
            }
            p { class: "screen-subtitle", "{subtitle}" }

            if kind == HomeRoute::Saude {
                button {
                    class: "primary-button",
                    onclick: move |_| on_track_patient.call(()),
                    "Rastrear meu paciente"
                }
            }
        }
    }
}
