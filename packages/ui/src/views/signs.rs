use api::signs::SIGNS_TITLE;
use api::{RouteParams, SignsState};
use dioxus::prelude::*;

use crate::{use_backend, Spinner};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Alarm signs and risk factors for one sex + neoplasia combination.
///
/// The scan starts once both parameters are non-empty; until it finishes a
/// spinner is shown. Fetch failures are logged and leave the list empty.
#[component]
pub fn SignsView(sexo: String, neoplasia: String) -> Element {
    // Track params in a signal so use_resource re-runs on route change
    let mut params = use_signal(|| RouteParams::new(sexo.clone(), neoplasia.clone()));
    let current = RouteParams::new(sexo, neoplasia);
    if *params.peek() != current {
        params.set(current);
    }

    let backend = use_backend();
    let mut state = use_signal(SignsState::default);

    let _loader = use_resource(move || {
        let backend = backend.clone();
        let params = params();
        async move {
            let Some(key) = params.combination_key() else {
                return;
            };
            let result = backend.fetch_signs(&key).await;
            state.write().finish(result);
        }
    });

    if state.read().loading {
        return rsx! {
            document::Link { rel: "stylesheet", href: VIEWS_CSS }
            div {
                class: "screen",
                Spinner { class: "spinner--light" }
            }
        };
    }

    let cards = state.read().cards();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "screen screen--signs",
            h1 { class: "screen-title", "{SIGNS_TITLE}" }

            div {
                class: "signs-list",
                for card in cards {
                    div {
                        key: "{card.key}",
                        class: "sign-card",
                        img {
                            class: "sign-image",
                            src: "{card.imagem}",
                            alt: "{card.descricao}",
                        }
                        p { class: "sign-description", "{card.descricao}" }
                    }
                }
            }
        }
    }
}
