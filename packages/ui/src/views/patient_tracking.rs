use api::login::ALERT_TITLE;
use api::{Alert, RouteParams};
use dioxus::prelude::*;

use super::AlertDialog;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

const MISSING_PARAMS: &str = "Informe o sexo e a neoplasia do paciente.";

/// Patient-tracking form: picks the sex and neoplasia that parameterize the
/// alarm-signs screen.
#[component]
pub fn PatientTrackingView(on_submit: EventHandler<RouteParams>) -> Element {
    let mut sexo = use_signal(|| "homem".to_string());
    let mut neoplasia = use_signal(String::new);
    let mut alert = use_signal(|| Option::<Alert>::None);

    let handle_submit = move |_| {
        let params = RouteParams::new(sexo(), neoplasia().trim());
        if params.combination_key().is_none() {
            alert.set(Some(Alert::new(ALERT_TITLE, MISSING_PARAMS)));
            return;
        }
        on_submit.call(params);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "screen",
            h1 { class: "screen-title", "Rastrear meu paciente" }

            select {
                class: "text-input",
                value: sexo(),
                onchange: move |evt: FormEvent| sexo.set(evt.value()),
                option { value: "homem", "Homem" }
                option { value: "mulher", "Mulher" }
            }

            input {
                class: "text-input",
                r#type: "text",
                placeholder: "Neoplasia (ex.: pulmao)",
                value: neoplasia(),
                oninput: move |evt: FormEvent| neoplasia.set(evt.value()),
            }

            button {
                class: "primary-button",
                onclick: handle_submit,
                "Ver sinais de alarme"
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
