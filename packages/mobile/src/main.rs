use dioxus::prelude::*;
use views::{HomeProfissional, HomeUsuario, Login, RastrearMeuPaciente, SinaisAlarmeFatoresRisco};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/TelaDeHomeUsuario")]
    HomeUsuario {},
    #[route("/TelaDeHomeProfissional")]
    HomeProfissional {},
    #[route("/RastrearMeuPaciente")]
    RastrearMeuPaciente {},
    #[route("/RastrearMeuPaciente/SinaisAlarmeFatoresRisco?:sexo&:neoplasia")]
    SinaisAlarmeFatoresRisco { sexo: String, neoplasia: String },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        ui::AuthProvider {
            Router::<Route> {}
        }
    }
}
