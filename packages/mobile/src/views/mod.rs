use api::HomeRoute;
use dioxus::prelude::*;
use ui::views::{HomeView, LoginView, PatientTrackingView, SignsView};

use crate::Route;

fn home_route(route: HomeRoute) -> Route {
    match route {
        HomeRoute::Populacao => Route::HomeUsuario {},
        HomeRoute::Saude => Route::HomeProfissional {},
    }
}

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    rsx! {
        LoginView {
            on_signed_in: move |route: HomeRoute| {
                nav.push(home_route(route));
            },
        }
    }
}

#[component]
pub fn HomeUsuario() -> Element {
    let nav = use_navigator();
    rsx! {
        HomeView {
            kind: HomeRoute::Populacao,
            on_signed_out: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}

#[component]
pub fn HomeProfissional() -> Element {
    let nav = use_navigator();
    rsx! {
        HomeView {
            kind: HomeRoute::Saude,
            on_track_patient: move |_| {
                nav.push(Route::RastrearMeuPaciente {});
            },
            on_signed_out: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}

#[component]
pub fn RastrearMeuPaciente() -> Element {
    let nav = use_navigator();
    rsx! {
        PatientTrackingView {
            on_submit: move |params: api::RouteParams| {
                nav.push(Route::SinaisAlarmeFatoresRisco {
                    sexo: params.sexo,
                    neoplasia: params.neoplasia,
                });
            },
        }
    }
}

#[component]
pub fn SinaisAlarmeFatoresRisco(sexo: String, neoplasia: String) -> Element {
    rsx! {
        SignsView { sexo, neoplasia }
    }
}
