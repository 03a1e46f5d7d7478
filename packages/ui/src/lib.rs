//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod backend;
pub use backend::{make_backend, use_backend};

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState};

mod loading;
pub use loading::{LoadingGuard, Spinner};
