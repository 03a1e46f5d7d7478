//! Shared backend constructor for all platforms.
//!
//! Returns an [`api::Backend`] configured from, in order:
//! - `$RASTREIO_CONFIG` when set
//! - `<config_dir>/rastreio/rastreio.toml` on native platforms
//! - `FIREBASE_*` environment variables on top of either

use dioxus::prelude::*;

/// Build the backend clients from the platform configuration.
///
/// A malformed config file is logged and replaced by the defaults; the
/// missing settings then surface as an error on the first request.
pub fn make_backend() -> api::Backend {
    let config = match api::config::load_config(default_config_path().as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load backend config: {}", e);
            store::BackendConfig::default()
        }
    };
    api::Backend::new(config)
}

fn default_config_path() -> Option<std::path::PathBuf> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dirs::config_dir().map(|dir| dir.join("rastreio").join(store::BackendConfig::filename()))
    }
    #[cfg(target_arch = "wasm32")]
    {
        None
    }
}

/// Consume the [`api::Backend`] provided by [`crate::AuthProvider`].
pub fn use_backend() -> api::Backend {
    use_context::<api::Backend>()
}
