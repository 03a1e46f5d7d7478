//! Backend configuration from file and environment variables.

use std::path::{Path, PathBuf};

use store::{BackendConfig, BackendError};

/// Environment variable naming an explicit `rastreio.toml` path.
pub const CONFIG_PATH_ENV: &str = "RASTREIO_CONFIG";

/// Load the backend configuration.
///
/// Order: defaults, then the file at `$RASTREIO_CONFIG` (or `default_path`
/// when that is unset), then environment overrides. A missing file is not an
/// error; an unreadable or malformed one is.
pub fn load_config(default_path: Option<&Path>) -> Result<BackendConfig, BackendError> {
    dotenvy::dotenv().ok();

    let path = std::env::var(CONFIG_PATH_ENV)
        .ok()
        .map(PathBuf::from)
        .or_else(|| default_path.map(Path::to_path_buf));

    let mut config = match path {
        Some(path) if path.exists() => read_config_file(&path)?,
        _ => BackendConfig::default(),
    };
    apply_env_overrides(&mut config, |name| std::env::var(name).ok());
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<BackendConfig, BackendError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| BackendError::Config(format!("{}: {}", path.display(), e)))?;
    BackendConfig::from_toml(&text)
        .map_err(|e| BackendError::Config(format!("{}: {}", path.display(), e)))
}

/// Apply `FIREBASE_*` overrides read through `lookup`.
///
/// Emulator hosts follow the Firebase tooling convention of `host:port`
/// without a scheme.
pub fn apply_env_overrides(config: &mut BackendConfig, lookup: impl Fn(&str) -> Option<String>) {
    let firebase = &mut config.firebase;
    if let Some(key) = lookup("FIREBASE_API_KEY") {
        firebase.api_key = key;
    }
    if let Some(project) = lookup("FIREBASE_PROJECT_ID") {
        firebase.project_id = project;
    }
    if let Some(database) = lookup("FIREBASE_DATABASE") {
        firebase.database = database;
    }
    if let Some(host) = lookup("FIREBASE_AUTH_EMULATOR_HOST") {
        firebase.auth_emulator = Some(emulator_url(&host));
    }
    if let Some(host) = lookup("FIRESTORE_EMULATOR_HOST") {
        firebase.firestore_emulator = Some(emulator_url(&host));
    }
}

fn emulator_url(host: &str) -> String {
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("http://{host}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("FIREBASE_API_KEY", "env-key"),
            ("FIREBASE_PROJECT_ID", "env-project"),
            ("FIRESTORE_EMULATOR_HOST", "127.0.0.1:8080"),
        ]);
        let mut config = BackendConfig::new("file-key", "file-project");
        apply_env_overrides(&mut config, |name| env.get(name).map(|v| v.to_string()));

        assert_eq!(config.firebase.api_key, "env-key");
        assert_eq!(config.firebase.project_id, "env-project");
        assert_eq!(config.firebase.database, "(default)");
        assert_eq!(config.firestore_base_url(), "http://127.0.0.1:8080");
        assert!(config.firebase.auth_emulator.is_none());
    }

    #[test]
    fn test_emulator_url_keeps_scheme() {
        assert_eq!(emulator_url("https://emu.local"), "https://emu.local");
        assert_eq!(emulator_url("localhost:9099"), "http://localhost:9099");
    }

    #[test]
    fn test_read_config_file() {
        let path = std::env::temp_dir().join(format!("rastreio_test_{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[firebase]\napi_key = \"k\"\nproject_id = \"p\"\n",
        )
        .unwrap();

        let config = read_config_file(&path).unwrap();
        assert_eq!(config, BackendConfig::new("k", "p"));

        std::fs::write(&path, "[firebase\n").unwrap();
        assert!(matches!(read_config_file(&path), Err(BackendError::Config(_))));

        let _ = std::fs::remove_file(&path);
    }
}
