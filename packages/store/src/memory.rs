use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex};

use serde_json::{Map, Value};

use crate::models::Document;
use crate::repo::{BackendError, DocumentStore, IdentityService, Session};

/// In-memory backend for tests and offline demos.
///
/// Documents live at slash-separated paths; a collection listing returns the
/// documents whose parent path equals the collection, in id order. Failures can
/// be injected per collection path.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    accounts: Arc<Mutex<HashMap<String, (String, String)>>>,
    documents: Arc<Mutex<BTreeMap<String, Map<String, Value>>>>,
    failing: Arc<Mutex<HashSet<String>>>,
    verify_calls: Arc<Mutex<usize>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account that `verify_credentials` will accept.
    pub fn add_account(&self, email: &str, password: &str, user_id: &str) {
        self.accounts.lock().unwrap().insert(
            email.to_string(),
            (password.to_string(), user_id.to_string()),
        );
    }

    /// Store a document at `path`; `fields` must be a JSON object.
    pub fn put_document(&self, path: &str, fields: Value) {
        let fields = match fields {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        self.documents
            .lock()
            .unwrap()
            .insert(path.trim_matches('/').to_string(), fields);
    }

    /// Make every read of `path` (document or collection) fail.
    pub fn fail_on(&self, path: &str) {
        self.failing
            .lock()
            .unwrap()
            .insert(path.trim_matches('/').to_string());
    }

    /// How many times `verify_credentials` was called.
    pub fn verify_calls(&self) -> usize {
        *self.verify_calls.lock().unwrap()
    }

    fn check_failure(&self, path: &str) -> Result<(), BackendError> {
        if self.failing.lock().unwrap().contains(path) {
            return Err(BackendError::Transport(format!("injected failure at {path}")));
        }
        Ok(())
    }
}

impl IdentityService for MemoryBackend {
    async fn verify_credentials(&self, email: &str, password: &str) -> Result<Session, BackendError> {
        *self.verify_calls.lock().unwrap() += 1;
        let accounts = self.accounts.lock().unwrap();
        match accounts.get(email) {
            Some((expected, user_id)) if expected == password => Ok(Session {
                user_id: user_id.clone(),
                id_token: format!("token-{user_id}"),
                refresh_token: format!("refresh-{user_id}"),
            }),
            _ => Err(BackendError::Auth {
                code: "INVALID_LOGIN_CREDENTIALS".to_string(),
            }),
        }
    }
}

impl DocumentStore for MemoryBackend {
    async fn list_documents(&self, collection_path: &str) -> Result<Vec<Document>, BackendError> {
        let collection = collection_path.trim_matches('/');
        self.check_failure(collection)?;
        let prefix = format!("{collection}/");
        let documents = self.documents.lock().unwrap();
        Ok(documents
            .iter()
            .filter_map(|(path, fields)| {
                let id = path.strip_prefix(&prefix)?;
                if id.contains('/') {
                    return None;
                }
                Some(Document::new(id, fields.clone()))
            })
            .collect())
    }

    async fn get_document(&self, path: &str) -> Result<Option<Document>, BackendError> {
        let path = path.trim_matches('/');
        self.check_failure(path)?;
        let documents = self.documents.lock().unwrap();
        Ok(documents.get(path).map(|fields| {
            let id = path.rsplit('/').next().unwrap_or(path);
            Document::new(id, fields.clone())
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_verify_credentials() {
        let backend = MemoryBackend::new();
        backend.add_account("ana@example.com", "segredo", "uid-1");

        let session = backend
            .verify_credentials("ana@example.com", "segredo")
            .await
            .unwrap();
        assert_eq!(session.user_id, "uid-1");

        let err = backend
            .verify_credentials("ana@example.com", "errada")
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Auth { .. }));
        assert_eq!(backend.verify_calls(), 2);
    }

    #[tokio::test]
    async fn test_list_only_direct_children() {
        let backend = MemoryBackend::new();
        backend.put_document("administradores/A1", json!({}));
        backend.put_document("administradores/A2", json!({ "nome": "B" }));
        backend.put_document("sinaisAlarmeFatoresRisco/A1/combinacoes/homem_pulmao", json!({}));

        let admins = backend.list_documents("administradores").await.unwrap();
        let ids: Vec<_> = admins.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["A1", "A2"]);

        assert!(backend
            .list_documents("sinaisAlarmeFatoresRisco")
            .await
            .unwrap()
            .is_empty());
        assert_eq!(
            backend
                .list_documents("sinaisAlarmeFatoresRisco/A1/combinacoes")
                .await
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn test_get_document() {
        let backend = MemoryBackend::new();
        backend.put_document("usuarios/uid-1", json!({ "tipoUsuario": "saude" }));

        let doc = backend.get_document("usuarios/uid-1").await.unwrap().unwrap();
        assert_eq!(doc.id, "uid-1");
        assert_eq!(doc.fields["tipoUsuario"], "saude");

        assert!(backend.get_document("usuarios/uid-2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let backend = MemoryBackend::new();
        backend.fail_on("administradores");
        assert!(backend.list_documents("administradores").await.is_err());
    }
}
