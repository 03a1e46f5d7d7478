//! # Alarm signs and risk factors — administrator scan
//!
//! Content lives at `sinaisAlarmeFatoresRisco/{adminId}/combinacoes/{key}`,
//! one subcollection per administrator listed in `administradores`.
//! [`fetch_signs`] walks every administrator in turn, lists its combinations
//! and keeps those whose id matches the [`CombinationKey`] case-insensitively.
//! Administrators are scanned sequentially; matches from several
//! administrators are all kept, in scan order.
//!
//! [`SignsState`] is the screen state: it starts loading, and
//! [`SignsState::finish`] publishes the groups at once or, on failure, logs
//! the error and leaves the list as it was. Either way loading ends.

use store::models::{combinations_path, ADMINISTRATORS_COLLECTION};
use store::{BackendError, CombinationKey, CombinationRecord, DisplayGroup, DocumentStore};

/// Title shown above the list.
pub const SIGNS_TITLE: &str = "Sinais de Alarme e Fatores de Risco";

/// Collect every combination record matching `key`, across all administrators.
pub async fn fetch_signs<D: DocumentStore>(
    documents: &D,
    key: &CombinationKey,
) -> Result<Vec<DisplayGroup>, BackendError> {
    tracing::info!(combination = %key, "fetching alarm signs");

    let administrators = documents.list_documents(ADMINISTRATORS_COLLECTION).await?;

    let mut groups = Vec::new();
    for admin in administrators {
        tracing::debug!(admin_id = %admin.id, "checking administrator");
        let combinations = documents.list_documents(&combinations_path(&admin.id)).await?;

        for document in combinations.iter().filter(|d| key.matches(&d.id)) {
            tracing::debug!(admin_id = %admin.id, combination = %document.id, "match found");
            let record: CombinationRecord = document.decode()?;
            groups.push(DisplayGroup {
                admin_id: admin.id.clone(),
                combination_id: document.id.clone(),
                signs: record.sintomas,
            });
        }
    }
    Ok(groups)
}

/// One rendered card: an image and its caption.
#[derive(Clone, Debug, PartialEq)]
pub struct SignCard {
    /// Group key followed by the entry index
    pub key: String,
    pub imagem: String,
    pub descricao: String,
}

/// State of the signs screen.
#[derive(Clone, Debug, PartialEq)]
pub struct SignsState {
    pub loading: bool,
    pub groups: Vec<DisplayGroup>,
}

impl Default for SignsState {
    fn default() -> Self {
        Self {
            loading: true,
            groups: Vec::new(),
        }
    }
}

impl SignsState {
    /// Apply a fetch result. Errors are logged, not shown.
    pub fn finish(&mut self, result: Result<Vec<DisplayGroup>, BackendError>) {
        match result {
            Ok(groups) => self.groups = groups,
            Err(e) => tracing::error!("failed to fetch alarm signs and risk factors: {e}"),
        }
        self.loading = false;
    }

    /// Flatten the groups into cards, in display order.
    pub fn cards(&self) -> Vec<SignCard> {
        self.groups
            .iter()
            .flat_map(|group| {
                let group_key = group.key();
                group.signs.iter().enumerate().map(move |(index, sign)| SignCard {
                    key: format!("{group_key}-{index}"),
                    imagem: sign.imagem.clone(),
                    descricao: sign.descricao.clone(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use store::{MemoryBackend, RouteParams};

    fn backend() -> MemoryBackend {
        let backend = MemoryBackend::new();
        backend.put_document("administradores/A1", json!({}));
        backend.put_document(
            "sinaisAlarmeFatoresRisco/A1/combinacoes/homem_pulmao",
            json!({ "sintomas": [{ "imagem": "u1", "descricao": "d1" }] }),
        );
        backend.put_document(
            "sinaisAlarmeFatoresRisco/A1/combinacoes/mulher_mama",
            json!({ "sintomas": [{ "imagem": "u2", "descricao": "d2" }] }),
        );
        backend
    }

    async fn load(backend: &MemoryBackend, params: &RouteParams) -> SignsState {
        let mut state = SignsState::default();
        let key = params.combination_key().unwrap();
        state.finish(fetch_signs(backend, &key).await);
        state
    }

    #[tokio::test]
    async fn test_single_match_renders_one_card() {
        let state = load(&backend(), &RouteParams::new("homem", "pulmao")).await;

        assert!(!state.loading);
        assert_eq!(state.groups.len(), 1);
        assert_eq!(state.groups[0].admin_id, "A1");
        assert_eq!(state.groups[0].combination_id, "homem_pulmao");

        let cards = state.cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].imagem, "u1");
        assert_eq!(cards[0].descricao, "d1");
        assert_eq!(cards[0].key, "A1homem_pulmao-0");
    }

    #[tokio::test]
    async fn test_lookup_ignores_case() {
        let backend = backend();
        let upper = load(&backend, &RouteParams::new("Homem", "Pulmao")).await;
        let lower = load(&backend, &RouteParams::new("homem", "pulmao")).await;
        assert_eq!(upper.groups, lower.groups);
        assert_eq!(upper.groups.len(), 1);
    }

    #[tokio::test]
    async fn test_stored_ids_compared_lowercased() {
        let backend = MemoryBackend::new();
        backend.put_document("administradores/A1", json!({}));
        backend.put_document(
            "sinaisAlarmeFatoresRisco/A1/combinacoes/Homem_Pulmao",
            json!({ "sintomas": [] }),
        );
        let state = load(&backend, &RouteParams::new("homem", "pulmao")).await;
        assert_eq!(state.groups.len(), 1);
        assert_eq!(state.groups[0].combination_id, "Homem_Pulmao");
        assert!(state.cards().is_empty());
    }

    #[tokio::test]
    async fn test_no_match_is_empty_and_not_loading() {
        let state = load(&backend(), &RouteParams::new("mulher", "pulmao")).await;
        assert!(!state.loading);
        assert!(state.groups.is_empty());
    }

    #[tokio::test]
    async fn test_missing_sintomas_defaults_to_empty() {
        let backend = MemoryBackend::new();
        backend.put_document("administradores/A1", json!({}));
        backend.put_document("sinaisAlarmeFatoresRisco/A1/combinacoes/homem_pulmao", json!({}));

        let state = load(&backend, &RouteParams::new("homem", "pulmao")).await;
        assert_eq!(state.groups.len(), 1);
        assert!(state.groups[0].signs.is_empty());
    }

    #[tokio::test]
    async fn test_null_sintomas_does_not_hide_other_administrators() {
        let backend = MemoryBackend::new();
        backend.put_document("administradores/A1", json!({}));
        backend.put_document("administradores/A2", json!({}));
        backend.put_document(
            "sinaisAlarmeFatoresRisco/A1/combinacoes/homem_pulmao",
            json!({ "sintomas": null }),
        );
        backend.put_document(
            "sinaisAlarmeFatoresRisco/A2/combinacoes/homem_pulmao",
            json!({ "sintomas": [{ "imagem": "u3", "descricao": "d3" }] }),
        );

        let state = load(&backend, &RouteParams::new("homem", "pulmao")).await;
        assert_eq!(state.groups.len(), 2);
        assert!(state.groups[0].signs.is_empty());
        let cards = state.cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].imagem, "u3");
    }

    #[tokio::test]
    async fn test_null_entry_fields_render_empty() {
        let backend = MemoryBackend::new();
        backend.put_document("administradores/A1", json!({}));
        backend.put_document(
            "sinaisAlarmeFatoresRisco/A1/combinacoes/homem_pulmao",
            json!({ "sintomas": [{ "imagem": null, "descricao": "d1" }] }),
        );

        let state = load(&backend, &RouteParams::new("homem", "pulmao")).await;
        let cards = state.cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].imagem, "");
        assert_eq!(cards[0].descricao, "d1");
    }

    #[tokio::test]
    async fn test_colliding_keys_across_administrators_are_kept() {
        let backend = backend();
        backend.put_document("administradores/A2", json!({}));
        backend.put_document(
            "sinaisAlarmeFatoresRisco/A2/combinacoes/homem_pulmao",
            json!({ "sintomas": [{ "imagem": "u3", "descricao": "d3" }] }),
        );

        let state = load(&backend, &RouteParams::new("homem", "pulmao")).await;
        let admins: Vec<_> = state.groups.iter().map(|g| g.admin_id.as_str()).collect();
        assert_eq!(admins, vec!["A1", "A2"]);
        assert_eq!(state.cards().len(), 2);
    }

    #[tokio::test]
    async fn test_store_failure_clears_loading() {
        let backend = backend();
        backend.fail_on("sinaisAlarmeFatoresRisco/A1/combinacoes");

        let state = load(&backend, &RouteParams::new("homem", "pulmao")).await;
        assert!(!state.loading);
        assert!(state.groups.is_empty());
    }

    #[tokio::test]
    async fn test_failure_after_partial_scan_shows_nothing() {
        let backend = backend();
        backend.put_document("administradores/A2", json!({}));
        backend.fail_on("sinaisAlarmeFatoresRisco/A2/combinacoes");

        let state = load(&backend, &RouteParams::new("homem", "pulmao")).await;
        assert!(!state.loading);
        assert!(state.groups.is_empty());
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = SignsState::default();
        assert!(state.loading);
        assert!(state.cards().is_empty());
    }
}
