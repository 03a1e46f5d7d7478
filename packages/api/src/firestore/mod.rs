//! # Cloud Firestore — read-only REST client
//!
//! [`FirestoreClient`] implements [`DocumentStore`] on top of the Firestore v1
//! REST API. Document paths are the slash-separated paths the workflows use
//! (`"usuarios/{uid}"`, `"sinaisAlarmeFatoresRisco/{adminId}/combinacoes"`)
//! and are appended to `projects/{project}/databases/{database}/documents`.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | `get_document` | `GET …/documents/{path}`; 404 means the document does not exist. |
//! | `list_documents` | `GET …/documents/{collection}?pageSize=N[&pageToken=T]`, repeated while `nextPageToken` is returned. |
//!
//! Requests carry `Authorization: Bearer {idToken}` whenever the shared
//! [`SessionHandle`] holds a session. Field values are decoded by
//! [`value::decode_fields`].

pub mod value;

use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::Deserialize;
use serde_json::{Map, Value};
use store::{BackendConfig, BackendError, Document, DocumentStore};

use crate::auth::SessionHandle;
use crate::transport_error;

/// Documents requested per listing page.
const PAGE_SIZE: u32 = 300;

#[derive(Debug, Deserialize)]
struct RawDocument {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<RawDocument>,
    #[serde(default)]
    next_page_token: Option<String>,
}

impl RawDocument {
    fn into_document(self) -> Result<Document, BackendError> {
        let fields = value::decode_fields(&self.fields)?;
        Ok(Document::new(value::document_id(&self.name), fields))
    }
}

/// Firestore REST client.
#[derive(Clone, Debug)]
pub struct FirestoreClient {
    http: Client,
    config: BackendConfig,
    session: SessionHandle,
}

impl FirestoreClient {
    pub fn new(http: Client, config: BackendConfig, session: SessionHandle) -> Self {
        Self {
            http,
            config,
            session,
        }
    }

    /// Resource URL of a document or collection. Each path segment is
    /// percent-encoded on its own.
    fn url(&self, path: &str) -> Result<Url, BackendError> {
        let base = self.config.firestore_base_url();
        let mut url = Url::parse(&base)
            .map_err(|e| BackendError::Config(format!("invalid Firestore URL {base}: {e}")))?;
        let root = self.config.documents_root();
        url.path_segments_mut()
            .map_err(|_| BackendError::Config(format!("invalid Firestore URL {base}")))?
            .pop_if_empty()
            .push("v1")
            .extend(root.split('/'))
            .extend(path.split('/').filter(|segment| !segment.is_empty()));
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.id_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn list_page(
        &self,
        collection_path: &str,
        page_token: Option<&str>,
    ) -> Result<ListDocumentsResponse, BackendError> {
        let mut request = self
            .http
            .get(self.url(collection_path)?)
            .query(&[("pageSize", PAGE_SIZE.to_string())]);
        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Http {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }
}

impl DocumentStore for FirestoreClient {
    async fn list_documents(&self, collection_path: &str) -> Result<Vec<Document>, BackendError> {
        self.config.validate()?;

        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let page = self.list_page(collection_path, page_token.as_deref()).await?;
            for raw in page.documents {
                documents.push(raw.into_document()?);
            }
            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }
        Ok(documents)
    }

    async fn get_document(&self, path: &str) -> Result<Option<Document>, BackendError> {
        self.config.validate()?;

        let response = self
            .authorize(self.http.get(self.url(path)?))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let raw: RawDocument = response
            .json()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))?;
        raw.into_document().map(Some)
    }
}
