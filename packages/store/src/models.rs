//! # Domain models for profiles and alarm-sign content
//!
//! Everything the app reads from the hosted document database is described
//! here, in a store-agnostic shape. [`Document`] is what a
//! [`crate::DocumentStore`] hands back; the typed records ([`UserProfile`],
//! [`CombinationRecord`]) are decoded from its `fields`.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Document`] | One stored document: the last path segment as `id` and its decoded fields. |
//! | [`UserProfile`] | The `usuarios/{userId}` record. Only `tipoUsuario` is read. |
//! | [`UserType`] | `"populacao"`, `"saude"`, or anything else (kept verbatim). |
//! | [`RouteParams`] | `sexo` + `neoplasia` as received through navigation. |
//! | [`CombinationKey`] | The lower-cased `sexo_neoplasia` lookup key. |
//! | [`SignEntry`] | One image + description unit. |
//! | [`CombinationRecord`] | A `combinacoes/{key}` document: its `sintomas` list. |
//! | [`DisplayGroup`] | One matched record tagged with its owning administrator. |

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::repo::BackendError;

/// Top-level collection holding one profile per authenticated user.
pub const USERS_COLLECTION: &str = "usuarios";

/// Top-level collection enumerating the content-owning administrators.
pub const ADMINISTRATORS_COLLECTION: &str = "administradores";

/// Top-level collection under which each administrator nests its content.
pub const SIGNS_COLLECTION: &str = "sinaisAlarmeFatoresRisco";

/// Per-administrator subcollection of combination records.
pub const COMBINATIONS_SUBCOLLECTION: &str = "combinacoes";

/// Path of a user's profile document.
pub fn profile_path(user_id: &str) -> String {
    format!("{USERS_COLLECTION}/{user_id}")
}

/// Path of an administrator's combination subcollection.
pub fn combinations_path(admin_id: &str) -> String {
    format!("{SIGNS_COLLECTION}/{admin_id}/{COMBINATIONS_SUBCOLLECTION}")
}

/// A document as returned by a [`crate::DocumentStore`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Last segment of the document path: "homem_pulmao"
    pub id: String,
    /// Decoded fields as a JSON object
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Decode the fields into a typed record.
    pub fn decode<T: serde::de::DeserializeOwned>(&self) -> Result<T, BackendError> {
        serde_json::from_value(Value::Object(self.fields.clone())).map_err(|e| {
            BackendError::Decode(format!("document {}: {}", self.id, e))
        })
    }
}

/// Kind of account, as stored in `tipoUsuario`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserType {
    /// General population
    Populacao,
    /// Health professional
    Saude,
    /// Any other value, or no value at all
    Unknown(Option<String>),
}

impl UserType {
    pub fn from_field(value: Option<&str>) -> Self {
        match value {
            Some("populacao") => UserType::Populacao,
            Some("saude") => UserType::Saude,
            other => UserType::Unknown(other.map(str::to_string)),
        }
    }
}

/// The `usuarios/{userId}` profile record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Raw `tipoUsuario` value; non-string values are treated as absent.
    #[serde(
        rename = "tipoUsuario",
        default,
        deserialize_with = "string_or_none"
    )]
    pub tipo_usuario: Option<String>,
}

impl UserProfile {
    pub fn user_type(&self) -> UserType {
        UserType::from_field(self.tipo_usuario.as_deref())
    }
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// A stored `null` decodes like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parameters of the signs screen, as received through navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteParams {
    pub sexo: String,
    pub neoplasia: String,
}

impl RouteParams {
    pub fn new(sexo: impl Into<String>, neoplasia: impl Into<String>) -> Self {
        Self {
            sexo: sexo.into(),
            neoplasia: neoplasia.into(),
        }
    }

    /// The lookup key, or `None` until both parameters are present.
    pub fn combination_key(&self) -> Option<CombinationKey> {
        if self.sexo.is_empty() || self.neoplasia.is_empty() {
            return None;
        }
        Some(CombinationKey::new(&self.sexo, &self.neoplasia))
    }
}

/// Lower-cased `sexo_neoplasia` key identifying a combination record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombinationKey(String);

impl CombinationKey {
    pub fn new(sexo: &str, neoplasia: &str) -> Self {
        Self(format!("{sexo}_{neoplasia}").to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive match against a stored document id.
    pub fn matches(&self, document_id: &str) -> bool {
        document_id.to_lowercase() == self.0
    }
}

impl std::fmt::Display for CombinationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One alarm sign or risk factor: an image and its description.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SignEntry {
    /// Image URL in the hosted storage bucket
    #[serde(default, deserialize_with = "null_as_default")]
    pub imagem: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub descricao: String,
}

/// A `combinacoes/{key}` document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CombinationRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sintomas: Vec<SignEntry>,
}

/// A matched combination record tagged with the administrator that owns it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayGroup {
    pub admin_id: String,
    /// Stored document id, original casing: "homem_pulmao"
    pub combination_id: String,
    pub signs: Vec<SignEntry>,
}

impl DisplayGroup {
    /// List key: administrator id followed by combination id.
    pub fn key(&self) -> String {
        format!("{}{}", self.admin_id, self.combination_id)
    }
}
