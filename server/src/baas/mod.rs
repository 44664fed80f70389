//! Backend-as-a-service adapters.
//!
//! DESIGN
//! ======
//! The rest of the server sees the hosted backend through two object-safe
//! traits: [`IdentityProvider`] for e-mail/password accounts and
//! [`DocumentStore`] for keyed JSON documents grouped in collections.
//! `firebase` talks to the hosted REST APIs; `memory` keeps everything in
//! process for tests and local runs.
//!
//! Documents are stored without their id (the key is the id). The typed
//! helpers at the bottom of this module strip the `id` field on write and
//! restore it on read.

pub mod firebase;
pub mod memory;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Collection names shared by every adapter.
pub mod collections {
    pub const CARS: &str = "cars";
    pub const BOOKINGS: &str = "bookings";
    pub const USERS: &str = "users";
}

/// Account identity returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Provider-assigned uid; also the key of the `users` document.
    pub uid: String,
    pub email: String,
}

#[derive(Debug, thiserror::Error)]
pub enum BaasError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("email already registered")]
    EmailExists,
    #[error("{collection}/{id} not found")]
    NotFound { collection: String, id: String },
    #[error("invalid document key: {0:?}")]
    InvalidKey(String),
    #[error("backend request failed: {0}")]
    Http(String),
    #[error("backend returned malformed data: {0}")]
    Decode(String),
    #[error("backend error {status}: {message}")]
    Upstream { status: u16, message: String },
}

// =============================================================================
// TRAITS
// =============================================================================

/// E-mail/password account provider.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Verify credentials.
    ///
    /// # Errors
    ///
    /// [`BaasError::InvalidCredentials`] for unknown accounts or wrong passwords.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, BaasError>;

    /// Create an account.
    ///
    /// # Errors
    ///
    /// [`BaasError::EmailExists`] when the e-mail is already registered.
    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, BaasError>;
}

/// Keyed JSON document storage.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Every `(id, document)` pair in `collection`. Empty collections yield an empty list.
    async fn list(&self, collection: &str) -> Result<Vec<(String, serde_json::Value)>, BaasError>;

    async fn get(&self, collection: &str, id: &str) -> Result<Option<serde_json::Value>, BaasError>;

    /// Insert under a backend-generated id and return the id.
    async fn create(&self, collection: &str, value: serde_json::Value) -> Result<String, BaasError>;

    /// Insert or replace the document at `id`.
    async fn put(&self, collection: &str, id: &str, value: serde_json::Value) -> Result<(), BaasError>;

    /// Remove the document at `id`. Removing a missing document is not an error.
    async fn delete(&self, collection: &str, id: &str) -> Result<(), BaasError>;
}

// =============================================================================
// KEYS
// =============================================================================

/// Characters the Realtime Database forbids in keys. `/` would also address
/// a different child, so ids carrying any of them never reach an adapter.
const FORBIDDEN_KEY_CHARS: [char; 6] = ['.', '$', '#', '[', ']', '/'];

/// Whether `id` can name a single document.
#[must_use]
pub fn is_valid_key(id: &str) -> bool {
    !id.is_empty() && !id.chars().any(|c| c.is_control() || FORBIDDEN_KEY_CHARS.contains(&c))
}

/// # Errors
///
/// [`BaasError::InvalidKey`] unless [`is_valid_key`] holds.
pub fn check_key(id: &str) -> Result<(), BaasError> {
    if is_valid_key(id) { Ok(()) } else { Err(BaasError::InvalidKey(id.to_owned())) }
}

// =============================================================================
// TYPED HELPERS
// =============================================================================

/// Serialize a model for storage, dropping its `id` field.
///
/// # Errors
///
/// [`BaasError::Decode`] if the model does not serialize to a JSON object.
pub fn encode_doc<T: Serialize>(doc: &T) -> Result<serde_json::Value, BaasError> {
    let mut value = serde_json::to_value(doc).map_err(|e| BaasError::Decode(e.to_string()))?;
    let Some(object) = value.as_object_mut() else {
        return Err(BaasError::Decode("document is not an object".to_owned()));
    };
    object.remove("id");
    Ok(value)
}

/// Deserialize a stored document, restoring `id` from its key.
///
/// # Errors
///
/// [`BaasError::Decode`] if the document does not match `T`.
pub fn decode_doc<T: DeserializeOwned>(id: &str, mut value: serde_json::Value) -> Result<T, BaasError> {
    let Some(object) = value.as_object_mut() else {
        return Err(BaasError::Decode(format!("document {id} is not an object")));
    };
    object.insert("id".to_owned(), serde_json::Value::String(id.to_owned()));
    serde_json::from_value(value).map_err(|e| BaasError::Decode(format!("document {id}: {e}")))
}

/// Load and decode a whole collection.
///
/// # Errors
///
/// Propagates store failures and the first undecodable document.
pub async fn list_as<T: DeserializeOwned>(store: &dyn DocumentStore, collection: &str) -> Result<Vec<T>, BaasError> {
    store
        .list(collection)
        .await?
        .into_iter()
        .map(|(id, value)| decode_doc(&id, value))
        .collect()
}

/// Load and decode one document.
///
/// # Errors
///
/// [`BaasError::NotFound`] when absent or when `id` cannot name a document,
/// otherwise store or decode failures.
pub async fn get_as<T: DeserializeOwned>(store: &dyn DocumentStore, collection: &str, id: &str) -> Result<T, BaasError> {
    if !is_valid_key(id) {
        return Err(BaasError::NotFound { collection: collection.to_owned(), id: id.to_owned() });
    }
    match store.get(collection, id).await? {
        Some(value) => decode_doc(id, value),
        None => Err(BaasError::NotFound { collection: collection.to_owned(), id: id.to_owned() }),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
