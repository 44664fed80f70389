//! In-process backend used by tests and `BAAS_MODE=memory`.
//!
//! Passwords are kept only as salted SHA-256 digests. Document ids come from
//! UUID v4 so they never collide with ids supplied through `put`.

use std::collections::{BTreeMap, HashMap};

use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{BaasError, DocumentStore, Identity, IdentityProvider, check_key};

// =============================================================================
// IDENTITY
// =============================================================================

struct Account {
    uid: String,
    salt: String,
    password_hash: String,
}

#[derive(Default)]
pub struct MemoryIdentity {
    /// Keyed by lowercased e-mail.
    accounts: RwLock<HashMap<String, Account>>,
}

impl MemoryIdentity {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[async_trait::async_trait]
impl IdentityProvider for MemoryIdentity {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, BaasError> {
        let key = email.trim().to_ascii_lowercase();
        let accounts = self.accounts.read().await;
        let account = accounts.get(&key).ok_or(BaasError::InvalidCredentials)?;
        if hash_password(&account.salt, password) != account.password_hash {
            return Err(BaasError::InvalidCredentials);
        }
        Ok(Identity { uid: account.uid.clone(), email: key })
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, BaasError> {
        let key = email.trim().to_ascii_lowercase();
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&key) {
            return Err(BaasError::EmailExists);
        }
        let uid = Uuid::new_v4().simple().to_string();
        let salt = Uuid::new_v4().simple().to_string();
        let password_hash = hash_password(&salt, password);
        accounts.insert(key.clone(), Account { uid: uid.clone(), salt, password_hash });
        Ok(Identity { uid, email: key })
    }
}

// =============================================================================
// DOCUMENTS
// =============================================================================

#[derive(Default)]
pub struct MemoryStore {
    /// collection -> id -> document. `BTreeMap` keeps listings in id order.
    collections: RwLock<HashMap<String, BTreeMap<String, serde_json::Value>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DocumentStore for MemoryStore {
    async fn list(&self, collection: &str) -> Result<Vec<(String, serde_json::Value)>, BaasError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| docs.iter().map(|(id, doc)| (id.clone(), doc.clone())).collect())
            .unwrap_or_default())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<serde_json::Value>, BaasError> {
        check_key(id)?;
        let collections = self.collections.read().await;
        Ok(collections.get(collection).and_then(|docs| docs.get(id)).cloned())
    }

    async fn create(&self, collection: &str, value: serde_json::Value) -> Result<String, BaasError> {
        let id = Uuid::new_v4().simple().to_string();
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_owned())
            .or_default()
            .insert(id.clone(), value);
        Ok(id)
    }

    async fn put(&self, collection: &str, id: &str, value: serde_json::Value) -> Result<(), BaasError> {
        check_key(id)?;
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_owned())
            .or_default()
            .insert(id.to_owned(), value);
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), BaasError> {
        check_key(id)?;
        let mut collections = self.collections.write().await;
        if let Some(docs) = collections.get_mut(collection) {
            docs.remove(id);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
