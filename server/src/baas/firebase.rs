//! Firebase adapters over REST.
//!
//! Identity uses the Identity Toolkit `accounts:*` endpoints with the web
//! API key. Documents use the Realtime Database REST API, where each
//! collection is a child of the database root and each document is keyed by
//! its id. URL building and response parsing are pure functions so they can
//! be tested without the network.

use std::time::Duration;

use serde::Deserialize;

use super::{BaasError, DocumentStore, Identity, IdentityProvider, check_key};
use crate::config::FirebaseConfig;

const REQUEST_TIMEOUT_SECS: u64 = 20;
const CONNECT_TIMEOUT_SECS: u64 = 5;

fn http_client() -> Result<reqwest::Client, BaasError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .build()
        .map_err(|e| BaasError::Http(e.to_string()))
}

// =============================================================================
// IDENTITY
// =============================================================================

pub struct FirebaseIdentity {
    http: reqwest::Client,
    api_key: String,
    auth_url: String,
}

impl FirebaseIdentity {
    /// # Errors
    ///
    /// Returns [`BaasError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &FirebaseConfig) -> Result<Self, BaasError> {
        Ok(Self { http: http_client()?, api_key: config.api_key.clone(), auth_url: config.auth_url.clone() })
    }

    async fn call(&self, action: &str, email: &str, password: &str) -> Result<Identity, BaasError> {
        let body = serde_json::json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });
        let response = self
            .http
            .post(accounts_url(&self.auth_url, action, &self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| BaasError::Http(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| BaasError::Http(e.to_string()))?;
        if status != 200 {
            return Err(identity_error(status, &text));
        }
        parse_identity(&text)
    }
}

#[async_trait::async_trait]
impl IdentityProvider for FirebaseIdentity {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, BaasError> {
        self.call("signInWithPassword", email, password).await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, BaasError> {
        self.call("signUp", email, password).await
    }
}

pub(crate) fn accounts_url(auth_url: &str, action: &str, api_key: &str) -> String {
    format!("{auth_url}/v1/accounts:{action}?key={api_key}")
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    email: String,
}

pub(crate) fn parse_identity(text: &str) -> Result<Identity, BaasError> {
    let account: AccountResponse = serde_json::from_str(text).map_err(|e| BaasError::Decode(e.to_string()))?;
    Ok(Identity { uid: account.local_id, email: account.email })
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Map an Identity Toolkit error body onto [`BaasError`].
///
/// Messages look like `EMAIL_EXISTS` or `WEAK_PASSWORD : Password should be ...`;
/// only the code before the first space is matched.
pub(crate) fn identity_error(status: u16, text: &str) -> BaasError {
    let message = serde_json::from_str::<ErrorEnvelope>(text)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| text.to_owned());
    let code = message.split_whitespace().next().unwrap_or_default();
    match code {
        "EMAIL_EXISTS" => BaasError::EmailExists,
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" | "USER_DISABLED" => {
            BaasError::InvalidCredentials
        }
        _ => BaasError::Upstream { status, message },
    }
}

// =============================================================================
// DOCUMENTS
// =============================================================================

pub struct FirebaseStore {
    http: reqwest::Client,
    database_url: String,
    database_auth: Option<String>,
}

impl FirebaseStore {
    /// # Errors
    ///
    /// Returns [`BaasError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &FirebaseConfig) -> Result<Self, BaasError> {
        Ok(Self {
            http: http_client()?,
            database_url: config.database_url.clone(),
            database_auth: config.database_auth.clone(),
        })
    }

    fn url(&self, collection: &str, id: Option<&str>) -> Result<reqwest::Url, BaasError> {
        document_url(&self.database_url, collection, id, self.database_auth.as_deref())
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, BaasError> {
        let response = request.send().await.map_err(|e| BaasError::Http(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| BaasError::Http(e.to_string()))?;
        if !(200..300).contains(&status) {
            tracing::error!(status, body = %text, "realtime database request failed");
            return Err(BaasError::Upstream { status, message: text });
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl DocumentStore for FirebaseStore {
    async fn list(&self, collection: &str) -> Result<Vec<(String, serde_json::Value)>, BaasError> {
        let text = self.send(self.http.get(self.url(collection, None)?)).await?;
        parse_listing(&text)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<serde_json::Value>, BaasError> {
        let text = self.send(self.http.get(self.url(collection, Some(id))?)).await?;
        let value: serde_json::Value = serde_json::from_str(&text).map_err(|e| BaasError::Decode(e.to_string()))?;
        Ok(Some(value).filter(|v| !v.is_null()))
    }

    async fn create(&self, collection: &str, value: serde_json::Value) -> Result<String, BaasError> {
        let text = self.send(self.http.post(self.url(collection, None)?).json(&value)).await?;
        parse_created(&text)
    }

    async fn put(&self, collection: &str, id: &str, value: serde_json::Value) -> Result<(), BaasError> {
        self.send(self.http.put(self.url(collection, Some(id))?).json(&value)).await?;
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), BaasError> {
        self.send(self.http.delete(self.url(collection, Some(id))?)).await?;
        Ok(())
    }
}

/// `{database_url}/{collection}[/{id}].json[?auth=...]`.
///
/// Segments are pushed through [`reqwest::Url`] so they are percent-encoded
/// and cannot add path components or cut off the query.
pub(crate) fn document_url(
    database_url: &str,
    collection: &str,
    id: Option<&str>,
    auth: Option<&str>,
) -> Result<reqwest::Url, BaasError> {
    check_key(collection)?;
    if let Some(id) = id {
        check_key(id)?;
    }
    let mut url = reqwest::Url::parse(database_url).map_err(|e| BaasError::Http(format!("database url: {e}")))?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| BaasError::Http("database url cannot hold a path".to_owned()))?;
        segments.pop_if_empty();
        match id {
            Some(id) => segments.push(collection).push(&format!("{id}.json")),
            None => segments.push(&format!("{collection}.json")),
        };
    }
    if let Some(auth) = auth {
        url.query_pairs_mut().append_pair("auth", auth);
    }
    Ok(url)
}

/// A collection read returns `null` when empty, otherwise an object keyed by id.
pub(crate) fn parse_listing(text: &str) -> Result<Vec<(String, serde_json::Value)>, BaasError> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(|e| BaasError::Decode(e.to_string()))?;
    match value {
        serde_json::Value::Null => Ok(Vec::new()),
        serde_json::Value::Object(map) => Ok(map.into_iter().filter(|(_, doc)| !doc.is_null()).collect()),
        other => Err(BaasError::Decode(format!("expected object listing, got {other}"))),
    }
}

#[derive(Deserialize)]
struct CreatedResponse {
    name: String,
}

/// `POST` answers `{"name": "<generated id>"}`.
pub(crate) fn parse_created(text: &str) -> Result<String, BaasError> {
    serde_json::from_str::<CreatedResponse>(text)
        .map(|c| c.name)
        .map_err(|e| BaasError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "firebase_test.rs"]
mod tests;
