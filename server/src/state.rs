//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config, the backend adapters behind trait objects, the
//! session store and the image policy. Every field is cheap to clone.

use std::sync::Arc;

use crate::baas::firebase::{FirebaseIdentity, FirebaseStore};
use crate::baas::memory::{MemoryIdentity, MemoryStore};
use crate::baas::{BaasError, DocumentStore, IdentityProvider};
use crate::config::{AppConfig, BaasMode};
use crate::services::images::ImagePolicy;
use crate::services::session::SessionStore;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub identity: Arc<dyn IdentityProvider>,
    pub store: Arc<dyn DocumentStore>,
    pub sessions: SessionStore,
    pub images: ImagePolicy,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig, identity: Arc<dyn IdentityProvider>, store: Arc<dyn DocumentStore>) -> Self {
        let sessions = SessionStore::new(config.session_ttl);
        let images = ImagePolicy::new(config.image_hosts.clone());
        Self { config: Arc::new(config), identity, store, sessions, images }
    }

    /// Build state with the adapters selected by `config.mode`.
    ///
    /// # Errors
    ///
    /// Returns an error if the Firebase HTTP clients cannot be built or the
    /// Firebase section is missing.
    pub fn from_config(config: AppConfig) -> Result<Self, BaasError> {
        let (identity, store): (Arc<dyn IdentityProvider>, Arc<dyn DocumentStore>) = match config.mode {
            BaasMode::Memory => (Arc::new(MemoryIdentity::new()), Arc::new(MemoryStore::new())),
            BaasMode::Firebase => {
                let Some(firebase) = &config.firebase else {
                    return Err(BaasError::Http("firebase configuration missing".to_owned()));
                };
                (Arc::new(FirebaseIdentity::new(firebase)?), Arc::new(FirebaseStore::new(firebase)?))
            }
        };
        Ok(Self::new(config, identity, store))
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_mode_builds_without_firebase() {
        let state = test_helpers::test_app_state();
        assert_eq!(state.config.mode, BaasMode::Memory);
        assert!(state.images.allows("https://images.unsplash.com/x"));
    }

    #[test]
    fn firebase_mode_without_section_fails() {
        let config = AppConfig { mode: BaasMode::Firebase, ..test_helpers::test_config() };
        assert!(AppState::from_config(config).is_err());
    }

    #[test]
    fn image_policy_follows_config() {
        let config = AppConfig { image_hosts: vec!["cdn.example.com".to_owned()], ..test_helpers::test_config() };
        let state = AppState::from_config(config).unwrap();
        assert!(state.images.allows("https://cdn.example.com/a.jpg"));
        assert!(!state.images.allows("https://images.unsplash.com/x"));
    }
}
