//! Customer profile documents.

use models::{ProfileUpdate, User};

use crate::baas::{self, BaasError, DocumentStore, collections};

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("profile not found: {0}")]
    NotFound(String),
    #[error("invalid profile: {0}")]
    Invalid(String),
    #[error(transparent)]
    Baas(#[from] BaasError),
}

/// # Errors
///
/// [`UserError::NotFound`] when the account has no profile document.
pub async fn get_profile(store: &dyn DocumentStore, user_id: &str) -> Result<User, UserError> {
    match baas::get_as(store, collections::USERS, user_id).await {
        Ok(user) => Ok(user),
        Err(BaasError::NotFound { .. }) => Err(UserError::NotFound(user_id.to_owned())),
        Err(e) => Err(e.into()),
    }
}

/// Apply editable fields. E-mail and the bookings back-reference are not editable here.
///
/// # Errors
///
/// [`UserError::Invalid`] for a blank name, [`UserError::NotFound`] for a
/// missing profile, otherwise backend failures.
pub async fn update_profile(store: &dyn DocumentStore, user_id: &str, update: ProfileUpdate) -> Result<User, UserError> {
    let update = ProfileUpdate {
        name: update.name.map(|n| n.trim().to_owned()),
        phone: update.phone.map(|p| p.trim().to_owned()),
        driving_license: update.driving_license.map(|d| d.trim().to_owned()),
    };
    if update.name.as_deref() == Some("") {
        return Err(UserError::Invalid("name cannot be blank".to_owned()));
    }
    let mut user = get_profile(store, user_id).await?;
    update.apply(&mut user);
    store
        .put(collections::USERS, user_id, baas::encode_doc(&user)?)
        .await?;
    Ok(user)
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
