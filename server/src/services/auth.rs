//! Sign-in and registration against the identity provider.
//!
//! A successful sign-in resolves the `users` profile document for the
//! display name and checks the admin list. Registration creates the identity
//! first and the profile document second.

use models::{Credentials, Registration, SessionUser, User};

use crate::baas::{self, BaasError, DocumentStore, Identity, IdentityProvider, collections};

/// Minimum password length, matching the hosted provider's rule.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("email already registered")]
    EmailTaken,
    #[error("invalid registration: {0}")]
    Invalid(String),
    #[error(transparent)]
    Baas(BaasError),
}

impl From<BaasError> for AuthError {
    fn from(err: BaasError) -> Self {
        match err {
            BaasError::InvalidCredentials => Self::InvalidCredentials,
            BaasError::EmailExists => Self::EmailTaken,
            other => Self::Baas(other),
        }
    }
}

/// Whether `email` is on the configured admin list (case-insensitive).
#[must_use]
pub fn is_admin(admin_emails: &[String], email: &str) -> bool {
    admin_emails.iter().any(|admin| admin.eq_ignore_ascii_case(email.trim()))
}

/// Verify credentials and build the session identity.
///
/// # Errors
///
/// [`AuthError::InvalidCredentials`] on a rejected login, otherwise backend failures.
pub async fn sign_in(
    identity: &dyn IdentityProvider,
    store: &dyn DocumentStore,
    admin_emails: &[String],
    credentials: &Credentials,
) -> Result<SessionUser, AuthError> {
    let email = credentials.email.trim();
    if email.is_empty() || credentials.password.is_empty() {
        return Err(AuthError::InvalidCredentials);
    }
    let account = identity.sign_in(email, &credentials.password).await?;
    let name = match baas::get_as::<User>(store, collections::USERS, &account.uid).await {
        Ok(profile) => profile.name,
        Err(BaasError::NotFound { .. }) => {
            tracing::warn!(uid = %account.uid, "signed-in account has no profile document");
            fallback_name(&account.email)
        }
        Err(e) => return Err(e.into()),
    };
    Ok(session_user(account, name, admin_emails))
}

/// Create an account and its profile document.
///
/// # Errors
///
/// [`AuthError::Invalid`] for bad input, [`AuthError::EmailTaken`] for a
/// duplicate e-mail, otherwise backend failures.
pub async fn register(
    identity: &dyn IdentityProvider,
    store: &dyn DocumentStore,
    admin_emails: &[String],
    registration: &Registration,
) -> Result<SessionUser, AuthError> {
    validate_registration(registration)?;
    let account = identity
        .sign_up(registration.email.trim(), &registration.password)
        .await?;

    let profile = User {
        id: account.uid.clone(),
        name: registration.name.trim().to_owned(),
        email: account.email.clone(),
        phone: registration.phone.trim().to_owned(),
        driving_license: registration.driving_license.trim().to_owned(),
        bookings: None,
    };
    store
        .put(collections::USERS, &account.uid, baas::encode_doc(&profile)?)
        .await?;
    tracing::info!(uid = %account.uid, "registered new account");

    Ok(session_user(account, profile.name, admin_emails))
}

pub(crate) fn validate_registration(registration: &Registration) -> Result<(), AuthError> {
    if registration.name.trim().is_empty() {
        return Err(AuthError::Invalid("name is required".to_owned()));
    }
    let email = registration.email.trim();
    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err(AuthError::Invalid("email is not valid".to_owned()));
    }
    if registration.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::Invalid(format!("password must be at least {MIN_PASSWORD_LEN} characters")));
    }
    Ok(())
}

fn fallback_name(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_owned()
}

fn session_user(account: Identity, name: String, admin_emails: &[String]) -> SessionUser {
    let is_admin = is_admin(admin_emails, &account.email);
    SessionUser { id: account.uid, email: account.email, name, is_admin }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
