//! Auth routes: e-mail/password sign-in, registration and session cookies.

use axum::extract::{FromRef, FromRequestParts, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use models::{Credentials, Registration, SessionUser};
use time::Duration;

use crate::services::auth::{self as auth_svc, AuthError};
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";

pub(crate) fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

pub(crate) fn cleared_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// AUTH EXTRACTORS
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: SessionUser,
    pub token: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = app_state
            .sessions
            .validate(token)
            .await
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

/// Signed-in administrator. Rejects with 401 without a session and 403 for
/// non-admins.
pub struct AdminUser(pub SessionUser);

impl<S> FromRequestParts<S> for AdminUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        if !auth.user.is_admin {
            tracing::warn!(user_id = %auth.user.id, "non-admin attempted admin route");
            return Err(StatusCode::FORBIDDEN);
        }
        Ok(Self(auth.user))
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/auth/me`: return current user.
pub async fn me(auth: AuthUser) -> Json<SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/login`: verify credentials, set the session cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(credentials): Json<Credentials>,
) -> Result<(CookieJar, Json<SessionUser>), StatusCode> {
    let user = auth_svc::sign_in(
        state.identity.as_ref(),
        state.store.as_ref(),
        &state.config.admin_emails,
        &credentials,
    )
    .await
    .map_err(auth_error_to_status)?;

    let token = state.sessions.create(user.clone()).await;
    tracing::info!(user_id = %user.id, admin = user.is_admin, "signed in");
    Ok((jar.add(session_cookie(token, state.config.cookie_secure)), Json(user)))
}

/// `POST /api/auth/register`: create the account and sign it in.
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(registration): Json<Registration>,
) -> Result<(CookieJar, Json<SessionUser>), StatusCode> {
    let user = auth_svc::register(
        state.identity.as_ref(),
        state.store.as_ref(),
        &state.config.admin_emails,
        &registration,
    )
    .await
    .map_err(auth_error_to_status)?;

    let token = state.sessions.create(user.clone()).await;
    Ok((jar.add(session_cookie(token, state.config.cookie_secure)), Json(user)))
}

/// `POST /api/auth/logout`: delete the session if any, always clear the cookie.
///
/// Expired or unknown tokens still get the cookie cleared, so a stale cookie
/// never outlives a sign-out.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(token) = jar.get(COOKIE_NAME).map(Cookie::value).filter(|t| !t.is_empty()) {
        state.sessions.delete(token).await;
    }
    (jar.add(cleared_cookie(state.config.cookie_secure)), StatusCode::NO_CONTENT)
}

pub(crate) fn auth_error_to_status(err: AuthError) -> StatusCode {
    match err {
        AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AuthError::EmailTaken => StatusCode::CONFLICT,
        AuthError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AuthError::Baas(e) => {
            tracing::error!(error = %e, "identity backend failure");
            StatusCode::BAD_GATEWAY
        }
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
