//! Signed-in user's profile routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use models::{ProfileUpdate, User};

use crate::routes::auth::AuthUser;
use crate::services::users::{self, UserError};
use crate::state::AppState;

/// `GET /api/account`: the caller's profile document.
pub async fn get_account(State(state): State<AppState>, auth: AuthUser) -> Result<Json<User>, StatusCode> {
    let user = users::get_profile(state.store.as_ref(), &auth.user.id)
        .await
        .map_err(user_error_to_status)?;
    Ok(Json(user))
}

/// `PATCH /api/account`: edit name, phone and driving license.
pub async fn update_account(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<User>, StatusCode> {
    let user = users::update_profile(state.store.as_ref(), &auth.user.id, update)
        .await
        .map_err(user_error_to_status)?;
    if user.name != auth.user.name {
        state.sessions.rename(&user.id, &user.name).await;
    }
    Ok(Json(user))
}

pub(crate) fn user_error_to_status(err: UserError) -> StatusCode {
    match err {
        UserError::NotFound(_) => StatusCode::NOT_FOUND,
        UserError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        UserError::Baas(e) => {
            tracing::error!(error = %e, "profile storage failure");
            StatusCode::BAD_GATEWAY
        }
    }
}

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;
