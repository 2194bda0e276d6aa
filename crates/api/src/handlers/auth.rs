//! Handlers for the `/auth` resource (register, login).

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use trailhead_core::error::CoreError;
use trailhead_db::models::user::{CreateUser, UserInfo};
use trailhead_db::repositories::UserRepo;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /auth/register` and `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response returned by login.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// POST /api/auth/register
///
/// Create a new staff account. Passwords are checked against the
/// strength rule, then hashed; plaintext never reaches storage.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<Json<UserInfo>> {
    let email = input.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Core(CoreError::Validation(
            "A valid email is required".into(),
        )));
    }

    validate_password_strength(&input.password)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::Core(CoreError::Internal(format!("Password hashing failed: {e}"))))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, email = %user.email, "User registered");

    Ok(Json(UserInfo::from(&user)))
}

/// POST /api/auth/login
///
/// Authenticate with email + password. Returns an access token whose
/// claims carry the email used as the author identity on blog writes.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<Json<AuthResponse>> {
    let email = input.email.trim().to_lowercase();

    // A missing user and a wrong password produce the same response,
    // so login cannot be used to probe which emails are registered.
    let user = UserRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    let verified = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::Core(CoreError::Internal(format!("Password verify failed: {e}"))))?;
    if !verified {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let access_token = generate_access_token(user.id, &user.email, &state.config.jwt)
        .map_err(|e| AppError::Core(CoreError::Internal(format!("Token generation failed: {e}"))))?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(AuthResponse {
        access_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: UserInfo::from(&user),
    }))
}
