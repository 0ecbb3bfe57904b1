//! Handlers for the `/auth` resource (signup, login, refresh, reset,
//! current user).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use medlms_core::error::CoreError;
use medlms_core::roles::Role;
use medlms_core::types::DbId;
use medlms_db::models::user::{CreateUser, UserSummary};
use medlms_db::repositories::{TenantRepo, UserRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;
use crate::tenancy;

/// Minimum password length enforced at signup.
const MIN_PASSWORD_LENGTH: usize = 8;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/signup`.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub password: String,
    #[validate(length(min = 1, message = "full_name must not be empty"))]
    pub full_name: String,
    pub phone: Option<String>,
    /// Role name; validated against the closed set. Defaults to STUDENT.
    #[serde(default = "default_role")]
    pub role: String,
    /// Optional explicit tenant. When absent, the default-tenant policy
    /// applies.
    pub tenant_id: Option<DbId>,
}

fn default_role() -> String {
    "STUDENT".to_string()
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/reset-password`.
#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
}

/// Bearer token response returned by login and refresh.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

impl TokenResponse {
    fn new(access_token: String) -> Self {
        TokenResponse {
            access_token,
            token_type: "bearer",
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/signup
///
/// Register a new user. Returns 201 with a safe user summary.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<UserSummary>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let role: Role = input
        .role
        .parse()
        .map_err(|msg: String| AppError::Core(CoreError::Validation(msg)))?;

    // Friendly pre-check; uq_users_email is the authoritative backstop
    // under concurrency and also maps to 409.
    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Email already registered".into(),
        )));
    }

    let tenant = match input.tenant_id {
        Some(tenant_id) => TenantRepo::find_by_id(&state.pool, tenant_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Tenant",
                id: tenant_id,
            }))?,
        None => tenancy::resolve_default_tenant(&state.pool).await?,
    };

    let hashed = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            tenant_id: tenant.id,
            email: input.email,
            password_hash: hashed,
            full_name: input.full_name,
            phone: input.phone,
            role,
        },
    )
    .await?;

    tracing::info!(user_id = %user.id, tenant_id = %user.tenant_id, role = %user.role, "User registered");

    Ok((StatusCode::CREATED, Json(UserSummary::from(&user))))
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Returns a bearer token.
///
/// Unknown email and wrong password surface the same 401 status and
/// message, and both paths run one Argon2 operation so neither response
/// content nor timing reveals which check failed.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let user = match UserRepo::find_by_email(&state.pool, &input.email).await? {
        Some(user) => user,
        None => {
            // Burn the same work a real verification would.
            let _ = hash_password(&input.password);
            return Err(AppError::Core(CoreError::Unauthorized(
                "Email or password is incorrect".into(),
            )));
        }
    };

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Email or password is incorrect".into(),
        )));
    }

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Your account is disabled".into(),
        )));
    }

    let token = generate_access_token(user.id, user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(TokenResponse::new(token)))
}

/// POST /api/v1/auth/refresh
///
/// Issue a fresh token for the caller. Requires a still-valid token; the
/// scheme is stateless, so the old token simply expires on its own.
pub async fn refresh(
    State(state): State<AppState>,
    current: CurrentUser,
) -> AppResult<Json<TokenResponse>> {
    let token = generate_access_token(current.user.id, current.user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(TokenResponse::new(token)))
}

/// POST /api/v1/auth/reset-password
///
/// Always answers 200 with the same message so callers cannot probe which
/// emails are registered. Mail delivery is not wired up yet.
pub async fn reset_password(
    State(state): State<AppState>,
    Json(input): Json<ResetPasswordRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let user = UserRepo::find_by_email(&state.pool, &input.email).await?;
    tracing::debug!(known_email = user.is_some(), "Password reset requested");

    Ok(Json(serde_json::json!({
        "message": "If this email exists, you will receive password reset instructions"
    })))
}

/// GET /api/v1/auth/me
///
/// Current user summary from the live row.
pub async fn me(current: CurrentUser) -> AppResult<Json<UserSummary>> {
    Ok(Json(UserSummary::from(&current.user)))
}
