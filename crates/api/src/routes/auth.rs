//! Route definitions for the `/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /signup          -> signup
/// POST /login           -> login
/// POST /refresh         -> refresh (requires auth)
/// POST /reset-password  -> reset_password
/// GET  /me              -> me (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/reset-password", post(auth::reset_password))
        .route("/me", get(auth::me))
}
