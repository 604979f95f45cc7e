//! Role-based authorization for Axum routes.

use anyhow::anyhow;
use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use movie_lobby_auth::ADMIN_ROLE;
use movie_lobby_core::AppError;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Checks that the authenticated user holds exactly `required_role`.
///
/// A token without a string `role` claim never passes.
pub fn check_role(auth_user: &AuthUser, required_role: &str) -> Result<(), AppError> {
    if !auth_user.has_role(required_role) {
        return Err(AppError::forbidden(anyhow!(
            "Access denied. {} role required",
            required_role
        )));
    }

    Ok(())
}

/// Runs `next` only when the request carries a verified token with `required_role`.
///
/// The verified [`AuthUser`] is inserted into the request extensions so
/// handlers can extract it without verifying the token again.
pub async fn require_role(
    state: &AppState,
    req: Request,
    next: Next,
    required_role: &str,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, state).await?;

    if let Err(err) = check_role(&auth_user, required_role) {
        warn!(
            role = ?auth_user.role(),
            required = %required_role,
            path = %parts.uri.path(),
            "Rejected request with insufficient role"
        );
        return Err(err);
    }

    parts.extensions.insert(auth_user);
    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Middleware for admin-only routes.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use crate::middleware::role::require_admin;
///
/// let admin_routes = Router::new()
///     .route("/movies/{id}", delete(delete_movie))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));
/// ```
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_role(&state, req, next, ADMIN_ROLE).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}
