use anyhow::anyhow;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use movie_lobby_auth::{Claims, verify_token};
use movie_lobby_config::JwtConfig;
use movie_lobby_core::AppError;

use crate::state::AppState;

/// Extractor that validates the bearer token and provides its claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn role(&self) -> Option<&str> {
        self.0.role.as_deref()
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.0.has_role(role)
    }

    pub fn subject(&self) -> Option<&str> {
        self.0.sub.as_deref()
    }
}

/// Verifies the value of an `Authorization` header.
///
/// Fails with 401 when the header is absent, is not a `Bearer` credential,
/// or carries a token that does not verify against `jwt_config`.
pub fn authenticate(header: Option<&str>, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let header =
        header.ok_or_else(|| AppError::unauthorized(anyhow!("Missing authorization header")))?;

    let token = header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::unauthorized(anyhow!("Invalid authorization header format")))?;

    verify_token(token, jwt_config)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(auth_user) = parts.extensions.get::<AuthUser>() {
            return Ok(auth_user.clone());
        }

        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let claims = authenticate(auth_header, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}
