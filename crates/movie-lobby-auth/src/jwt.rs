//! HS256 token verification.
//!
//! [`verify_token`] is the only function the request path calls. It
//! checks the signature against the configured secret, rejects expired
//! tokens and requires the `exp` claim. Whether the token's role is good
//! enough is decided by the caller.
//!
//! [`create_token`] mints a token with the same secret. The API never
//! issues tokens over HTTP; it exists for operators and the test suite.

use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use movie_lobby_config::JwtConfig;
use movie_lobby_core::AppError;

use crate::claims::Claims;

/// Creates a signed token carrying `role`, valid for `jwt_config.token_expiry` seconds.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn create_token(
    subject: Option<&str>,
    role: &str,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.token_expiry as usize;

    let claims = Claims {
        sub: subject.map(str::to_string),
        role: Some(role.to_string()),
        exp,
        iat: Some(now),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create token: {}", e)))
}

/// Verifies a token and returns its claims.
///
/// # Errors
///
/// Returns an unauthorized error if:
/// - The token signature is invalid
/// - The token has expired
/// - The token is malformed or lacks an `exp` claim
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_required_spec_claims(&["exp"]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(anyhow!("Invalid or expired token")))
}
