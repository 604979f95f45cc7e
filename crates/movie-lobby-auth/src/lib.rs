//! # Movie Lobby Auth
//!
//! Bearer-token verification for the Movie Lobby API.
//!
//! - [`claims`]: the claim set carried by a token
//! - [`jwt`]: HS256 verification (and minting, for operators and tests)
//!
//! Tokens are stateless: a request is trusted only after its token's
//! signature and expiry have been checked against the shared secret.
//!
//! # Example
//!
//! ```ignore
//! use movie_lobby_auth::{create_token, verify_token, ADMIN_ROLE};
//! use movie_lobby_config::JwtConfig;
//!
//! let config = JwtConfig::new("secret");
//! let token = create_token(Some("ops"), ADMIN_ROLE, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert!(claims.has_role(ADMIN_ROLE));
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::{ADMIN_ROLE, Claims};
pub use jwt::{create_token, verify_token};
