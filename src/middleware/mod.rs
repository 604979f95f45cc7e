//! Middleware modules for request processing.
//!
//! - [`auth`]: bearer-token extraction and verification (`AuthUser`)
//! - [`role`]: role checks and the `require_admin` route layer
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. `require_admin` runs before the handler and extracts an `AuthUser`
//! 3. Missing or unverifiable tokens are rejected with 401
//! 4. Tokens whose `role` is not `admin` are rejected with 403
//! 5. Otherwise the claims are stored in the request extensions and the
//!    handler executes
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, middleware, routing::post};
//! use crate::middleware::role::require_admin;
//!
//! let admin_routes = Router::new()
//!     .route("/movies", post(add_movie))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));
//! ```

pub mod auth;
pub mod role;
