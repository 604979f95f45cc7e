//! # Movie Lobby API
//!
//! A REST API built with Rust, Axum, and MongoDB for browsing and curating
//! a catalog of movies.
//!
//! ## Overview
//!
//! - **Public reads**: list every movie, search by title or genre
//! - **Admin writes**: create, partially update, and delete movies
//! - **Stateless auth**: HS256 bearer tokens whose `role` claim must be `admin`
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # Bearer-token extraction and the admin gate
//! ├── modules/
//! │   ├── health.rs     # Liveness + store ping
//! │   └── movies/       # Movie catalog feature module
//! ├── docs.rs           # OpenAPI document
//! ├── logging.rs        # Tracing setup and request logging
//! ├── metrics.rs        # Prometheus metrics
//! ├── router.rs         # Route table
//! ├── state.rs          # Shared application state
//! └── validator.rs      # JSON body extraction
//! ```
//!
//! The movie module follows the usual structure:
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: validation and bounded store calls
//! - `store/`: MongoDB and in-memory repositories
//! - `model.rs`: the `Movie` record and its DTOs
//! - `router.rs`: Axum router configuration
//!
//! ## Routes
//!
//! | Method | Path | Auth |
//! |--------|------|------|
//! | GET | `/api/movies` | none |
//! | GET | `/api/search?q=` | none |
//! | POST | `/api/movies` | admin |
//! | PUT | `/api/movies/{id}` | admin |
//! | DELETE | `/api/movies/{id}` | admin |
//! | GET | `/health` | none |
//!
//! ## Environment Variables
//!
//! ```bash
//! MONGO_URI=mongodb://localhost:27017
//! JWT_SECRET=your-secure-secret-key
//! PORT=3000
//! ```
//!
//! See [`movie_lobby_config`] for the optional settings.

pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use movie_lobby_auth;
pub use movie_lobby_config;
pub use movie_lobby_core;
pub use movie_lobby_db;
