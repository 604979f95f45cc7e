//! # Movie Lobby Core
//!
//! Foundational types shared by every Movie Lobby crate.
//!
//! - [`errors`]: the application error type and its JSON rendering
//!
//! # Example
//!
//! ```ignore
//! use movie_lobby_core::AppError;
//!
//! let error = AppError::not_found(anyhow::anyhow!("Movie not found"));
//! ```

pub mod errors;

// Re-export commonly used types at crate root
pub use errors::{AppError, MessageResponse};
