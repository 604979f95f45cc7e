pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod store;

pub use error::StoreError;
pub use model::*;
pub use router::init_movies_router;
pub use service::MovieService;
