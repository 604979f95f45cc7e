use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::middleware::role::require_admin;
use crate::router::method_not_allowed;
use crate::state::AppState;

use super::controller::{add_movie, delete_movie, list_movies, search_movies, update_movie};

/// Movie routes, relative to `/api`.
///
/// Reads are public; every mutating route is gated by `require_admin`.
/// The method-not-allowed fallback is set after the merge so it sits
/// outside the admin gate: `GET /movies/{id}` is a 405, not a 401.
pub fn init_movies_router(state: AppState) -> Router<AppState> {
    let public_routes = Router::new()
        .route("/movies", get(list_movies))
        .route("/search", get(search_movies));

    let admin_routes = Router::new()
        .route("/movies", post(add_movie))
        .route("/movies/{id}", put(update_movie).delete(delete_movie))
        .route_layer(middleware::from_fn_with_state(state, require_admin));

    public_routes
        .merge(admin_routes)
        .method_not_allowed_fallback(method_not_allowed)
}
