use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use movie_lobby_core::MessageResponse;

use crate::modules::movies::model::{CreateMovieDto, Movie, UpdateMovieDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::movies::controller::list_movies,
        crate::modules::movies::controller::search_movies,
        crate::modules::movies::controller::add_movie,
        crate::modules::movies::controller::update_movie,
        crate::modules::movies::controller::delete_movie,
    ),
    components(
        schemas(
            Movie,
            CreateMovieDto,
            UpdateMovieDto,
            MessageResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Movies", description = "Movie catalog: public reads, admin-only writes")
    ),
    info(
        title = "Movie Lobby API",
        version = "0.1.0",
        description = "Movie catalog REST API built with Rust, Axum, and MongoDB. Writes require a bearer token with the admin role.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
