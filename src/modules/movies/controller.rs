use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::{info, instrument};

use movie_lobby_core::{AppError, MessageResponse};

use crate::metrics::{track_movie_created, track_movie_deleted, track_movie_updated};
use crate::middleware::auth::AuthUser;
use crate::modules::movies::model::{CreateMovieDto, Movie, SearchParams, UpdateMovieDto};
use crate::state::AppState;
use crate::validator::{JsonBody, PathParam, QueryParams};

#[utoipa::path(
    get,
    path = "/api/movies",
    responses(
        (status = 200, description = "Every movie in the lobby", body = [Movie]),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tag = "Movies"
)]
#[instrument(skip(state))]
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, AppError> {
    let movies = state.movies.list_all().await?;

    Ok(Json(movies))
}

#[utoipa::path(
    get,
    path = "/api/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Movies whose title or genre contains q", body = [Movie]),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tag = "Movies"
)]
#[instrument(skip(state))]
pub async fn search_movies(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<SearchParams>,
) -> Result<Json<Vec<Movie>>, AppError> {
    let query = params.q.unwrap_or_default();
    let movies = state.movies.search(&query).await?;

    Ok(Json(movies))
}

#[utoipa::path(
    post,
    path = "/api/movies",
    request_body = CreateMovieDto,
    responses(
        (status = 201, description = "Movie created", body = Movie),
        (status = 400, description = "Invalid input", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "Admin role required", body = MessageResponse)
    ),
    tag = "Movies",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn add_movie(
    State(state): State<AppState>,
    auth_user: AuthUser,
    JsonBody(dto): JsonBody<CreateMovieDto>,
) -> Result<(StatusCode, Json<Movie>), AppError> {
    let movie = state.movies.create(dto).await?;

    info!(movie_id = %movie.id, by = ?auth_user.subject(), "Movie created");
    track_movie_created();

    Ok((StatusCode::CREATED, Json(movie)))
}

#[utoipa::path(
    put,
    path = "/api/movies/{id}",
    params(
        ("id" = String, Path, description = "Movie ID")
    ),
    request_body = UpdateMovieDto,
    responses(
        (status = 200, description = "Movie updated", body = Movie),
        (status = 400, description = "Invalid input", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "Admin role required", body = MessageResponse),
        (status = 404, description = "Movie not found", body = MessageResponse)
    ),
    tag = "Movies",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn update_movie(
    State(state): State<AppState>,
    auth_user: AuthUser,
    PathParam(id): PathParam<String>,
    JsonBody(dto): JsonBody<UpdateMovieDto>,
) -> Result<Json<Movie>, AppError> {
    let movie = state.movies.update_by_id(&id, dto).await?;

    info!(movie_id = %movie.id, by = ?auth_user.subject(), "Movie updated");
    track_movie_updated();

    Ok(Json(movie))
}

#[utoipa::path(
    delete,
    path = "/api/movies/{id}",
    params(
        ("id" = String, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "Admin role required", body = MessageResponse),
        (status = 404, description = "Movie not found", body = MessageResponse),
        (status = 500, description = "Store failure", body = MessageResponse)
    ),
    tag = "Movies",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user))]
pub async fn delete_movie(
    State(state): State<AppState>,
    auth_user: AuthUser,
    PathParam(id): PathParam<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.movies.delete_by_id(&id).await?;

    info!(movie_id = %id, by = ?auth_user.subject(), "Movie deleted");
    track_movie_deleted();

    Ok(Json(MessageResponse::new("Movie deleted successfully")))
}
