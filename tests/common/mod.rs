use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use movie_lobby::modules::movies::MovieService;
use movie_lobby::modules::movies::store::InMemoryMovieRepository;
use movie_lobby::movie_lobby_auth::create_token;
use movie_lobby::movie_lobby_config::{CorsConfig, JwtConfig};
use movie_lobby::router::init_router;
use movie_lobby::state::AppState;
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes";

pub fn jwt_config() -> JwtConfig {
    JwtConfig::new(TEST_SECRET)
}

pub struct TestApp {
    pub router: Router,
    #[allow(dead_code)]
    pub repository: Arc<InMemoryMovieRepository>,
}

pub fn setup_test_app() -> TestApp {
    let repository = Arc::new(InMemoryMovieRepository::new());
    let state = AppState {
        movies: MovieService::new(repository.clone(), Duration::from_secs(5)),
        jwt_config: jwt_config(),
        cors_config: CorsConfig::default(),
        metrics: None,
    };

    TestApp {
        router: init_router(state),
        repository,
    }
}

pub fn admin_token() -> String {
    create_token(Some("admin@test"), "admin", &jwt_config()).unwrap()
}

#[allow(dead_code)]
pub fn user_token() -> String {
    create_token(Some("viewer@test"), "user", &jwt_config()).unwrap()
}

/// Sends one request and returns the status with the decoded JSON body
/// (`Value::Null` for an empty body).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}
