//! Request extraction and validation message formatting.
//!
//! The extractors here wrap axum's own and turn every rejection into an
//! [`AppError`], so a malformed body, query string or path segment still
//! answers with a `{"message"}` JSON body.

use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request, rejection::JsonRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::ValidationErrors;

use movie_lobby_core::AppError;

/// Joins field errors into one client-facing sentence.
///
/// Fields are sorted so the message is stable across runs.
pub fn format_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// JSON body extractor whose rejections are `400` with a `message` body.
///
/// Field-level rules are checked by the service, not here.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

fn rejection_message(rejection: &JsonRejection) -> String {
    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return "Missing 'Content-Type: application/json' header".to_string();
    }

    "Invalid request body".to_string()
}

/// Name between the first pair of backticks in a serde message.
fn quoted_name(message: &str) -> &str {
    message.split('`').nth(1).unwrap_or("unknown")
}

/// Client message for a body that is valid JSON but does not fit `T`.
///
/// Only the leading text of the serde message is inspected; the rest may
/// echo request values.
fn shape_message(error: &serde_json::Error) -> String {
    let message = error.to_string();

    if message.starts_with("missing field `") {
        return format!("{} is required", quoted_name(&message));
    }

    if message.starts_with("unknown field `") {
        return format!("{} cannot be updated", quoted_name(&message));
    }

    if message.starts_with("invalid type:") {
        return "Invalid field type in request".to_string();
    }

    "Invalid request body".to_string()
}

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(anyhow!(rejection_message(&rejection))))?;

        let value = serde_json::from_value(value)
            .map_err(|e| AppError::bad_request(anyhow!(shape_message(&e))))?;

        Ok(JsonBody(value))
    }
}

/// Query string extractor whose rejections render as `{"message"}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::new(rejection.status(), anyhow!(rejection.body_text())))?;

        Ok(QueryParams(value))
    }
}

/// Path parameter extractor whose rejections render as `{"message"}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathParam<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::new(rejection.status(), anyhow!(rejection.body_text())))?;

        Ok(PathParam(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Debug, Deserialize, Validate)]
    #[serde(deny_unknown_fields)]
    struct Sample {
        #[validate(length(min = 1, message = "name must not be empty"))]
        name: String,
        #[validate(range(min = 0, max = 10))]
        score: i32,
    }

    async fn extract(body: &str, content_type: Option<&str>) -> Result<Sample, AppError> {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        let req = builder.body(Body::from(body.to_string())).unwrap();

        JsonBody::<Sample>::from_request(req, &())
            .await
            .map(|JsonBody(sample)| sample)
    }

    #[test]
    fn test_format_errors_uses_messages_and_fallback() {
        let sample = Sample {
            name: String::new(),
            score: 42,
        };
        let errors = sample.validate().unwrap_err();

        assert_eq!(
            format_errors(&errors),
            "name must not be empty, score is invalid"
        );
    }

    #[tokio::test]
    async fn test_valid_body() {
        let sample = extract(r#"{"name":"a","score":1}"#, Some("application/json"))
            .await
            .unwrap();
        assert_eq!(sample.name, "a");
    }

    #[tokio::test]
    async fn test_missing_field() {
        let err = extract(r#"{"name":"a"}"#, Some("application/json"))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "score is required");
    }

    #[tokio::test]
    async fn test_unknown_field() {
        let err = extract(r#"{"name":"a","score":1,"x":2}"#, Some("application/json"))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "x cannot be updated");
    }

    #[tokio::test]
    async fn test_wrong_type_and_syntax() {
        let err = extract(r#"{"name":"a","score":"high"}"#, Some("application/json"))
            .await
            .unwrap_err();
        assert_eq!(err.public_message(), "Invalid field type in request");

        let err = extract("{not json", Some("application/json"))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_string_values_do_not_steer_the_message() {
        let err = extract(
            r#"{"name":"unknown field `x`","score":"missing field `y`"}"#,
            Some("application/json"),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Invalid field type in request");
    }

    #[tokio::test]
    async fn test_query_rejection_is_bad_request() {
        #[derive(Debug, Deserialize)]
        struct Search {
            #[allow(dead_code)]
            q: Option<String>,
        }

        let req = Request::builder()
            .uri("/search?q=a&q=b")
            .body(Body::empty())
            .unwrap();
        let (mut parts, _) = req.into_parts();

        let err = QueryParams::<Search>::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.public_message().contains("duplicate field"));
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let err = extract(r#"{"name":"a","score":1}"#, None).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            err.public_message(),
            "Missing 'Content-Type: application/json' header"
        );
    }
}
