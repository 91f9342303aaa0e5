//! JSON body extractor that runs field validation.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::domain::Validate;
use crate::error::AppError;

/// A JSON body that deserialized and passed [`Validate`].
///
/// Malformed JSON or a wrong content type becomes `BadRequest`; a body that
/// parses but breaks a field rule becomes `Validation` with every failing
/// field listed.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value.validate().map_err(AppError::Validation)?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::routing::post;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::domain::NewTodo;

    async fn accept(ValidatedJson(todo): ValidatedJson<NewTodo>) -> String {
        todo.title
    }

    async fn send(body: &str) -> (StatusCode, Value) {
        let app = Router::new().route("/todos", post(accept));
        let request = Request::post("/todos")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_valid_body() {
        let (status, _) = send(r#"{"userId": 1, "title": "delectus aut autem"}"#).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let (status, body) = send(r#"{"userId": 1, "title": "#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 3001);
    }

    #[tokio::test]
    async fn test_invalid_fields_are_listed() {
        let (status, body) = send(r#"{"userId": 0, "title": ""}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 3002);
        assert!(body["data"]["userId"].is_array());
        assert!(body["data"]["title"].is_array());
    }
}
