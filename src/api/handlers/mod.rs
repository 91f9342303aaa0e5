//! HTTP request handlers.

pub mod albums;
pub mod comments;
pub mod health;
pub mod photos;
pub mod posts;
pub mod todos;
pub mod users;

use axum::http::{Method, Uri};

use crate::error::AppError;

/// Fallback for requests no route matches.
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::RouteNotFound(format!("{method} {}", uri.path()))
}
