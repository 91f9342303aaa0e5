//! Application state for Axum handlers.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::AppConfig;
use crate::service::{
    AlbumService, CommentService, PhotoService, PostService, TodoService, UserService,
};
use crate::storage::Database;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Live dataset and its storage backend.
    pub db: Arc<Database>,
    /// User service.
    pub users: Arc<UserService>,
    /// Post service.
    pub posts: Arc<PostService>,
    /// Comment service.
    pub comments: Arc<CommentService>,
    /// Album service.
    pub albums: Arc<AlbumService>,
    /// Photo service.
    pub photos: Arc<PhotoService>,
    /// Todo service.
    pub todos: Arc<TodoService>,
    /// Prometheus recorder handle, when metrics are enabled.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(config: Arc<AppConfig>, db: Arc<Database>) -> Self {
        Self {
            config,
            users: Arc::new(UserService::new(Arc::clone(&db))),
            posts: Arc::new(PostService::new(Arc::clone(&db))),
            comments: Arc::new(CommentService::new(Arc::clone(&db))),
            albums: Arc::new(AlbumService::new(Arc::clone(&db))),
            photos: Arc::new(PhotoService::new(Arc::clone(&db))),
            todos: Arc::new(TodoService::new(Arc::clone(&db))),
            db,
            metrics: None,
        }
    }

    /// Attach the Prometheus handle rendered by `/metrics`.
    #[must_use]
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
