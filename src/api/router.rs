//! Router setup and configuration.

use axum::{
    Router,
    extract::MatchedPath,
    http::{HeaderName, Request},
    middleware,
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{self, albums, comments, health, photos, posts, todos, users};
use crate::api::middleware::track_metrics;
use crate::api::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    // Health and metrics routes
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/metrics", get(health::metrics));

    let user_routes = Router::new()
        .route("/", get(users::list).post(users::create))
        .route(
            "/{id}",
            get(users::get).put(users::update).delete(users::delete),
        )
        .route("/{id}/posts", get(users::posts))
        .route("/{id}/albums", get(users::albums))
        .route("/{id}/todos", get(users::todos));

    let post_routes = Router::new()
        .route("/", get(posts::list).post(posts::create))
        .route(
            "/{id}",
            get(posts::get).put(posts::update).delete(posts::delete),
        )
        .route("/{id}/comments", get(posts::comments))
        .route("/{id}/with-comments", get(posts::with_comments));

    let comment_routes = Router::new()
        .route("/", get(comments::list).post(comments::create))
        .route(
            "/{id}",
            get(comments::get)
                .put(comments::update)
                .delete(comments::delete),
        )
        .route("/by-post/{id}", get(comments::by_post));

    let album_routes = Router::new()
        .route("/", get(albums::list).post(albums::create))
        .route(
            "/{id}",
            get(albums::get).put(albums::update).delete(albums::delete),
        )
        .route("/{id}/photos", get(albums::photos))
        .route("/{id}/with-photos", get(albums::with_photos));

    let photo_routes = Router::new()
        .route("/", get(photos::list).post(photos::create))
        .route(
            "/{id}",
            get(photos::get).put(photos::update).delete(photos::delete),
        )
        .route("/by-album/{id}", get(photos::by_album));

    let todo_routes = Router::new()
        .route("/", get(todos::list).post(todos::create))
        .route(
            "/{id}",
            get(todos::get).put(todos::update).delete(todos::delete),
        )
        .route("/by-user/{id}", get(todos::by_user))
        .route("/completed", get(todos::completed))
        .route("/pending", get(todos::pending));

    let cors = if state.config.server.cors_permissive {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let http_layers = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
        .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<_>| {
            let matched = req
                .extensions()
                .get::<MatchedPath>()
                .map(|p| p.as_str().to_string())
                .unwrap_or_default();
            let request_id = req
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            tracing::info_span!(
                "http",
                method = %req.method(),
                uri = %req.uri(),
                matched_path = %matched,
                request_id = %request_id,
            )
        }))
        .layer(PropagateRequestIdLayer::new(request_id))
        .layer(cors);

    // Combine all routes
    Router::new()
        .merge(health_routes)
        .nest("/api/users", user_routes)
        .nest("/api/posts", post_routes)
        .nest("/api/comments", comment_routes)
        .nest("/api/albums", album_routes)
        .nest("/api/photos", photo_routes)
        .nest("/api/todos", todo_routes)
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(track_metrics))
        .layer(http_layers)
        .with_state(state)
}
