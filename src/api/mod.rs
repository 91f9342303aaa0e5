//! API layer module.
//!
//! HTTP handlers, extractors, middleware, and routing for the placeholder API.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
