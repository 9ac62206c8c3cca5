//! # Product catalog
//!
//! Server-rendered catalog over a single `products` table: list with a
//! name filter, add, edit, and delete, all through HTML forms and 303
//! redirects back to the list.
//!
//! Layers:
//! - `app::product`: model, repository (Postgres and in-memory), service,
//!   handlers and routes
//! - `core`: handler-boundary errors and request middleware
//! - `infrastructure`: configuration, logging, the connection pool and the
//!   template renderer

pub mod app;
pub mod core;
pub mod infrastructure;

use axum::{middleware, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub use app::product::handler::AppState;

/// Full router with logging layers, ready to serve.
pub fn build_router(state: AppState) -> Router {
    app::product::routes::product_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(
                    crate::core::middleware::request_logging_middleware,
                )),
        )
        .with_state(state)
}
