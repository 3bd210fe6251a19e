//! # todo-server
//!
//! HTTP API for todolist.
//!
//! Form fields may also be passed in the query string; body fields win.
//!
//! ```text
//! GET    /                 index page from the resources directory
//! GET    /resources/*      static files
//! GET    /healthz          {"alive": true}
//! GET    /todo-completed   [Item]
//! GET    /todo-incomplete  [Item]
//! POST   /todo             form: description         -> {"id": ...}
//! POST   /todo/:id         form: completed           -> {"updated": bool, "error"?}
//! DELETE /todo/:id                                   -> {"deleted": bool, "error"?}
//! ```

pub mod error;
pub mod form;
pub mod handlers;
pub mod state;

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

pub use error::AppError;
pub use state::AppState;

/// Methods the browser UI may use cross-origin.
pub const CORS_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::DELETE,
    Method::PATCH,
    Method::OPTIONS,
];

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(CORS_METHODS);

    Router::new()
        .route_service("/", ServeFile::new(&state.index_path))
        .nest_service("/resources", ServeDir::new(&state.resources_dir))
        .route("/healthz", get(handlers::health::healthz))
        .route("/todo-completed", get(handlers::items::completed_items))
        .route("/todo-incomplete", get(handlers::items::incomplete_items))
        .route("/todo", post(handlers::items::create_item))
        .route(
            "/todo/:id",
            post(handlers::items::update_item).delete(handlers::items::delete_item),
        )
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
