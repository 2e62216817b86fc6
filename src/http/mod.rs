use crate::manager::SharedBuildManager;
use axum::{http::StatusCode, middleware, routing::get, Extension, Router};

mod callbacks;
mod error;
mod logging;
mod reply;

pub(crate) use error::{Error, Result};

/// Build all the routes for the service
pub fn routes(manager: SharedBuildManager) -> Router {
    Router::new()
        .merge(callbacks::routes())
        .route("/health", get(health))
        .layer(Extension(manager))
        .layer(middleware::from_fn(logging::sentry_hub))
        .layer(logging::layer())
        .layer(logging::propagate_request_id())
        .layer(logging::set_request_id())
}

async fn health() -> StatusCode {
    StatusCode::NO_CONTENT
}
