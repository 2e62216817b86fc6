use axum::{routing::post, Router};

mod handlers;
mod models;

/// Build the routes for the build callback receivers
pub fn routes() -> Router {
    Router::new().route("/build-callback", post(handlers::build))
}
