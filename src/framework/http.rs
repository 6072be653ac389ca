use axum::{routing::get, Router};

use super::data::AppData;
use crate::routes;

/// Assembles the router with shared state attached. Kept separate from
/// serving so tests can mount the exact production surface on an ephemeral
/// port.
pub fn build(data: AppData) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/api/check-word", get(routes::check_word))
        .with_state(data)
}
