pub mod contact;
pub mod data;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn site_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(data::dispatch).post(contact::submit))
        .route("/health", get(health))
}

async fn health() -> &'static str {
    "ok"
}
