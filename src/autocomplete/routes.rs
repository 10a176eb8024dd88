use std::sync::Arc;
use axum::Router;
use axum::routing::get;
use crate::autocomplete::handler::handle_autocomplete;
use crate::core::AppState;

pub fn create_autocomplete_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/autocomplete", get(handle_autocomplete))
}
