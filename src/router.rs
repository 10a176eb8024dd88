use std::sync::Arc;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::Router;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::response::IntoResponse;
use axum::routing::get;
use http::header::ORIGIN;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tower::ServiceBuilder;
use tracing::warn;
use crate::autocomplete::routes::create_autocomplete_routes;
use crate::core::AppState;

/**
 * Initializing the api routes.
 */
pub fn init_router(app_state: AppState) -> Router {
    let cors = init_cors(&app_state.env.cors_origin);

    let public_routing = Router::new()
        .route("/", get(|| async { "Hello, world! I'm your user autocomplete." }))
        .route("/health", get(|| async { (StatusCode::OK, "Healthy").into_response() }));

    let api_routing = Router::new() //add new routes here
        .merge(create_autocomplete_routes())

        //layering bottom to top middleware
        .layer(
            ServiceBuilder::new() //layering top to bottom middleware
                .layer(TraceLayer::new_for_http()) //1
                .layer(cors) //2
        )
        .with_state(Arc::new(app_state));
    public_routing.merge(api_routing)
}

fn init_cors(origin: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE, ORIGIN])
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::OPTIONS]);
    // credentials can't be combined with a wildcard origin
    if origin.trim() == "*" {
        warn!("Ignoring wildcard CORS origin, credentials require an explicit origin");
        return cors;
    }
    match origin.parse::<HeaderValue>() {
        Ok(origin) => cors.allow_origin(origin),
        Err(err) => {
            warn!("Ignoring invalid CORS origin '{}': {}", origin, err);
            cors
        }
    }
}
