mod handlers;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::service::CelestialBodyService;

/// Router with permissive CORS.
pub fn create_router(service: CelestialBodyService) -> Router {
    create_router_with_origins(service, None)
}

/// Router restricted to `origins` when given; any origin otherwise.
pub fn create_router_with_origins(
    service: CelestialBodyService,
    origins: Option<&[String]>,
) -> Router {
    let api = Router::new()
        // Celestial bodies
        .route(
            "/celestialbodies",
            get(handlers::list_celestial_bodies).post(handlers::create_celestial_body),
        )
        .route(
            "/celestialbodies/{name}",
            get(handlers::get_celestial_body)
                .put(handlers::update_celestial_body)
                .patch(handlers::patch_celestial_body)
                .delete(handlers::delete_celestial_body),
        )
        // Weather readings
        .route(
            "/celestialbodies/{name}/weathers",
            get(handlers::list_weather_readings).post(handlers::add_weather_reading),
        )
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(origins))
        .with_state(service)
}

fn cors_layer(origins: Option<&[String]>) -> CorsLayer {
    let Some(origins) = origins else {
        return CorsLayer::permissive();
    };

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any)
}
