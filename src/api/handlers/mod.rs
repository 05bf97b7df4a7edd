use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::error::ServiceError;
use crate::models::*;
use crate::query::{ListQuery, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::service::CelestialBodyService;

const NOT_FOUND_MESSAGE: &str = "Celestial Body not found";

// ============================================================
// Error Handling
// ============================================================

/// Map a service failure to a status code and a client-facing message.
///
/// Not-found responses use a fixed message so that lookups do not echo
/// arbitrary path input back to the client.
fn service_error(e: ServiceError) -> (StatusCode, String) {
    match e {
        ServiceError::NotFound(name) => {
            tracing::warn!("Celestial body not found: {}", name);
            (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string())
        }
        ServiceError::Validation(msg) => {
            tracing::warn!("Validation error: {}", msg);
            (StatusCode::BAD_REQUEST, msg)
        }
        ServiceError::AlreadyExists(name) => {
            tracing::warn!("Duplicate celestial body: {}", name);
            (
                StatusCode::CONFLICT,
                format!("Celestial Body already exists: {}", name),
            )
        }
    }
}

fn bad_request() -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, "Bad Request".to_string())
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Celestial Bodies
// ============================================================

/// Query parameters for listing celestial bodies.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCelestialBodiesQuery {
    /// 1-based page number. Defaults to 1.
    pub page: Option<usize>,
    /// Items per page. Defaults to 10.
    pub page_size: Option<usize>,
    /// Exact status to filter by.
    pub status: Option<String>,
    /// Field to sort by: name, gravity or status (any case).
    pub sort_by: Option<String>,
    /// Defaults to true.
    pub sort_ascending: Option<bool>,
}

impl ListCelestialBodiesQuery {
    /// Converts to an engine query, or `None` if the page bounds are zero.
    fn into_list_query(self) -> Option<ListQuery> {
        let page = self.page.unwrap_or(DEFAULT_PAGE);
        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page == 0 || page_size == 0 {
            return None;
        }

        Some(ListQuery {
            page,
            page_size,
            status: self.status,
            sort_by: self.sort_by,
            sort_ascending: self.sort_ascending.unwrap_or(true),
        })
    }
}

/// An empty page is reported as a bad request rather than an empty list.
pub async fn list_celestial_bodies(
    State(service): State<CelestialBodyService>,
    Query(query): Query<ListCelestialBodiesQuery>,
) -> Result<Json<Vec<CelestialBody>>, (StatusCode, String)> {
    let Some(query) = query.into_list_query() else {
        tracing::warn!("Rejected list request with zero page or page size");
        return Err(bad_request());
    };

    let bodies = service.list(&query);
    if bodies.is_empty() {
        return Err(bad_request());
    }
    Ok(Json(bodies))
}

pub async fn create_celestial_body(
    State(service): State<CelestialBodyService>,
    Json(input): Json<CreateCelestialBodyInput>,
) -> Result<(StatusCode, Json<CelestialBody>), (StatusCode, String)> {
    service
        .create(input)
        .map(|b| (StatusCode::CREATED, Json(b)))
        .map_err(service_error)
}

pub async fn get_celestial_body(
    State(service): State<CelestialBodyService>,
    Path(name): Path<String>,
) -> Result<Json<CelestialBody>, (StatusCode, String)> {
    service.get_by_name(&name).map(Json).map_err(service_error)
}

pub async fn update_celestial_body(
    State(service): State<CelestialBodyService>,
    Path(name): Path<String>,
    Json(input): Json<UpdateCelestialBodyInput>,
) -> Result<&'static str, (StatusCode, String)> {
    service
        .replace(&name, input)
        .map(|_| "Celestial Body updated successfully")
        .map_err(service_error)
}

pub async fn patch_celestial_body(
    State(service): State<CelestialBodyService>,
    Path(name): Path<String>,
    Json(patch): Json<PatchCelestialBodyInput>,
) -> Result<&'static str, (StatusCode, String)> {
    service
        .partial_update(&name, patch)
        .map(|_| "Celestial Body partially updated successfully")
        .map_err(service_error)
}

pub async fn delete_celestial_body(
    State(service): State<CelestialBodyService>,
    Path(name): Path<String>,
) -> Result<&'static str, (StatusCode, String)> {
    service
        .delete(&name)
        .map(|_| "Celestial Body deleted successfully")
        .map_err(service_error)
}

// ============================================================
// Weather Readings
// ============================================================

/// Unknown bodies yield an empty list, not a 404.
pub async fn list_weather_readings(
    State(service): State<CelestialBodyService>,
    Path(name): Path<String>,
) -> Json<Vec<WeatherReading>> {
    Json(service.list_weather_readings(&name))
}

pub async fn add_weather_reading(
    State(service): State<CelestialBodyService>,
    Path(name): Path<String>,
    Json(reading): Json<WeatherReading>,
) -> Result<&'static str, (StatusCode, String)> {
    service
        .add_weather_reading(&name, reading)
        .map(|_| "Weather data added successfully")
        .map_err(service_error)
}
