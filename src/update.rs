//! Merge policies for replacing and patching celestial bodies.
//!
//! Neither policy touches the [`BodyKind`](crate::models::BodyKind) payload or
//! the weather readings of the target body.

use crate::models::*;

/// Overwrites the shared fields of `existing` with those of `updated`.
pub fn replace(existing: &mut CelestialBody, updated: &UpdateCelestialBodyInput) {
    existing.name = updated.name.clone();
    existing.gravity = updated.gravity;
    existing.status = updated.status.clone();
}

/// Applies the fields of `patch` that are actually provided.
///
/// - `gravity` only when strictly positive
/// - `status` only when non-empty
/// - `name` never; a body keeps its identity through a patch
pub fn partial_update(existing: &mut CelestialBody, patch: &PatchCelestialBodyInput) {
    if let Some(name) = patch.name.as_deref().filter(|n| !n.is_empty()) {
        if name != existing.name {
            tracing::debug!(
                "Ignoring name change from {} to {} in partial update",
                existing.name,
                name
            );
        }
    }

    if let Some(gravity) = patch.gravity.filter(|g| *g > 0.0) {
        existing.gravity = gravity;
    }

    if let Some(status) = patch.status.as_deref().filter(|s| !s.is_empty()) {
        existing.status = status.to_string();
    }
}

pub fn append_weather_reading(existing: &mut CelestialBody, reading: WeatherReading) {
    existing.push_weather_reading(reading);
}
