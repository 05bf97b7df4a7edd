use serde::{Deserialize, Serialize};

use super::weather::WeatherReading;
use crate::error::ServiceError;

/// A tracked planet or moon.
///
/// `name` is the primary key: every lookup, update and delete goes through it.
/// The [`BodyKind`] payload is private so that nothing outside construction
/// can turn a planet into a moon, and the reading log is append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelestialBody {
    pub name: String,
    /// Surface gravity in m/s².
    pub gravity: f64,
    /// Free-form lifecycle marker such as "active" or "inactive".
    #[serde(default)]
    pub status: String,
    #[serde(flatten)]
    kind: BodyKind,
    #[serde(default)]
    weather_readings: Vec<WeatherReading>,
}

/// Variant-specific payload of a [`CelestialBody`].
///
/// Serialized inline with the body, discriminated by a `kind` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BodyKind {
    #[serde(rename_all = "camelCase")]
    Planet { atmosphere_quality: String },
    #[serde(rename_all = "camelCase")]
    Moon { has_surface_ice: bool },
}

impl BodyKind {
    pub fn tag(&self) -> CelestialBodyKind {
        match self {
            Self::Planet { .. } => CelestialBodyKind::Planet,
            Self::Moon { .. } => CelestialBodyKind::Moon,
        }
    }
}

/// The bare Planet/Moon discriminant, used in create requests.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CelestialBodyKind {
    Planet,
    Moon,
}

impl CelestialBodyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planet => "planet",
            Self::Moon => "moon",
        }
    }
}

impl CelestialBody {
    pub fn planet(
        name: impl Into<String>,
        gravity: f64,
        status: impl Into<String>,
        atmosphere_quality: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            gravity,
            status: status.into(),
            kind: BodyKind::Planet {
                atmosphere_quality: atmosphere_quality.into(),
            },
            weather_readings: Vec::new(),
        }
    }

    pub fn moon(
        name: impl Into<String>,
        gravity: f64,
        status: impl Into<String>,
        has_surface_ice: bool,
    ) -> Self {
        Self {
            name: name.into(),
            gravity,
            status: status.into(),
            kind: BodyKind::Moon { has_surface_ice },
            weather_readings: Vec::new(),
        }
    }

    pub fn kind(&self) -> &BodyKind {
        &self.kind
    }

    /// Readings in the order they were recorded.
    pub fn weather_readings(&self) -> &[WeatherReading] {
        &self.weather_readings
    }

    pub(crate) fn push_weather_reading(&mut self, reading: WeatherReading) {
        self.weather_readings.push(reading);
    }
}

/// Input for creating a new celestial body.
///
/// `atmosphere_quality` is required when `kind` is `planet`;
/// `has_surface_ice` defaults to `false` for moons.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCelestialBodyInput {
    pub name: String,
    pub gravity: f64,
    #[serde(default)]
    pub status: String,
    pub kind: CelestialBodyKind,
    pub atmosphere_quality: Option<String>,
    #[serde(default)]
    pub has_surface_ice: bool,
}

impl TryFrom<CreateCelestialBodyInput> for CelestialBody {
    type Error = ServiceError;

    fn try_from(input: CreateCelestialBodyInput) -> Result<Self, Self::Error> {
        match input.kind {
            CelestialBodyKind::Planet => {
                let atmosphere_quality = input.atmosphere_quality.ok_or_else(|| {
                    ServiceError::Validation(format!(
                        "planet '{}' requires an atmosphereQuality",
                        input.name
                    ))
                })?;
                Ok(Self::planet(
                    input.name,
                    input.gravity,
                    input.status,
                    atmosphere_quality,
                ))
            }
            CelestialBodyKind::Moon => Ok(Self::moon(
                input.name,
                input.gravity,
                input.status,
                input.has_surface_ice,
            )),
        }
    }
}

/// Input for a full replace. Variant fields and readings in the request body,
/// if any, are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCelestialBodyInput {
    /// Selects the record to overwrite.
    pub name: String,
    pub gravity: f64,
    #[serde(default)]
    pub status: String,
}

/// Input for a partial update. All fields are optional; zero gravity and
/// empty strings count as "not provided".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchCelestialBodyInput {
    pub name: Option<String>,
    pub gravity: Option<f64>,
    pub status: Option<String>,
}
