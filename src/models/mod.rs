//! Domain models for SkyWeather.
//!
//! # Core Concepts
//!
//! - [`CelestialBody`]: A planet or moon, keyed by its unique name. The
//!   [`BodyKind`] payload is fixed at creation; only the shared fields
//!   (`name`, `gravity`, `status`) are touched by the update paths.
//! - [`WeatherReading`]: An observation appended to a body's reading log.
//!   Readings are owned by their parent body and never edited in place.
//!
//! The `*Input` types are request payloads consumed by the service layer.

mod celestial_body;
mod weather;

pub use celestial_body::*;
pub use weather::*;
