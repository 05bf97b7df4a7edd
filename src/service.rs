//! The single entry point to the record store.
//!
//! Each method takes the store lock once and holds it for the whole
//! lookup → engine → mutate sequence, so concurrent requests never observe a
//! half-applied change.

use crate::error::{ServiceError, ServiceResult};
use crate::models::*;
use crate::query::{self, ListQuery};
use crate::store::RecordStore;
use crate::update;

#[derive(Clone, Default)]
pub struct CelestialBodyService {
    store: RecordStore,
}

impl CelestialBodyService {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// A service over a store preloaded with Mars and Titan.
    pub fn seeded() -> Self {
        Self::new(RecordStore::seeded())
    }

    pub fn list(&self, query: &ListQuery) -> Vec<CelestialBody> {
        let records = self.store.lock();
        let page = query::list(records.all(), query);
        tracing::debug!(
            "Listed {} of {} celestial bodies (page {}, size {})",
            page.len(),
            records.len(),
            query.page,
            query.page_size
        );
        page
    }

    pub fn get_by_name(&self, name: &str) -> ServiceResult<CelestialBody> {
        let records = self.store.lock();
        Ok(records.get_by_name(name)?.clone())
    }

    /// Readings of the named body, or an empty list if there is no such body.
    pub fn list_weather_readings(&self, name: &str) -> Vec<WeatherReading> {
        let records = self.store.lock();
        records
            .get_by_name(name)
            .map(|body| body.weather_readings().to_vec())
            .unwrap_or_default()
    }

    pub fn add_weather_reading(&self, name: &str, reading: WeatherReading) -> ServiceResult<()> {
        let mut records = self.store.lock();
        let body = records.get_by_name_mut(name)?;
        update::append_weather_reading(body, reading);
        tracing::info!("Added weather reading to {}", name);
        Ok(())
    }

    /// Full replace of the shared fields.
    ///
    /// `name` must exist. The overwrite targets the body named in `input`;
    /// when that body is absent nothing changes.
    pub fn replace(&self, name: &str, input: UpdateCelestialBodyInput) -> ServiceResult<()> {
        let mut records = self.store.lock();
        records.get_by_name(name)?;

        match records.get_by_name_mut(&input.name) {
            Ok(body) => {
                update::replace(body, &input);
                tracing::info!("Replaced celestial body {}", input.name);
            }
            Err(_) => {
                tracing::debug!("Replace target {} not found, nothing changed", input.name);
            }
        }
        Ok(())
    }

    pub fn partial_update(&self, name: &str, patch: PatchCelestialBodyInput) -> ServiceResult<()> {
        let mut records = self.store.lock();
        let body = records.get_by_name_mut(name)?;
        update::partial_update(body, &patch);
        tracing::info!("Partially updated celestial body {}", name);
        Ok(())
    }

    pub fn delete(&self, name: &str) -> ServiceResult<()> {
        let mut records = self.store.lock();
        records
            .remove(name)
            .ok_or_else(|| ServiceError::NotFound(name.to_string()))?;
        tracing::info!("Deleted celestial body {}", name);
        Ok(())
    }

    /// Inserts a body. Names must be unique.
    pub fn add(&self, body: CelestialBody) -> ServiceResult<()> {
        let mut records = self.store.lock();
        if records.contains(&body.name) {
            return Err(ServiceError::AlreadyExists(body.name));
        }
        tracing::info!("Added {} {}", body.kind().tag().as_str(), body.name);
        records.push(body);
        Ok(())
    }

    /// Validates the input and inserts the resulting body.
    pub fn create(&self, input: CreateCelestialBodyInput) -> ServiceResult<CelestialBody> {
        let body = CelestialBody::try_from(input)?;
        self.add(body.clone())?;
        Ok(body)
    }
}
