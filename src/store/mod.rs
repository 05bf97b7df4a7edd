mod seed;

use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;

use crate::models::*;

pub use seed::fixtures;

/// Lookup fault raised by the name-keyed primitives.
///
/// Callers outside the service layer never see this; it is converted into
/// [`crate::error::ServiceError::NotFound`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no celestial body named '{0}'")]
    Missing(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Process-wide handle to the in-memory collection.
///
/// Clones share the same records. All access goes through [`RecordStore::lock`],
/// so one operation sees and mutates a consistent collection.
#[derive(Clone, Default)]
pub struct RecordStore {
    records: Arc<Mutex<Records>>,
}

impl RecordStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store preloaded with [`fixtures`].
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut records = store.lock();
            for body in fixtures() {
                records.push(body);
            }
            tracing::debug!("Seeded record store with {} bodies", records.len());
        }
        store
    }

    pub fn lock(&self) -> MutexGuard<'_, Records> {
        self.records.lock().expect("record store lock poisoned")
    }
}

/// The collection behind the lock. Name lookups return the first match.
#[derive(Debug, Default)]
pub struct Records {
    bodies: Vec<CelestialBody>,
}

impl Records {
    pub fn all(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get_by_name(&self, name: &str) -> StoreResult<&CelestialBody> {
        self.bodies
            .iter()
            .find(|b| b.name == name)
            .ok_or_else(|| StoreError::Missing(name.to_string()))
    }

    pub fn get_by_name_mut(&mut self, name: &str) -> StoreResult<&mut CelestialBody> {
        self.bodies
            .iter_mut()
            .find(|b| b.name == name)
            .ok_or_else(|| StoreError::Missing(name.to_string()))
    }

    pub fn push(&mut self, body: CelestialBody) {
        self.bodies.push(body);
    }

    /// Removes the first body with this name, if any.
    pub fn remove(&mut self, name: &str) -> Option<CelestialBody> {
        let index = self.position(name)?;
        Some(self.bodies.remove(index))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.name == name)
    }
}
