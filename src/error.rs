use thiserror::Error;

use crate::store::StoreError;

/// Failures surfaced by the service layer to its callers.
///
/// Empty pages, unknown sort keys and similar conditions are not errors;
/// they produce empty or unsorted results instead.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("celestial body not found: {0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("celestial body already exists: {0}")]
    AlreadyExists(String),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Missing(name) => Self::NotFound(name),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
