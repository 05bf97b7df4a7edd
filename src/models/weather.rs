use serde::{Deserialize, Serialize};

/// A single weather observation on a celestial body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    /// Free-form description, e.g. "Dusty" or "Methane rain".
    pub condition: String,
    pub temperature: f64,
}

impl WeatherReading {
    pub fn new(condition: impl Into<String>, temperature: f64) -> Self {
        Self {
            condition: condition.into(),
            temperature,
        }
    }
}
