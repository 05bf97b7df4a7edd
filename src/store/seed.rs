use crate::models::CelestialBody;

/// Bodies loaded into a freshly seeded store, in insertion order.
pub fn fixtures() -> Vec<CelestialBody> {
    vec![
        CelestialBody::planet("Mars", 3.71, "active", "Thin"),
        CelestialBody::moon("Titan", 1.352, "inactive", true),
    ]
}
