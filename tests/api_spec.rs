use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use sky_weather::api::create_router;
use sky_weather::models::*;
use sky_weather::service::CelestialBodyService;

fn setup() -> TestServer {
    let app = create_router(CelestialBodyService::seeded());
    TestServer::new(app).expect("Failed to create test server")
}

fn names(bodies: &[CelestialBody]) -> Vec<&str> {
    bodies.iter().map(|b| b.name.as_str()).collect()
}

mod health {
    use super::*;

    #[tokio::test]
    async fn returns_ok() {
        let server = setup();

        let response = server.get("/api/v1/health").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "status": "ok" }));
    }
}

mod list_celestial_bodies {
    use super::*;

    #[tokio::test]
    async fn returns_seeded_bodies() {
        let server = setup();

        let response = server.get("/api/v1/celestialbodies").await;

        response.assert_status_ok();
        let bodies: Vec<CelestialBody> = response.json();
        assert_eq!(names(&bodies), vec!["Mars", "Titan"]);
    }

    #[tokio::test]
    async fn filters_by_status() {
        let server = setup();

        let response = server
            .get("/api/v1/celestialbodies")
            .add_query_param("status", "active")
            .await;

        response.assert_status_ok();
        let bodies: Vec<CelestialBody> = response.json();
        assert_eq!(names(&bodies), vec!["Mars"]);
    }

    #[tokio::test]
    async fn sorts_by_gravity() {
        let server = setup();

        let response = server
            .get("/api/v1/celestialbodies")
            .add_query_param("sortBy", "gravity")
            .add_query_param("sortAscending", "true")
            .await;

        response.assert_status_ok();
        let bodies: Vec<CelestialBody> = response.json();
        assert_eq!(names(&bodies), vec!["Titan", "Mars"]);
    }

    #[tokio::test]
    async fn sorts_descending() {
        let server = setup();

        let response = server
            .get("/api/v1/celestialbodies")
            .add_query_param("sortBy", "GRAVITY")
            .add_query_param("sortAscending", "false")
            .await;

        response.assert_status_ok();
        let bodies: Vec<CelestialBody> = response.json();
        assert_eq!(names(&bodies), vec!["Mars", "Titan"]);
    }

    #[tokio::test]
    async fn paginates() {
        let server = setup();

        let response = server
            .get("/api/v1/celestialbodies")
            .add_query_param("page", "2")
            .add_query_param("pageSize", "1")
            .await;

        response.assert_status_ok();
        let bodies: Vec<CelestialBody> = response.json();
        assert_eq!(names(&bodies), vec!["Titan"]);
    }

    #[tokio::test]
    async fn empty_page_is_bad_request() {
        let server = setup();

        let response = server
            .get("/api/v1/celestialbodies")
            .add_query_param("status", "retired")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_text("Bad Request");
    }

    #[tokio::test]
    async fn zero_page_size_is_bad_request() {
        let server = setup();

        let response = server
            .get("/api/v1/celestialbodies")
            .add_query_param("pageSize", "0")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn serializes_variant_fields_inline() {
        let server = setup();

        let response = server.get("/api/v1/celestialbodies").await;

        let bodies: serde_json::Value = response.json();
        assert_eq!(bodies[0]["kind"], "planet");
        assert_eq!(bodies[0]["atmosphereQuality"], "Thin");
        assert_eq!(bodies[1]["kind"], "moon");
        assert_eq!(bodies[1]["hasSurfaceIce"], true);
    }
}

mod get_celestial_body {
    use super::*;

    #[tokio::test]
    async fn returns_body_by_name() {
        let server = setup();

        let response = server.get("/api/v1/celestialbodies/Mars").await;

        response.assert_status_ok();
        let mars: CelestialBody = response.json();
        assert_eq!(mars.gravity, 3.71);
        assert_eq!(mars.status, "active");
    }

    #[tokio::test]
    async fn returns_not_found_for_unknown_name() {
        let server = setup();

        let response = server.get("/api/v1/celestialbodies/Europa").await;

        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_text("Celestial Body not found");
    }
}

mod create_celestial_body {
    use super::*;

    #[tokio::test]
    async fn returns_created_status() {
        let server = setup();

        let response = server
            .post("/api/v1/celestialbodies")
            .json(&json!({
                "name": "Europa",
                "gravity": 1.315,
                "status": "active",
                "kind": "moon",
                "hasSurfaceIce": true
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let europa: CelestialBody = response.json();
        assert_eq!(europa.kind(), &BodyKind::Moon { has_surface_ice: true });

        server
            .get("/api/v1/celestialbodies/Europa")
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn rejects_planet_without_atmosphere() {
        let server = setup();

        let response = server
            .post("/api/v1/celestialbodies")
            .json(&json!({
                "name": "Venus",
                "gravity": 8.87,
                "kind": "planet"
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rejects_duplicate_name() {
        let server = setup();

        let response = server
            .post("/api/v1/celestialbodies")
            .json(&json!({
                "name": "Mars",
                "gravity": 1.0,
                "kind": "planet",
                "atmosphereQuality": "Thick"
            }))
            .await;

        response.assert_status(StatusCode::CONFLICT);
    }
}

mod update_celestial_body {
    use super::*;

    #[tokio::test]
    async fn replaces_core_fields() {
        let server = setup();

        let response = server
            .put("/api/v1/celestialbodies/Mars")
            .json(&UpdateCelestialBodyInput {
                name: "Mars".to_string(),
                gravity: 3.72,
                status: "inactive".to_string(),
            })
            .await;

        response.assert_status_ok();
        response.assert_text("Celestial Body updated successfully");

        let mars: CelestialBody = server.get("/api/v1/celestialbodies/Mars").await.json();
        assert_eq!(mars.gravity, 3.72);
        assert_eq!(mars.status, "inactive");
        assert_eq!(
            mars.kind(),
            &BodyKind::Planet {
                atmosphere_quality: "Thin".to_string()
            }
        );
    }

    #[tokio::test]
    async fn keeps_weather_readings() {
        let server = setup();

        for (condition, temperature) in [("Dusty", -60.0), ("Clear", -20.0)] {
            server
                .post("/api/v1/celestialbodies/Mars/weathers")
                .json(&WeatherReading::new(condition, temperature))
                .await
                .assert_status_ok();
        }

        server
            .put("/api/v1/celestialbodies/Mars")
            .json(&UpdateCelestialBodyInput {
                name: "Mars".to_string(),
                gravity: 4.0,
                status: "active".to_string(),
            })
            .await
            .assert_status_ok();

        let readings: Vec<WeatherReading> = server
            .get("/api/v1/celestialbodies/Mars/weathers")
            .await
            .json();
        assert_eq!(
            readings,
            vec![
                WeatherReading::new("Dusty", -60.0),
                WeatherReading::new("Clear", -20.0)
            ]
        );
    }

    #[tokio::test]
    async fn returns_not_found_for_unknown_name() {
        let server = setup();

        let response = server
            .put("/api/v1/celestialbodies/Europa")
            .json(&UpdateCelestialBodyInput {
                name: "Europa".to_string(),
                gravity: 1.3,
                status: "active".to_string(),
            })
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}

mod patch_celestial_body {
    use super::*;

    #[tokio::test]
    async fn applies_only_provided_fields() {
        let server = setup();

        let response = server
            .patch("/api/v1/celestialbodies/Titan")
            .json(&json!({ "status": "active", "gravity": 0 }))
            .await;

        response.assert_status_ok();
        response.assert_text("Celestial Body partially updated successfully");

        let titan: CelestialBody = server.get("/api/v1/celestialbodies/Titan").await.json();
        assert_eq!(titan.status, "active");
        assert_eq!(titan.gravity, 1.352);
    }

    #[tokio::test]
    async fn ignores_name_in_patch() {
        let server = setup();

        server
            .patch("/api/v1/celestialbodies/Titan")
            .json(&json!({ "name": "Rhea", "gravity": 0.264 }))
            .await
            .assert_status_ok();

        let titan: CelestialBody = server.get("/api/v1/celestialbodies/Titan").await.json();
        assert_eq!(titan.gravity, 0.264);
        server
            .get("/api/v1/celestialbodies/Rhea")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn returns_not_found_for_unknown_name() {
        let server = setup();

        let response = server
            .patch("/api/v1/celestialbodies/Europa")
            .json(&json!({ "status": "active" }))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}

mod delete_celestial_body {
    use super::*;

    #[tokio::test]
    async fn removes_body() {
        let server = setup();

        let response = server.delete("/api/v1/celestialbodies/Mars").await;

        response.assert_status_ok();
        response.assert_text("Celestial Body deleted successfully");
        server
            .get("/api/v1/celestialbodies/Mars")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn returns_not_found_for_unknown_name() {
        let server = setup();

        let response = server.delete("/api/v1/celestialbodies/Europa").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}

mod weather_readings {
    use super::*;

    #[tokio::test]
    async fn adds_and_lists_reading() {
        let server = setup();

        let response = server
            .post("/api/v1/celestialbodies/Mars/weathers")
            .json(&json!({ "condition": "Dusty", "temperature": -60 }))
            .await;

        response.assert_status_ok();
        response.assert_text("Weather data added successfully");

        let readings: Vec<WeatherReading> = server
            .get("/api/v1/celestialbodies/Mars/weathers")
            .await
            .json();
        assert_eq!(readings, vec![WeatherReading::new("Dusty", -60.0)]);
    }

    #[tokio::test]
    async fn lists_empty_for_unknown_body() {
        let server = setup();

        let response = server.get("/api/v1/celestialbodies/Pluto/weathers").await;

        response.assert_status_ok();
        let readings: Vec<WeatherReading> = response.json();
        assert!(readings.is_empty());
    }

    #[tokio::test]
    async fn add_returns_not_found_for_unknown_body() {
        let server = setup();

        let response = server
            .post("/api/v1/celestialbodies/Pluto/weathers")
            .json(&json!({ "condition": "Frozen", "temperature": -230.0 }))
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
