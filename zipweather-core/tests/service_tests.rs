//! Integration tests for the geocoding and weather clients using WireMock.
//!
//! Both services are mocked so the full prompt → lookup → weather flow can
//! be exercised without network access.

use std::io::Cursor;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};
use zipweather_core::{
    Config, GeoResult, GeocodingService, LineInput, OpenWeatherProvider, PostalQuery,
    UnitSystem, WeatherProvider, ZipWeatherError, ZippopotamClient, provider_from_config, run,
    validator::{EMPTY_INPUT_WARNING, INVALID_CODE_WARNING},
};

// =============================================================================
// Test Helpers
// =============================================================================

fn beverly_hills_geocode() -> serde_json::Value {
    json!({
        "post code": "90210",
        "country": "United States",
        "country abbreviation": "US",
        "places": [{
            "place name": "Beverly Hills",
            "longitude": "-118.4065",
            "state": "California",
            "state abbreviation": "CA",
            "latitude": "34.0901"
        }]
    })
}

fn clear_sky_weather() -> serde_json::Value {
    json!({
        "weather": [{"id": 800, "main": "Clear", "description": "clear sky"}],
        "main": {"temp": 70, "temp_min": 65, "temp_max": 75, "humidity": 30}
    })
}

fn beverly_hills() -> GeoResult {
    GeoResult {
        place_name: "Beverly Hills".into(),
        region_abbreviation: "CA".into(),
        country_abbreviation: "US".into(),
    }
}

async fn mount_geocode(server: &MockServer, code: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/us/{code}")))
        .respond_with(response)
        .mount(server)
        .await;
}

struct Outcome {
    result: Result<String, ZipWeatherError>,
    warnings: Vec<String>,
    prompts: String,
}

async fn run_flow(lines: &str, geo: &MockServer, weather: &MockServer) -> Outcome {
    let config = Config::from_lookup(|key| match key {
        "WEATHER_API_KEY" => Some("test-key".to_string()),
        "ZIPWEATHER_GEOCODE_URL" => Some(geo.uri()),
        "ZIPWEATHER_WEATHER_URL" => Some(weather.uri()),
        _ => None,
    });

    let geocoder = ZippopotamClient::new(config.geocode_base_url.clone());
    let provider = provider_from_config(&config);

    let mut prompt_out = Vec::new();
    let mut warnings: Vec<String> = Vec::new();
    let result = {
        let mut input = LineInput::new(Cursor::new(lines.to_string()), &mut prompt_out);
        run(
            UnitSystem::Imperial,
            &mut input,
            &mut warnings,
            &geocoder,
            provider.as_ref(),
        )
        .await
    };

    Outcome {
        result,
        warnings,
        prompts: String::from_utf8(prompt_out).expect("prompt output is utf-8"),
    }
}

// =============================================================================
// Geocoding Client Tests
// =============================================================================

mod geocode_tests {
    use super::*;

    #[tokio::test]
    async fn lookup_returns_status_and_body() {
        let server = MockServer::start().await;
        mount_geocode(
            &server,
            "90210",
            ResponseTemplate::new(200).set_body_json(beverly_hills_geocode()),
        )
        .await;

        let client = ZippopotamClient::new(server.uri());
        let reply = client
            .lookup(&PostalQuery::parse("90210").unwrap())
            .await
            .unwrap();

        assert_eq!(reply.status, 200);
        assert!(reply.body.contains("Beverly Hills"));
    }

    #[tokio::test]
    async fn lookup_passes_through_not_found() {
        let server = MockServer::start().await;
        mount_geocode(&server, "00000", ResponseTemplate::new(404).set_body_string("{}")).await;

        let client = ZippopotamClient::new(server.uri());
        let reply = client
            .lookup(&PostalQuery::parse("00000").unwrap())
            .await
            .unwrap();

        assert_eq!(reply.status, 404);
        assert!(!reply.is_success());
    }

    #[tokio::test]
    async fn lookup_against_closed_port_is_an_error() {
        let client = ZippopotamClient::new("http://127.0.0.1:9");
        let result = client.lookup(&PostalQuery::parse("90210").unwrap()).await;
        assert!(result.is_err());
    }
}

// =============================================================================
// Weather Provider Tests
// =============================================================================

mod weather_tests {
    use super::*;

    #[tokio::test]
    async fn sends_key_units_and_location_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("APPID", "test-key"))
            .and(query_param("units", "metric"))
            .and(query_param("q", "Beverly Hills,CA,US"))
            .respond_with(ResponseTemplate::new(200).set_body_json(clear_sky_weather()))
            .expect(1)
            .mount(&server)
            .await;

        let provider = OpenWeatherProvider::new(Some("test-key".into()), server.uri());
        let weather = provider
            .get_weather(&beverly_hills(), UnitSystem::Metric)
            .await
            .unwrap();

        assert_eq!(weather.description, "clear sky");
        assert_eq!(weather.current_temp, 70.0);
        assert_eq!(weather.low_temp, 65.0);
        assert_eq!(weather.high_temp, 75.0);
    }

    #[tokio::test]
    async fn non_ok_status_is_an_error() {
        for status in [201, 401, 404, 500] {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/weather"))
                .respond_with(ResponseTemplate::new(status).set_body_json(clear_sky_weather()))
                .mount(&server)
                .await;

            let provider = OpenWeatherProvider::new(Some("test-key".into()), server.uri());
            let err = provider
                .get_weather(&beverly_hills(), UnitSystem::Imperial)
                .await
                .unwrap_err();

            match err {
                ZipWeatherError::WeatherStatus { status: got, .. } => assert_eq!(got, status),
                other => panic!("unexpected error for {status}: {other}"),
            }
        }
    }

    #[tokio::test]
    async fn missing_key_never_hits_the_service() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(clear_sky_weather()))
            .expect(0)
            .mount(&server)
            .await;

        let provider = OpenWeatherProvider::new(None, server.uri());
        let err = provider
            .get_weather(&beverly_hills(), UnitSystem::Imperial)
            .await
            .unwrap_err();

        assert!(matches!(err, ZipWeatherError::MissingApiKey));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let provider = OpenWeatherProvider::new(Some("test-key".into()), server.uri());
        let err = provider
            .get_weather(&beverly_hills(), UnitSystem::Imperial)
            .await
            .unwrap_err();

        assert!(matches!(err, ZipWeatherError::WeatherDecode(_)));
    }
}

// =============================================================================
// End-to-end Scenarios
// =============================================================================

mod end_to_end_tests {
    use super::*;

    #[tokio::test]
    async fn unknown_zip_code_warns_and_prompts_again() {
        let geo = MockServer::start().await;
        let weather = MockServer::start().await;
        mount_geocode(&geo, "00000", ResponseTemplate::new(404).set_body_string("{}")).await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(clear_sky_weather()))
            .expect(0)
            .mount(&weather)
            .await;

        let outcome = run_flow("00000\n", &geo, &weather).await;

        assert_eq!(outcome.warnings, [INVALID_CODE_WARNING]);
        assert_eq!(outcome.prompts, "Zip Code> Zip Code> ");
        assert!(matches!(outcome.result, Err(ZipWeatherError::InputClosed)));
    }

    #[tokio::test]
    async fn valid_zip_code_prints_summary() {
        let geo = MockServer::start().await;
        let weather = MockServer::start().await;
        mount_geocode(
            &geo,
            "90210",
            ResponseTemplate::new(200).set_body_json(json!({
                "country abbreviation": "US",
                "places": [{"place name": "Beverly Hills", "state abbreviation": "CA"}]
            })),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("units", "imperial"))
            .and(query_param("q", "Beverly Hills,CA,US"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "weather": [{"description": "clear sky"}],
                "main": {"temp": 70, "temp_min": 65, "temp_max": 75}
            })))
            .expect(1)
            .mount(&weather)
            .await;

        let outcome = run_flow("\n00000\n90210\n", &geo, &weather).await;

        assert_eq!(
            outcome.result.unwrap(),
            "The weather in Beverly Hills is clear sky.  It's currently 70 with a low of 65 and high of 75."
        );
        assert_eq!(outcome.warnings, [EMPTY_INPUT_WARNING, INVALID_CODE_WARNING]);
    }

    #[tokio::test]
    async fn weather_failure_ends_without_summary() {
        let geo = MockServer::start().await;
        let weather = MockServer::start().await;
        mount_geocode(
            &geo,
            "90210",
            ResponseTemplate::new(200).set_body_json(beverly_hills_geocode()),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
            .expect(1)
            .mount(&weather)
            .await;

        let outcome = run_flow("90210\n90210\n", &geo, &weather).await;

        let err = outcome.result.unwrap_err();
        assert!(matches!(err, ZipWeatherError::WeatherStatus { status: 500, .. }));
        assert_eq!(err.warning(), "Error fetching weather!");
        assert!(outcome.warnings.is_empty());
        assert_eq!(outcome.prompts, "Zip Code> ");
    }

    #[tokio::test]
    async fn geocode_reply_without_places_is_fatal() {
        let geo = MockServer::start().await;
        let weather = MockServer::start().await;
        mount_geocode(
            &geo,
            "12345",
            ResponseTemplate::new(200).set_body_json(json!({
                "country abbreviation": "US",
                "places": []
            })),
        )
        .await;

        let outcome = run_flow(" 12345 \n", &geo, &weather).await;

        match outcome.result {
            Err(ZipWeatherError::NoPlaces { postal_code }) => assert_eq!(postal_code, "12345"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
