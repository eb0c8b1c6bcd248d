//! Wire-level client tests against a mock HTTP server

use skywatch::api::{ApiConfig, FetchError, WeatherApi};
use skywatch::icons::Icon;
use skywatch::state::Unit;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Sample OpenWeatherMap current-weather response
fn sample_weather_response() -> serde_json::Value {
    serde_json::json!({
        "coord": {"lon": 2.35, "lat": 48.86},
        "weather": [
            {"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}
        ],
        "main": {
            "temp": 72.8,
            "feels_like": 71.2,
            "temp_min": 70.1,
            "temp_max": 75.3,
            "pressure": 1012,
            "humidity": 50
        },
        "wind": {"speed": 5, "deg": 200},
        "name": "Paris",
        "cod": 200
    })
}

/// Create a test client pointed at the mock server
fn test_client(server: &MockServer) -> WeatherApi {
    let config = ApiConfig {
        base_url: server.uri(),
        api_key: "test-key".to_string(),
        timeout_secs: 5,
    };
    WeatherApi::new(config).expect("client")
}

#[tokio::test]
async fn test_success_maps_to_report() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Paris"))
        .and(query_param("units", "imperial"))
        .and(query_param("appid", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_response()))
        .mount(&server)
        .await;

    let report = test_client(&server)
        .current_weather("Paris", Unit::Imperial)
        .await
        .expect("report");

    assert_eq!(report.temperature, 72);
    assert_eq!(report.humidity, 50);
    assert!((report.wind_speed - 5.0).abs() < f64::EPSILON);
    assert_eq!(report.location, "Paris");
    assert_eq!(report.icon, Icon::Clear);
}

#[tokio::test]
async fn test_metric_unit_is_sent_as_query_param() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Tokyo"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_weather_response()))
        .expect(1)
        .mount(&server)
        .await;

    test_client(&server)
        .current_weather("Tokyo", Unit::Metric)
        .await
        .expect("report");
}

#[tokio::test]
async fn test_unrecognized_icon_code_falls_back_to_clear() {
    let mut body = sample_weather_response();
    body["weather"][0]["icon"] = serde_json::json!("50d");

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let report = test_client(&server)
        .current_weather("Foggy Town", Unit::Imperial)
        .await
        .expect("report");
    assert_eq!(report.icon, Icon::Clear);
}

#[tokio::test]
async fn test_not_found_surfaces_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .current_weather("Nowhere", Unit::Imperial)
        .await
        .expect_err("should fail");

    match err {
        FetchError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "city not found");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_error_without_message_falls_back_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .current_weather("Paris", Unit::Imperial)
        .await
        .expect_err("should fail");

    match err {
        FetchError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "HTTP 500");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .current_weather("Paris", Unit::Imperial)
        .await
        .expect_err("should fail");
    assert!(matches!(err, FetchError::Parse(_)));
}

#[tokio::test]
async fn test_missing_fields_are_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "Paris"
        })))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .current_weather("Paris", Unit::Imperial)
        .await
        .expect_err("should fail");
    assert!(matches!(err, FetchError::Parse(_)));
}
