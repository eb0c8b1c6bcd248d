//! OpenWeatherMap current-weather client

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::icons::Icon;
use crate::state::{Unit, WeatherReport};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Weather client errors
#[derive(Debug, Error)]
pub enum FetchError {
    /// Non-2xx status; `message` comes from the response body
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Transport failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Malformed or unexpected response body
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Reduced failure form carried by actions; the full error is logged
/// at the fetch site
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchFailure {
    /// Server-provided message to surface to the user
    Api { message: String },
    /// Transport or parse failure - the display clears with no message
    Silent,
}

impl From<&FetchError> for FetchFailure {
    fn from(err: &FetchError) -> Self {
        match err {
            FetchError::Api { message, .. } => FetchFailure::Api {
                message: message.clone(),
            },
            FetchError::Request(_) | FetchError::Parse(_) => FetchFailure::Silent,
        }
    }
}

/// Client configuration; `base_url` is swappable for tests
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// OpenWeatherMap HTTP client
#[derive(Debug, Clone)]
pub struct WeatherApi {
    http: Client,
    config: ApiConfig,
}

impl WeatherApi {
    pub fn new(config: ApiConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    /// One GET against the current-weather endpoint
    pub async fn current_weather(&self, city: &str, unit: Unit) -> Result<WeatherReport, FetchError> {
        let url = format!("{}/weather", self.config.base_url);
        debug!(city, unit = unit.query_value(), "fetching current weather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("units", unit.query_value()),
                ("appid", self.config.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            let message =
                error_message(&body).unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            return Err(FetchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;
        Ok(report_from_response(parsed))
    }
}

/// Pull the `message` field out of an OpenWeatherMap error body
fn error_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct OwErrorBody {
        message: String,
    }
    serde_json::from_str::<OwErrorBody>(body)
        .ok()
        .map(|b| b.message)
}

fn report_from_response(res: OwCurrentResponse) -> WeatherReport {
    let icon = res
        .weather
        .first()
        .map(|w| Icon::from_code(&w.icon))
        .unwrap_or(Icon::Clear);

    WeatherReport {
        temperature: res.main.temp.floor() as i32,
        humidity: res.main.humidity,
        wind_speed: res.wind.speed,
        location: res.name,
        icon,
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(temp: f64, icon: &str) -> OwCurrentResponse {
        OwCurrentResponse {
            name: "Paris".to_string(),
            main: OwMain {
                temp,
                humidity: 50,
            },
            weather: vec![OwWeather {
                icon: icon.to_string(),
            }],
            wind: OwWind { speed: 5.0 },
        }
    }

    #[test]
    fn test_report_floors_temperature() {
        let report = report_from_response(response(72.8, "01d"));
        assert_eq!(report.temperature, 72);
        assert_eq!(report.humidity, 50);
        assert!((report.wind_speed - 5.0).abs() < f64::EPSILON);
        assert_eq!(report.location, "Paris");
        assert_eq!(report.icon, Icon::Clear);
    }

    #[test]
    fn test_report_floors_toward_negative_infinity() {
        assert_eq!(report_from_response(response(-3.2, "13d")).temperature, -4);
        assert_eq!(report_from_response(response(0.9, "01n")).temperature, 0);
    }

    #[test]
    fn test_report_icon_falls_back_when_weather_array_empty() {
        let mut res = response(10.0, "10d");
        res.weather.clear();
        assert_eq!(report_from_response(res).icon, Icon::Clear);
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"cod":"404","message":"city not found"}"#),
            Some("city not found".to_string())
        );
        assert_eq!(error_message("not json"), None);
        assert_eq!(error_message(r#"{"cod":"500"}"#), None);
    }

    #[test]
    fn test_failure_from_error_keeps_api_message() {
        let err = FetchError::Api {
            status: 404,
            message: "city not found".to_string(),
        };
        assert_eq!(
            FetchFailure::from(&err),
            FetchFailure::Api {
                message: "city not found".to_string()
            }
        );

        let err = FetchError::Parse(serde_json::from_str::<OwCurrentResponse>("{}").unwrap_err());
        assert_eq!(FetchFailure::from(&err), FetchFailure::Silent);
    }

    #[test]
    fn test_config_defaults() {
        let config = ApiConfig::new("KEY");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_key, "KEY");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
