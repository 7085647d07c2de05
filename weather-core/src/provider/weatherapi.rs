use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{error::FetchError, model::WeatherSnapshot};

use super::WeatherProvider;

const CURRENT_URL: &str = "http://api.weatherapi.com/v1/current.json";

#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self { api_key, http: Client::new() }
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn current(&self, query: &str) -> Result<WeatherSnapshot, FetchError> {
        if query.is_empty() {
            return Err(FetchError::EmptyQuery);
        }

        tracing::debug!(%query, "requesting current conditions");

        let res = self
            .http
            .get(CURRENT_URL)
            .query(&[("key", self.api_key.as_str()), ("q", query), ("alerts", "no")])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        decode_current(status, &body)
    }

    async fn icon(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let res = self.http.get(url).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Api(format!(
                "Icon fetch failed with status {status}"
            )));
        }

        Ok(res.bytes().await?.to_vec())
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    country: String,
    localtime: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    feelslike_c: f64,
    condition: WaCondition,
    humidity: f64,
    wind_kph: f64,
    uv: f64,
    pressure_mb: f64,
    is_day: u8,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

/// Error envelope the provider returns alongside non-200 statuses,
/// e.g. `{"error":{"code":1006,"message":"No matching location found."}}`.
#[derive(Debug, Deserialize)]
struct WaErrorBody {
    error: WaErrorDetail,
}

#[derive(Debug, Deserialize)]
struct WaErrorDetail {
    message: String,
}

fn decode_current(status: StatusCode, body: &str) -> Result<WeatherSnapshot, FetchError> {
    if !status.is_success() {
        let message = serde_json::from_str::<WaErrorBody>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| {
                format!(
                    "Weather lookup failed with status {status}: {}",
                    truncate_body(body)
                )
            });
        return Err(FetchError::Api(message));
    }

    let parsed: WaResponse = serde_json::from_str(body)
        .map_err(|err| FetchError::Api(format!("Could not read the weather payload: {err}")))?;

    Ok(snapshot_from(parsed))
}

fn snapshot_from(parsed: WaResponse) -> WeatherSnapshot {
    WeatherSnapshot {
        location_name: parsed.location.name,
        country: parsed.location.country,
        localtime: parsed.location.localtime,
        temp_c: parsed.current.temp_c,
        feelslike_c: parsed.current.feelslike_c,
        condition_text: parsed.current.condition.text,
        condition_icon: parsed.current.condition.icon,
        humidity: parsed.current.humidity,
        wind_kph: parsed.current.wind_kph,
        uv: parsed.current.uv,
        pressure_mb: parsed.current.pressure_mb,
        is_day: parsed.current.is_day,
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Clamp to a char boundary so multibyte bodies can't panic the error path.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_BODY: &str = r#"{
        "location": {
            "name": "Kyiv",
            "country": "Ukraine",
            "localtime": "2024-03-05 14:30"
        },
        "current": {
            "temp_c": 20.1,
            "feelslike_c": 18.4,
            "condition": {
                "text": "Partly cloudy",
                "icon": "//cdn.weatherapi.com/weather/64x64/day/116.png"
            },
            "humidity": 74,
            "wind_kph": 11.2,
            "uv": 4.0,
            "pressure_mb": 1013.0,
            "is_day": 1
        }
    }"#;

    #[test]
    fn decodes_current_conditions() {
        let snapshot = decode_current(StatusCode::OK, SAMPLE_BODY).expect("decode");

        assert_eq!(snapshot.location_name, "Kyiv");
        assert_eq!(snapshot.country, "Ukraine");
        assert_eq!(snapshot.localtime, "2024-03-05 14:30");
        assert_eq!(snapshot.temp_c, 20.1);
        assert_eq!(snapshot.feelslike_c, 18.4);
        assert_eq!(snapshot.condition_text, "Partly cloudy");
        assert_eq!(snapshot.humidity, 74.0);
        assert_eq!(snapshot.wind_kph, 11.2);
        assert_eq!(snapshot.uv, 4.0);
        assert_eq!(snapshot.pressure_mb, 1013.0);
        assert!(snapshot.is_daytime());
        assert_eq!(
            snapshot.icon_url(),
            "https://cdn.weatherapi.com/weather/128x128/day/116.png"
        );
    }

    #[test]
    fn surfaces_provider_error_message_on_non_200() {
        let body = r#"{"error":{"code":1006,"message":"No matching location found."}}"#;
        let err = decode_current(StatusCode::BAD_REQUEST, body).unwrap_err();

        assert_eq!(err.to_string(), "No matching location found.");
    }

    #[test]
    fn falls_back_to_status_and_body_for_unstructured_errors() {
        let err = decode_current(StatusCode::INTERNAL_SERVER_ERROR, "boom").unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("boom"));
    }

    #[test]
    fn malformed_success_body_is_an_api_error() {
        let err = decode_current(StatusCode::OK, "{not json").unwrap_err();

        assert!(matches!(err, FetchError::Api(_)));
        assert!(err.to_string().contains("Could not read the weather payload"));
    }

    #[test]
    fn long_error_bodies_are_truncated() {
        let body = "x".repeat(500);
        let err = decode_current(StatusCode::BAD_GATEWAY, &body).unwrap_err();

        assert!(err.to_string().contains("..."));
        assert!(err.to_string().len() < body.len());
    }

    #[test]
    fn multibyte_error_bodies_truncate_on_a_char_boundary() {
        // The 200th byte lands inside the two-byte `é`.
        let mut body = "x".repeat(199);
        body.push_str("ééé and plenty more after the cutoff");
        let err = decode_current(StatusCode::BAD_GATEWAY, &body).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("..."));
        assert!(msg.contains(&"x".repeat(199)));
    }

    #[tokio::test]
    async fn empty_query_never_reaches_the_network() {
        let provider = WeatherApiProvider::new("KEY".to_string());
        let err = provider.current("").await.unwrap_err();

        assert!(matches!(err, FetchError::EmptyQuery));
    }
}
