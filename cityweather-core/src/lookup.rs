use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::{
    credentials::{self, API_KEY_ENV, CredentialPrompt, KeyFile},
    error::LookupError,
    model::{LookupRequest, WeatherReport},
};

/// Production endpoint of the weather service.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

const WEATHER_PATH: &str = "/data/2.5/weather";

/// Bound on a single request, connection setup included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const SUCCESS_CODE: i64 = 200;

/// One-shot weather lookup against the OpenWeatherMap current-weather API.
///
/// Each [`lookup`](WeatherLookup::lookup) call is a single attempt: the
/// credential is re-resolved, one request is issued, and any failure is
/// returned to the caller as a classified [`LookupError`]. No retries.
#[derive(Debug, Clone)]
pub struct WeatherLookup {
    http: Client,
    base_url: String,
    key_file: KeyFile,
}

impl WeatherLookup {
    /// Lookup against the production endpoint with the default timeout.
    pub fn new(key_file: KeyFile) -> Result<Self, LookupError> {
        Self::with_endpoint(DEFAULT_BASE_URL, REQUEST_TIMEOUT, key_file)
    }

    /// Lookup against an explicit endpoint, for alternate deployments and
    /// tests against a local server.
    pub fn with_endpoint(
        base_url: impl Into<String>,
        timeout: Duration,
        key_file: KeyFile,
    ) -> Result<Self, LookupError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self { http, base_url: base_url.into(), key_file })
    }

    /// Look up current conditions for `city`.
    ///
    /// Validates the input, resolves an API key (environment variable, key
    /// file, then `prompt`), and issues one metric-units request. All
    /// failure modes come back as [`LookupError`] values for the caller to
    /// display; invoking again is the only retry mechanism.
    pub async fn lookup(
        &self,
        city: &str,
        prompt: &dyn CredentialPrompt,
    ) -> Result<WeatherReport, LookupError> {
        let request = LookupRequest::new(city)?;

        let env_key = std::env::var(API_KEY_ENV).ok();
        let api_key = credentials::resolve(env_key, &self.key_file, prompt).await?;

        self.fetch_current(&request, &api_key).await
    }

    async fn fetch_current(
        &self,
        request: &LookupRequest,
        api_key: &str,
    ) -> Result<WeatherReport, LookupError> {
        let url = format!("{}{}", self.base_url, WEATHER_PATH);

        tracing::debug!(city = request.city(), "requesting current weather");

        let response = self
            .http
            .get(&url)
            .query(&[("q", request.city()), ("appid", api_key), ("units", "metric")])
            .send()
            .await?;

        let transport_status = response.status();
        let body = response.text().await?;

        let envelope: ApiEnvelope =
            serde_json::from_str(&body).map_err(|_| LookupError::InvalidResponseBody)?;

        let code = normalized_status(envelope.cod.as_ref(), transport_status);
        if code != SUCCESS_CODE {
            let detail =
                envelope.message.unwrap_or_else(|| "Unexpected API error.".to_string());

            return Err(match code {
                401 => LookupError::AuthenticationFailed { detail },
                404 => LookupError::CityNotFound { detail },
                _ => LookupError::ApiError { code, detail },
            });
        }

        let Some(main) = envelope.main else {
            return Err(LookupError::IncompleteResponse);
        };
        let Some(condition) = envelope.weather.as_deref().and_then(|list| list.first()) else {
            return Err(LookupError::IncompleteResponse);
        };

        Ok(WeatherReport {
            temperature_c: main.temp,
            humidity_pct: main.humidity,
            condition: capitalize(&condition.description),
        })
    }
}

/// Response envelope for the current-weather endpoint.
///
/// Error bodies carry only `cod`/`message`, so everything is optional and
/// completeness is checked after the status is normalized.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    cod: Option<Value>,
    message: Option<String>,
    main: Option<ApiMain>,
    weather: Option<Vec<ApiCondition>>,
}

#[derive(Debug, Deserialize)]
struct ApiMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    #[serde(default)]
    description: String,
}

/// Application-level status from the body's `cod` field.
///
/// `cod` may be a JSON number or a string holding an integer; anything
/// absent or non-numeric falls back to the transport HTTP status. The
/// fallback can misclassify when the two signals disagree, but some API
/// variants rely on it.
fn normalized_status(cod: Option<&Value>, transport: StatusCode) -> i64 {
    let fallback = i64::from(transport.as_u16());

    match cod {
        Some(Value::Number(n)) => {
            n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)).unwrap_or(fallback)
        }
        Some(Value::String(s)) => s.trim().parse::<i64>().unwrap_or(fallback),
        _ => fallback,
    }
}

/// Uppercase the first letter and lowercase the rest, for display.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();

    match chars.next() {
        Some(first) => {
            first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect()
        }
        None => String::new(),
    }
}
