//! Nager.Date HTTP client.
//!
//! Fetches the public holidays of one country for one year. Each call is a
//! single GET with no retry and no caching.

use reqwest::Url;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use tracing::{debug, warn};

use crate::domain::Holidays;

use super::convert::convert_holidays;
use super::error::HolidayError;
use super::types::PublicHolidayDto;

/// Default base URL for the Nager.Date API.
const DEFAULT_BASE_URL: &str = "https://date.nager.at";

/// How much of an undecodable body to keep in the error.
const BODY_SNIPPET_CHARS: usize = 500;

/// Configuration for the holiday client.
#[derive(Debug, Clone)]
pub struct HolidayClientConfig {
    /// Base URL for the API (defaults to production Nager.Date)
    pub base_url: String,
    /// Value of the User-Agent header
    pub user_agent: String,
}

impl HolidayClientConfig {
    /// Create a config pointing at the production service.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
                .to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for HolidayClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Nager.Date API client.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct HolidayClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HolidayClient {
    /// Create a new client with the given configuration.
    pub fn new(config: HolidayClientConfig) -> Result<Self, HolidayError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            HolidayError::Config(format!("invalid base URL {:?}: {e}", config.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(HolidayError::Config(format!(
                "base URL {:?} cannot have a path",
                config.base_url
            )));
        }

        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| HolidayError::Config("invalid User-Agent header".to_string()))?;
        headers.insert(USER_AGENT, user_agent);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self { http, base_url })
    }

    /// The request URL for a year and country.
    ///
    /// The country code becomes a single percent-encoded path segment; the
    /// service decides whether it is known. `.` and `..` are rejected: path
    /// normalization drops them, even percent-encoded.
    pub fn holidays_url(&self, year: i32, country_code: &str) -> Result<Url, HolidayError> {
        if country_code == "." || country_code == ".." {
            return Err(HolidayError::InvalidCountryCode(country_code.to_string()));
        }

        let mut url = self.base_url.clone();
        let year = year.to_string();
        // new() rejects cannot-be-a-base URLs, so this always succeeds
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([
                "api",
                "v3",
                "PublicHolidays",
                year.as_str(),
                country_code,
            ]);
        }
        Ok(url)
    }

    /// Get the public holidays of `country_code` in `year`.
    ///
    /// Fails with `HolidayError::InvalidCountryCode` before sending anything
    /// if the code can't be a path segment, with `HolidayError::Http` if no
    /// response arrived, with
    /// `HolidayError::Api` for any status other than 200 (the body is not
    /// decoded), and with `HolidayError::Json` if the body isn't a valid
    /// list of holidays.
    pub async fn get_holidays(
        &self,
        year: i32,
        country_code: &str,
    ) -> Result<Holidays, HolidayError> {
        let url = self.holidays_url(year, country_code)?;
        debug!(year, country = country_code, %url, "Fetching public holidays");

        let response = self.http.get(url).send().await?;

        let status = response.status();

        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!(
                year,
                country = country_code,
                status = status.as_u16(),
                "Holiday service rejected request"
            );
            return Err(HolidayError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let dtos: Vec<PublicHolidayDto> = serde_json::from_str(&body).map_err(|e| {
            warn!(year, country = country_code, error = %e, "Failed to decode holidays");
            HolidayError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(BODY_SNIPPET_CHARS).collect()),
            }
        })?;

        let holidays = convert_holidays(dtos).map_err(|e| {
            warn!(year, country = country_code, error = %e, "Invalid holiday record");
            HolidayError::Json {
                message: e.to_string(),
                body: None,
            }
        })?;

        debug!(
            year,
            country = country_code,
            count = holidays.len(),
            "Fetched public holidays"
        );

        Ok(holidays)
    }
}
