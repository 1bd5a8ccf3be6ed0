//! Nager.Date API response DTOs.
//!
//! These types map directly to the `PublicHolidays` JSON response. Tags
//! and dates stay as strings here; they are validated during conversion.

use serde::Deserialize;

/// One entry of the `GET /api/v3/PublicHolidays/{year}/{countryCode}` array.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicHolidayDto {
    /// ISO 8601 date, e.g. "2024-12-25".
    pub date: String,

    /// Name in the local language.
    pub local_name: String,

    /// Name in English.
    pub name: String,

    /// ISO 3166-1 alpha-2 country code.
    pub country_code: String,

    /// Whether the holiday falls on the same date every year.
    #[serde(default)]
    pub fixed: bool,

    /// Whether the holiday applies to the whole country.
    pub global: bool,

    /// ISO 3166-2 subdivision codes; null for global holidays.
    pub counties: Option<Vec<String>>,

    /// First year the holiday was observed, if known.
    pub launch_year: Option<i32>,

    /// Holiday type tags, e.g. ["Public", "Bank"].
    pub types: Vec<String>,
}
