//! Nager.Date public holiday API client.
//!
//! This module provides an HTTP client for `https://date.nager.at`, which
//! publishes the public holidays of about a hundred countries.
//!
//! Key characteristics of the API:
//! - `GET /api/v3/PublicHolidays/{year}/{countryCode}` returns a JSON array
//! - Unknown country codes are answered with 404, not an empty array
//! - Regional holidays list ISO 3166-2 subdivisions in `counties`

mod client;
mod convert;
mod error;
mod types;

pub use client::{HolidayClient, HolidayClientConfig};
pub use error::HolidayError;
