//! Conversion from Nager.Date DTOs to domain types.

use chrono::NaiveDate;

use crate::domain::{DomainError, Holiday, HolidayType, Holidays, InvalidHolidayType};

use super::types::PublicHolidayDto;

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// Date was not in `YYYY-MM-DD` form
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Unknown holiday type tag
    #[error(transparent)]
    InvalidType(#[from] InvalidHolidayType),

    /// Record violates a domain invariant
    #[error("invalid holiday: {0}")]
    InvalidHoliday(#[from] DomainError),
}

/// Convert a full response. Any bad record fails the whole response.
pub fn convert_holidays(dtos: Vec<PublicHolidayDto>) -> Result<Holidays, ConversionError> {
    dtos.into_iter().map(convert_holiday).collect()
}

/// Convert a single holiday.
///
/// Counties are only kept for regional holidays.
pub fn convert_holiday(dto: PublicHolidayDto) -> Result<Holiday, ConversionError> {
    let date = NaiveDate::parse_from_str(&dto.date, "%Y-%m-%d")
        .map_err(|_| ConversionError::InvalidDate(dto.date.clone()))?;

    let types = dto
        .types
        .iter()
        .map(|t| HolidayType::parse(t))
        .collect::<Result<Vec<_>, _>>()?;

    let mut holiday = Holiday::new(date, dto.local_name, dto.name, dto.country_code, types)?;

    if dto.fixed {
        holiday = holiday.fixed();
    }
    if !dto.global {
        holiday = holiday.regional(dto.counties.unwrap_or_default());
    }
    if let Some(year) = dto.launch_year {
        holiday = holiday.with_launch_year(year);
    }

    Ok(holiday)
}
