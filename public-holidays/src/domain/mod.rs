//! Domain types for public holidays.
//!
//! This module contains the validated holiday model and the type filter.
//! Types enforce their invariants at construction time, so code that
//! receives them can trust their validity. Nothing here performs I/O.

mod error;
mod holiday;
mod holiday_type;
mod holidays;
mod time;

pub use error::DomainError;
pub use holiday::Holiday;
pub use holiday_type::{HolidayType, InvalidHolidayType, validate_type};
pub use holidays::Holidays;
pub use time::current_year;
