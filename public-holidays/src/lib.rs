//! Public holiday client.
//!
//! Fetches the public holidays of a country for a year from the Nager.Date
//! API, and filters them by how they are observed (public, bank, school
//! and so on).
//!
//! ```no_run
//! use public_holidays::domain::{HolidayType, current_year};
//!
//! let holidays = public_holidays::blocking::get_holidays(current_year(), "AT")?;
//! let bank_holidays = holidays.filter_by_type(&[HolidayType::Bank]);
//! for holiday in &bank_holidays {
//!     println!("{} {}", holiday.date(), holiday.name());
//! }
//! # Ok::<(), public_holidays::nager::HolidayError>(())
//! ```

pub mod blocking;
pub mod domain;
pub mod nager;
