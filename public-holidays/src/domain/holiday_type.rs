//! Holiday type tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when text does not name a holiday type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid holiday type: {tag}")]
pub struct InvalidHolidayType {
    tag: String,
}

impl InvalidHolidayType {
    /// The text that was rejected.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// How a holiday is observed.
///
/// The set of tags is closed: the Nager.Date service only ever reports these
/// six, and text is converted to a `HolidayType` at the boundary so the rest
/// of the crate never handles free-form tags.
///
/// # Examples
///
/// ```
/// use public_holidays::domain::HolidayType;
///
/// let bank = HolidayType::parse("Bank").unwrap();
/// assert_eq!(bank, HolidayType::Bank);
/// assert_eq!(bank.as_str(), "Bank");
///
/// // Matching is case-sensitive
/// assert!(HolidayType::parse("bank").is_err());
/// assert!(HolidayType::parse("Festival").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HolidayType {
    /// Public holiday
    Public,
    /// Bank holiday, banks and offices are closed
    Bank,
    /// School holiday, schools are closed
    School,
    /// Authorities are closed
    Authorities,
    /// Majority of people take a day off
    Optional,
    /// Optional festivity, no paid day off
    Observance,
}

impl HolidayType {
    /// Every holiday type, in canonical order.
    pub const ALL: [HolidayType; 6] = [
        HolidayType::Public,
        HolidayType::Bank,
        HolidayType::School,
        HolidayType::Authorities,
        HolidayType::Optional,
        HolidayType::Observance,
    ];

    /// Parse a holiday type from its canonical name.
    pub fn parse(s: &str) -> Result<Self, InvalidHolidayType> {
        match s {
            "Public" => Ok(HolidayType::Public),
            "Bank" => Ok(HolidayType::Bank),
            "School" => Ok(HolidayType::School),
            "Authorities" => Ok(HolidayType::Authorities),
            "Optional" => Ok(HolidayType::Optional),
            "Observance" => Ok(HolidayType::Observance),
            _ => Err(InvalidHolidayType { tag: s.to_string() }),
        }
    }

    /// Returns the canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            HolidayType::Public => "Public",
            HolidayType::Bank => "Bank",
            HolidayType::School => "School",
            HolidayType::Authorities => "Authorities",
            HolidayType::Optional => "Optional",
            HolidayType::Observance => "Observance",
        }
    }
}

impl FromStr for HolidayType {
    type Err = InvalidHolidayType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HolidayType::parse(s)
    }
}

impl fmt::Display for HolidayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check that `tag` names one of the six holiday types.
pub fn validate_type(tag: &str) -> Result<(), InvalidHolidayType> {
    HolidayType::parse(tag).map(|_| ())
}
