//! Holiday record type.

use chrono::NaiveDate;

use super::error::DomainError;
use super::holiday_type::HolidayType;

/// One public holiday occurrence for a country.
///
/// A `Holiday` always has at least one type, and its county list is only
/// populated for regional holidays. Fields are read through accessors so a
/// record cannot change once it has been built.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use public_holidays::domain::{Holiday, HolidayType};
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 19).unwrap();
/// let holiday = Holiday::new(date, "Josef", "Saint Joseph's Day", "AT", vec![HolidayType::Public])
///     .unwrap()
///     .fixed()
///     .regional(vec!["AT-2".to_string(), "AT-6".to_string()]);
///
/// assert!(!holiday.is_global());
/// assert_eq!(holiday.counties().len(), 2);
/// assert!(holiday.has_type(HolidayType::Public));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    date: NaiveDate,
    local_name: String,
    name: String,
    country_code: String,
    fixed: bool,
    global: bool,
    counties: Vec<String>,
    launch_year: Option<i32>,
    types: Vec<HolidayType>,
}

impl Holiday {
    /// Create a nationwide, non-fixed holiday with no known launch year.
    ///
    /// Duplicate types are dropped, keeping the first occurrence.
    pub fn new(
        date: NaiveDate,
        local_name: impl Into<String>,
        name: impl Into<String>,
        country_code: impl Into<String>,
        types: Vec<HolidayType>,
    ) -> Result<Self, DomainError> {
        if types.is_empty() {
            return Err(DomainError::NoTypes);
        }

        let mut unique = Vec::with_capacity(types.len());
        for t in types {
            if !unique.contains(&t) {
                unique.push(t);
            }
        }

        Ok(Self {
            date,
            local_name: local_name.into(),
            name: name.into(),
            country_code: country_code.into(),
            fixed: false,
            global: true,
            counties: Vec::new(),
            launch_year: None,
            types: unique,
        })
    }

    /// Mark the holiday as falling on the same date every year.
    pub fn fixed(mut self) -> Self {
        self.fixed = true;
        self
    }

    /// Restrict the holiday to the given subdivisions.
    pub fn regional(mut self, counties: Vec<String>) -> Self {
        self.global = false;
        self.counties = counties;
        self
    }

    /// Set the first year the holiday was observed.
    pub fn with_launch_year(mut self, year: i32) -> Self {
        self.launch_year = Some(year);
        self
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Name in the local language.
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Name in English.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// ISO 3166-1 alpha-2 country code, as reported by the service.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    pub fn is_global(&self) -> bool {
        self.global
    }

    /// Subdivision codes the holiday applies to. Empty for global holidays.
    pub fn counties(&self) -> &[String] {
        &self.counties
    }

    pub fn launch_year(&self) -> Option<i32> {
        self.launch_year
    }

    /// Type tags, never empty.
    pub fn types(&self) -> &[HolidayType] {
        &self.types
    }

    pub fn has_type(&self, t: HolidayType) -> bool {
        self.types.contains(&t)
    }

    /// True if the holiday carries at least one of `types`.
    pub fn has_any_type(&self, types: &[HolidayType]) -> bool {
        self.types.iter().any(|t| types.contains(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_year() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn new_defaults() {
        let h = Holiday::new(
            new_year(),
            "Neujahr",
            "New Year's Day",
            "AT",
            vec![HolidayType::Public],
        )
        .unwrap();

        assert_eq!(h.date(), new_year());
        assert_eq!(h.local_name(), "Neujahr");
        assert_eq!(h.name(), "New Year's Day");
        assert_eq!(h.country_code(), "AT");
        assert!(!h.is_fixed());
        assert!(h.is_global());
        assert!(h.counties().is_empty());
        assert_eq!(h.launch_year(), None);
        assert_eq!(h.types(), &[HolidayType::Public]);
    }

    #[test]
    fn reject_empty_types() {
        let result = Holiday::new(new_year(), "Neujahr", "New Year's Day", "AT", vec![]);
        assert_eq!(result, Err(DomainError::NoTypes));
    }

    #[test]
    fn duplicate_types_collapsed() {
        let h = Holiday::new(
            new_year(),
            "x",
            "x",
            "AT",
            vec![HolidayType::Bank, HolidayType::School, HolidayType::Bank],
        )
        .unwrap();

        assert_eq!(h.types(), &[HolidayType::Bank, HolidayType::School]);
    }

    #[test]
    fn builder_methods() {
        let h = Holiday::new(new_year(), "x", "x", "DE", vec![HolidayType::Public])
            .unwrap()
            .fixed()
            .regional(vec!["DE-BY".to_string()])
            .with_launch_year(1967);

        assert!(h.is_fixed());
        assert!(!h.is_global());
        assert_eq!(h.counties(), &["DE-BY".to_string()]);
        assert_eq!(h.launch_year(), Some(1967));
    }

    #[test]
    fn type_queries() {
        let h = Holiday::new(
            new_year(),
            "x",
            "x",
            "GB",
            vec![HolidayType::School, HolidayType::Bank],
        )
        .unwrap();

        assert!(h.has_type(HolidayType::Bank));
        assert!(!h.has_type(HolidayType::Public));
        assert!(h.has_any_type(&[HolidayType::Public, HolidayType::School]));
        assert!(!h.has_any_type(&[HolidayType::Observance]));
        assert!(!h.has_any_type(&[]));
    }
}
