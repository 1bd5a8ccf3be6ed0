//! Ordered holiday collections and type filtering.

use std::ops::Deref;

use super::holiday::Holiday;
use super::holiday_type::{HolidayType, InvalidHolidayType};

/// An ordered collection of holidays, as returned for one country and year.
///
/// Filtering always yields a new collection; the source is never modified.
/// An empty result is an empty `Holidays`, whether nothing was requested or
/// nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Holidays(Vec<Holiday>);

impl Holidays {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Holidays carrying at least one of `requested`, in their original order.
    ///
    /// Requesting no types yields an empty collection.
    pub fn filter_by_type(&self, requested: &[HolidayType]) -> Holidays {
        self.0
            .iter()
            .filter(|h| h.has_any_type(requested))
            .cloned()
            .collect()
    }

    /// Like [`filter_by_type`](Self::filter_by_type), for type names given as text.
    ///
    /// Every name is validated before any filtering happens. The first
    /// unknown name aborts the call and is reported in the error.
    pub fn filter_by_type_names<S: AsRef<str>>(
        &self,
        requested: &[S],
    ) -> Result<Holidays, InvalidHolidayType> {
        let requested = requested
            .iter()
            .map(|name| HolidayType::parse(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.filter_by_type(&requested))
    }

    pub fn into_vec(self) -> Vec<Holiday> {
        self.0
    }
}

impl Deref for Holidays {
    type Target = [Holiday];

    fn deref(&self) -> &[Holiday] {
        &self.0
    }
}

impl From<Vec<Holiday>> for Holidays {
    fn from(holidays: Vec<Holiday>) -> Self {
        Self(holidays)
    }
}

impl FromIterator<Holiday> for Holidays {
    fn from_iter<I: IntoIterator<Item = Holiday>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Holidays {
    type Item = Holiday;
    type IntoIter = std::vec::IntoIter<Holiday>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Holidays {
    type Item = &'a Holiday;
    type IntoIter = std::slice::Iter<'a, Holiday>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;

    use super::*;

    /// A holiday on day `day` of 2024 with the given types.
    pub fn holiday(day: u32, types: &[HolidayType]) -> Holiday {
        let date = NaiveDate::from_yo_opt(2024, day).unwrap();
        Holiday::new(
            date,
            format!("h{day}"),
            format!("Holiday {day}"),
            "AT",
            types.to_vec(),
        )
        .unwrap()
    }

    /// [{Public}, {School, Bank}, {Observance}]
    pub fn sample() -> Holidays {
        Holidays::from(vec![
            holiday(1, &[HolidayType::Public]),
            holiday(2, &[HolidayType::School, HolidayType::Bank]),
            holiday(3, &[HolidayType::Observance]),
        ])
    }
}
