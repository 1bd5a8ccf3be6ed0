//! Calendar helpers backed by the system clock.

use chrono::{Datelike, Local};

/// The current calendar year in the local time zone.
pub fn current_year() -> i32 {
    Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_year_is_plausible() {
        let year = current_year();
        assert!(year >= 2024, "clock reports {year}");
        assert!(year < 3000, "clock reports {year}");
    }
}
