use crate::shared::error::BookingError;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Long-form date-time used in the booking summary, e.g. "January 10, 2024, 10:00 AM"
const LONG_DATETIME_FORMAT: &str = "%B %-d, %Y, %I:%M %p";

/// Raw values of the search bar inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchInput {
    pub pickup_location: String,
    pub return_location: String,
    /// `datetime-local` value, e.g. "2024-01-10T10:00"
    pub start_date: String,
    pub end_date: String,
}

/// Validated search, derived from [`SearchInput`] each time it is needed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub pickup_location: String,
    pub return_location: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl SearchInput {
    pub fn has_dates(&self) -> bool {
        !self.start_date.trim().is_empty() && !self.end_date.trim().is_empty()
    }

    pub fn has_locations(&self) -> bool {
        !self.pickup_location.trim().is_empty() && !self.return_location.trim().is_empty()
    }

    /// Presence checks in the order the visitor is told about them
    pub fn check_required(&self) -> Result<(), BookingError> {
        if !self.has_dates() {
            return Err(BookingError::MissingDates);
        }
        if !self.has_locations() {
            return Err(BookingError::MissingLocations);
        }
        Ok(())
    }

    /// Full validation: required fields, parseable dates, positive day count
    pub fn criteria(&self) -> Result<SearchCriteria, BookingError> {
        self.check_required()?;
        let criteria = SearchCriteria {
            pickup_location: self.pickup_location.trim().to_string(),
            return_location: self.return_location.trim().to_string(),
            start: parse_input_datetime(&self.start_date)?,
            end: parse_input_datetime(&self.end_date)?,
        };
        if criteria.rental_days() <= 0 {
            return Err(BookingError::NonPositiveDuration);
        }
        Ok(criteria)
    }
}

impl SearchCriteria {
    pub fn rental_days(&self) -> i64 {
        rental_days(self.start, self.end)
    }

    pub fn pickup_summary(&self) -> String {
        format!("{} ({})", self.pickup_location, format_long_datetime(self.start))
    }

    pub fn return_summary(&self) -> String {
        format!("{} ({})", self.return_location, format_long_datetime(self.end))
    }
}

/// Ceiling of the span in whole days; zero or negative for a non-positive span
pub fn rental_days(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let ms = (end - start).num_milliseconds();
    let whole = ms.div_euclid(MS_PER_DAY);
    if ms.rem_euclid(MS_PER_DAY) > 0 {
        whole + 1
    } else {
        whole
    }
}

/// Accepts `datetime-local` values (with or without seconds) and bare dates
pub fn parse_input_datetime(value: &str) -> Result<NaiveDateTime, BookingError> {
    let value = value.trim();
    for fmt in ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| BookingError::InvalidDate(value.to_string()))
}

pub fn format_long_datetime(dt: NaiveDateTime) -> String {
    dt.format(LONG_DATETIME_FORMAT).to_string()
}

/// "1 day", "3 days"
pub fn format_day_count(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(start: &str, end: &str) -> SearchInput {
        SearchInput {
            pickup_location: "Miami Airport".into(),
            return_location: "Downtown".into(),
            start_date: start.into(),
            end_date: end.into(),
        }
    }

    #[test]
    fn test_rental_days_whole_days() {
        let c = input("2024-01-10", "2024-01-13").criteria().unwrap();
        assert_eq!(c.rental_days(), 3);
    }

    #[test]
    fn test_rental_days_rounds_up_partial_day() {
        let start = parse_input_datetime("2024-01-10T10:00").unwrap();
        let end = parse_input_datetime("2024-01-11T10:01").unwrap();
        assert_eq!(rental_days(start, end), 2);
    }

    #[test]
    fn test_equal_dates_rejected() {
        let start = parse_input_datetime("2024-01-10").unwrap();
        assert_eq!(rental_days(start, start), 0);
        assert_eq!(
            input("2024-01-10", "2024-01-10").criteria(),
            Err(BookingError::NonPositiveDuration)
        );
        assert_eq!(
            input("2024-01-13", "2024-01-10").criteria(),
            Err(BookingError::NonPositiveDuration)
        );
    }

    #[test]
    fn test_missing_fields_checked_dates_first() {
        let mut i = SearchInput::default();
        assert_eq!(i.check_required(), Err(BookingError::MissingDates));
        i.start_date = "2024-01-10".into();
        i.end_date = "2024-01-12".into();
        assert_eq!(i.check_required(), Err(BookingError::MissingLocations));
        i.pickup_location = "   ".into();
        i.return_location = "Airport".into();
        assert_eq!(i.check_required(), Err(BookingError::MissingLocations));
    }

    #[test]
    fn test_unparseable_date() {
        assert!(matches!(
            input("tomorrow", "2024-01-12").criteria(),
            Err(BookingError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_summary_formatting() {
        let c = input("2024-01-10T10:00", "2024-01-13T18:30").criteria().unwrap();
        assert_eq!(c.pickup_summary(), "Miami Airport (January 10, 2024, 10:00 AM)");
        assert_eq!(c.return_summary(), "Downtown (January 13, 2024, 06:30 PM)");
        assert_eq!(c.rental_days(), 4);
    }

    #[test]
    fn test_day_count_pluralization() {
        assert_eq!(format_day_count(1), "1 day");
        assert_eq!(format_day_count(3), "3 days");
    }
}
