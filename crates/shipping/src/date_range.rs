use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ratecard_core::{DomainError, DomainResult, ValueObject};

/// A validity window. `is_active` is an inclusive containment test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> DomainResult<Self> {
        if end < start {
            return Err(DomainError::validation(
                "end date must not be before start date",
            ));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn is_active(&self, date: DateTime<Utc>) -> bool {
        date >= self.start && date <= self.end
    }
}

impl ValueObject for DateRange {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn containment_is_inclusive() {
        let window = DateRange::new(day(1), day(30)).unwrap();
        assert!(window.is_active(day(1)));
        assert!(window.is_active(day(30)));
        assert!(window.is_active(day(15)));
        assert!(!window.is_active(day(31)));
    }

    #[test]
    fn single_day_window_is_valid() {
        let window = DateRange::new(day(5), day(5)).unwrap();
        assert!(window.is_active(day(5)));
        assert!(!window.is_active(day(6)));
    }

    #[test]
    fn rejects_inverted_window() {
        assert!(matches!(
            DateRange::new(day(10), day(9)).unwrap_err(),
            DomainError::Validation(_)
        ));
    }
}
