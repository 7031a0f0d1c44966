use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

/// Converts a UTC instant to the calendar day it falls on in the given timezone.
///
/// This is the single place where milestone timestamps are truncated to days.
pub fn calendar_date_in_tz(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Returns the UTC instant at which `date` starts in `tz`.
///
/// When local midnight is skipped by a DST transition, the day starts at the
/// first local hour that exists.
pub fn start_of_day_in_tz(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    let midnight = date.and_hms_opt(0, 0, 0).unwrap_or_default();
    (0..=2)
        .map(|hour| midnight + Duration::hours(hour))
        .find_map(|local| tz.from_local_datetime(&local).earliest())
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or_else(|| midnight.and_utc())
}

/// Start of January 1st and start of December 31st of the year `now` falls in.
pub fn year_bounds(now: DateTime<Utc>, tz: Tz) -> (DateTime<Utc>, DateTime<Utc>) {
    let year = now.with_timezone(&tz).year();
    let first = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or_default();
    let last = NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or_default();
    (start_of_day_in_tz(first, tz), start_of_day_in_tz(last, tz))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_date_respects_timezone() {
        let instant = Utc.with_ymd_and_hms(2025, 3, 10, 2, 30, 0).unwrap();
        assert_eq!(
            calendar_date_in_tz(instant, chrono_tz::UTC),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
        );
        assert_eq!(
            calendar_date_in_tz(instant, chrono_tz::America::New_York),
            NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
        );
    }

    #[test]
    fn test_year_bounds() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let (start, end) = year_bounds(now, chrono_tz::UTC);
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_start_of_day_in_offset_zone() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let start = start_of_day_in_tz(date, chrono_tz::Asia::Tokyo);
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 12, 31, 15, 0, 0).unwrap());
    }

    #[test]
    fn test_start_of_day_skipped_midnight() {
        // Chile moved clocks from 00:00 to 01:00 on 2024-09-08
        let date = NaiveDate::from_ymd_opt(2024, 9, 8).unwrap();
        let start = start_of_day_in_tz(date, chrono_tz::America::Santiago);
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 9, 8, 4, 0, 0).unwrap());
        assert_eq!(
            calendar_date_in_tz(start, chrono_tz::America::Santiago),
            date
        );
    }
}
