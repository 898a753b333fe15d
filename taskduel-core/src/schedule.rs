/// Working-day date arithmetic for deferral ("snooze") scheduling.
use chrono::{DateTime, Datelike, Duration, Utc, Weekday};

/// Advance `from` by `days` working days, skipping Saturdays and Sundays.
///
/// Walks forward one calendar day at a time and counts only weekdays, so for
/// `days >= 1` the result always lands on a weekday: snoozing Friday by one
/// day lands on Monday. `days = 0` returns `from` unchanged. The time-of-day
/// component carries over from `from`; callers should rely only on the date.
pub fn add_working_days(from: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    let mut current = from;
    let mut counted = 0;
    while counted < days {
        current += Duration::days(1);
        if !matches!(current.weekday(), Weekday::Sat | Weekday::Sun) {
            counted += 1;
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_friday_plus_one_is_monday() {
        // 2026-08-21 is a Friday.
        let result = add_working_days(date(2026, 8, 21), 1);
        assert_eq!(result.date_naive(), date(2026, 8, 24).date_naive());
        assert_eq!(result.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_monday_plus_five_skips_the_weekend() {
        // 2026-08-24 is a Monday; five business days later is the next Monday.
        let result = add_working_days(date(2026, 8, 24), 5);
        assert_eq!(result.date_naive(), date(2026, 8, 31).date_naive());
        assert_eq!(result.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_midweek_stays_midweek() {
        // Tuesday + 2 = Thursday, no weekend crossed.
        let result = add_working_days(date(2026, 8, 25), 2);
        assert_eq!(result.date_naive(), date(2026, 8, 27).date_naive());
    }

    #[test]
    fn test_saturday_start_counts_from_monday() {
        // Starting on a weekend: the first counted day is Monday.
        let result = add_working_days(date(2026, 8, 22), 1);
        assert_eq!(result.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_zero_days_is_identity() {
        let from = date(2026, 8, 22);
        assert_eq!(add_working_days(from, 0), from);
    }

    #[test]
    fn test_time_of_day_carries_over() {
        let result = add_working_days(date(2026, 8, 21), 3);
        assert_eq!(result.time(), date(2026, 8, 21).time());
    }
}
