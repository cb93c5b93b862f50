//! Upcoming birthday computation.
//!
//! A birthday is projected onto the current year, or onto the next year if it
//! has already passed. It is upcoming when the projected date lies within
//! `window_days` of today. Congratulations that would fall on a weekend move
//! to the following Monday; the window test always uses the projected date.

use crate::domain::BirthdayDate;
use crate::models::ContactRecord;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::fmt;

/// Default number of days ahead that count as "upcoming".
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Display format for congratulation dates.
pub const CONGRATULATION_FORMAT: &str = "%Y.%m.%d";

/// A contact whose birthday falls inside the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,

    /// Day to congratulate on, after weekend roll-forward.
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// Congratulation date as `YYYY.MM.DD`.
    pub fn formatted_date(&self) -> String {
        self.congratulation_date
            .format(CONGRATULATION_FORMAT)
            .to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'s birthday: {}", self.name, self.formatted_date())
    }
}

/// Next occurrence of `birthday` on or after `today`.
pub fn next_occurrence(birthday: &BirthdayDate, today: NaiveDate) -> NaiveDate {
    let this_year = birthday.in_year(today.year());
    if this_year < today {
        birthday.in_year(today.year() + 1)
    } else {
        this_year
    }
}

/// First `target` weekday strictly after `date`.
pub fn next_weekday(date: NaiveDate, target: Weekday) -> NaiveDate {
    let mut days_ahead = i64::from(target.num_days_from_monday())
        - i64::from(date.weekday().num_days_from_monday());
    if days_ahead <= 0 {
        days_ahead += 7;
    }
    date + Duration::days(days_ahead)
}

/// Move Saturday and Sunday to the following Monday; weekdays are unchanged.
pub fn roll_to_weekday(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => next_weekday(date, Weekday::Mon),
        _ => date,
    }
}

/// Congratulation entry for `record`, if its birthday is within the window.
pub fn upcoming_for(
    record: &ContactRecord,
    today: NaiveDate,
    window_days: i64,
) -> Option<UpcomingBirthday> {
    let birthday = record.birthday()?;
    let projected = next_occurrence(birthday, today);
    let delta = (projected - today).num_days();

    if !(0..=window_days).contains(&delta) {
        return None;
    }

    Some(UpcomingBirthday {
        name: record.name().to_string(),
        congratulation_date: roll_to_weekday(projected),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactName;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn with_birthday(name: &str, birthday: &str) -> ContactRecord {
        let mut record = ContactRecord::new(ContactName::new(name).unwrap());
        record.set_birthday(birthday).unwrap();
        record
    }

    #[test]
    fn test_next_weekday_from_weekend() {
        // 2024-06-15 is a Saturday
        assert_eq!(next_weekday(date(2024, 6, 15), Weekday::Mon), date(2024, 6, 17));
        assert_eq!(next_weekday(date(2024, 6, 16), Weekday::Mon), date(2024, 6, 17));
    }

    #[test]
    fn test_next_weekday_is_strictly_after() {
        // 2024-06-17 is a Monday
        assert_eq!(next_weekday(date(2024, 6, 17), Weekday::Mon), date(2024, 6, 24));
        assert_eq!(next_weekday(date(2024, 6, 17), Weekday::Tue), date(2024, 6, 18));
    }

    #[test]
    fn test_next_weekday_wraps_year() {
        // 2022-12-31 is a Saturday
        assert_eq!(next_weekday(date(2022, 12, 31), Weekday::Mon), date(2023, 1, 2));
    }

    #[test]
    fn test_roll_to_weekday_keeps_weekdays() {
        for day in 10..=14 {
            assert_eq!(roll_to_weekday(date(2024, 6, day)), date(2024, 6, day));
        }
    }

    #[test]
    fn test_next_occurrence_this_year_and_next() {
        let today = date(2024, 6, 10);
        let later = BirthdayDate::new("12.06.1990").unwrap();
        let earlier = BirthdayDate::new("01.01.1990").unwrap();
        let same_day = BirthdayDate::new("10.06.1990").unwrap();

        assert_eq!(next_occurrence(&later, today), date(2024, 6, 12));
        assert_eq!(next_occurrence(&earlier, today), date(2025, 1, 1));
        assert_eq!(next_occurrence(&same_day, today), today);
    }

    #[test]
    fn test_upcoming_weekday_birthday() {
        let record = with_birthday("Ann", "12.06.1990");
        let entry = upcoming_for(&record, date(2024, 6, 10), 7).unwrap();
        assert_eq!(entry.formatted_date(), "2024.06.12");
        assert_eq!(entry.to_string(), "Ann's birthday: 2024.06.12");
    }

    #[test]
    fn test_upcoming_weekend_birthday_rolls_to_monday() {
        let record = with_birthday("Bob", "15.06.1990");
        let entry = upcoming_for(&record, date(2024, 6, 10), 7).unwrap();
        assert_eq!(entry.formatted_date(), "2024.06.17");
    }

    #[test]
    fn test_window_uses_pre_roll_date() {
        // 2024-06-16 is a Sunday, six days out; the Monday is outside the window
        // but the birthday is still included.
        let record = with_birthday("Cid", "16.06.1990");
        let entry = upcoming_for(&record, date(2024, 6, 10), 6).unwrap();
        assert_eq!(entry.congratulation_date, date(2024, 6, 17));
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let today = date(2024, 6, 10);
        assert!(upcoming_for(&with_birthday("A", "10.06.1990"), today, 7).is_some());
        assert!(upcoming_for(&with_birthday("B", "17.06.1990"), today, 7).is_some());
        assert!(upcoming_for(&with_birthday("C", "18.06.1990"), today, 7).is_none());
    }

    #[test]
    fn test_passed_birthday_is_excluded() {
        let record = with_birthday("Dee", "01.01.1990");
        assert!(upcoming_for(&record, date(2024, 6, 10), 7).is_none());
    }

    #[test]
    fn test_year_end_wraps_into_next_year() {
        let record = with_birthday("Eve", "02.01.1990");
        // 2025-01-02 is a Thursday
        let entry = upcoming_for(&record, date(2024, 12, 28), 7).unwrap();
        assert_eq!(entry.formatted_date(), "2025.01.02");
    }

    #[test]
    fn test_record_without_birthday_is_skipped() {
        let record = ContactRecord::new(ContactName::new("Fay").unwrap());
        assert!(upcoming_for(&record, date(2024, 6, 10), 7).is_none());
    }

    #[test]
    fn test_leap_day_birthday_in_common_year() {
        let record = with_birthday("Gus", "29.02.2000");
        // 2023-02-28 is a Tuesday
        let entry = upcoming_for(&record, date(2023, 2, 25), 7).unwrap();
        assert_eq!(entry.formatted_date(), "2023.02.28");
    }
}
