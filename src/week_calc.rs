use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

use crate::constants::WEEK_DAYS;
use crate::data_backend::german_date_fmt;
use crate::data_types::WeekDay;

/// Source of "today" for the week header.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall clock.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same day.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Monday of the week `today` belongs to. Sunday counts as the last day of the week.
pub fn monday_of_week(today: NaiveDate) -> NaiveDate {
    let days_since_monday = match today.weekday() {
        Weekday::Sun => 6,
        weekday => weekday.number_from_monday() - 1,
    };

    today - Duration::days(i64::from(days_since_monday))
}

/// Monday through Friday of the week containing `today`.
pub fn current_weekdays(today: NaiveDate) -> [WeekDay; 5] {
    let monday = monday_of_week(today);

    std::array::from_fn(|offset| {
        let day = monday + Duration::days(offset as i64);
        WeekDay {
            name: WEEK_DAYS[offset].to_string(),
            date: german_date_fmt(day),
            day,
        }
    })
}

/// ISO-8601 week number: week 1 is the week holding the year's first thursday.
pub fn iso_week_number(date: NaiveDate) -> u32 {
    // sunday = 0 .. saturday = 6
    let weekday = i64::from(date.weekday().num_days_from_sunday());
    let thursday = date + Duration::days(3 - (weekday + 6) % 7);

    let jan_first = thursday - Duration::days(i64::from(thursday.ordinal0()));
    let jan_first_weekday = i64::from(jan_first.weekday().num_days_from_sunday());
    let first_thursday = jan_first + Duration::days((4 - jan_first_weekday + 7) % 7);

    // both are thursdays, so the difference is a whole number of weeks
    let days_between = (thursday - first_thursday).num_days();
    ((days_between + 6) / 7 + 1) as u32
}
