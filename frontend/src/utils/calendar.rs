use chrono::{Datelike, Months, NaiveDate};
use chrono_tz::Tz;

use crate::api::WorkLog;

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay {
    pub day: u32,
    pub date: NaiveDate,
    pub log: Option<WorkLog>,
}

/// A month laid out Sunday-first, with each day paired to its log.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarGrid {
    pub year: i32,
    pub month: u32,
    pub days_in_month: u32,
    /// Weekday of the 1st, 0 = Sunday. Also the number of leading blanks.
    pub first_weekday_offset: u32,
    pub days: Vec<CalendarDay>,
}

pub fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = first_of_month(year, month)?;
    let next = first.checked_add_months(Months::new(1))?;
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// `(year, month)` shifted by `delta` months, wrapping across years.
pub fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let zero_based = year * 12 + month as i32 - 1 + delta;
    (zero_based.div_euclid(12), zero_based.rem_euclid(12) as u32 + 1)
}

impl CalendarGrid {
    /// Returns `None` for an impossible month.
    pub fn build(year: i32, month: u32, logs: &[WorkLog], tz: Tz) -> Option<Self> {
        let first = first_of_month(year, month)?;
        let days_in_month = days_in_month(year, month)?;
        let dated: Vec<(NaiveDate, &WorkLog)> = logs
            .iter()
            .filter_map(|log| log.calendar_date(tz).map(|date| (date, log)))
            .collect();

        let days = (1..=days_in_month)
            .filter_map(|day| {
                let date = first.with_day(day)?;
                let log = dated
                    .iter()
                    .find(|(logged, _)| *logged == date)
                    .map(|(_, log)| (*log).clone());
                Some(CalendarDay { day, date, log })
            })
            .collect();

        Some(Self {
            year,
            month,
            days_in_month,
            first_weekday_offset: first.weekday().num_days_from_sunday(),
            days,
        })
    }

    pub fn day(&self, day: u32) -> Option<&CalendarDay> {
        self.days.iter().find(|d| d.day == day)
    }
}

/// Logs whose calendar date falls in `(year, month)`, optionally limited to
/// one owner.
pub fn logs_in_month(
    logs: &[WorkLog],
    year: i32,
    month: u32,
    owner: Option<&str>,
    tz: Tz,
) -> Vec<WorkLog> {
    logs.iter()
        .filter(|log| owner.map_or(true, |owner| log.is_owned_by(owner)))
        .filter(|log| {
            log.calendar_date(tz)
                .map_or(false, |date| date.year() == year && date.month() == month)
        })
        .cloned()
        .collect()
}

/// First year offered in the month/year pickers.
pub const FIRST_SELECTABLE_YEAR: i32 = 2024;

/// Years for the pickers: from the first tracked year through next year.
pub fn year_options(current_year: i32) -> Vec<i32> {
    (FIRST_SELECTABLE_YEAR..=current_year.max(FIRST_SELECTABLE_YEAR) + 1).collect()
}
