use chrono::{Datelike, NaiveDate};
use chrono_tz::Tz;

use crate::api::WorkLog;
use crate::utils::calendar::shift_month;

pub const PERIOD_START_DAY: u32 = 26;
pub const PERIOD_END_DAY: u32 = 25;

/// The monthly report window: the 26th of the previous month through the
/// 25th of the report month, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingPeriod {
    pub year: i32,
    pub month: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportingPeriod {
    pub fn for_month(year: i32, month: u32) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        let (prev_year, prev_month) = shift_month(year, month, -1);
        Some(Self {
            year,
            month,
            start: NaiveDate::from_ymd_opt(prev_year, prev_month, PERIOD_START_DAY)?,
            end: NaiveDate::from_ymd_opt(year, month, PERIOD_END_DAY)?,
        })
    }

    /// The report a given day is counted in.
    pub fn containing(date: NaiveDate) -> Option<Self> {
        if date.day() >= PERIOD_START_DAY {
            let (year, month) = shift_month(date.year(), date.month(), 1);
            Self::for_month(year, month)
        } else {
            Self::for_month(date.year(), date.month())
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// `owner`'s logs inside the window, oldest first.
    pub fn collect_logs(&self, logs: &[WorkLog], owner: &str, tz: Tz) -> Vec<WorkLog> {
        let mut dated: Vec<(NaiveDate, WorkLog)> = logs
            .iter()
            .filter(|log| log.is_owned_by(owner))
            .filter_map(|log| log.calendar_date(tz).map(|date| (date, log.clone())))
            .filter(|(date, _)| self.contains(*date))
            .collect();
        dated.sort_by_key(|(date, _)| *date);
        dated.into_iter().map(|(_, log)| log).collect()
    }
}
