use chrono_tz::Tz;

use crate::{
    api::WorkLog,
    utils::time::format_day_month_year,
};

/// The printed form always shows at least this many rows.
pub const MIN_REPORT_ROWS: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub serial: usize,
    pub date: String,
    pub village: String,
    pub activity: String,
    pub work_done: String,
}

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

/// Expects logs already filtered to one period and sorted by date.
pub fn report_rows(logs: &[WorkLog], tz: Tz) -> Vec<ReportRow> {
    logs.iter()
        .enumerate()
        .map(|(idx, log)| ReportRow {
            serial: idx + 1,
            date: log
                .calendar_date(tz)
                .map(format_day_month_year)
                .unwrap_or_else(|| log.date.clone()),
            village: or_dash(&log.village),
            activity: or_dash(&log.activity),
            work_done: log.work_done_text(),
        })
        .collect()
}

pub fn padding_rows(filled: usize) -> usize {
    MIN_REPORT_ROWS.saturating_sub(filled)
}

pub fn report_title(month_name: &str, year: i32) -> String {
    format!("MONTHLY WORK DONE REPORT - {} {}", month_name.to_uppercase(), year)
}
