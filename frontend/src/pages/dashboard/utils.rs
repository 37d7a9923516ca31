use chrono_tz::Tz;
use std::collections::BTreeMap;

use crate::api::{WorkLog, WorkStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub working: usize,
    pub leave: usize,
    pub holiday: usize,
}

impl StatusCounts {
    pub fn from_logs(logs: &[WorkLog]) -> Self {
        logs.iter().fold(Self::default(), |mut counts, log| {
            match log.status {
                WorkStatus::Working => counts.working += 1,
                WorkStatus::Leave => counts.leave += 1,
                WorkStatus::Holiday => counts.holiday += 1,
            }
            counts
        })
    }

    pub fn total(&self) -> usize {
        self.working + self.leave + self.holiday
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCount {
    pub activity: String,
    pub count: usize,
}

/// Working logs per activity, busiest first, ties by name.
pub fn activity_breakdown(logs: &[WorkLog]) -> Vec<ActivityCount> {
    let mut tally: BTreeMap<&str, usize> = BTreeMap::new();
    for log in logs.iter().filter(|l| l.status == WorkStatus::Working) {
        *tally.entry(log.activity.as_str()).or_default() += 1;
    }
    let mut counts: Vec<ActivityCount> = tally
        .into_iter()
        .map(|(activity, count)| ActivityCount {
            activity: activity.to_string(),
            count,
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Width of an activity's bar relative to the busiest one.
pub fn bar_percent(count: usize, max: usize) -> usize {
    if max == 0 {
        0
    } else {
        count * 100 / max
    }
}

/// Newest first; rows with an unreadable date sink to the bottom.
pub fn latest_first(logs: &[WorkLog], tz: Tz) -> Vec<WorkLog> {
    let mut sorted = logs.to_vec();
    sorted.sort_by(|a, b| b.calendar_date(tz).cmp(&a.calendar_date(tz)));
    sorted
}

pub fn log_work_href(date: chrono::NaiveDate) -> String {
    format!("/log-work?date={}", date.format("%Y-%m-%d"))
}
