use chrono::NaiveDate;
use leptos::*;

use crate::api::{WorkLogDraft, WorkStatus};

pub const REASON_REQUIRED_MESSAGE: &str = "Please provide a reason for Leave/Holiday";
pub const WORK_FIELDS_REQUIRED_MESSAGE: &str = "Please fill in the village, activity and work details.";
pub const INVALID_DATE_MESSAGE: &str = "Please pick a valid date.";
pub const SUBMIT_FAILED_MESSAGE: &str =
    "Error logging work. Please check your connection and try again.";

pub fn parse_initial_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(|value| NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok())
}

#[derive(Clone, Copy)]
pub struct LogWorkFormState {
    pub status: RwSignal<WorkStatus>,
    pub date: RwSignal<String>,
    pub village: RwSignal<String>,
    pub activity: RwSignal<String>,
    pub work_details: RwSignal<String>,
    pub reason: RwSignal<String>,
    pub location: RwSignal<Option<String>>,
}

impl LogWorkFormState {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            status: create_rw_signal(WorkStatus::Working),
            date: create_rw_signal(date.format("%Y-%m-%d").to_string()),
            village: create_rw_signal(String::new()),
            activity: create_rw_signal(String::new()),
            work_details: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
            location: create_rw_signal(None),
        }
    }

    pub fn to_draft(&self, username: &str) -> Result<WorkLogDraft, String> {
        build_draft(FormInput {
            username,
            status: self.status.get_untracked(),
            date: &self.date.get_untracked(),
            village: &self.village.get_untracked(),
            activity: &self.activity.get_untracked(),
            work_details: &self.work_details.get_untracked(),
            reason: &self.reason.get_untracked(),
            location: self.location.get_untracked(),
        })
    }
}

pub struct FormInput<'a> {
    pub username: &'a str,
    pub status: WorkStatus,
    pub date: &'a str,
    pub village: &'a str,
    pub activity: &'a str,
    pub work_details: &'a str,
    pub reason: &'a str,
    pub location: Option<String>,
}

/// Checks the fields the chosen status needs. Fields belonging to the other
/// status are passed through untouched; normalization blanks them later.
pub fn build_draft(input: FormInput<'_>) -> Result<WorkLogDraft, String> {
    let date = NaiveDate::parse_from_str(input.date.trim(), "%Y-%m-%d")
        .map_err(|_| INVALID_DATE_MESSAGE.to_string())?;
    match input.status {
        WorkStatus::Working => {
            if [input.village, input.activity, input.work_details]
                .iter()
                .any(|field| field.trim().is_empty())
            {
                return Err(WORK_FIELDS_REQUIRED_MESSAGE.into());
            }
        }
        WorkStatus::Leave | WorkStatus::Holiday => {
            if input.reason.trim().is_empty() {
                return Err(REASON_REQUIRED_MESSAGE.into());
            }
        }
    }
    Ok(WorkLogDraft {
        date,
        username: input.username.to_string(),
        status: input.status,
        village: input.village.to_string(),
        activity: input.activity.to_string(),
        work_details: input.work_details.to_string(),
        reason: input.reason.to_string(),
        location: input.location,
    })
}

pub fn status_button_class(status: WorkStatus, selected: bool) -> &'static str {
    if !selected {
        return "flex-1 py-2 rounded-xl text-xs font-bold border-2 bg-white border-slate-200 text-slate-500 hover:border-slate-300";
    }
    match status {
        WorkStatus::Working => "flex-1 py-2 rounded-xl text-xs font-bold border-2 bg-emerald-500 border-emerald-500 text-white",
        WorkStatus::Leave => "flex-1 py-2 rounded-xl text-xs font-bold border-2 bg-rose-500 border-rose-500 text-white",
        WorkStatus::Holiday => "flex-1 py-2 rounded-xl text-xs font-bold border-2 bg-amber-500 border-amber-500 text-white",
    }
}
