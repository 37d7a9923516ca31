use chrono::NaiveDate;
use chrono_tz::Tz;
use leptos::*;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::utils::time::parse_calendar_date;

/// Stored in fields that do not apply to a log's status.
pub const PLACEHOLDER: &str = "-";
pub const LOCATION_NOT_CAPTURED: &str = "Not Captured";

/// Folds a role or username for comparison. Every role comparison in the app
/// goes through here.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    Admin,
    ClusterFrp,
    Frp,
    Crp,
    ProjectStaff,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::ClusterFrp,
        Role::Frp,
        Role::Crp,
        Role::ProjectStaff,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::ClusterFrp => "Cluster FRP",
            Role::Frp => "FRP",
            Role::Crp => "CRP",
            Role::ProjectStaff => "Project Staff",
        }
    }

    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role `{0}`")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(raw);
        Role::ALL
            .into_iter()
            .find(|role| normalize_key(role.as_str()) == key)
            .ok_or_else(|| UnknownRole(raw.to_string()))
    }
}

impl TryFrom<String> for Role {
    type Error = UnknownRole;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WorkStatus {
    Working,
    Leave,
    Holiday,
}

impl WorkStatus {
    pub const ALL: [WorkStatus; 3] = [WorkStatus::Working, WorkStatus::Leave, WorkStatus::Holiday];

    pub fn as_str(self) -> &'static str {
        match self {
            WorkStatus::Working => "Working",
            WorkStatus::Leave => "Leave",
            WorkStatus::Holiday => "Holiday",
        }
    }

    /// Three-letter badge used in calendar cells.
    pub fn short_label(self) -> &'static str {
        match self {
            WorkStatus::Working => "WRK",
            WorkStatus::Leave => "LV",
            WorkStatus::Holiday => "HOL",
        }
    }
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for WorkStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let key = normalize_key(&value);
        WorkStatus::ALL
            .into_iter()
            .find(|status| normalize_key(status.as_str()) == key)
            .ok_or_else(|| format!("unknown work status `{value}`"))
    }
}

impl From<WorkStatus> for String {
    fn from(status: WorkStatus) -> Self {
        status.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub role: Role,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
}

impl User {
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
            password: None,
            created_date: None,
        }
    }

    /// The always-available administrator account.
    pub fn builtin_admin() -> Self {
        Self::new("admin", Role::Admin)
    }

    pub fn without_password(mut self) -> Self {
        self.password = None;
        self
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    pub fn same_username(&self, other: &str) -> bool {
        same_username(&self.username, other)
    }
}

/// Sheet cells typed as digits arrive as JSON numbers.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

pub fn same_username(a: &str, b: &str) -> bool {
    normalize_key(a) == normalize_key(b)
}

/// Registration payload sent by the user-management screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// One row of the attendance sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkLog {
    pub date: String,
    pub username: String,
    pub status: WorkStatus,
    #[serde(default)]
    pub village: String,
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub work_details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl WorkLog {
    pub fn calendar_date(&self, tz: Tz) -> Option<NaiveDate> {
        parse_calendar_date(&self.date, tz)
    }

    pub fn is_owned_by(&self, username: &str) -> bool {
        same_username(&self.username, username)
    }

    pub fn reason_text(&self) -> &str {
        self.reason.as_deref().unwrap_or(PLACEHOLDER)
    }

    /// What the report's "work done" column shows for this row.
    pub fn work_done_text(&self) -> String {
        match self.status {
            WorkStatus::Working => self.work_details.clone(),
            other => format!("[{}] {}", other.as_str().to_uppercase(), self.reason_text()),
        }
    }
}

/// A log as typed into the form, before placeholders and the timestamp are
/// applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkLogDraft {
    pub date: NaiveDate,
    pub username: String,
    pub status: WorkStatus,
    pub village: String,
    pub activity: String,
    pub work_details: String,
    pub reason: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LogsResponse {
    #[serde(default)]
    pub logs: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct WriteResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Sheet rows are hand-edited; one bad row should not hide the rest.
pub fn parse_rows<T: DeserializeOwned>(rows: Vec<Value>, kind: &str) -> Vec<T> {
    rows.into_iter()
        .filter_map(|row| match serde_json::from_value::<T>(row) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                log::warn!("Skipping malformed {kind} row: {err}");
                None
            }
        })
        .collect()
}

/// How far a write got. Browser writes to the sheet are sent opaque, so
/// they can only ever be `Dispatched`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WriteReceipt {
    Dispatched,
    Confirmed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "INVALID_RESPONSE")
    }

    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REJECTED")
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "STORAGE_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }
}

impl From<crate::utils::storage::StorageError> for ApiError {
    fn from(err: crate::utils::storage::StorageError) -> Self {
        ApiError::storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_password_cell_reads_as_text() {
        let user: User =
            serde_json::from_value(json!({"username": "ravi", "role": "CRP", "password": 1234}))
                .unwrap();
        assert_eq!(user.password.as_deref(), Some("1234"));

        let user: User =
            serde_json::from_value(json!({"username": "ravi", "role": "CRP", "password": null}))
                .unwrap();
        assert_eq!(user.password, None);
    }

    #[test]
    fn login_response_survives_numeric_password() {
        let response: LoginResponse = serde_json::from_value(json!({
            "success": true,
            "user": {"username": "ravi", "role": "CRP", "password": 1234}
        }))
        .unwrap();
        assert!(response.success);
        assert_eq!(response.user.map(|u| u.username).as_deref(), Some("ravi"));
    }

    #[test]
    fn users_rows_keep_numeric_password_users() {
        let rows = vec![
            json!({"username": "ravi", "role": "CRP", "password": 1234}),
            json!({"username": "meena", "role": "Admin"}),
        ];
        let users: Vec<User> = parse_rows(rows, "user");
        assert_eq!(users.len(), 2);
    }

    #[test]
    fn role_parsing_ignores_case_and_surrounding_space() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(" ADMIN ".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("cluster frp".parse::<Role>().unwrap(), Role::ClusterFrp);
        assert_eq!("Project Staff".parse::<Role>().unwrap(), Role::ProjectStaff);
    }

    #[test]
    fn role_parsing_keeps_punctuation_variants_distinct() {
        assert!("cluster-frp".parse::<Role>().is_err());
        assert!("ProjectStaff".parse::<Role>().is_err());
        assert!("manager".parse::<Role>().is_err());
    }

    #[test]
    fn role_serializes_as_display_name() {
        assert_eq!(serde_json::to_value(Role::ClusterFrp).unwrap(), json!("Cluster FRP"));
        let user: User = serde_json::from_value(json!({"username": "ravi", "role": "crp"})).unwrap();
        assert_eq!(user.role, Role::Crp);
    }

    #[test]
    fn work_log_reads_sheet_row() {
        let log: WorkLog = serde_json::from_value(json!({
            "date": "2024-03-15",
            "username": "ravi",
            "village": "Pargi",
            "activity": "Soil Testing",
            "workDetails": "Collected samples",
            "status": "working",
            "location": "17.1, 77.9"
        }))
        .unwrap();
        assert_eq!(log.status, WorkStatus::Working);
        assert_eq!(log.work_details, "Collected samples");
        assert_eq!(
            log.calendar_date(chrono_tz::Asia::Kolkata),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert!(log.reason.is_none());
    }

    #[test]
    fn work_done_text_prefixes_non_working_status() {
        let log = WorkLog {
            date: "2024-03-16".into(),
            username: "ravi".into(),
            status: WorkStatus::Leave,
            village: PLACEHOLDER.into(),
            activity: PLACEHOLDER.into(),
            work_details: PLACEHOLDER.into(),
            reason: Some("Fever".into()),
            location: None,
            timestamp: None,
            photo_url: None,
        };
        assert_eq!(log.work_done_text(), "[LEAVE] Fever");
    }

    #[test]
    fn parse_rows_skips_malformed_entries() {
        let rows = vec![
            json!({"username": "a", "role": "FRP"}),
            json!({"username": "b", "role": "Somebody"}),
            json!("garbage"),
        ];
        let users: Vec<User> = parse_rows(rows, "user");
        assert_eq!(users, vec![User::new("a", Role::Frp)]);
    }

    #[test]
    fn usernames_compare_case_insensitively() {
        let user = User::new("Ravi", Role::Crp);
        assert!(user.same_username(" ravi"));
        assert!(!user.same_username("ravi2"));
    }

    #[test]
    fn api_error_constructors_set_codes() {
        assert_eq!(ApiError::request_failed("x").code, "REQUEST_FAILED");
        assert_eq!(ApiError::invalid_response("x").code, "INVALID_RESPONSE");
        assert_eq!(ApiError::storage("x").code, "STORAGE_ERROR");
        let err = ApiError::rejected("nope");
        assert_eq!(err.to_string(), "nope");
        let raw: String = err.into();
        assert_eq!(raw, "nope");
    }
}
