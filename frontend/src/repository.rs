//! Record access for the views. Every call swallows transport and decode
//! failures: the error is logged and the caller gets an empty default.

use chrono::{DateTime, SecondsFormat, Utc};
use leptos::use_context;
use std::rc::Rc;

use crate::api::{
    ApiClient, NewUser, User, WorkLog, WorkLogDraft, WorkStatus, WriteReceipt,
    LOCATION_NOT_CAPTURED, PLACEHOLDER,
};

#[derive(Clone)]
pub struct FieldLogRepository {
    client: Rc<ApiClient>,
}

impl Default for FieldLogRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldLogRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn login(&self, username: &str, password: &str) -> Option<User> {
        match self.client.login(username, password).await {
            Ok(user) => user,
            Err(err) => {
                log::error!("Login request failed: {}", err);
                None
            }
        }
    }

    /// Normalizes the draft and sends it. `None` means the write never left
    /// the device.
    pub async fn submit_log(&self, draft: WorkLogDraft) -> Option<WriteReceipt> {
        let entry = normalize_entry(draft, Utc::now());
        match self.client.submit_log(&entry).await {
            Ok(receipt) => Some(receipt),
            Err(err) => {
                log::error!("Failed to submit log for {}: {}", entry.date, err);
                None
            }
        }
    }

    pub async fn list_logs_for_user(&self, username: &str, month: u32, year: i32) -> Vec<WorkLog> {
        self.client
            .get_attendance(username, month, year)
            .await
            .unwrap_or_else(|err| {
                log::error!("Failed to load logs for {username} ({month}/{year}): {}", err);
                Vec::new()
            })
    }

    pub async fn list_all_logs(&self) -> Vec<WorkLog> {
        self.client.get_all_logs().await.unwrap_or_else(|err| {
            log::error!("Failed to load logs: {}", err);
            Vec::new()
        })
    }

    pub async fn add_user(&self, user: NewUser) -> bool {
        match self.client.add_user(&user).await {
            Ok(_) => true,
            Err(err) => {
                log::error!("Failed to add user {}: {}", user.username, err);
                false
            }
        }
    }

    /// Never empty: the built-in admin stands in when the sheet has nothing.
    pub async fn list_all_users(&self) -> Vec<User> {
        match self.client.get_users().await {
            Ok(users) if !users.is_empty() => users,
            Ok(_) => vec![User::builtin_admin()],
            Err(err) => {
                log::error!("Failed to load users: {}", err);
                vec![User::builtin_admin()]
            }
        }
    }
}

/// The repository provided by the app shell, or one built from the runtime
/// config when rendered outside it.
pub fn use_repository() -> FieldLogRepository {
    use_context::<FieldLogRepository>().unwrap_or_default()
}

fn or_placeholder(value: String) -> String {
    if value.trim().is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value
    }
}

/// Applies placeholders for the fields that do not fit the status and stamps
/// the submission instant.
pub fn normalize_entry(draft: WorkLogDraft, now: DateTime<Utc>) -> WorkLog {
    let (village, activity, work_details, reason) = match draft.status {
        WorkStatus::Working => (
            or_placeholder(draft.village),
            or_placeholder(draft.activity),
            or_placeholder(draft.work_details),
            or_placeholder(draft.reason),
        ),
        WorkStatus::Leave | WorkStatus::Holiday => (
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
            PLACEHOLDER.to_string(),
            draft.reason,
        ),
    };
    let location = draft
        .location
        .filter(|loc| !loc.trim().is_empty())
        .unwrap_or_else(|| LOCATION_NOT_CAPTURED.to_string());

    WorkLog {
        date: draft.date.format("%Y-%m-%d").to_string(),
        username: draft.username,
        status: draft.status,
        village,
        activity,
        work_details,
        reason: Some(reason),
        location: Some(location),
        timestamp: Some(now.to_rfc3339_opts(SecondsFormat::Millis, true)),
        photo_url: Some(PLACEHOLDER.to_string()),
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Role;
    use crate::utils::{calendar::CalendarGrid, storage::MemoryStorage};
    use chrono::NaiveDate;
    use httpmock::prelude::*;
    use serde_json::json;

    fn mock_repo() -> FieldLogRepository {
        FieldLogRepository::new_with_client(Rc::new(ApiClient::new_mock(Rc::new(
            MemoryStorage::new(),
        ))))
    }

    fn remote_repo(server: &MockServer) -> FieldLogRepository {
        FieldLogRepository::new_with_client(Rc::new(ApiClient::new_with_endpoint(
            server.url("/exec"),
        )))
    }

    fn pargi_draft() -> WorkLogDraft {
        WorkLogDraft {
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            username: "ravi".into(),
            status: WorkStatus::Working,
            village: "Pargi".into(),
            activity: "Soil Testing".into(),
            work_details: "Collected 12 samples".into(),
            reason: String::new(),
            location: Some("17.1, 78.2".into()),
        }
    }

    #[tokio::test]
    async fn submitted_log_shows_on_month_calendar() {
        let repo = mock_repo();
        let receipt = repo.submit_log(pargi_draft()).await;
        assert_eq!(receipt, Some(WriteReceipt::Confirmed));

        let logs = repo.list_logs_for_user("Ravi", 3, 2024).await;
        assert_eq!(logs.len(), 1);
        let grid = CalendarGrid::build(2024, 3, &logs, repo.client().time_zone()).unwrap();
        let day = grid.day(15).unwrap();
        let log = day.log.as_ref().unwrap();
        assert_eq!(log.status, WorkStatus::Working);
        assert_eq!(log.village, "Pargi");
        assert!(grid.day(14).unwrap().log.is_none());

        assert!(repo.list_logs_for_user("ravi", 4, 2024).await.is_empty());
    }

    #[tokio::test]
    async fn mock_users_list_admin_first() {
        let repo = mock_repo();
        assert!(
            repo.add_user(NewUser {
                username: "lakshmi".into(),
                password: "pw".into(),
                role: Role::Frp,
            })
            .await
        );
        let users = repo.list_all_users().await;
        assert_eq!(users[0], User::builtin_admin());
        assert_eq!(users[1].username, "lakshmi");
        assert!(users[1].password.is_none());

        let logged_in = repo.login("lakshmi", "pw").await.unwrap();
        assert_eq!(logged_in.role, Role::Frp);
        assert!(repo.login("lakshmi", "wrong").await.is_none());
    }

    #[tokio::test]
    async fn remote_login_passes_credentials_as_query() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/exec")
                    .query_param("action", "login")
                    .query_param("username", "ravi")
                    .query_param("password", "secret");
                then.status(200).json_body(json!({
                    "success": true,
                    "user": { "username": "ravi", "role": "crp", "password": "secret" }
                }));
            })
            .await;

        let user = remote_repo(&server).login("ravi", "secret").await.unwrap();
        assert_eq!(user.role, Role::Crp);
        assert!(user.password.is_none());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn remote_login_rejection_and_failure_yield_none() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).query_param("username", "ravi");
                then.status(200).json_body(json!({ "success": false }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).query_param("username", "broken");
                then.status(500).body("oops");
            })
            .await;

        let repo = remote_repo(&server);
        assert!(repo.login("ravi", "nope").await.is_none());
        assert!(repo.login("broken", "x").await.is_none());
    }

    #[tokio::test]
    async fn remote_submit_posts_normalized_log_and_is_only_dispatched() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/exec")
                    .body_contains("\"action\":\"logWork\"")
                    .body_contains("\"village\":\"Pargi\"")
                    .body_contains("\"photoUrl\":\"-\"");
                then.status(200).json_body(json!({ "success": true }));
            })
            .await;

        let receipt = remote_repo(&server).submit_log(pargi_draft()).await;
        assert_eq!(receipt, Some(WriteReceipt::Dispatched));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn remote_logs_skip_malformed_rows() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .query_param("action", "getAttendance")
                    .query_param("month", "3")
                    .query_param("year", "2024");
                then.status(200).json_body(json!({
                    "logs": [
                        { "date": "2024-03-15", "username": "ravi", "status": "Working", "village": "Pargi" },
                        { "date": "2024-03-16", "username": "ravi", "status": "Sleeping" },
                        "garbage"
                    ]
                }));
            })
            .await;

        let logs = remote_repo(&server).list_logs_for_user("ravi", 3, 2024).await;
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].village, "Pargi");
    }

    #[tokio::test]
    async fn remote_failures_degrade_to_defaults() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.path("/exec");
                then.status(503).body("unavailable");
            })
            .await;

        let repo = remote_repo(&server);
        assert!(repo.list_all_logs().await.is_empty());
        assert_eq!(repo.list_all_users().await, vec![User::builtin_admin()]);
        assert!(
            !repo
                .add_user(NewUser {
                    username: "x".into(),
                    password: "y".into(),
                    role: Role::Crp,
                })
                .await
        );
    }

    #[tokio::test]
    async fn remote_empty_user_list_falls_back_to_admin() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).query_param("action", "getUsers");
                then.status(200).json_body(json!({ "users": [] }));
            })
            .await;

        assert_eq!(
            remote_repo(&server).list_all_users().await,
            vec![User::builtin_admin()]
        );
    }

    #[tokio::test]
    async fn remote_add_user_reads_success_flag() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).body_contains("\"username\":\"ok\"");
                then.status(200).json_body(json!({ "success": true }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(POST).body_contains("\"username\":\"dup\"");
                then.status(200)
                    .json_body(json!({ "success": false, "error": "exists" }));
            })
            .await;

        let repo = remote_repo(&server);
        let new_user = |name: &str| NewUser {
            username: name.into(),
            password: "pw".into(),
            role: Role::Crp,
        };
        assert!(repo.add_user(new_user("ok")).await);
        assert!(!repo.add_user(new_user("dup")).await);
    }
}
