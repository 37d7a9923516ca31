use crate::{
    api::{AnalysisClient, User, WorkLog},
    config,
    repository::FieldLogRepository,
};
use leptos::use_context;
use serde::{Deserialize, Serialize};

/// Everything the admin dashboard needs, fetched in one go.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminOverview {
    pub users: Vec<User>,
    pub logs: Vec<WorkLog>,
}

impl AdminOverview {
    pub fn default_user(&self) -> Option<String> {
        self.users.first().map(|u| u.username.clone())
    }
}

/// Users and logs are requested concurrently; the overview is ready once
/// both have answered.
pub async fn load_admin_overview(repo: &FieldLogRepository) -> AdminOverview {
    let (users, logs) = futures::join!(repo.list_all_users(), repo.list_all_logs());
    AdminOverview { users, logs }
}

pub fn use_analysis_client() -> AnalysisClient {
    use_context::<AnalysisClient>()
        .unwrap_or_else(|| AnalysisClient::from_config(&config::current()))
}
