#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ApiClient, Role, User, WorkLog, WorkStatus};
    use crate::repository::FieldLogRepository;
    use crate::state::auth::Session;
    use crate::utils::storage::{KeyValueStore, MemoryStorage};
    use leptos::*;
    use std::rc::Rc;

    pub fn staff_user() -> User {
        User::new("ravi", Role::Crp)
    }

    /// Provides a session backed by memory, signed in as `user` when given.
    pub fn provide_session(user: Option<User>) -> Session {
        let store: Rc<dyn KeyValueStore> = Rc::new(MemoryStorage::new());
        let session = Session::restore(store);
        if let Some(user) = user {
            session.login(user);
        }
        provide_context(session.clone());
        session
    }

    pub fn mock_repository() -> FieldLogRepository {
        FieldLogRepository::new_with_client(Rc::new(ApiClient::new_mock(Rc::new(
            MemoryStorage::new(),
        ))))
    }

    pub fn working_log(date: &str, username: &str, village: &str, activity: &str) -> WorkLog {
        WorkLog {
            date: date.into(),
            username: username.into(),
            status: WorkStatus::Working,
            village: village.into(),
            activity: activity.into(),
            work_details: format!("Visited {village}"),
            reason: Some("-".into()),
            location: Some("Not Captured".into()),
            timestamp: Some(format!("{date}T05:00:00.000Z")),
            photo_url: Some("-".into()),
        }
    }

    pub fn off_log(date: &str, username: &str, status: WorkStatus, reason: &str) -> WorkLog {
        WorkLog {
            date: date.into(),
            username: username.into(),
            status,
            village: "-".into(),
            activity: "-".into(),
            work_details: "-".into(),
            reason: Some(reason.into()),
            location: Some("Not Captured".into()),
            timestamp: Some(format!("{date}T05:00:00.000Z")),
            photo_url: Some("-".into()),
        }
    }
}
