//! localStorage persistence used when no endpoint is configured.

use serde::Serialize;
use serde_json::Value;

use super::types::{parse_rows, ApiError, User, WorkLog};
use crate::utils::storage::KeyValueStore;

pub const MOCK_USERS_KEY: &str = "mock_users";
pub const MOCK_LOGS_KEY: &str = "mock_logs";

/// Built-in credentials that always work in mock mode.
pub const MOCK_ADMIN_USERNAME: &str = "admin";
pub const MOCK_ADMIN_PASSWORD: &str = "admin";

/// Raw rows under `key`. Rows are kept as JSON so a row this client cannot
/// parse survives the next append.
fn read_rows(store: &dyn KeyValueStore, key: &str) -> Vec<Value> {
    let Some(raw) = store.get(key) else {
        return Vec::new();
    };
    serde_json::from_str(&raw).unwrap_or_else(|err| {
        log::warn!("Discarding unreadable `{key}` entry: {err}");
        Vec::new()
    })
}

fn append_row<T: Serialize>(store: &dyn KeyValueStore, key: &str, item: &T) -> Result<(), ApiError> {
    let row = serde_json::to_value(item)
        .map_err(|e| ApiError::storage(format!("Failed to encode `{key}` row: {e}")))?;
    let mut rows = read_rows(store, key);
    rows.push(row);
    let raw = serde_json::to_string(&rows)
        .map_err(|e| ApiError::storage(format!("Failed to encode `{key}`: {e}")))?;
    store.set(key, &raw)?;
    Ok(())
}

pub(super) fn stored_users(store: &dyn KeyValueStore) -> Vec<User> {
    parse_rows(read_rows(store, MOCK_USERS_KEY), "user")
}

pub(super) fn stored_logs(store: &dyn KeyValueStore) -> Vec<WorkLog> {
    parse_rows(read_rows(store, MOCK_LOGS_KEY), "log")
}

pub(super) fn append_user(store: &dyn KeyValueStore, user: User) -> Result<(), ApiError> {
    append_row(store, MOCK_USERS_KEY, &user)
}

pub(super) fn append_log(store: &dyn KeyValueStore, log: WorkLog) -> Result<(), ApiError> {
    append_row(store, MOCK_LOGS_KEY, &log)
}

pub(super) fn find_credentials(
    store: &dyn KeyValueStore,
    username: &str,
    password: &str,
) -> Option<User> {
    if username == MOCK_ADMIN_USERNAME && password == MOCK_ADMIN_PASSWORD {
        return Some(User::builtin_admin());
    }
    stored_users(store)
        .into_iter()
        .find(|u| u.username == username && u.password.as_deref() == Some(password))
        .map(User::without_password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Role;
    use crate::utils::storage::MemoryStorage;

    #[test]
    fn builtin_admin_always_logs_in() {
        let store = MemoryStorage::new();
        assert_eq!(find_credentials(&store, "admin", "admin"), Some(User::builtin_admin()));
        assert!(find_credentials(&store, "admin", "Admin").is_none());
    }

    #[test]
    fn stored_users_match_exact_credentials() {
        let store = MemoryStorage::new();
        let mut user = User::new("ravi", Role::Crp);
        user.password = Some("secret".into());
        append_user(&store, user).unwrap();

        let found = find_credentials(&store, "ravi", "secret").unwrap();
        assert_eq!(found.role, Role::Crp);
        assert!(found.password.is_none());
        assert!(find_credentials(&store, "ravi", "SECRET").is_none());
        assert!(find_credentials(&store, "Ravi", "secret").is_none());
    }

    #[test]
    fn malformed_row_is_skipped_and_kept_on_append() {
        let store = MemoryStorage::new();
        store
            .set(
                MOCK_LOGS_KEY,
                r#"[
                    {"date":"2024-03-14","username":"ravi","status":"Working","village":"Pargi"},
                    {"date":"2024-03-15","username":"ravi","status":"Sick"}
                ]"#,
            )
            .unwrap();
        let readable = stored_logs(&store);
        assert_eq!(readable.len(), 1);
        assert_eq!(readable[0].date, "2024-03-14");

        let mut next = readable[0].clone();
        next.date = "2024-03-16".into();
        append_log(&store, next).unwrap();

        let dates: Vec<String> = stored_logs(&store).into_iter().map(|l| l.date).collect();
        assert_eq!(dates, vec!["2024-03-14", "2024-03-16"]);
        let raw: Vec<Value> = serde_json::from_str(&store.get(MOCK_LOGS_KEY).unwrap()).unwrap();
        assert_eq!(raw.len(), 3);
        assert_eq!(raw[1]["status"], "Sick");
    }

    #[test]
    fn corrupt_list_reads_as_empty() {
        let store = MemoryStorage::new();
        store.set(MOCK_LOGS_KEY, "{not json").unwrap();
        assert!(stored_logs(&store).is_empty());
    }
}
