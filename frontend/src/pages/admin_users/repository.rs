use crate::{
    api::{NewUser, User},
    repository::FieldLogRepository,
};

/// The slice of record access the user-management screen needs.
#[derive(Clone, Default)]
pub struct AdminUsersRepository {
    inner: FieldLogRepository,
}

impl AdminUsersRepository {
    pub fn new_with_repository(inner: FieldLogRepository) -> Self {
        Self { inner }
    }

    pub async fn fetch_users(&self) -> Vec<User> {
        self.inner.list_all_users().await
    }

    /// `Err` carries the message shown under the form.
    pub async fn register_user(&self, payload: NewUser) -> Result<String, String> {
        let username = payload.username.clone();
        if self.inner.add_user(payload).await {
            Ok(username)
        } else {
            Err(super::utils::ADD_FAILED_MESSAGE.to_string())
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Role;
    use crate::test_support::helpers::mock_repository;

    #[tokio::test]
    async fn registered_user_shows_up_in_the_list() {
        let repo = AdminUsersRepository::new_with_repository(mock_repository());
        let added = repo
            .register_user(NewUser {
                username: "lakshmi".into(),
                password: "pw".into(),
                role: Role::Frp,
            })
            .await;
        assert_eq!(added, Ok("lakshmi".to_string()));

        let users = repo.fetch_users().await;
        assert!(users.iter().any(|u| u.username == "lakshmi" && u.role == Role::Frp));
        assert!(users.iter().all(|u| u.password.is_none()));
    }
}
