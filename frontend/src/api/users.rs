use chrono::{SecondsFormat, Utc};

use super::{
    client::{ApiClient, Backend},
    mock,
    types::{parse_rows, ApiError, NewUser, User, UsersResponse, WriteReceipt, WriteResponse},
};

impl ApiClient {
    pub async fn add_user(&self, user: &NewUser) -> Result<WriteReceipt, ApiError> {
        match &self.backend {
            Backend::Mock { store } => {
                mock::append_user(
                    store.as_ref(),
                    User {
                        username: user.username.clone(),
                        role: user.role,
                        password: Some(user.password.clone()),
                        created_date: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
                    },
                )?;
                Ok(WriteReceipt::Confirmed)
            }
            Backend::Remote { endpoint } => {
                let response = self
                    .post_action(endpoint, "addUser", user)?
                    .send()
                    .await
                    .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
                let body: WriteResponse = response.json().await.map_err(|e| {
                    ApiError::invalid_response(format!("Failed to parse response: {}", e))
                })?;
                if body.success {
                    Ok(WriteReceipt::Confirmed)
                } else {
                    Err(ApiError::rejected(
                        body.error.unwrap_or_else(|| "The sheet did not accept the user".into()),
                    ))
                }
            }
        }
    }

    /// Users as stored. Mock mode lists the built-in admin first.
    pub async fn get_users(&self) -> Result<Vec<User>, ApiError> {
        match &self.backend {
            Backend::Mock { store } => {
                let mut users = vec![User::builtin_admin()];
                users.extend(
                    mock::stored_users(store.as_ref())
                        .into_iter()
                        .map(User::without_password),
                );
                Ok(users)
            }
            Backend::Remote { endpoint } => {
                let response: UsersResponse = self.get_action(endpoint, "getUsers", &[]).await?;
                Ok(parse_rows::<User>(response.users, "user")
                    .into_iter()
                    .map(User::without_password)
                    .collect())
            }
        }
    }
}
