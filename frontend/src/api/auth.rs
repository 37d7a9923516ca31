use super::{
    client::{ApiClient, Backend},
    mock,
    types::{ApiError, LoginResponse, User},
};

impl ApiClient {
    /// `Ok(None)` means the sheet did not recognise the credentials.
    pub async fn login(&self, username: &str, password: &str) -> Result<Option<User>, ApiError> {
        match &self.backend {
            Backend::Mock { store } => Ok(mock::find_credentials(store.as_ref(), username, password)),
            Backend::Remote { endpoint } => {
                let response: LoginResponse = self
                    .get_action(
                        endpoint,
                        "login",
                        &[
                            ("username", username.to_string()),
                            ("password", password.to_string()),
                        ],
                    )
                    .await?;
                Ok(response
                    .user
                    .filter(|_| response.success)
                    .map(User::without_password))
            }
        }
    }
}
