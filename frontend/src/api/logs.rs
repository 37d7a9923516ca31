use chrono::Datelike;

use super::{
    client::{ApiClient, Backend},
    mock,
    types::{parse_rows, ApiError, LogsResponse, WorkLog, WriteReceipt},
};

impl ApiClient {
    /// Sends an already-normalized log. Remote writes are fire-and-forget:
    /// the browser sends them opaque, so success means "left the device".
    pub async fn submit_log(&self, log: &WorkLog) -> Result<WriteReceipt, ApiError> {
        match &self.backend {
            Backend::Mock { store } => {
                mock::append_log(store.as_ref(), log.clone())?;
                Ok(WriteReceipt::Confirmed)
            }
            Backend::Remote { endpoint } => {
                let request = self.post_action(endpoint, "logWork", log)?;
                #[cfg(target_arch = "wasm32")]
                let request = request.fetch_mode_no_cors();
                request
                    .send()
                    .await
                    .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
                Ok(WriteReceipt::Dispatched)
            }
        }
    }

    pub async fn get_attendance(
        &self,
        username: &str,
        month: u32,
        year: i32,
    ) -> Result<Vec<WorkLog>, ApiError> {
        match &self.backend {
            Backend::Mock { store } => {
                let tz = self.time_zone();
                Ok(mock::stored_logs(store.as_ref())
                    .into_iter()
                    .filter(|log| log.is_owned_by(username))
                    .filter(|log| {
                        log.calendar_date(tz)
                            .map_or(false, |d| d.month() == month && d.year() == year)
                    })
                    .collect())
            }
            Backend::Remote { endpoint } => {
                let response: LogsResponse = self
                    .get_action(
                        endpoint,
                        "getAttendance",
                        &[
                            ("username", username.to_string()),
                            ("month", month.to_string()),
                            ("year", year.to_string()),
                        ],
                    )
                    .await?;
                Ok(parse_rows(response.logs, "log"))
            }
        }
    }

    pub async fn get_all_logs(&self) -> Result<Vec<WorkLog>, ApiError> {
        match &self.backend {
            Backend::Mock { store } => Ok(mock::stored_logs(store.as_ref())),
            Backend::Remote { endpoint } => {
                let response: LogsResponse = self.get_action(endpoint, "getAllLogs", &[]).await?;
                Ok(parse_rows(response.logs, "log"))
            }
        }
    }
}
