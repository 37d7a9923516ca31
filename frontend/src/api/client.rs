use chrono_tz::Tz;
use reqwest::{header::CONTENT_TYPE, Client, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use std::rc::Rc;

use crate::{
    api::types::ApiError,
    config::{self, RuntimeConfig},
    utils::storage::{BrowserStorage, KeyValueStore},
};

/// Where records live: the spreadsheet web app, or localStorage when no
/// endpoint is configured.
#[derive(Clone)]
pub(super) enum Backend {
    Remote { endpoint: String },
    Mock { store: Rc<dyn KeyValueStore> },
}

/// Thin client for the spreadsheet endpoint. Credentials are checked by the
/// sheet with plain string equality; nothing here hashes or protects them.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    pub(super) backend: Backend,
    time_zone: Tz,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Body for POST calls: `{ "action": "...", ...payload }`.
#[derive(Serialize)]
struct ActionEnvelope<'a, T: Serialize> {
    action: &'a str,
    #[serde(flatten)]
    payload: &'a T,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::from_config(&config::current())
    }

    pub fn from_config(cfg: &RuntimeConfig) -> Self {
        let client = match cfg.endpoint() {
            Some(endpoint) => Self::new_with_endpoint(endpoint),
            None => Self::new_mock(Rc::new(BrowserStorage)),
        };
        client.with_time_zone(cfg.time_zone())
    }

    pub fn new_with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            backend: Backend::Remote {
                endpoint: endpoint.into(),
            },
            time_zone: config::DEFAULT_TIME_ZONE,
        }
    }

    pub fn new_mock(store: Rc<dyn KeyValueStore>) -> Self {
        Self {
            client: Client::new(),
            backend: Backend::Mock { store },
            time_zone: config::DEFAULT_TIME_ZONE,
        }
    }

    pub fn with_time_zone(mut self, time_zone: Tz) -> Self {
        self.time_zone = time_zone;
        self
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    pub fn is_mock(&self) -> bool {
        matches!(self.backend, Backend::Mock { .. })
    }

    pub(super) async fn get_action<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        action: &str,
        params: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .get(endpoint)
            .query(&[("action", action)])
            .query(params)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::request_failed(format!(
                "`{action}` returned HTTP {status}"
            )));
        }
        response
            .json()
            .await
            .map_err(|e| ApiError::invalid_response(format!("Failed to parse response: {}", e)))
    }

    /// Apps Script only avoids a CORS preflight for "simple" requests, so the
    /// JSON goes out as text/plain.
    pub(super) fn post_action<T: Serialize>(
        &self,
        endpoint: &str,
        action: &str,
        payload: &T,
    ) -> Result<RequestBuilder, ApiError> {
        let body = serde_json::to_string(&ActionEnvelope { action, payload })
            .map_err(|e| ApiError::unknown(format!("Failed to encode request: {}", e)))?;
        Ok(self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "text/plain;charset=utf-8")
            .body(body))
    }
}
