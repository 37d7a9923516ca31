//! Natural-language summaries of a staff member's logs via the Gemini
//! `generateContent` API. Every failure resolves to a fixed message.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::types::{ApiError, WorkLog};
use crate::config::RuntimeConfig;

pub const AI_DISABLED_MESSAGE: &str = "AI Analysis is disabled (API Key not configured).";
pub const NO_DATA_MESSAGE: &str = "No data available for analysis.";
pub const UNAVAILABLE_MESSAGE: &str = "AI analysis is currently unavailable.";
pub const EMPTY_RESPONSE_MESSAGE: &str = "Unable to generate analysis at this time.";

const SYSTEM_INSTRUCTION: &str = "You are an expert field operations analyst. Provide insightful, constructive feedback based on data.";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize, Default)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize, Default)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateResponse {
    fn text(&self) -> Option<String> {
        let text: String = self
            .candidates
            .first()?
            .content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect();
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

pub fn build_prompt(logs: &[WorkLog], username: &str) -> String {
    let context = logs
        .iter()
        .map(|l| {
            format!(
                "Date: {}, Village: {}, Activity: {}, Details: {}, Status: {}",
                l.date, l.village, l.activity, l.work_details, l.status
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Analyze the following field activity logs for {username} and provide a professional performance summary, highlighting key accomplishments and identifying any patterns in activities or village coverage. Keep it under 150 words.\n\nLogs:\n{context}"
    )
}

#[derive(Clone)]
pub struct AnalysisClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl AnalysisClient {
    pub fn from_config(cfg: &RuntimeConfig) -> Self {
        Self::new(
            cfg.ai_api_key().map(str::to_string),
            cfg.ai_model(),
            cfg.ai_base_url(),
        )
    }

    pub fn new(api_key: Option<String>, model: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.into(),
            base_url: base_url.into(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn analyze_work_logs(&self, logs: &[WorkLog], username: &str) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            return AI_DISABLED_MESSAGE.to_string();
        };
        if logs.is_empty() {
            return NO_DATA_MESSAGE.to_string();
        }
        match self.generate(api_key, build_prompt(logs, username)).await {
            Ok(Some(text)) => text,
            Ok(None) => EMPTY_RESPONSE_MESSAGE.to_string(),
            Err(err) => {
                log::error!("AI analysis failed: {}", err);
                UNAVAILABLE_MESSAGE.to_string()
            }
        }
    }

    async fn generate(&self, api_key: &str, prompt: String) -> Result<Option<String>, ApiError> {
        let request = GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            contents: vec![Content {
                role: Some("user".into()),
                parts: vec![Part { text: prompt }],
            }],
        };
        let response = self
            .client
            .post(format!("{}/models/{}:generateContent", self.base_url, self.model))
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::request_failed(format!("AI service returned HTTP {status}")));
        }
        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ApiError::invalid_response(format!("Failed to parse response: {}", e)))?;
        Ok(body.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::WorkStatus;

    pub(super) fn sample_log() -> WorkLog {
        WorkLog {
            date: "2024-03-15".into(),
            username: "ravi".into(),
            status: WorkStatus::Working,
            village: "Pargi".into(),
            activity: "Soil Testing".into(),
            work_details: "Collected 12 samples".into(),
            reason: None,
            location: None,
            timestamp: None,
            photo_url: None,
        }
    }

    #[test]
    fn prompt_lists_each_log_on_its_own_line() {
        let prompt = build_prompt(&[sample_log(), sample_log()], "ravi");
        assert!(prompt.contains("for ravi"));
        assert!(prompt.contains("under 150 words"));
        let line = "Date: 2024-03-15, Village: Pargi, Activity: Soil Testing, Details: Collected 12 samples, Status: Working";
        assert_eq!(prompt.matches(line).count(), 2);
    }

    #[test]
    fn response_text_joins_parts_of_first_candidate() {
        let body: GenerateResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": "Good " }, { "text": "work." }] } }]
        }))
        .unwrap();
        assert_eq!(body.text().as_deref(), Some("Good work."));
        assert!(GenerateResponse::default().text().is_none());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::tests::sample_log;
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn missing_key_returns_disabled_message() {
        let client = AnalysisClient::new(None, "m", "http://unused.test");
        assert!(!client.is_enabled());
        assert_eq!(client.analyze_work_logs(&[sample_log()], "ravi").await, AI_DISABLED_MESSAGE);
    }

    #[tokio::test]
    async fn empty_logs_return_no_data_message() {
        let client = AnalysisClient::new(Some("k".into()), "m", "http://unused.test");
        assert_eq!(client.analyze_work_logs(&[], "ravi").await, NO_DATA_MESSAGE);
    }

    #[tokio::test]
    async fn returns_model_text_on_success() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/models/test-model:generateContent")
                    .header("x-goog-api-key", "secret")
                    .body_contains("Village: Pargi");
                then.status(200).json_body(json!({
                    "candidates": [{ "content": { "parts": [{ "text": "Consistent coverage of Pargi." }] } }]
                }));
            })
            .await;

        let client = AnalysisClient::new(Some("secret".into()), "test-model", server.base_url());
        let summary = client.analyze_work_logs(&[sample_log()], "ravi").await;
        assert_eq!(summary, "Consistent coverage of Pargi.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn service_failure_degrades_to_unavailable_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(500).body("boom");
            })
            .await;

        let client = AnalysisClient::new(Some("secret".into()), "test-model", server.base_url());
        let summary = client.analyze_work_logs(&[sample_log()], "ravi").await;
        assert_eq!(summary, UNAVAILABLE_MESSAGE);
    }

    #[tokio::test]
    async fn empty_candidates_yield_fallback_text() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200).json_body(json!({ "candidates": [] }));
            })
            .await;

        let client = AnalysisClient::new(Some("secret".into()), "test-model", server.base_url());
        let summary = client.analyze_work_logs(&[sample_log()], "ravi").await;
        assert_eq!(summary, EMPTY_RESPONSE_MESSAGE);
    }
}
