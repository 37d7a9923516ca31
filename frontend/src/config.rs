use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::Asia::Kolkata;
pub const DEFAULT_AI_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_AI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_ORGANIZATION: &str = "Wassan Vikarabad";
const DEFAULT_OFFICE_LOCATION: &str = "VIKARABAD";
const ENDPOINT_PLACEHOLDER: &str = "REPLACE_WITH_ID";

/// Deployment settings. Every field is optional so a partial `config.json`
/// or `env.js` still loads; accessors apply the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    #[serde(alias = "ENDPOINT_URL")]
    pub endpoint_url: Option<String>,
    #[serde(alias = "AI_API_KEY", alias = "API_KEY")]
    pub ai_api_key: Option<String>,
    #[serde(alias = "AI_MODEL")]
    pub ai_model: Option<String>,
    #[serde(alias = "AI_BASE_URL")]
    pub ai_base_url: Option<String>,
    #[serde(alias = "TIME_ZONE")]
    pub time_zone: Option<String>,
    #[serde(alias = "ORGANIZATION_NAME")]
    pub organization_name: Option<String>,
    #[serde(alias = "OFFICE_LOCATION")]
    pub office_location: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl RuntimeConfig {
    pub fn with_endpoint(url: impl Into<String>) -> Self {
        Self {
            endpoint_url: Some(url.into()),
            ..Self::default()
        }
    }

    /// The remote endpoint, or `None` when the app should run in mock mode.
    pub fn endpoint(&self) -> Option<&str> {
        non_blank(&self.endpoint_url).filter(|url| !url.contains(ENDPOINT_PLACEHOLDER))
    }

    pub fn is_mock_mode(&self) -> bool {
        self.endpoint().is_none()
    }

    pub fn ai_api_key(&self) -> Option<&str> {
        non_blank(&self.ai_api_key)
    }

    pub fn ai_model(&self) -> &str {
        non_blank(&self.ai_model).unwrap_or(DEFAULT_AI_MODEL)
    }

    pub fn ai_base_url(&self) -> &str {
        non_blank(&self.ai_base_url)
            .map(|url| url.trim_end_matches('/'))
            .unwrap_or(DEFAULT_AI_BASE_URL)
    }

    pub fn time_zone(&self) -> Tz {
        match non_blank(&self.time_zone) {
            Some(name) => name.parse::<Tz>().unwrap_or_else(|_| {
                log::warn!("Unknown time zone `{name}`, falling back to {DEFAULT_TIME_ZONE}");
                DEFAULT_TIME_ZONE
            }),
            None => DEFAULT_TIME_ZONE,
        }
    }

    pub fn organization_name(&self) -> &str {
        non_blank(&self.organization_name).unwrap_or(DEFAULT_ORGANIZATION)
    }

    pub fn office_location(&self) -> &str {
        non_blank(&self.office_location).unwrap_or(DEFAULT_OFFICE_LOCATION)
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

fn read_window_object(name: &str) -> Option<RuntimeConfig> {
    // Expect an optional global object, e.g. window.__FIELDLOG_ENV = { ENDPOINT_URL: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let json = js_sys::JSON::stringify(&any).ok()?.as_string()?;
    serde_json::from_str(&json)
        .map_err(|err| log::warn!("Ignoring malformed window.{name}: {err}"))
        .ok()
}

fn snapshot_from_globals() -> Option<RuntimeConfig> {
    read_window_object("__FIELDLOG_ENV").or_else(|| read_window_object("__FIELDLOG_CONFIG"))
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{origin}/config.json")).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

/// Resolves the configuration once: `env.js` globals win over `config.json`,
/// which wins over the built-in defaults.
pub async fn init() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    let resolved = match snapshot_from_globals() {
        Some(cfg) => cfg,
        None => fetch_runtime_config().await.unwrap_or_default(),
    };
    if resolved.is_mock_mode() {
        log::warn!("No data endpoint configured; running in mock mode (localStorage)");
    }
    RUNTIME_CONFIG.get_or_init(|| resolved).clone()
}

pub fn current() -> RuntimeConfig {
    RUNTIME_CONFIG.get().cloned().unwrap_or_default()
}
