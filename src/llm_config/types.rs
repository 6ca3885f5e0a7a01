//! LLM-configuration resource types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Supported LLM service providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderKind {
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "anthropic")]
    Anthropic,
    #[serde(rename = "gemini")]
    Gemini,
    #[serde(rename = "qwen")]
    Qwen,
    #[serde(rename = "ollama")]
    Ollama,
    #[serde(rename = "openai_compatible")]
    OpenAiCompatible,
}

/// A stored LLM configuration.
///
/// The server treats `api_key` as write-only, so reads never include it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmConfig {
    pub id: i64,
    /// User-chosen label for the configuration.
    pub config_name: String,
    pub provider: ProviderKind,
    /// Concrete model name, e.g. `gpt-4o` or `claude-sonnet-4`.
    pub name: String,
    pub api_url: String,
    #[serde(default)]
    pub system_prompt: Option<String>,
    /// At most one configuration is active at a time; activating one
    /// deactivates the rest server-side.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for creating a configuration.
#[derive(Debug, Clone, Serialize)]
pub struct CreateLlmConfigRequest {
    pub config_name: String,
    pub provider: ProviderKind,
    pub name: String,
    pub api_url: String,
    pub api_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    pub is_active: bool,
}

/// Body for a full (PUT) update; same shape as create.
pub type UpdateLlmConfigRequest = CreateLlmConfigRequest;

/// Body for a partial (PATCH) update. Unset fields are omitted from the
/// request and left untouched server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PartialUpdateLlmConfigRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// One selectable provider, as rendered in configuration forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderOption {
    pub value: String,
    pub label: String,
}

/// Payload of the provider lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvidersResponse {
    pub choices: Vec<ProviderOption>,
}
