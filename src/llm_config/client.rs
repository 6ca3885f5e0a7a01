//! CRUD operations for the LLM-configuration resource.

use super::types::{
    CreateLlmConfigRequest, LlmConfig, PartialUpdateLlmConfigRequest, ProvidersResponse,
    UpdateLlmConfigRequest,
};
use crate::envelope::{ApiResponse, OperationDefaults};
use crate::http::HttpTransport;

/// Collection path for LLM configurations.
const CONFIGS_PATH: &str = "lg/llm-configs/";
/// Collection path for provider options.
const PROVIDERS_PATH: &str = "lg/providers/";

const LIST_DEFAULTS: OperationDefaults =
    OperationDefaults::new(200, "success", "Failed to list LLM configs");
const CREATE_DEFAULTS: OperationDefaults = OperationDefaults::new(
    201,
    "LLM config created successfully",
    "Failed to create LLM config",
);
const GET_DEFAULTS: OperationDefaults =
    OperationDefaults::new(200, "success", "Failed to get LLM config details");
const UPDATE_DEFAULTS: OperationDefaults = OperationDefaults::new(
    200,
    "LLM config updated successfully",
    "Failed to update LLM config",
);
const DELETE_DEFAULTS: OperationDefaults = OperationDefaults::new(
    200,
    "LLM configuration deleted successfully",
    "Failed to delete LLM config",
);
const PROVIDERS_DEFAULTS: OperationDefaults =
    OperationDefaults::new(200, "success", "Failed to get providers");

/// Client for `/lg/llm-configs/` and the provider-option lookup.
#[derive(Debug, Clone)]
pub struct LlmConfigClient {
    http: HttpTransport,
}

impl LlmConfigClient {
    pub(crate) fn new(http: HttpTransport) -> Self {
        Self { http }
    }

    /// List all LLM configurations.
    pub async fn list(&self) -> ApiResponse<Vec<LlmConfig>> {
        let result = self.http.get_uncached(CONFIGS_PATH).await;
        ApiResponse::from_transport(result, &LIST_DEFAULTS)
    }

    /// Create a new LLM configuration.
    pub async fn create(&self, request: &CreateLlmConfigRequest) -> ApiResponse<LlmConfig> {
        let result = self.http.post(CONFIGS_PATH, request).await;
        ApiResponse::from_transport(result, &CREATE_DEFAULTS)
    }

    /// Fetch one configuration by id.
    pub async fn get(&self, id: i64) -> ApiResponse<LlmConfig> {
        let result = self.http.get(&detail_path(id)).await;
        ApiResponse::from_transport(result, &GET_DEFAULTS)
    }

    /// Replace a configuration (PUT).
    pub async fn update(&self, id: i64, request: &UpdateLlmConfigRequest) -> ApiResponse<LlmConfig> {
        let result = self.http.put(&detail_path(id), request).await;
        ApiResponse::from_transport(result, &UPDATE_DEFAULTS)
    }

    /// Update a subset of fields (PATCH).
    pub async fn partial_update(
        &self,
        id: i64,
        request: &PartialUpdateLlmConfigRequest,
    ) -> ApiResponse<LlmConfig> {
        let result = self.http.patch(&detail_path(id), request).await;
        ApiResponse::from_transport(result, &UPDATE_DEFAULTS)
    }

    /// Delete a configuration.
    pub async fn delete(&self, id: i64) -> ApiResponse<()> {
        let result = self.http.delete(&detail_path(id)).await;
        ApiResponse::from_transport(result, &DELETE_DEFAULTS)
    }

    /// List the selectable provider options.
    pub async fn providers(&self) -> ApiResponse<ProvidersResponse> {
        let result = self.http.get_uncached(PROVIDERS_PATH).await;
        ApiResponse::from_transport(result, &PROVIDERS_DEFAULTS)
    }
}

fn detail_path(id: i64) -> String {
    format!("{CONFIGS_PATH}{id}/")
}
