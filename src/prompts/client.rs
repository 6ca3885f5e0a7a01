//! Prompt lookups for requirement review.

use super::types::{PromptType, REQUIREMENT_PROMPT_TYPES, RequirementPromptIds, UserPrompt};
use crate::envelope::{ApiResponse, OperationDefaults};
use crate::http::HttpTransport;

/// Path of the by-type lookup on the user-prompt resource.
const BY_TYPE_PATH: &str = "prompts/user-prompts/by_type/";

const BY_TYPE_DEFAULTS: OperationDefaults =
    OperationDefaults::new(200, "success", "Failed to get prompt");

/// Client for user-prompt lookups.
#[derive(Debug, Clone)]
pub struct PromptClient {
    http: HttpTransport,
}

impl PromptClient {
    pub(crate) fn new(http: HttpTransport) -> Self {
        Self { http }
    }

    /// Look up the caller's prompt of the given type.
    ///
    /// The server answers success with a null payload when no prompt of
    /// that type exists, hence the `Option` in the envelope.
    pub async fn get_by_type(&self, prompt_type: PromptType) -> ApiResponse<Option<UserPrompt>> {
        let query = [("type", prompt_type.as_str().to_string())];
        let result = self.http.get_with_query(BY_TYPE_PATH, &query).await;
        ApiResponse::from_transport(result, &BY_TYPE_DEFAULTS)
    }

    /// Collect the ids of the requirement-review prompts the caller has
    /// customized. Lookups are issued one at a time; failed or empty
    /// lookups leave their slot unset.
    pub async fn requirement_prompt_ids(&self) -> RequirementPromptIds {
        let mut ids = RequirementPromptIds::default();
        for prompt_type in REQUIREMENT_PROMPT_TYPES {
            if let Some(Some(prompt)) = self.get_by_type(prompt_type).await.into_data() {
                ids.set(prompt_type, prompt.id);
            }
        }
        ids
    }

    /// Whether the caller has customized any requirement-review prompt.
    pub async fn has_custom_requirement_prompts(&self) -> bool {
        !self.requirement_prompt_ids().await.is_empty()
    }
}
