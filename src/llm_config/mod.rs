//! LLM-configuration resource: CRUD operations plus the provider-option
//! lookup that feeds configuration forms.

mod client;
mod types;

#[cfg(test)]
mod tests;

pub use client::LlmConfigClient;
pub use types::{
    CreateLlmConfigRequest, LlmConfig, PartialUpdateLlmConfigRequest, ProviderKind,
    ProviderOption, ProvidersResponse, UpdateLlmConfigRequest,
};
