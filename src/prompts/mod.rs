//! User-prompt lookups, including the helpers consulted when starting a
//! requirement review.

mod client;
mod types;


pub use client::PromptClient;
pub use types::{PromptType, REQUIREMENT_PROMPT_TYPES, RequirementPromptIds, UserPrompt};
