//! User-prompt types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Prompt categories understood by the server.
///
/// The four analysis types below `General` are consulted programmatically
/// during requirement review; a user can hold at most one prompt of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptType {
    General,
    DocumentStructure,
    DirectAnalysis,
    GlobalAnalysis,
    ModuleAnalysis,
    ConsistencyAnalysis,
}

impl PromptType {
    /// Wire name used in query parameters.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::DocumentStructure => "document_structure",
            Self::DirectAnalysis => "direct_analysis",
            Self::GlobalAnalysis => "global_analysis",
            Self::ModuleAnalysis => "module_analysis",
            Self::ConsistencyAnalysis => "consistency_analysis",
        }
    }

    /// Display label, matching the server's choice labels.
    pub fn label(self) -> &'static str {
        match self {
            Self::General => "通用对话",
            Self::DocumentStructure => "文档结构分析",
            Self::DirectAnalysis => "直接分析",
            Self::GlobalAnalysis => "全局分析",
            Self::ModuleAnalysis => "模块分析",
            Self::ConsistencyAnalysis => "一致性分析",
        }
    }
}

/// The prompt types consulted during requirement review.
pub const REQUIREMENT_PROMPT_TYPES: [PromptType; 4] = [
    PromptType::DocumentStructure,
    PromptType::DirectAnalysis,
    PromptType::GlobalAnalysis,
    PromptType::ModuleAnalysis,
];

/// A user's stored prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPrompt {
    pub id: i64,
    pub name: String,
    pub content: String,
    #[serde(default)]
    pub description: Option<String>,
    pub prompt_type: PromptType,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Ids of the requirement-review prompts a user has customized, keyed by
/// type. Passed to the backend when starting a review.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementPromptIds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_structure: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_analysis: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_analysis: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_analysis: Option<i64>,
}

impl RequirementPromptIds {
    /// True when no requirement-review prompt has been customized.
    pub fn is_empty(&self) -> bool {
        self.document_structure.is_none()
            && self.direct_analysis.is_none()
            && self.global_analysis.is_none()
            && self.module_analysis.is_none()
    }

    pub(crate) fn set(&mut self, prompt_type: PromptType, id: i64) {
        match prompt_type {
            PromptType::DocumentStructure => self.document_structure = Some(id),
            PromptType::DirectAnalysis => self.direct_analysis = Some(id),
            PromptType::GlobalAnalysis => self.global_analysis = Some(id),
            PromptType::ModuleAnalysis => self.module_analysis = Some(id),
            PromptType::General | PromptType::ConsistencyAnalysis => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_type_wire_names_match_serde() {
        for prompt_type in [
            PromptType::General,
            PromptType::DocumentStructure,
            PromptType::DirectAnalysis,
            PromptType::GlobalAnalysis,
            PromptType::ModuleAnalysis,
            PromptType::ConsistencyAnalysis,
        ] {
            let json = serde_json::to_value(prompt_type).unwrap();
            assert_eq!(json, prompt_type.as_str());
        }
    }

    #[test]
    fn test_requirement_ids_set_ignores_non_review_types() {
        let mut ids = RequirementPromptIds::default();
        ids.set(PromptType::General, 1);
        ids.set(PromptType::ConsistencyAnalysis, 2);
        assert!(ids.is_empty());

        ids.set(PromptType::GlobalAnalysis, 9);
        assert!(!ids.is_empty());
        assert_eq!(ids.global_analysis, Some(9));
    }
}
