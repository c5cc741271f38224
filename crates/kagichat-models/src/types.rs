use serde::{Deserialize, Serialize};
use std::fmt;

/// Model tiers understood by the assistant endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModelTier {
    KiQuick,
    KiResearch,
    KiDeepResearch,
    Custom(String),
}

impl ModelTier {
    pub fn as_str(&self) -> &str {
        match self {
            ModelTier::KiQuick => "ki_quick",
            ModelTier::KiResearch => "ki_research",
            ModelTier::KiDeepResearch => "ki_deep_research",
            ModelTier::Custom(name) => name.as_str(),
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            ModelTier::KiQuick => "Ki Quick".to_string(),
            ModelTier::KiResearch => "Ki Research".to_string(),
            ModelTier::KiDeepResearch => "Ki Deep Research".to_string(),
            ModelTier::Custom(name) => name.clone(),
        }
    }

    /// Parse a tier identifier. Unknown identifiers are passed through as `Custom`.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "ki_quick" | "ki-quick" | "quick" => ModelTier::KiQuick,
            "ki_research" | "ki-research" | "research" => ModelTier::KiResearch,
            "ki_deep_research" | "ki-deep-research" | "deep_research" | "deep-research" => {
                ModelTier::KiDeepResearch
            }
            _ => ModelTier::Custom(s.trim().to_string()),
        }
    }
}

impl Default for ModelTier {
    fn default() -> Self {
        ModelTier::KiQuick
    }
}

impl fmt::Display for ModelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ModelTier {
    fn from(s: String) -> Self {
        ModelTier::from_str(&s)
    }
}

impl From<ModelTier> for String {
    fn from(tier: ModelTier) -> Self {
        tier.as_str().to_string()
    }
}
