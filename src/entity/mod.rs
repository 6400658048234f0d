mod category;
mod situation;
mod variant;

pub use category::Category;
pub use situation::{ChecklistItem, Situation, SuggestionCard};
pub use variant::{ApologyVariant, ContentBody, ContentPatch, Excuse, Method, Recipient};

use serde::{Deserialize, Serialize};

use crate::error::SyazaiError;

/// How serious a situation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "軽度",
            Severity::Medium => "中度",
            Severity::High => "重度",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = SyazaiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            _ => Err(SyazaiError::invalid_argument(
                "severity",
                s,
                &["low", "medium", "high"],
            )),
        }
    }
}
