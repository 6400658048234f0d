// src/entity/situation.rs
use serde::{Deserialize, Serialize};

use super::{ApologyVariant, Method, Recipient, Severity};

/// A reminder shown next to the generated text. Checked state belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
}

/// A static follow-up recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionCard {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Icon name, mapped to a glyph by the presentation layer
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// One scenario requiring an apology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Situation {
    /// Stable lowercase-hyphen key
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Category id
    pub category: String,
    pub severity: Severity,
    #[serde(default)]
    pub variants: Vec<ApologyVariant>,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    #[serde(default)]
    pub suggestions: Vec<SuggestionCard>,
}

impl Situation {
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            description: String::new(),
            category: category.into(),
            severity,
            variants: Vec::new(),
            checklist: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// First variant authored for the pair, if any.
    pub fn variant(&self, recipient: Recipient, method: Method) -> Option<&ApologyVariant> {
        self.variants
            .iter()
            .find(|v| v.matches(recipient, method))
    }

    /// (recipient, method) pairs that have content, in authoring order.
    pub fn available_pairs(&self) -> Vec<(Recipient, Method)> {
        self.variants
            .iter()
            .map(|v| (v.recipient, v.method))
            .collect()
    }
}
