// src/entity/category.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Icon name, mapped to a glyph by the presentation layer
    pub icon: String,
    /// Slugs of the situations listed under this category
    #[serde(default)]
    pub situations: Vec<String>,
}

impl Category {
    pub fn lists(&self, slug: &str) -> bool {
        self.situations.iter().any(|s| s == slug)
    }
}
