//! Read-only catalog of situations and categories.
//!
//! The catalog is authored once (YAML or JSON) and never mutated after it is
//! loaded. The built-in document is embedded in the binary and parsed on first
//! use; the parsed value is shared for the rest of the process.

use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::entity::{Category, Situation};
use crate::error::{Result, SyazaiError};
use crate::warnings::{check_catalog, format_warning};

const BUILTIN_CATALOG: &str = include_str!("builtin.yaml");

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    situations: Vec<Situation>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>, situations: Vec<Situation>) -> Self {
        Self {
            categories,
            situations,
        }
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> Result<&'static Catalog> {
        if let Some(catalog) = BUILTIN.get() {
            return Ok(catalog);
        }
        let parsed = Self::from_yaml_str(BUILTIN_CATALOG)?;
        tracing::debug!(
            situations = parsed.situations.len(),
            categories = parsed.categories.len(),
            "loaded built-in catalog"
        );
        Ok(BUILTIN.get_or_init(|| parsed))
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a catalog file. `.json` files are parsed as JSON, anything else as YAML.
    ///
    /// Consistency problems are logged as warnings, never rejected.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            SyazaiError::Catalog(format!("cannot read {}: {}", path.display(), e))
        })?;

        let catalog = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&raw)?,
            _ => Self::from_yaml_str(&raw)?,
        };

        tracing::info!(
            path = %path.display(),
            situations = catalog.situations.len(),
            "loaded catalog"
        );
        for warning in check_catalog(&catalog) {
            tracing::warn!("{}", format_warning(&warning));
        }

        Ok(catalog)
    }

    /// All situations in authoring order.
    pub fn situations(&self) -> &[Situation] {
        &self.situations
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Exact, case-sensitive slug lookup. A miss is an ordinary outcome.
    pub fn find_by_slug(&self, slug: &str) -> Option<&Situation> {
        self.situations.iter().find(|s| s.slug == slug)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Situations whose own `category` field names `id`, in authoring order.
    pub fn situations_in_category<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Situation> + 'a {
        self.situations.iter().filter(move |s| s.category == id)
    }
}
