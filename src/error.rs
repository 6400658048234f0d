use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyazaiError {
    #[error("Situation not found: {0}")]
    SituationNotFound(String),

    #[error("Template not ready for '{slug}' ({recipient} / {method})")]
    NoTemplate {
        slug: String,
        recipient: String,
        method: String,
    },

    #[error("Invalid value '{value}' for {field}. Valid values: {}", valid.join(", "))]
    InvalidArgument {
        field: String,
        value: String,
        valid: Vec<String>,
    },

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SyazaiError {
    pub(crate) fn invalid_argument(field: &str, value: &str, valid: &[&str]) -> Self {
        SyazaiError::InvalidArgument {
            field: field.to_string(),
            value: value.to_string(),
            valid: valid.iter().map(|v| v.to_string()).collect(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SyazaiError>;
