use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Config root must be a JSON object")]
    NotAnObject,

    #[error("'theme' must be an object of token overrides")]
    ThemeNotAnObject,

    #[error("'components' must be an array")]
    ComponentsNotAnArray,

    #[error("Component entry at index {index} must be an object")]
    EntryNotAnObject { index: usize },

    #[error("Component entry at index {index} is missing a string 'type' field")]
    MissingType { index: usize },

    #[error("Invalid content for component '{kind}' at index {index}: {reason}")]
    InvalidContent {
        index: usize,
        kind: String,
        reason: String,
    },

    #[error("JSON parse error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err.to_string())
    }
}
