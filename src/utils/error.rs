use thiserror::Error;

#[derive(Error, Debug)]
pub enum TenderError {
    #[error("Invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl TenderError {
    pub fn invalid_input(input: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidInput { input, reason } => {
                format!("Cannot tender '{}': {}", input, reason)
            }
            Self::IoError(e) => format!("Could not read file: {}", e),
            Self::SerializationError(e) => format!("Could not render output: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => {
                "Pass a whole, non-negative amount (e.g. 116) or a symbol string made of D, Y, N and P"
            }
            Self::IoError(_) => "Check that the config file exists and is readable",
            Self::SerializationError(_) => "Try --format text",
            Self::ConfigError { .. } => "Make sure the config file is valid TOML",
            Self::InvalidConfigValueError { .. } => "Fix the reported field in the config file",
        }
    }
}

pub type Result<T> = std::result::Result<T, TenderError>;
