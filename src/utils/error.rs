use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordHeatError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to read '{path}': {source}")]
    InputError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File '{path}' is not valid UTF-8 text")]
    EncodingError { path: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl WordHeatError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            WordHeatError::InputError { .. } | WordHeatError::EncodingError { .. } => {
                ErrorCategory::Input
            }
            WordHeatError::ConfigValidationError { .. }
            | WordHeatError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            WordHeatError::IoError(_) | WordHeatError::SerializationError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 下游關閉管線 (例如 `| head`) 不算失敗
            WordHeatError::IoError(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                ErrorSeverity::Low
            }
            WordHeatError::InputError { source, .. }
                if source.kind() == std::io::ErrorKind::Interrupted =>
            {
                ErrorSeverity::Medium
            }
            WordHeatError::InputError { .. }
            | WordHeatError::EncodingError { .. }
            | WordHeatError::ConfigValidationError { .. }
            | WordHeatError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            WordHeatError::IoError(_) | WordHeatError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            WordHeatError::InputError { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => {
                    "Check the file path, or pass the file to analyze as the first argument"
                        .to_string()
                }
                std::io::ErrorKind::PermissionDenied => {
                    "Make sure the file is readable by the current user".to_string()
                }
                _ => "Retry the command; the file could not be read".to_string(),
            },
            WordHeatError::EncodingError { .. } => {
                "Convert the file to UTF-8 before analyzing it".to_string()
            }
            WordHeatError::ConfigValidationError { .. } => {
                "Check the TOML configuration file for syntax errors".to_string()
            }
            WordHeatError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and run again", field)
            }
            WordHeatError::IoError(_) => "Check that standard output is writable".to_string(),
            WordHeatError::SerializationError(_) => {
                "Use --format text while the JSON report is unavailable".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            WordHeatError::InputError { path, .. } => format!("Cannot read '{}'", path),
            WordHeatError::EncodingError { path } => {
                format!("'{}' does not look like a UTF-8 text file", path)
            }
            WordHeatError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Invalid setting {} = {}: {}", field, value, reason),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WordHeatError>;
