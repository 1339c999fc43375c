use thiserror::Error;

#[derive(Error, Debug)]
pub enum StrKitError {
    #[error("Index out of range: [{start}, {end}) exceeds {len} code points")]
    IndexOutOfRange { start: usize, end: usize, len: usize },

    #[error("Negative duration: {0} seconds")]
    NegativeDuration(i64),

    #[error("Invalid regular expression: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl StrKitError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            StrKitError::IndexOutOfRange { .. } | StrKitError::NegativeDuration(_) => {
                ErrorSeverity::Low
            }
            StrKitError::InvalidPattern(_)
            | StrKitError::ConfigValidationError { .. }
            | StrKitError::InvalidConfigValueError { .. }
            | StrKitError::MissingConfigError { .. } => ErrorSeverity::Medium,
            StrKitError::CsvError(_) | StrKitError::SerializationError(_) => ErrorSeverity::High,
            StrKitError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StrKitError::IndexOutOfRange { start, end, len } => format!(
                "Requested characters {}..{} but the text only has {}",
                start, end, len
            ),
            StrKitError::NegativeDuration(seconds) => {
                format!("Durations cannot be negative (got {})", seconds)
            }
            StrKitError::InvalidPattern(_) => "The regular expression is not valid".to_string(),
            StrKitError::IoError(e) => format!("Could not read or write a file: {}", e),
            StrKitError::CsvError(e) => format!("The CSV input could not be processed: {}", e),
            StrKitError::SerializationError(e) => format!("Could not write the report: {}", e),
            StrKitError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            StrKitError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            StrKitError::MissingConfigError { field } => {
                format!("Configuration is missing '{}'", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StrKitError::IndexOutOfRange { .. } => {
                "Check the start offset and length against the text length"
            }
            StrKitError::NegativeDuration(_) => "Pass a duration of zero or more seconds",
            StrKitError::InvalidPattern(_) => "Fix the regular expression syntax",
            StrKitError::IoError(_) => "Make sure the paths exist and are accessible",
            StrKitError::CsvError(_) => "Make sure the input is a CSV file with a header row",
            StrKitError::SerializationError(_) => "Check the output path and format",
            StrKitError::ConfigValidationError { .. }
            | StrKitError::InvalidConfigValueError { .. }
            | StrKitError::MissingConfigError { .. } => "Review the TOML configuration file",
        }
    }
}

pub type Result<T> = std::result::Result<T, StrKitError>;
