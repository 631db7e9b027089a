use thiserror::Error;

#[derive(Error, Debug)]
pub enum PollError {
    /// The request never completed: connection, TLS, or a truncated body.
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("{operation} failed with status {status}: {body}")]
    HttpStatusError {
        operation: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Login response missing access_token")]
    MissingTokenError,

    #[error("Validation error on {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A 2xx response whose body is not the expected JSON.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed on {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Network,
    Http,
    Authentication,
    Configuration,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl PollError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        PollError::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// True when the error was raised before any request left the process.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            PollError::ValidationError { .. }
                | PollError::ConfigError { .. }
                | PollError::ConfigValidationError { .. }
                | PollError::InvalidConfigValueError { .. }
        )
    }

    /// HTTP status of a rejected request, if the server answered at all.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            PollError::HttpStatusError { status, .. } => Some(*status),
            PollError::ApiError(e) => e.status(),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PollError::ValidationError { .. } => ErrorCategory::Validation,
            PollError::ApiError(_) => ErrorCategory::Network,
            PollError::HttpStatusError { status, .. }
                if *status == reqwest::StatusCode::UNAUTHORIZED
                    || *status == reqwest::StatusCode::FORBIDDEN =>
            {
                ErrorCategory::Authentication
            }
            PollError::HttpStatusError { .. } => ErrorCategory::Http,
            PollError::MissingTokenError => ErrorCategory::Authentication,
            PollError::ConfigError { .. }
            | PollError::ConfigValidationError { .. }
            | PollError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PollError::IoError(_) | PollError::SerializationError(_) => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::High,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Http | ErrorCategory::Authentication => ErrorSeverity::High,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PollError::ApiError(_) => {
                "Check that the polling service is running and the base URL is correct".to_string()
            }
            PollError::HttpStatusError { status, .. } => match status.as_u16() {
                401 | 403 => "Log in again and make sure you own the poll".to_string(),
                404 => "Check the poll and option ids".to_string(),
                409 | 400 => "The request was rejected; check the input values".to_string(),
                _ => "Inspect the server logs for details".to_string(),
            },
            PollError::MissingTokenError => {
                "The server did not issue a token; verify the login endpoint".to_string()
            }
            PollError::ValidationError { field, .. } => format!("Fix the value of {}", field),
            PollError::ConfigError { .. }
            | PollError::ConfigValidationError { .. }
            | PollError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command line flags".to_string()
            }
            PollError::IoError(_) => "Check file paths and permissions".to_string(),
            PollError::SerializationError(_) => {
                "The response could not be encoded or decoded as JSON".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PollError::ApiError(_) => "Could not reach the polling service".to_string(),
            PollError::HttpStatusError {
                operation, status, ..
            } => format!("{} was rejected by the server ({})", operation, status),
            PollError::MissingTokenError => "Login did not return an access token".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PollError>;
