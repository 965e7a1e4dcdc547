use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReviewerError {
    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Persistence errors
    DatabaseError {
        operation: String,
        reason: String,
    },
    NotFound {
        resource: String,
        id: String,
    },

    // Authentication errors
    AuthenticationError {
        reason: String,
    },

    // Parser errors
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
        context: Option<String>,
    },

    // Analysis errors
    AnalysisError {
        stage: String,
        reason: String,
    },

    // Network/API errors
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    // Validation errors
    ValidationError {
        field: String,
        value: String,
        constraint: String,
        suggestion: Option<String>,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },
}

impl ReviewerError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn database_error(operation: &str, reason: &str) -> Self {
        Self::DatabaseError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    pub fn auth_error(reason: &str) -> Self {
        Self::AuthenticationError {
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn analysis_error(stage: &str, reason: &str) -> Self {
        Self::AnalysisError {
            stage: stage.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn network_error(operation: &str, url: Option<&str>, status_code: Option<u16>, reason: &str) -> Self {
        Self::NetworkError {
            operation: operation.to_string(),
            url: url.map(|s| s.to_string()),
            status_code,
            reason: reason.to_string(),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str, suggestion: Option<&str>) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::DatabaseError { .. } => ErrorSeverity::High,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::AnalysisError { .. } => ErrorSeverity::Medium,
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::NetworkError { .. } => ErrorSeverity::Medium,
            Self::AuthenticationError { .. } => ErrorSeverity::Medium,
            Self::NotFound { .. } => ErrorSeverity::Low,
            Self::ValidationError { .. } => ErrorSeverity::Low,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
        }
    }

    /// Message safe to return to an HTTP client.
    pub fn public_message(&self) -> String {
        match self {
            Self::NotFound { resource, .. } => format!("{} not found", resource),
            Self::AuthenticationError { reason } => reason.clone(),
            Self::ValidationError { constraint, .. } => constraint.clone(),
            Self::DatabaseError { .. } => "Database error, please try again".to_string(),
            Self::SystemError { .. } => "Internal server error".to_string(),
            other => other.user_message(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::DatabaseError { operation, reason } => {
                format!("Database error during {}: {}", operation, reason)
            }
            Self::NotFound { resource, id } => {
                format!("{} '{}' not found", resource, id)
            }
            Self::AuthenticationError { reason } => {
                format!("Authentication failed: {}", reason)
            }
            Self::ParseError { content_type, line_number, reason, context } => {
                let mut msg = format!("Parse error in {}: {}", content_type, reason);
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {})", line));
                }
                if let Some(ctx) = context {
                    msg.push_str(&format!("\nContext: {}", ctx));
                }
                msg
            }
            Self::AnalysisError { stage, reason } => {
                format!("Analysis error during {}: {}", stage, reason)
            }
            Self::NetworkError { operation, url, status_code, reason } => {
                let mut msg = format!("Network error during {}: {}", operation, reason);
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg.push_str("\n💡 Check your internet connection and try again");
                msg
            }
            Self::ValidationError { field, value, constraint, suggestion } => {
                let mut msg = format!("Validation error for field '{}': value '{}' violates constraint '{}'", field, value, constraint);
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for ReviewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for ReviewerError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for reviewer operations
pub type ReviewerResult<T> = Result<T, ReviewerError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message
    pub fn handle_error(error: &ReviewerError) {
        let severity = error.severity();
        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());
    }
}

impl From<std::io::Error> for ReviewerError {
    fn from(error: std::io::Error) -> Self {
        ReviewerError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for ReviewerError {
    fn from(error: serde_json::Error) -> Self {
        ReviewerError::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
            context: None,
        }
    }
}

impl From<toml::de::Error> for ReviewerError {
    fn from(error: toml::de::Error) -> Self {
        ReviewerError::ParseError {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.message().to_string(),
            context: None,
        }
    }
}

impl From<reqwest::Error> for ReviewerError {
    fn from(error: reqwest::Error) -> Self {
        ReviewerError::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}

impl From<sqlx::Error> for ReviewerError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => ReviewerError::not_found("Record", "unknown"),
            other => ReviewerError::DatabaseError {
                operation: "query".to_string(),
                reason: other.to_string(),
            },
        }
    }
}
