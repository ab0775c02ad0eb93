//! Error type shared by the core modules
//!
//! Form and credential problems are not errors here; they travel as
//! [`AuthError`](crate::AuthError). `LmsError` covers configuration, the
//! auth backend and I/O, each with an [`ErrorContext`] for the logs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{error, warn};

pub type LmsResult<T> = Result<T, LmsError>;

/// Where and when an error happened, plus hints for the operator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Correlates a log line with a rendered 5xx page
    pub error_id: String,
    pub timestamp: DateTime<Utc>,
    /// e.g. `config`, `auth_client`
    pub component: String,
    pub operation: Option<String>,
    pub metadata: HashMap<String, String>,
    pub recovery_suggestions: Vec<String>,
}

impl ErrorContext {
    pub fn new(component: &str) -> Self {
        Self {
            error_id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            component: component.to_string(),
            operation: None,
            metadata: HashMap::new(),
            recovery_suggestions: Vec::new(),
        }
    }

    pub fn with_operation(mut self, operation: &str) -> Self {
        self.operation = Some(operation.to_string());
        self
    }

    pub fn with_metadata(mut self, key: &str, value: &str) -> Self {
        self.metadata.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.recovery_suggestions.push(suggestion.to_string());
        self
    }
}

#[derive(Error, Debug)]
pub enum LmsError {
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        context: ErrorContext,
    },

    /// The auth backend could not be reached
    #[error("Network error: {message}")]
    Network {
        message: String,
        context: ErrorContext,
    },

    /// A settings value is out of range
    #[error("Invalid value for {field}: {message}")]
    Validation {
        message: String,
        field: String,
        context: ErrorContext,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LmsError {
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            LmsError::Config { context, .. }
            | LmsError::Network { context, .. }
            | LmsError::Validation { context, .. } => Some(context),
            LmsError::Io(_) => None,
        }
    }

    /// Whether retrying the same operation can succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(self, LmsError::Network { .. })
    }

    /// Backend hiccups are warnings; everything else is an error
    pub fn log(&self) {
        let error_id = self.context().map(|c| c.error_id.as_str());
        let component = self.context().map(|c| c.component.as_str());
        if self.is_recoverable() {
            warn!(?error_id, ?component, error = %self, "Recoverable error");
        } else {
            error!(?error_id, ?component, error = %self, "Error occurred");
        }
    }
}

#[macro_export]
macro_rules! config_error {
    ($msg:expr, $component:expr) => {
        $crate::LmsError::Config {
            message: $msg.to_string(),
            source: None,
            context: $crate::ErrorContext::new($component)
                .with_suggestion("Check your configuration file"),
        }
    };
    ($msg:expr, $component:expr, $source:expr) => {
        $crate::LmsError::Config {
            message: $msg.to_string(),
            source: Some(Box::new($source)),
            context: $crate::ErrorContext::new($component)
                .with_suggestion("Check your configuration file"),
        }
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr, $field:expr, $component:expr) => {
        $crate::LmsError::Validation {
            message: $msg.to_string(),
            field: $field.to_string(),
            context: $crate::ErrorContext::new($component).with_operation("validate"),
        }
    };
}

#[macro_export]
macro_rules! network_error {
    ($msg:expr, $component:expr) => {
        $crate::LmsError::Network {
            message: $msg.to_string(),
            context: $crate::ErrorContext::new($component),
        }
    };
}
