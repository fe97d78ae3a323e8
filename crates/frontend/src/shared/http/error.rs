use contracts::shared::validation::ValidationError;
use thiserror::Error;

/// Failure of any remote operation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Detected before the network was touched
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Non-2xx response (`status` set) or no response at all
    #[error("{}", describe_transport(.status, .message))]
    Transport {
        status: Option<u16>,
        message: Option<String>,
    },

    #[error("{}", .message.as_deref().unwrap_or("Failed to sign upload"))]
    Signing { message: Option<String> },

    #[error("Upload failed: {path}")]
    Transfer { path: String, status: Option<u16> },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

fn describe_transport(status: &Option<u16>, message: &Option<String>) -> String {
    match (status, message) {
        (_, Some(message)) => message.clone(),
        (Some(status), None) => format!("HTTP {}", status),
        (None, None) => "Network error".to_string(),
    }
}

impl ApiError {
    /// Message for the store's `error` field: the server's message when it
    /// sent one, `fallback` otherwise
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Validation(e) => e.to_string(),
            ApiError::Transport {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Transport { message: None, .. } | ApiError::Decode(_) => fallback.to_string(),
            ApiError::Signing { .. } | ApiError::Transfer { .. } => self.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}
