//! Error Types
//!
//! Failures of REST calls and form validation.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Remote API failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Food #{id} not found")]
    NotFound { id: u32 },

    #[error("Server responded {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map a non-success HTTP status to an error.
    /// `id` is the addressed food, if the request targeted one.
    pub fn from_status(status: u16, id: Option<u32>, message: impl Into<String>) -> Self {
        match (status, id) {
            (404, Some(id)) => ApiError::NotFound { id },
            _ => ApiError::Status {
                status,
                message: message.into(),
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    /// Worth retrying as-is
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Transport(_) => true,
            ApiError::Status { status, .. } => matches!(status, 408 | 429 | 500..=599),
            ApiError::NotFound { .. } | ApiError::Decode(_) => false,
        }
    }

    /// Text for the error banner, with retry guidance
    pub fn user_message(&self) -> String {
        if self.is_not_found() {
            format!("{}. It may have been removed elsewhere; the list was refreshed.", self)
        } else if self.is_transient() {
            format!("{}. Please try again.", self)
        } else {
            self.to_string()
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Modal form validation failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Name is required")]
    EmptyName,

    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_404_with_id_is_not_found() {
        let err = ApiError::from_status(404, Some(3), "Not Found");
        assert_eq!(err, ApiError::NotFound { id: 3 });
        assert!(err.is_not_found());
        assert!(!err.is_transient());
    }

    #[test]
    fn test_404_on_collection_is_plain_status() {
        let err = ApiError::from_status(404, None, "Not Found");
        assert!(!err.is_not_found());
        assert!(matches!(err, ApiError::Status { status: 404, .. }));
    }

    #[test]
    fn test_transient_classification() {
        assert!(ApiError::Transport("offline".into()).is_transient());
        assert!(ApiError::from_status(503, None, "").is_transient());
        assert!(ApiError::from_status(429, None, "").is_transient());
        assert!(!ApiError::from_status(400, None, "").is_transient());
        assert!(!ApiError::Decode("eof".into()).is_transient());
    }

    #[test]
    fn test_user_message_guidance() {
        assert!(ApiError::Transport("offline".into())
            .user_message()
            .ends_with("Please try again."));
        assert!(ApiError::NotFound { id: 1 }.user_message().contains("refreshed"));
        assert_eq!(
            ApiError::from_status(400, None, "bad").user_message(),
            "Server responded 400: bad"
        );
    }
}
