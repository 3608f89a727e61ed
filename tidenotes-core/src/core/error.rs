//! Error types for the Tide Notes core library.

use thiserror::Error;

/// All errors that can occur within the Tide Notes core library.
#[derive(Debug, Error)]
pub enum TideNotesError {
    /// An HTTP request could not be sent or its reply could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status code.
    #[error("Backend rejected request ({status}): {body}")]
    Backend {
        /// HTTP status code of the reply.
        status: u16,
        /// Reply body, as returned by the backend.
        body: String,
    },

    /// A reply was well-formed but did not carry the expected rows.
    #[error("Unexpected backend reply: {0}")]
    UnexpectedReply(String),

    /// A note payload could not be serialized or deserialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience alias that pins the error type to [`TideNotesError`].
pub type Result<T> = std::result::Result<T, TideNotesError>;

impl TideNotesError {
    /// Returns a short, human-readable message suitable for display to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Http(_) => "Could not reach the notes service — please try again".to_string(),
            Self::Backend { .. } => "The notes service rejected the request — please try again".to_string(),
            Self::UnexpectedReply(_) => "The notes service sent an unexpected reply".to_string(),
            Self::Json(_) => "Data format error".to_string(),
            Self::Config(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_variant_carries_status_and_body() {
        let e = TideNotesError::Backend {
            status: 404,
            body: "relation \"notes\" does not exist".to_string(),
        };
        assert!(e.to_string().contains("404"));
        assert!(e.to_string().contains("notes"));
    }

    #[test]
    fn test_config_user_message_is_verbatim() {
        let e = TideNotesError::Config("SUPABASE_URL is not set".to_string());
        assert_eq!(e.user_message(), "SUPABASE_URL is not set");
    }

    #[test]
    fn test_user_messages_do_not_leak_wire_details() {
        let e = TideNotesError::Backend {
            status: 500,
            body: "stack trace".to_string(),
        };
        assert!(!e.user_message().contains("stack trace"));
    }
}
