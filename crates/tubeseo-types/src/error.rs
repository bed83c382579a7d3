use thiserror::Error;

/// Errors surfaced to the user by the generation operations.
///
/// Messages are user-facing; provider internals never appear in them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    GenerationFailed(String),

    #[error(
        "The AI rejected the image request (reason: {reason}{}). Try a different or simpler prompt, especially if you are using a custom prompt.",
        .block_reason.as_deref().map(|b| format!(", block reason: {b}")).unwrap_or_default()
    )]
    ContentRejected {
        reason: String,
        block_reason: Option<String>,
    },

    #[error(
        "The AI response did not contain an image. This can be caused by safety filters or an overly complex prompt."
    )]
    NoImageReturned,

    #[error("a newer request of the same kind replaced this one")]
    Superseded,
}

/// Errors from the local persistent store.
///
/// Never fatal: reads fall back to defaults and writes are logged.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage read failed: {0}")]
    Read(String),

    #[error("storage write failed: {0}")]
    Write(String),

    #[error("stored value under '{key}' is corrupt: {reason}")]
    Corrupt { key: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_rejected_mentions_both_reasons() {
        let err = GenerationError::ContentRejected {
            reason: "SAFETY".to_string(),
            block_reason: Some("OTHER".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("SAFETY"));
        assert!(msg.contains("block reason: OTHER"));
    }

    #[test]
    fn test_content_rejected_without_block_reason() {
        let err = GenerationError::ContentRejected {
            reason: "IMAGE_SAFETY".to_string(),
            block_reason: None,
        };
        let msg = err.to_string();
        assert!(msg.contains("(reason: IMAGE_SAFETY)"));
        assert!(!msg.contains("block reason"));
    }

    #[test]
    fn test_invalid_input_display_is_message() {
        let err = GenerationError::InvalidInput("Please enter a topic for the video.".to_string());
        assert_eq!(err.to_string(), "Please enter a topic for the video.");
    }

    #[test]
    fn test_persistence_error_display() {
        let err = PersistenceError::Corrupt {
            key: "yt-seo-history".to_string(),
            reason: "expected value".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "stored value under 'yt-seo-history' is corrupt: expected value"
        );
    }
}
