//! Generative provider request/response types.
//!
//! These model the narrow contract between the generation client and any
//! concrete provider: a prompt plus an output mode goes in, content parts and
//! a completion signal come out. Provider wire formats live in tubeseo-infra.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What kind of output the provider is asked to produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputMode {
    /// Free-form text.
    Text,
    /// JSON matching the declared schema.
    Json { schema: serde_json::Value },
    /// Image data only.
    Image,
}

/// Request to a generative provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
    pub output: OutputMode,
}

/// One piece of returned content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    InlineData { mime_type: String, data: String },
}

/// Why the provider stopped generating.
///
/// Unknown values are kept verbatim in [`FinishReason::Other`] so they can be
/// reported back to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FinishReason {
    Stop,
    MaxTokens,
    Safety,
    Recitation,
    ProhibitedContent,
    ImageSafety,
    Other(String),
}

impl FinishReason {
    /// Whether generation finished normally.
    pub fn is_stop(&self) -> bool {
        matches!(self, FinishReason::Stop)
    }
}

impl fmt::Display for FinishReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinishReason::Stop => write!(f, "STOP"),
            FinishReason::MaxTokens => write!(f, "MAX_TOKENS"),
            FinishReason::Safety => write!(f, "SAFETY"),
            FinishReason::Recitation => write!(f, "RECITATION"),
            FinishReason::ProhibitedContent => write!(f, "PROHIBITED_CONTENT"),
            FinishReason::ImageSafety => write!(f, "IMAGE_SAFETY"),
            FinishReason::Other(raw) => write!(f, "{raw}"),
        }
    }
}

impl FromStr for FinishReason {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_uppercase().as_str() {
            "STOP" => FinishReason::Stop,
            "MAX_TOKENS" => FinishReason::MaxTokens,
            "SAFETY" => FinishReason::Safety,
            "RECITATION" => FinishReason::Recitation,
            "PROHIBITED_CONTENT" => FinishReason::ProhibitedContent,
            "IMAGE_SAFETY" => FinishReason::ImageSafety,
            _ => FinishReason::Other(s.to_string()),
        })
    }
}

impl From<String> for FinishReason {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(reason) => reason,
            Err(never) => match never {},
        }
    }
}

impl From<FinishReason> for String {
    fn from(value: FinishReason) -> Self {
        value.to_string()
    }
}

/// Token usage reported by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Response from a generative provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub id: Option<String>,
    pub model: Option<String>,
    /// Completion signal of the first candidate, if any candidate was returned.
    pub finish_reason: Option<FinishReason>,
    /// Prompt-level block reason reported by the provider's safety filters.
    pub block_reason: Option<String>,
    pub parts: Vec<ContentPart>,
    #[serde(default)]
    pub usage: Usage,
}

impl GenerationResponse {
    /// Concatenated text of all text parts.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| match part {
                ContentPart::Text { text } => Some(text.as_str()),
                ContentPart::InlineData { .. } => None,
            })
            .collect::<Vec<_>>()
            .join("")
    }

    /// The first inline data part, as `(mime_type, base64_data)`.
    pub fn first_inline_data(&self) -> Option<(&str, &str)> {
        self.parts.iter().find_map(|part| match part {
            ContentPart::InlineData { mime_type, data } if !data.is_empty() => {
                Some((mime_type.as_str(), data.as_str()))
            }
            _ => None,
        })
    }
}

/// Errors from generative provider operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
