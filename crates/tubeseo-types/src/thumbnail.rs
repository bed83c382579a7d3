//! Thumbnail generation types.

use std::fmt;
use std::str::FromStr;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Visual style of a generated thumbnail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailStyle {
    #[default]
    Cinematic,
    Vibrant,
    Minimalist,
    Photorealistic,
}

impl ThumbnailStyle {
    pub const ALL: [ThumbnailStyle; 4] = [
        ThumbnailStyle::Cinematic,
        ThumbnailStyle::Vibrant,
        ThumbnailStyle::Minimalist,
        ThumbnailStyle::Photorealistic,
    ];

    /// Parse a style name, falling back to [`ThumbnailStyle::Cinematic`]
    /// for anything unrecognized.
    pub fn parse_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Prompt fragment describing this style.
    pub fn description(&self) -> &'static str {
        match self {
            ThumbnailStyle::Cinematic => "cinematic, dramatic lighting, film-like quality",
            ThumbnailStyle::Vibrant => "vibrant, saturated colors, high contrast",
            ThumbnailStyle::Minimalist => {
                "clean and minimalist, simple background, one clear focal point"
            }
            ThumbnailStyle::Photorealistic => {
                "photorealistic, sharp and detailed professional photograph"
            }
        }
    }
}

impl fmt::Display for ThumbnailStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThumbnailStyle::Cinematic => write!(f, "cinematic"),
            ThumbnailStyle::Vibrant => write!(f, "vibrant"),
            ThumbnailStyle::Minimalist => write!(f, "minimalist"),
            ThumbnailStyle::Photorealistic => write!(f, "photorealistic"),
        }
    }
}

impl FromStr for ThumbnailStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cinematic" => Ok(ThumbnailStyle::Cinematic),
            "vibrant" => Ok(ThumbnailStyle::Vibrant),
            "minimalist" => Ok(ThumbnailStyle::Minimalist),
            "photorealistic" => Ok(ThumbnailStyle::Photorealistic),
            other => Err(format!("invalid thumbnail style: '{other}'")),
        }
    }
}

/// Thumbnail settings chosen by the user, independent of the topic.
///
/// `custom_prompt` and the `style`/`text_overlay` pair are mutually
/// exclusive modes: a non-blank custom prompt wins and the others are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailOptions {
    pub style: ThumbnailStyle,
    pub text_overlay: Option<String>,
    pub custom_prompt: Option<String>,
}

/// A fully specified thumbnail request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailRequest {
    pub topic: String,
    pub style: ThumbnailStyle,
    pub text_overlay: Option<String>,
    pub custom_prompt: Option<String>,
}

impl ThumbnailRequest {
    pub fn new(topic: impl Into<String>, options: ThumbnailOptions) -> Self {
        Self {
            topic: topic.into(),
            style: options.style,
            text_overlay: options.text_overlay,
            custom_prompt: options.custom_prompt,
        }
    }

    /// The custom prompt, if one is set and not blank.
    pub fn effective_custom_prompt(&self) -> Option<&str> {
        self.custom_prompt
            .as_deref()
            .filter(|p| !p.trim().is_empty())
    }

    /// The overlay text, if one is set and not blank.
    pub fn effective_text_overlay(&self) -> Option<&str> {
        self.text_overlay
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// A generated image as returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThumbnailImage {
    /// Base64-encoded image bytes.
    pub data: String,
    pub mime_type: String,
}

impl ThumbnailImage {
    /// Decode the base64 payload into raw image bytes.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(self.data.trim())
    }

    /// File extension matching the MIME type (defaults to `png`).
    pub fn file_extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/jpeg" | "image/jpg" => "jpg",
            "image/webp" => "webp",
            _ => "png",
        }
    }
}
