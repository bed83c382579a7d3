//! GenerationClient -- the three generation operations over a provider.
//!
//! Provider and parse failures are logged with their raw detail and mapped to
//! user-facing [`GenerationError`] messages; provider internals never reach
//! the caller.

use serde::Deserialize;
use tubeseo_types::config::AppConfig;
use tubeseo_types::content::{AlternativeTitle, GeneratedContent, MAX_ALTERNATIVE_TITLES};
use tubeseo_types::error::GenerationError;
use tubeseo_types::llm::{GenerationRequest, GenerationResponse, OutputMode};
use tubeseo_types::thumbnail::{ThumbnailImage, ThumbnailRequest};

use super::{prompt, schema};
use crate::llm::box_provider::BoxGenerativeProvider;

pub const MISSING_TOPIC_MESSAGE: &str = "Please enter a topic for the video.";
pub const MISSING_TITLE_MESSAGE: &str = "Generate the main content first so there is a title to improve.";
pub const CONTENT_FAILED_MESSAGE: &str = "Could not generate the content. Please try again.";
pub const ALTERNATIVES_FAILED_MESSAGE: &str =
    "Could not generate alternative titles. Please try again.";
pub const THUMBNAIL_FAILED_MESSAGE: &str =
    "An unexpected error occurred while generating the thumbnail. Please try again.";

/// Reported as the rejection reason when the provider blocked the prompt
/// before producing any candidate.
pub const PROMPT_BLOCKED_REASON: &str = "PROMPT_BLOCKED";

#[derive(Debug, Deserialize)]
struct TitlesEnvelope {
    titles: Vec<RawTitle>,
}

#[derive(Debug, Deserialize)]
struct RawTitle {
    title: String,
    #[serde(rename = "seoScore")]
    seo_score: f64,
}

/// Client for primary content, alternative titles and thumbnails.
pub struct GenerationClient {
    provider: BoxGenerativeProvider,
    text_model: String,
    image_model: String,
    language: String,
}

impl GenerationClient {
    pub fn new(provider: BoxGenerativeProvider, config: &AppConfig) -> Self {
        Self {
            provider,
            text_model: config.provider.text_model.clone(),
            image_model: config.provider.image_model.clone(),
            language: config.language.clone(),
        }
    }

    /// Name of the underlying provider.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Generate title, description, hashtags, keywords and pinned comment.
    ///
    /// A blank topic fails with `InvalidInput` before any request is issued.
    #[tracing::instrument(
        name = "generate_primary_content",
        skip(self, custom_instruction),
        fields(model = %self.text_model)
    )]
    pub async fn generate_primary_content(
        &self,
        topic: &str,
        custom_instruction: Option<&str>,
    ) -> Result<GeneratedContent, GenerationError> {
        if topic.trim().is_empty() {
            return Err(GenerationError::InvalidInput(MISSING_TOPIC_MESSAGE.to_string()));
        }

        let request = GenerationRequest {
            model: self.text_model.clone(),
            prompt: prompt::primary_content_prompt(topic, custom_instruction, &self.language),
            output: OutputMode::Json {
                schema: schema::generated_content_schema(),
            },
        };

        let failed = || GenerationError::GenerationFailed(CONTENT_FAILED_MESSAGE.to_string());

        let response = self.provider.generate(&request).await.map_err(|e| {
            tracing::error!(error = %e, "primary content request failed");
            failed()
        })?;

        let content = parse_generated_content(&response.text()).map_err(|reason| {
            tracing::error!(%reason, "primary content response unusable");
            failed()
        })?;

        tracing::info!(
            title_len = content.title.chars().count(),
            hashtags = content.hashtags.len(),
            keywords = content.keywords.len(),
            "primary content generated"
        );
        Ok(content)
    }

    /// Generate up to three scored alternatives to `original_title`,
    /// sorted by score descending.
    #[tracing::instrument(
        name = "generate_alternative_titles",
        skip(self, original_title),
        fields(model = %self.text_model)
    )]
    pub async fn generate_alternative_titles(
        &self,
        topic: &str,
        original_title: &str,
    ) -> Result<Vec<AlternativeTitle>, GenerationError> {
        if topic.trim().is_empty() {
            return Err(GenerationError::InvalidInput(MISSING_TOPIC_MESSAGE.to_string()));
        }
        if original_title.trim().is_empty() {
            return Err(GenerationError::InvalidInput(MISSING_TITLE_MESSAGE.to_string()));
        }

        let request = GenerationRequest {
            model: self.text_model.clone(),
            prompt: prompt::alternative_titles_prompt(topic, original_title, &self.language),
            output: OutputMode::Json {
                schema: schema::alternative_titles_schema(),
            },
        };

        let failed = || GenerationError::GenerationFailed(ALTERNATIVES_FAILED_MESSAGE.to_string());

        let response = self.provider.generate(&request).await.map_err(|e| {
            tracing::error!(error = %e, "alternative titles request failed");
            failed()
        })?;

        let titles = parse_alternative_titles(&response.text()).map_err(|reason| {
            tracing::error!(%reason, "alternative titles response unusable");
            failed()
        })?;

        tracing::info!(count = titles.len(), "alternative titles generated");
        Ok(titles)
    }

    /// Generate a 16:9 thumbnail image.
    ///
    /// Without a custom prompt the topic is required.
    #[tracing::instrument(
        name = "generate_thumbnail",
        skip(self, request),
        fields(model = %self.image_model, style = %request.style)
    )]
    pub async fn generate_thumbnail(
        &self,
        request: &ThumbnailRequest,
    ) -> Result<ThumbnailImage, GenerationError> {
        if request.effective_custom_prompt().is_none() && request.topic.trim().is_empty() {
            return Err(GenerationError::InvalidInput(MISSING_TOPIC_MESSAGE.to_string()));
        }

        let generation = GenerationRequest {
            model: self.image_model.clone(),
            prompt: prompt::thumbnail_prompt(request),
            output: OutputMode::Image,
        };

        let response = self.provider.generate(&generation).await.map_err(|e| {
            tracing::error!(error = %e, "thumbnail request failed");
            GenerationError::GenerationFailed(THUMBNAIL_FAILED_MESSAGE.to_string())
        })?;

        let image = extract_thumbnail(&response)?;
        tracing::info!(mime_type = %image.mime_type, bytes_b64 = image.data.len(), "thumbnail generated");
        Ok(image)
    }
}

/// Strip a surrounding Markdown code fence (```` ```json ```` or ```` ``` ````)
/// from a model response.
pub fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest.trim_start();
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest.trim_start();
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest.trim_end();
    }
    text
}

fn parse_generated_content(raw: &str) -> Result<GeneratedContent, String> {
    let content: GeneratedContent =
        serde_json::from_str(strip_code_fence(raw)).map_err(|e| e.to_string())?;

    let blank = content.blank_fields();
    if !blank.is_empty() {
        return Err(format!("blank required fields: {}", blank.join(", ")));
    }
    Ok(content)
}

fn parse_alternative_titles(raw: &str) -> Result<Vec<AlternativeTitle>, String> {
    let envelope: TitlesEnvelope =
        serde_json::from_str(strip_code_fence(raw)).map_err(|e| e.to_string())?;

    let mut titles: Vec<AlternativeTitle> = envelope
        .titles
        .into_iter()
        .map(|raw| AlternativeTitle::from_raw_score(raw.title, raw.seo_score.round() as i64))
        .collect();

    // `sort_by` is stable: equal scores keep the provider's order.
    titles.sort_by(|a, b| b.seo_score.cmp(&a.seo_score));
    titles.truncate(MAX_ALTERNATIVE_TITLES);
    Ok(titles)
}

fn extract_thumbnail(response: &GenerationResponse) -> Result<ThumbnailImage, GenerationError> {
    match &response.finish_reason {
        Some(reason) if !reason.is_stop() => {
            tracing::warn!(
                finish_reason = %reason,
                block_reason = ?response.block_reason,
                "thumbnail generation did not finish normally"
            );
            return Err(GenerationError::ContentRejected {
                reason: reason.to_string(),
                block_reason: response.block_reason.clone(),
            });
        }
        None if response.parts.is_empty() && response.block_reason.is_some() => {
            tracing::warn!(block_reason = ?response.block_reason, "thumbnail prompt blocked");
            return Err(GenerationError::ContentRejected {
                reason: PROMPT_BLOCKED_REASON.to_string(),
                block_reason: response.block_reason.clone(),
            });
        }
        _ => {}
    }

    response
        .first_inline_data()
        .map(|(mime_type, data)| ThumbnailImage {
            data: data.to_string(),
            mime_type: mime_type.to_string(),
        })
        .ok_or(GenerationError::NoImageReturned)
}

impl std::fmt::Debug for GenerationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationClient")
            .field("provider", &self.provider.name())
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .field("language", &self.language)
            .finish()
    }
}
