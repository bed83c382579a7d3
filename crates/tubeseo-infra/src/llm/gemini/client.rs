//! GeminiProvider -- concrete [`GenerativeProvider`] for the Google Gemini API.
//!
//! Sends requests to `v1beta/models/{model}:generateContent`. Structured JSON
//! output is requested through `responseMimeType` plus `responseSchema`;
//! images through `responseModalities`.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::Instrument;

use tubeseo_core::llm::provider::GenerativeProvider;
use tubeseo_observe::genai_attrs;
use tubeseo_types::llm::{
    ContentPart, FinishReason, GenerationRequest, GenerationResponse, LlmError, OutputMode, Usage,
};

use super::types::{
    GeminiContent, GeminiErrorEnvelope, GeminiGenerationConfig, GeminiPart, GeminiRequest,
    GeminiResponse,
};

/// Google Gemini generative provider.
///
/// # API Key Security
///
/// The API key is stored as a [`SecretString`] and is only exposed when
/// constructing the `x-goog-api-key` header.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    timeout_secs: u64,
}

impl GeminiProvider {
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com";

    /// Create a new Gemini provider with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Provider` if the HTTP client cannot be built.
    pub fn new(api_key: SecretString, timeout: Duration) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Provider {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_key,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout_secs: timeout.as_secs(),
        })
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    /// Convert a generic [`GenerationRequest`] into a [`GeminiRequest`].
    fn to_gemini_request(request: &GenerationRequest) -> GeminiRequest {
        let generation_config = match &request.output {
            OutputMode::Text => None,
            OutputMode::Json { schema } => Some(GeminiGenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(schema.clone()),
                ..Default::default()
            }),
            OutputMode::Image => Some(GeminiGenerationConfig {
                response_modalities: Some(vec!["IMAGE".to_string()]),
                ..Default::default()
            }),
        };

        GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: Some(request.prompt.clone()),
                    ..Default::default()
                }],
            }],
            generation_config,
        }
    }

    /// Convert a [`GeminiResponse`] into the generic [`GenerationResponse`].
    ///
    /// Only the first candidate is considered.
    fn from_gemini_response(response: GeminiResponse) -> GenerationResponse {
        let candidate = response.candidates.into_iter().next();
        let finish_reason = candidate
            .as_ref()
            .and_then(|c| c.finish_reason.clone())
            .map(FinishReason::from);

        let parts = candidate
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| match (part.inline_data, part.text) {
                        (Some(inline), _) => Some(ContentPart::InlineData {
                            mime_type: inline.mime_type,
                            data: inline.data,
                        }),
                        (None, Some(text)) => Some(ContentPart::Text { text }),
                        (None, None) => None,
                    })
                    .collect()
            })
            .unwrap_or_default();

        let usage = response
            .usage_metadata
            .map(|u| Usage {
                input_tokens: u.prompt_token_count,
                output_tokens: u.candidates_token_count,
            })
            .unwrap_or_default();

        GenerationResponse {
            id: response.response_id,
            model: response.model_version,
            finish_reason,
            block_reason: response.prompt_feedback.and_then(|f| f.block_reason),
            parts,
            usage,
        }
    }

    /// Map a non-success HTTP status to an [`LlmError`].
    fn status_error(status: reqwest::StatusCode, retry_after: Option<u64>, body: &str) -> LlmError {
        let message = serde_json::from_str::<GeminiErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| body.to_string());

        match status.as_u16() {
            401 | 403 => LlmError::AuthenticationFailed,
            429 => LlmError::RateLimited {
                retry_after_ms: retry_after.map(|secs| secs * 1000),
            },
            _ => LlmError::Provider {
                message: format!("HTTP {status}: {message}"),
            },
        }
    }

    async fn send(&self, request: &GenerationRequest) -> Result<GenerationResponse, LlmError> {
        let body = Self::to_gemini_request(request);

        let response = self
            .client
            .post(self.url(&request.model))
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout(self.timeout_secs)
                } else {
                    LlmError::Provider {
                        message: format!("HTTP request failed: {e}"),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok());
            let error_body = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, retry_after, &error_body));
        }

        let gemini_resp: GeminiResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                LlmError::Timeout(self.timeout_secs)
            } else {
                LlmError::Deserialization(format!("failed to parse response: {e}"))
            }
        })?;

        Ok(Self::from_gemini_response(gemini_resp))
    }
}

// GeminiProvider intentionally does NOT derive Debug.

impl GenerativeProvider for GeminiProvider {
    fn name(&self) -> &str {
        genai_attrs::PROVIDER_GEMINI
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, LlmError> {
        let (operation, output_type) = match request.output {
            OutputMode::Text => (genai_attrs::OP_GENERATE_CONTENT, genai_attrs::OUTPUT_TEXT),
            OutputMode::Json { .. } => (genai_attrs::OP_GENERATE_CONTENT, genai_attrs::OUTPUT_JSON),
            OutputMode::Image => (genai_attrs::OP_GENERATE_IMAGE, genai_attrs::OUTPUT_IMAGE),
        };

        let span = tracing::info_span!(
            "gen_ai.generate",
            gen_ai.operation.name = operation,
            gen_ai.provider.name = genai_attrs::PROVIDER_GEMINI,
            gen_ai.request.model = %request.model,
            "gen_ai.output.type" = output_type,
            gen_ai.response.id = tracing::field::Empty,
            gen_ai.response.model = tracing::field::Empty,
            gen_ai.response.finish_reasons = tracing::field::Empty,
            gen_ai.usage.input_tokens = tracing::field::Empty,
            gen_ai.usage.output_tokens = tracing::field::Empty,
        );

        let response = self.send(request).instrument(span.clone()).await?;

        if let Some(id) = &response.id {
            span.record(genai_attrs::GEN_AI_RESPONSE_ID, id.as_str());
        }
        if let Some(model) = &response.model {
            span.record(genai_attrs::GEN_AI_RESPONSE_MODEL, model.as_str());
        }
        if let Some(reason) = &response.finish_reason {
            span.record(
                genai_attrs::GEN_AI_RESPONSE_FINISH_REASONS,
                tracing::field::display(reason),
            );
        }
        span.record(genai_attrs::GEN_AI_USAGE_INPUT_TOKENS, response.usage.input_tokens);
        span.record(genai_attrs::GEN_AI_USAGE_OUTPUT_TOKENS, response.usage.output_tokens);

        Ok(response)
    }
}
