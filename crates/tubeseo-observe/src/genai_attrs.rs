//! OpenTelemetry GenAI Semantic Convention attribute constants.
//!
//! Used with `Span::record` on spans that declared the matching field as
//! `tracing::field::Empty`, and as values for the operation name attribute.
//!
//! Span naming convention: `"gen_ai.{operation}"`.

// --- Required attributes ---

/// The name of the operation being performed (e.g., "generate_content").
pub const GEN_AI_OPERATION_NAME: &str = "gen_ai.operation.name";

/// The name of the GenAI provider (e.g., "gemini").
pub const GEN_AI_PROVIDER_NAME: &str = "gen_ai.provider.name";

// --- Recommended attributes ---

/// The model ID requested (e.g., "gemini-2.5-flash").
pub const GEN_AI_REQUEST_MODEL: &str = "gen_ai.request.model";

/// The requested output type ("text", "json" or "image").
pub const GEN_AI_OUTPUT_TYPE: &str = "gen_ai.output.type";

/// The number of input tokens consumed.
pub const GEN_AI_USAGE_INPUT_TOKENS: &str = "gen_ai.usage.input_tokens";

/// The number of output tokens generated.
pub const GEN_AI_USAGE_OUTPUT_TOKENS: &str = "gen_ai.usage.output_tokens";

/// The finish reasons for the response (e.g., "STOP", "SAFETY").
pub const GEN_AI_RESPONSE_FINISH_REASONS: &str = "gen_ai.response.finish_reasons";

/// The unique response ID from the provider.
pub const GEN_AI_RESPONSE_ID: &str = "gen_ai.response.id";

/// The model version that actually served the request.
pub const GEN_AI_RESPONSE_MODEL: &str = "gen_ai.response.model";

// --- Operation name values ---

/// Structured or free-form content generation.
pub const OP_GENERATE_CONTENT: &str = "generate_content";

/// Image generation.
pub const OP_GENERATE_IMAGE: &str = "generate_image";

// --- Provider name values ---

/// Google Gemini provider identifier.
pub const PROVIDER_GEMINI: &str = "gemini";

// --- Output type values ---

pub const OUTPUT_TEXT: &str = "text";
pub const OUTPUT_JSON: &str = "json";
pub const OUTPUT_IMAGE: &str = "image";
