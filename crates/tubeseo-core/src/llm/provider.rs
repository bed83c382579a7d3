//! GenerativeProvider trait definition.
//!
//! This is the core abstraction that all generative backends implement.
//! Uses RPITIT for `generate`; see [`super::box_provider`] for the
//! object-safe wrapper used at runtime.

use tubeseo_types::llm::{GenerationRequest, GenerationResponse, LlmError};

/// Trait for generative AI backends (Gemini, test doubles, ...).
///
/// A request is a prompt plus an output mode (text, schema-constrained JSON,
/// or image). The response carries the returned content parts and the
/// provider's completion signal untouched; interpreting them is the
/// generation client's job.
///
/// Implementations live in tubeseo-infra (e.g., `GeminiProvider`).
pub trait GenerativeProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send a generation request and receive the full response.
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl std::future::Future<Output = Result<GenerationResponse, LlmError>> + Send;
}
