//! BoxGenerativeProvider -- object-safe dynamic dispatch wrapper for GenerativeProvider.
//!
//! 1. Define an object-safe `GenerativeProviderDyn` trait with boxed futures
//! 2. Blanket-impl `GenerativeProviderDyn` for all `T: GenerativeProvider`
//! 3. `BoxGenerativeProvider` wraps `Box<dyn GenerativeProviderDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use tubeseo_types::llm::{GenerationRequest, GenerationResponse, LlmError};

use super::provider::GenerativeProvider;

/// Object-safe version of [`GenerativeProvider`] with boxed futures.
pub trait GenerativeProviderDyn: Send + Sync {
    fn name(&self) -> &str;

    fn generate_boxed<'a>(
        &'a self,
        request: &'a GenerationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<GenerationResponse, LlmError>> + Send + 'a>>;
}

impl<T: GenerativeProvider> GenerativeProviderDyn for T {
    fn name(&self) -> &str {
        GenerativeProvider::name(self)
    }

    fn generate_boxed<'a>(
        &'a self,
        request: &'a GenerationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<GenerationResponse, LlmError>> + Send + 'a>> {
        Box::pin(self.generate(request))
    }
}

/// Type-erased generative provider for runtime provider selection.
///
/// Since `GenerativeProvider` uses RPITIT, it cannot be used as a trait
/// object directly. `BoxGenerativeProvider` provides equivalent methods that
/// delegate to the inner `GenerativeProviderDyn` trait object.
pub struct BoxGenerativeProvider {
    inner: Box<dyn GenerativeProviderDyn + Send + Sync>,
}

impl BoxGenerativeProvider {
    /// Wrap a concrete `GenerativeProvider` in a type-erased box.
    pub fn new<T: GenerativeProvider + 'static>(provider: T) -> Self {
        Self {
            inner: Box::new(provider),
        }
    }

    /// Human-readable provider name.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Send a generation request and receive the full response.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, LlmError> {
        self.inner.generate_boxed(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tubeseo_types::llm::{ContentPart, OutputMode};

    struct EchoProvider;

    impl GenerativeProvider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        async fn generate(
            &self,
            request: &GenerationRequest,
        ) -> Result<GenerationResponse, LlmError> {
            Ok(GenerationResponse {
                parts: vec![ContentPart::Text {
                    text: request.prompt.clone(),
                }],
                ..Default::default()
            })
        }
    }

    #[tokio::test]
    async fn test_box_provider_delegates() {
        let provider = BoxGenerativeProvider::new(EchoProvider);
        assert_eq!(provider.name(), "echo");

        let request = GenerationRequest {
            model: "m".to_string(),
            prompt: "hello".to_string(),
            output: OutputMode::Text,
        };
        let response = provider.generate(&request).await.unwrap();
        assert_eq!(response.text(), "hello");
    }
}
