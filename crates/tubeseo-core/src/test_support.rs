//! Shared fixtures for unit tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tubeseo_types::content::GeneratedContent;
use tubeseo_types::llm::{
    ContentPart, FinishReason, GenerationRequest, GenerationResponse, LlmError, OutputMode,
};

use crate::llm::provider::GenerativeProvider;

type Responder = dyn Fn(&GenerationRequest) -> Result<GenerationResponse, LlmError> + Send + Sync;

/// Provider that answers from a closure and records every request.
///
/// Requests whose prompt contains a registered needle are delayed, which lets
/// tests interleave two in-flight calls deterministically.
#[derive(Clone)]
pub struct ScriptedProvider {
    respond: Arc<Responder>,
    delays: Arc<Vec<(String, Duration)>>,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl ScriptedProvider {
    pub fn new(
        respond: impl Fn(&GenerationRequest) -> Result<GenerationResponse, LlmError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self {
            respond: Arc::new(respond),
            delays: Arc::new(Vec::new()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always answer with a single text part.
    pub fn text(body: &str) -> Self {
        let body = body.to_string();
        Self::new(move |_| Ok(text_response(&body)))
    }

    /// Answer content, titles and image requests the way a healthy provider would.
    pub fn healthy() -> Self {
        Self::new(Self::healthy_response)
    }

    /// The generated title echoes the topic found in the prompt.
    pub fn healthy_response(request: &GenerationRequest) -> Result<GenerationResponse, LlmError> {
        match &request.output {
            OutputMode::Image => Ok(image_response("image/png", "iVBORw0KGgo=")),
            OutputMode::Json { schema } if schema["required"][0] == "titles" => Ok(text_response(
                r#"{"titles":[{"title":"Alt low","seoScore":55},{"title":"Alt high","seoScore":88}]}"#,
            )),
            _ => {
                let topic = quoted_after(&request.prompt, "Video topic: \"").unwrap_or_default();
                let content = sample_content(&format!("Title for {topic}"));
                Ok(text_response(&serde_json::to_string(&content).unwrap()))
            }
        }
    }

    pub fn with_delay_for(mut self, needle: &str, delay: Duration) -> Self {
        Arc::make_mut(&mut self.delays).push((needle.to_string(), delay));
        self
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl GenerativeProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        let delay = self
            .delays
            .iter()
            .find(|(needle, _)| request.prompt.contains(needle.as_str()))
            .map(|(_, delay)| *delay);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        (self.respond)(request)
    }
}

pub fn text_response(body: &str) -> GenerationResponse {
    GenerationResponse {
        finish_reason: Some(FinishReason::Stop),
        parts: vec![ContentPart::Text {
            text: body.to_string(),
        }],
        ..Default::default()
    }
}

pub fn image_response(mime_type: &str, data: &str) -> GenerationResponse {
    GenerationResponse {
        finish_reason: Some(FinishReason::Stop),
        parts: vec![ContentPart::InlineData {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        }],
        ..Default::default()
    }
}

pub fn sample_content(title: &str) -> GeneratedContent {
    GeneratedContent {
        title: title.to_string(),
        description: "Hook.\n\nBody.\n\nSubscribe: [SUBSCRIBE LINK]".to_string(),
        hashtags: vec!["#coffee".to_string(), "#barista".to_string()],
        keywords: vec!["coffee".to_string(), "espresso".to_string()],
        pinned_comment: "What's your favorite brew?".to_string(),
    }
}

fn quoted_after(haystack: &str, marker: &str) -> Option<String> {
    let start = haystack.find(marker)? + marker.len();
    let rest = &haystack[start..];
    let end = rest.find('"')?;
    Some(rest[..end].to_string())
}
