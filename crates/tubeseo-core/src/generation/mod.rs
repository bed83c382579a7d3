//! Generation client: turns topics into SEO content, alternative titles and
//! thumbnails through a [`GenerativeProvider`](crate::llm::provider::GenerativeProvider).

pub mod client;
pub mod prompt;
pub mod schema;

pub use client::{GenerationClient, strip_code_fence};
