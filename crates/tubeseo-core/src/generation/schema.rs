//! Response schemas declared to the provider for structured output.
//!
//! Written in the OpenAPI subset Gemini accepts (upper-case type names).

use serde_json::{Value, json};

/// Schema for [`GeneratedContent`](tubeseo_types::content::GeneratedContent).
pub fn generated_content_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": {
                "type": "STRING",
                "description": "A magnetic, click-worthy YouTube video title using numbers, power words or questions. Ideal length: 60-70 characters."
            },
            "description": {
                "type": "STRING",
                "description": "A strategic description of 200+ words with a strong opening hook, a detailed body, and explicit placeholders such as [RESOURCE LINK] and [SUBSCRIBE LINK]."
            },
            "hashtags": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "10 to 15 relevant YouTube hashtags, each starting with #."
            },
            "keywords": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "40 important SEO keywords for the video."
            },
            "pinnedComment": {
                "type": "STRING",
                "description": "A viral comment to pin: strong hook, tied to the title and description, ending with a question or call to action."
            }
        },
        "required": ["title", "description", "hashtags", "keywords", "pinnedComment"]
    })
}

/// Schema for the `{ "titles": [...] }` alternative titles envelope.
pub fn alternative_titles_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "titles": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": {
                            "type": "STRING",
                            "description": "An alternative YouTube video title for A/B testing."
                        },
                        "seoScore": {
                            "type": "INTEGER",
                            "description": "SEO score from 0 to 100 rating CTR potential and relevance."
                        }
                    },
                    "required": ["title", "seoScore"]
                },
                "description": "2-3 alternative video titles, each with an SEO score."
            }
        },
        "required": ["titles"]
    })
}
