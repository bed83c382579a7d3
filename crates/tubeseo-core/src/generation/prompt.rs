//! Prompt builders for the three generation operations.

use tubeseo_types::thumbnail::ThumbnailRequest;

/// Role and guidelines for primary content generation.
const PRIMARY_CONTENT_GUIDELINES: &str = r#"You are a world-class YouTube growth strategist and an expert copywriter.
Your task is to write a title, description, hashtags, keywords and a pinned comment for a YouTube video about the topic below, with the goal of maximizing reach and engagement.
Follow these strict guidelines:

- **Magnetic title**: Write an irresistible title that maximizes click-through rate (CTR). It must be between 60 and 70 characters. Use numbers, power words (e.g. Secret, Ultimate, Incredible), curiosity-driven questions or emotional triggers to grab attention immediately.

- **Strategic description**: Write a description of at least 200 words in three clear parts:
  1. **Hook (first 2-3 lines)**: Summarize the value of the video attractively so it shows up in search results.
  2. **Detailed body**: Expand on the content of the video, weaving in the keywords naturally.
  3. **Calls to action and resources**: Include clear placeholders for the creator to fill in, such as `[RESOURCE OR PRODUCT LINK]` and `[RELATED VIDEO LINK]`, and end with a clear call to subscribe, such as `Don't miss more content like this! Subscribe here: [SUBSCRIBE LINK]`.

- **Hashtags**: Produce 10 to 15 relevant hashtags. Mix broad hashtags with more specific niche ones.

- **Keywords**: Provide 40 high-value SEO keywords the creator should add to the video tags.

- **Viral pinned comment**: Write a short, punchy comment to pin in the comments section. It must:
  1. Open with a hook that sparks curiosity or a bold claim related to the video.
  2. Add extra value or a provocative thought that is not already in the description.
  3. End with an open question or a clear call to action inviting viewers to comment (e.g. 'What's your take?', 'Tell me your experience below', 'Which topic should I cover next?')."#;

/// Role and guidelines for alternative title generation.
const ALTERNATIVE_TITLES_GUIDELINES: &str = r#"You are a YouTube growth expert specialized in A/B testing video titles.
Given a video topic and an original title, write 2-3 distinct, creative title alternatives.

For each alternative also provide a "seoScore" from 0 to 100. The score must reflect the title's potential for a high click-through rate (CTR) based on curiosity, clear benefit, keyword use and emotional impact.

Each alternative must explore a different psychological angle to maximize CTR, for example:
- Curiosity-driven (e.g. "The Secret Nobody Tells You About...")
- Benefit-led (e.g. "Get [Desired Result] With This Simple Trick")
- Question form (e.g. "Are You Making This Mistake When [Activity]?")
- Direct and to the point (e.g. "The Ultimate Guide to [Topic]")

Keep each title at the ideal length of 60-70 characters."#;

/// Legibility requirements appended when the thumbnail carries overlay text.
const OVERLAY_LEGIBILITY: &str = "The text must be highly legible, professional, have a subtle shadow for contrast, and be fully visible without being cut off.";

/// Prompt for title, description, hashtags, keywords and pinned comment.
///
/// A non-blank `custom_instruction` is appended, trimmed, as an additional
/// instruction block.
pub fn primary_content_prompt(topic: &str, custom_instruction: Option<&str>, language: &str) -> String {
    let mut prompt = format!(
        "{PRIMARY_CONTENT_GUIDELINES}\n\nWrite all of the content in {language}.\n\nVideo topic: \"{topic}\"\n"
    );

    if let Some(instruction) = custom_instruction.map(str::trim).filter(|i| !i.is_empty()) {
        prompt.push_str(&format!(
            "\n\n**Important additional instruction from the user**: {instruction}\n"
        ));
    }

    prompt.push_str("\nReturn the content strictly in the requested JSON format.");
    prompt
}

/// Prompt for 2-3 scored alternatives to `original_title`.
pub fn alternative_titles_prompt(topic: &str, original_title: &str, language: &str) -> String {
    format!(
        "{ALTERNATIVE_TITLES_GUIDELINES}\n\nWrite the titles in {language}.\n\n\
         Video topic: \"{topic}\"\n\
         Original title: \"{original_title}\"\n\n\
         Return the titles and their SEO scores only in the requested JSON format, under the \"titles\" key."
    )
}

/// Prompt for a thumbnail image.
///
/// A non-blank custom prompt is used verbatim. Otherwise the prompt is
/// synthesized from the topic, the style description and the overlay text.
pub fn thumbnail_prompt(request: &ThumbnailRequest) -> String {
    if let Some(custom) = request.effective_custom_prompt() {
        return custom.to_string();
    }

    let mut parts = vec![
        format!("YouTube thumbnail for a video titled \"{}\".", request.topic),
        format!("Visual style: {}.", request.style.description()),
        "Aspect ratio: 16:9.".to_string(),
    ];

    match request.effective_text_overlay() {
        Some(text) => {
            parts.push(format!("The image must feature the text \"{text}\"."));
            parts.push(OVERLAY_LEGIBILITY.to_string());
        }
        None => parts.push("The image should not contain any text.".to_string()),
    }

    parts.join(" ")
}
