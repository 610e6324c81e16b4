use anyhow::{Context, Result, anyhow};
use async_openai::types::{
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_openai::{Client, config::OpenAIConfig};

const FLASHCARD_MODEL: &str = "gpt-4o-mini";

const SYSTEM_PROMPT: &str = r#"
You generate study flashcards from educational content.
Respond with a JSON array only, no surrounding prose.
Each element must be an object with the keys 'topic', 'question', 'answer', and 'difficulty'.
"#;

/// Deterministic concatenation of subject, instructions, and content.
/// This is the entire contract communicated to the model; results are
/// best-effort.
pub fn build_user_prompt(subject: &str, content: &str) -> String {
    format!(
        "Subject: {subject}\n\
         Generate 15 flashcards from the following educational content. \
         Each flashcard must include a question, an answer, a difficulty level (Easy, Medium, or Hard), \
         and a topic field that reflects the detected topic header or section from the content. \
         Return the result as a JSON list, where each flashcard has 'topic', 'question', 'answer', and 'difficulty'.\n\n\
         Content: {content}\n"
    )
}

/// One round-trip to the model, returning its raw text. No timeout beyond
/// the transport's own, no retry, no streaming.
pub async fn request_flashcard_text(
    client: &Client<OpenAIConfig>,
    subject: &str,
    content: &str,
) -> Result<String> {
    let request = CreateChatCompletionRequestArgs::default()
        .model(FLASHCARD_MODEL)
        .max_completion_tokens(5000_u32)
        .temperature(0.2)
        .messages([
            ChatCompletionRequestSystemMessageArgs::default()
                .content(SYSTEM_PROMPT)
                .build()?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(build_user_prompt(subject, content))
                .build()?
                .into(),
        ])
        .build()?;

    let response = client
        .chat()
        .create(request)
        .await
        .context("Failed to get a response from the model")?;

    let output = response
        .choices
        .first()
        .and_then(|c| c.message.content.clone())
        .ok_or_else(|| anyhow!("No content returned from model"))?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_prompt_embeds_subject_and_content() {
        let prompt = build_user_prompt("Biology", "Mitochondria are organelles.");
        assert!(prompt.starts_with("Subject: Biology\n"));
        assert!(prompt.contains("Generate 15 flashcards"));
        assert!(prompt.contains("'topic', 'question', 'answer', and 'difficulty'"));
        assert!(prompt.ends_with("Content: Mitochondria are organelles.\n"));
    }

    #[test]
    fn user_prompt_is_deterministic() {
        let a = build_user_prompt("General", "text");
        let b = build_user_prompt("General", "text");
        assert_eq!(a, b);
    }
}
