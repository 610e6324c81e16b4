use async_openai::{Client, config::OpenAIConfig};

use crate::llm::request_flashcard_text;
use crate::parse::extract_flashcards;
use crate::session::Session;

/// Run one generate action: prompt the model, parse its reply, and on a
/// non-empty result replace the session's deck. Returns how many cards
/// were produced.
///
/// Every failure collapses to zero cards. API and network errors are
/// logged to stderr; an unparseable reply is silently empty, so the user
/// cannot tell the two apart. The previous deck is kept either way.
pub async fn run(
    session: &mut Session,
    client: &Client<OpenAIConfig>,
    subject: &str,
    input_text: &str,
) -> usize {
    let output = match request_flashcard_text(client, subject, input_text).await {
        Ok(output) => output,
        Err(error) => {
            eprintln!("error: {error:#}");
            return 0;
        }
    };

    let cards = extract_flashcards(&output);
    if cards.is_empty() {
        return 0;
    }

    let count = cards.len();
    session.replace(cards);
    count
}
