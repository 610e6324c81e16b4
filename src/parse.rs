use crate::card::Flashcard;

/// Pull the model's flashcard payload out of its raw reply.
///
/// Heuristic extraction: the payload is assumed to span the first `[`
/// through the last `]` of the whole response. Prose containing bracket
/// characters, or a reply with more than one array, defeats it. Any
/// failure, including a missing bracket pair or invalid JSON between the
/// brackets, yields an empty deck rather than an error.
pub fn extract_flashcards(output: &str) -> Vec<Flashcard> {
    let Some(start) = output.find('[') else {
        return Vec::new();
    };
    let Some(end) = output.rfind(']') else {
        return Vec::new();
    };
    if end < start {
        return Vec::new();
    }
    serde_json::from_str(&output[start..=end]).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulls_the_array_out_of_surrounding_prose() {
        let raw = "Here are your cards: [{\"topic\":\"Math\",\"question\":\"2+2?\",\"answer\":\"4\",\"difficulty\":\"Easy\"}] Enjoy!";
        let cards = extract_flashcards(raw);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].topic, "Math");
        assert_eq!(cards[0].question, "2+2?");
        assert_eq!(cards[0].answer, "4");
        assert_eq!(cards[0].difficulty, "Easy");
    }

    #[test]
    fn no_brackets_means_no_cards() {
        assert!(extract_flashcards("I could not produce any flashcards.").is_empty());
        assert!(extract_flashcards("").is_empty());
    }

    #[test]
    fn invalid_json_between_brackets_means_no_cards() {
        assert!(extract_flashcards("[{bad json}]").is_empty());
    }

    #[test]
    fn reversed_brackets_mean_no_cards() {
        assert!(extract_flashcards("] nothing useful [").is_empty());
    }

    #[test]
    fn missing_fields_are_defaulted() {
        let cards = extract_flashcards(r#"[{"question":"Capital of France?","answer":"Paris"}]"#);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].topic, "General");
        assert_eq!(cards[0].difficulty, "");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let cards = extract_flashcards(
            r#"[{"topic":"Math","question":"2+2?","answer":"4","difficulty":"Easy","confidence":0.9}]"#,
        );
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].topic, "Math");
    }
}
