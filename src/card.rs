use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

fn default_topic() -> String {
    "General".to_string()
}

/// One generated question/answer record.
///
/// Defaults for fields the model omits are applied once, at
/// deserialization, so the grouper, exporter, and renderer all see
/// fully-populated records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    #[serde(default = "default_topic")]
    pub topic: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub difficulty: String,
}

impl Flashcard {
    /// Difficulty label as shown to the user. The model is asked for
    /// Easy/Medium/Hard but the field is free-form in practice.
    pub fn display_difficulty(&self) -> &str {
        if self.difficulty.is_empty() {
            "Unknown"
        } else {
            &self.difficulty
        }
    }
}

/// Partition cards by topic, keeping topics in first-appearance order and
/// cards in their original relative order within each topic.
pub fn group_by_topic(cards: &[Flashcard]) -> IndexMap<String, Vec<Flashcard>> {
    let mut grouped: IndexMap<String, Vec<Flashcard>> = IndexMap::new();
    for card in cards {
        grouped
            .entry(card.topic.clone())
            .or_default()
            .push(card.clone());
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(topic: &str, question: &str) -> Flashcard {
        Flashcard {
            topic: topic.to_string(),
            question: question.to_string(),
            answer: String::new(),
            difficulty: String::new(),
        }
    }

    #[test]
    fn grouping_preserves_total_count() {
        let cards = vec![
            card("Biology", "b1"),
            card("History", "h1"),
            card("Biology", "b2"),
            card("Biology", "b3"),
        ];
        let grouped = group_by_topic(&cards);
        let total: usize = grouped.values().map(Vec::len).sum();
        assert_eq!(total, cards.len());
    }

    #[test]
    fn topics_keep_first_appearance_order() {
        let cards = vec![
            card("History", "h1"),
            card("Biology", "b1"),
            card("History", "h2"),
            card("Chemistry", "c1"),
        ];
        let grouped = group_by_topic(&cards);
        let topics: Vec<&str> = grouped.keys().map(String::as_str).collect();
        assert_eq!(topics, vec!["History", "Biology", "Chemistry"]);
    }

    #[test]
    fn cards_keep_relative_order_within_a_topic() {
        let cards = vec![
            card("Biology", "b1"),
            card("History", "h1"),
            card("Biology", "b2"),
        ];
        let grouped = group_by_topic(&cards);
        let questions: Vec<&str> = grouped["Biology"]
            .iter()
            .map(|c| c.question.as_str())
            .collect();
        assert_eq!(questions, vec!["b1", "b2"]);
    }

    #[test]
    fn missing_topic_deserializes_to_general() {
        let card: Flashcard = serde_json::from_str(r#"{"question":"2+2?","answer":"4"}"#).unwrap();
        assert_eq!(card.topic, "General");
        assert_eq!(card.difficulty, "");

        let grouped = group_by_topic(&[card]);
        assert!(grouped.contains_key("General"));
    }

    #[test]
    fn empty_difficulty_displays_as_unknown() {
        let mut card = card("Math", "2+2?");
        assert_eq!(card.display_difficulty(), "Unknown");
        card.difficulty = "Easy".to_string();
        assert_eq!(card.display_difficulty(), "Easy");
    }
}
