use crate::card::{Flashcard, group_by_topic};
use crate::palette::Palette;

/// Render the deck grouped by topic. Question numbering runs across the
/// whole deck, not per topic.
pub fn print_cards(cards: &[Flashcard]) {
    let grouped = group_by_topic(cards);
    println!("\n{}", summary_line(cards.len(), grouped.len()));

    let mut question_number = 1;
    for (topic, cards) in &grouped {
        println!("\n{}", Palette::paint(Palette::INFO, topic));
        for card in cards {
            println!(
                "{} {}",
                Palette::paint(Palette::WARNING, format!("Q{question_number}:")),
                card.question
            );
            println!("{} {}", Palette::dim("Ans:"), card.answer);
            println!("{} {}", Palette::dim("Difficulty:"), card.display_difficulty());
            question_number += 1;
        }
    }
}

fn summary_line(num_cards: usize, num_topics: usize) -> String {
    let plural = if num_topics == 1 { "" } else { "s" };
    format!(
        "Generated {} flashcards across {} topic{plural}.",
        Palette::paint(Palette::SUCCESS, num_cards),
        Palette::paint(Palette::INFO, num_topics),
    )
}
