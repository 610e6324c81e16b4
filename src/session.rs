use crate::card::Flashcard;

/// The flashcards that survive between user actions.
///
/// A single mutable slot: the generate action is the only writer, display
/// and export only read. A new generation replaces the whole sequence;
/// results are never merged, so the slot is either empty or the exact
/// output of the most recent successful generation.
#[derive(Debug, Default)]
pub struct Session {
    flashcards: Vec<Flashcard>,
}

impl Session {
    pub fn flashcards(&self) -> &[Flashcard] {
        &self.flashcards
    }

    pub fn is_empty(&self) -> bool {
        self.flashcards.is_empty()
    }

    pub fn replace(&mut self, cards: Vec<Flashcard>) {
        self.flashcards = cards;
    }
}
