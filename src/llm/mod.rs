pub mod client;
pub mod flashcards;
pub mod secrets;

pub use client::ensure_client;
pub use flashcards::request_flashcard_text;
