use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::card::Flashcard;

/// Write the deck as UTF-8 CSV with fixed columns, one card per row.
///
/// The header row is written even for an empty deck. The target file is
/// created or overwritten in place; there is no temp-file-then-rename
/// step. Returns the path written.
pub fn export_csv(cards: &[Flashcard], path: &Path) -> Result<PathBuf> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record(["topic", "question", "answer", "difficulty"])?;
    for card in cards {
        writer.write_record([
            card.topic.as_str(),
            card.question.as_str(),
            card.answer.as_str(),
            card.difficulty.as_str(),
        ])?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path.to_path_buf())
}
