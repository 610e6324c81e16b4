use std::fmt::Display;

/// Centralized ANSI styling for terminal output.
pub struct Palette;

impl Palette {
    pub const INFO: &'static str = "\x1b[36m";
    pub const WARNING: &'static str = "\x1b[33m";
    pub const SUCCESS: &'static str = "\x1b[32m";
    pub const DANGER: &'static str = "\x1b[31m";

    const DIM: &'static str = "\x1b[2m";
    const RESET: &'static str = "\x1b[0m";

    pub fn paint(color: &str, value: impl Display) -> String {
        format!("{color}{value}{}", Self::RESET)
    }

    pub fn dim(value: impl Display) -> String {
        Self::paint(Self::DIM, value)
    }
}
