use std::env;

use anyhow::{Context, Result, anyhow, bail};
use keyring::{Entry, Error as KeyringError};
use rpassword::read_password;

use crate::palette::Palette;

pub const API_KEY_ENV: &str = "FLASHGEN_OPENAI_API_KEY";

const SERVICE: &str = "com.flashgen";
const USERNAME: &str = "openai:default";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeySource {
    Environment,
    Keyring,
}

impl ApiKeySource {
    pub fn description(&self) -> &'static str {
        match self {
            ApiKeySource::Environment => "environment variable",
            ApiKeySource::Keyring => "local keyring",
        }
    }
}

pub fn prompt_for_api_key() -> Result<String> {
    println!(
        "{} (https://platform.openai.com/account/api-keys) to generate flashcards. It's stored locally for future use.",
        Palette::paint(Palette::SUCCESS, "Enter your OpenAI API key")
    );
    println!(
        "{}",
        Palette::dim("Leave the field blank to continue without one; generation will fail until a key is configured.")
    );

    let input = read_password().context("Failed to read API key")?;
    // Make the input safe for use in a header
    let input = strip_controls(&input);
    Ok(input.trim().to_string())
}

pub fn store_api_key(api_key: &str) -> Result<()> {
    let trimmed = api_key.trim();
    if trimmed.is_empty() {
        bail!("Cannot store an empty API key");
    }
    let entry = Entry::new(SERVICE, USERNAME)?;
    entry.set_password(trimmed)?;
    Ok(())
}

pub fn resolve_configured_api_key() -> Result<Option<(String, ApiKeySource)>> {
    if let Some(env_key) = load_env_api_key() {
        return Ok(Some((env_key, ApiKeySource::Environment)));
    }

    if let Some(stored) = load_stored_api_key()? {
        return Ok(Some((stored, ApiKeySource::Keyring)));
    }

    Ok(None)
}

fn load_env_api_key() -> Option<String> {
    match env::var(API_KEY_ENV) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

fn load_stored_api_key() -> Result<Option<String>> {
    let entry = Entry::new(SERVICE, USERNAME)?;
    match entry.get_password() {
        Ok(password) => Ok(Some(password)),
        Err(KeyringError::NoEntry) => Ok(None),
        Err(err) => Err(anyhow!(err)),
    }
}

fn strip_controls(input: &str) -> String {
    input.chars().filter(|c| !c.is_control()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_controls_removes_escapes_and_newlines() {
        assert_eq!(strip_controls("sk-\x1b[31mabc\n"), "sk-[31mabc");
        assert_eq!(strip_controls("plain-key"), "plain-key");
    }

    #[test]
    fn api_key_source_descriptions() {
        assert_eq!(ApiKeySource::Environment.description(), "environment variable");
        assert_eq!(ApiKeySource::Keyring.description(), "local keyring");
    }
}
