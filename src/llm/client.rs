use anyhow::Result;
use async_openai::{Client, config::OpenAIConfig};

use super::secrets::{prompt_for_api_key, resolve_configured_api_key, store_api_key};
use crate::palette::Palette;

/// Resolve a credential and build the API client.
///
/// Tries the environment, then the keyring, then asks the user once and
/// stores the answer. A blank entry falls through to an unauthenticated
/// client, which fails at call time rather than here.
pub fn ensure_client() -> Result<Client<OpenAIConfig>> {
    let key = match resolve_configured_api_key()? {
        Some((api_key, source)) => {
            println!(
                "{}",
                Palette::dim(format!("Using the OpenAI API key from your {}.", source.description()))
            );
            Some(api_key)
        }
        None => {
            let api_key = prompt_for_api_key()?;
            if api_key.is_empty() {
                None
            } else {
                store_api_key(&api_key)?;
                Some(api_key)
            }
        }
    };

    let config = match key {
        Some(api_key) => OpenAIConfig::new().with_api_key(api_key),
        None => OpenAIConfig::new(),
    };
    Ok(Client::with_config(config))
}
