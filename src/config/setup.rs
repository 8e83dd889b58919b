//! Interactive setup wizard for first-time configuration
//!
//! Prompts for the API key and a couple of defaults, then writes the config
//! file.

use super::{KhanaConfig, MAX_RESULTS_LIMIT};
use crate::facets;
use config::ConfigError;
use dialoguer::{Input, Password, Select, theme::ColorfulTheme};
use std::path::Path;

fn prompt_error(e: dialoguer::Error) -> ConfigError {
    ConfigError::Message(format!("Failed to read input: {e}"))
}

/// Interactive first-time setup
///
/// 1. Prompts for the YouTube Data API key (may be left empty)
/// 2. Prompts for the default cooking method
/// 3. Prompts for the number of results per search
/// 4. Saves the configuration to `path`
///
/// # Errors
///
/// Returns `ConfigError` if user input cannot be read or the configuration
/// cannot be saved.
pub fn first_time_setup(path: &Path) -> Result<KhanaConfig, ConfigError> {
    println!("Welcome to khana! Let's set up recipe search.\n");
    println!("khana needs a YouTube Data API v3 key to search for videos.");
    println!("You can leave it empty now and set KHANA_API_KEY later.\n");

    let theme = ColorfulTheme::default();
    let mut config = KhanaConfig::default();

    let api_key = Password::with_theme(&theme)
        .with_prompt("API key")
        .allow_empty_password(true)
        .interact()
        .map_err(prompt_error)?;
    config.set_api_key(&api_key);

    let labels: Vec<&str> = facets::methods().iter().map(|m| m.label).collect();
    let method = Select::with_theme(&theme)
        .with_prompt("Default cooking method")
        .items(&labels)
        .default(0)
        .interact()
        .map_err(prompt_error)?;
    if let Some(method) = facets::methods().get(method) {
        config.default_method = method.id.to_string();
    }

    config.max_results = Input::with_theme(&theme)
        .with_prompt("Results per search")
        .default(config.max_results)
        .validate_with(|n: &u8| {
            if (1..=MAX_RESULTS_LIMIT).contains(n) {
                Ok(())
            } else {
                Err(format!("Enter a number between 1 and {MAX_RESULTS_LIMIT}"))
            }
        })
        .interact_text()
        .map_err(prompt_error)?;

    config.save_to(path)?;

    println!("\nConfiguration saved to {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_signature() {
        let _: fn(&Path) -> Result<KhanaConfig, ConfigError> = first_time_setup;
    }
}
