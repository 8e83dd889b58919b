//! Config command - show and edit the configuration file

use crate::{
    KhanaError,
    cli::ConfigCommands,
    config::{KhanaConfig, first_time_setup},
    output::{OutputWriter, StdoutWriter},
};
use std::path::Path;

type Result<T> = std::result::Result<T, KhanaError>;

/// Execute a config subcommand against the default config file
///
/// # Errors
/// Returns an error if the config directory is unknown or the file cannot
/// be read or written
pub fn execute(command: &ConfigCommands, quiet: bool) -> Result<()> {
    let path = KhanaConfig::config_path()?;
    execute_at(command, &path, quiet)
}

/// Execute a config subcommand against the config file at `path`
///
/// # Errors
/// Returns an error if the file cannot be read or written
pub fn execute_at(command: &ConfigCommands, path: &Path, quiet: bool) -> Result<()> {
    let writer = StdoutWriter::new(quiet);

    match command {
        ConfigCommands::Show => {
            let config = KhanaConfig::load_from(path)?;
            println!("{}", render(&config));
        }
        ConfigCommands::Path => println!("{}", path.display()),
        ConfigCommands::Init => {
            first_time_setup(path)?;
            writer.success(&format!("Configuration saved to {}", path.display()));
        }
        ConfigCommands::SetKey { key } => {
            if key.trim().is_empty() {
                return Err(KhanaError::InvalidInput(
                    "API key is empty; use `khana config unset-key` to remove it".to_string(),
                ));
            }
            let mut config = KhanaConfig::load_file(path)?;
            config.set_api_key(key);
            config.save_to(path)?;
            writer.success("API key saved");
        }
        ConfigCommands::UnsetKey => {
            let mut config = KhanaConfig::load_file(path)?;
            if config.has_api_key() {
                config.set_api_key("");
                config.save_to(path)?;
                writer.success("API key removed");
            } else {
                writer.info("No API key stored");
            }
        }
    }
    Ok(())
}

/// Effective configuration as shown by `config show`, key redacted
#[must_use]
pub fn render(config: &KhanaConfig) -> String {
    let key = if config.has_api_key() { "set" } else { "not set" };
    format!(
        "api_key          = {key}\n\
         endpoint         = {}\n\
         max_results      = {}\n\
         timeout_secs     = {}\n\
         default_method   = {}\n\
         default_category = {}\n\
         quiet            = {}",
        config.endpoint,
        config.max_results,
        config.timeout_secs,
        config.default_method,
        config.default_category,
        config.quiet
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_unset_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        execute_at(&ConfigCommands::SetKey { key: "  AIza-test ".into() }, &path, true).unwrap();
        let config = KhanaConfig::load_file(&path).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("AIza-test"));

        execute_at(&ConfigCommands::UnsetKey, &path, true).unwrap();
        let config = KhanaConfig::load_file(&path).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_set_key_rejects_blank() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let err = execute_at(&ConfigCommands::SetKey { key: "   ".into() }, &path, true).unwrap_err();
        assert!(matches!(err, KhanaError::InvalidInput(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_set_key_keeps_other_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_results = 30\ndefault_category = \"snacks\"\n").unwrap();

        execute_at(&ConfigCommands::SetKey { key: "k".into() }, &path, true).unwrap();
        let config = KhanaConfig::load_file(&path).unwrap();
        assert_eq!(config.max_results, 30);
        assert_eq!(config.default_category, "snacks");
    }

    #[test]
    fn test_render_hides_key() {
        let mut config = KhanaConfig::default();
        config.set_api_key("AIza-secret");
        let text = render(&config);
        assert!(text.contains("api_key          = set"));
        assert!(!text.contains("AIza-secret"));
        assert!(text.contains("max_results      = 12"));
    }
}
