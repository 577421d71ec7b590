// Configuration loader
// Resolves server settings from ~/.mastermind/config.toml, then the
// MASTERMIND_SERVER_URL environment variable, then built-in defaults.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::settings::Config;

/// Optional keys of the config file.
#[derive(Debug, Default, serde::Deserialize)]
struct TomlConfig {
    server_url: Option<String>,
    timeout_seconds: Option<u64>,
}

/// Load configuration. A missing config file is not an error; a malformed
/// one is, naming the file.
pub fn load_config() -> Result<Config> {
    let mut config = Config::default();

    if let Some(home) = dirs::home_dir() {
        let path = home.join(".mastermind").join("config.toml");
        if path.exists() {
            apply_file(&mut config, &path)?;
        }
    }

    // Environment wins over the file.
    if let Ok(url) = std::env::var("MASTERMIND_SERVER_URL") {
        if !url.is_empty() {
            config.server_url = url;
        }
    }

    Ok(config)
}

fn apply_file(config: &mut Config, path: &Path) -> Result<()> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let file: TomlConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    if let Some(url) = file.server_url {
        config.server_url = url;
    }
    if let Some(secs) = file.timeout_seconds {
        config.timeout_seconds = secs;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server_url = \"http://localhost:9000\"").unwrap();
        writeln!(file, "timeout_seconds = 5").unwrap();

        let mut config = Config::default();
        apply_file(&mut config, file.path()).unwrap();
        assert_eq!(config.server_url, "http://localhost:9000");
        assert_eq!(config.timeout_seconds, 5);
    }

    #[test]
    fn test_partial_file_keeps_remaining_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server_url = \"http://localhost:9000\"").unwrap();

        let mut config = Config::default();
        apply_file(&mut config, file.path()).unwrap();
        assert_eq!(config.server_url, "http://localhost:9000");
        assert_eq!(config.timeout_seconds, super::super::settings::DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server_url = [unclosed").unwrap();

        let mut config = Config::default();
        let err = apply_file(&mut config, file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
