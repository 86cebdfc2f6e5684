mod init;
mod schema;

pub use init::write_default_config;
pub use schema::{Config, ReportConfig};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Get the config directory path (~/.config/dive-score/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("dive-score"))
}

/// Get the default config file path (~/.config/dive-score/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/dive-score/config.yaml), and a missing default file yields
///   the built-in defaults.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            read_config(&path)
        }
        None => {
            let Ok(path) = get_config_path() else {
                debug!("no home directory, using default config");
                return Ok(Config::default());
            };
            if path.exists() {
                read_config(&path)
            } else {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Config::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))?;

    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    #[test]
    fn test_load_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            r#"
scoring:
  multiplier: 0.5
  panel_size: 7
report:
  format: json
  skip_invalid: true
"#,
        )
        .unwrap();

        let config = load_config(Some(path)).unwrap();
        let scoring = config.effective_scoring();
        assert_eq!(scoring.multiplier(), 0.5);
        assert_eq!(scoring.panel_size, Some(7));

        let report = config.effective_report();
        assert_eq!(report.format, Some(OutputFormat::Json));
        assert_eq!(report.skip_invalid, Some(true));
        assert!(report.intro.is_none());
    }

    #[test]
    fn test_load_missing_explicit_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(dir.path().join("nope.yaml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_invalid_yaml_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "scoring:\n  bonus: 3\n").unwrap();

        let err = load_config(Some(path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_empty_sections_use_defaults() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config.effective_scoring(), crate::scoring::ScoringConfig::default());
        assert_eq!(config.effective_report(), ReportConfig::default());
    }
}
