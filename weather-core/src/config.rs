use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Environment variable that overrides the configured API key.
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// WeatherAPI.com key. The `WEATHER_API_KEY` environment variable,
    /// when set and non-empty, takes precedence over this value.
    pub api_key: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-app", "weather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Resolve the API key, preferring the environment over the file.
    pub fn resolve_api_key(&self) -> Result<String> {
        pick_api_key(std::env::var(API_KEY_ENV).ok(), self.api_key.as_deref()).ok_or_else(|| {
            let path = Self::config_file_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "the config file".to_string());
            anyhow!(
                "No API key configured.\n\
                 Hint: set {API_KEY_ENV}, or add `api_key = \"...\"` to {path}."
            )
        })
    }
}

/// An empty environment value counts as unset.
fn pick_api_key(env: Option<String>, configured: Option<&str>) -> Option<String> {
    env.filter(|key| !key.is_empty())
        .or_else(|| configured.map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_wins_over_file() {
        let key = pick_api_key(Some("ENV_KEY".to_string()), Some("FILE_KEY"));
        assert_eq!(key.as_deref(), Some("ENV_KEY"));
    }

    #[test]
    fn empty_environment_value_is_ignored() {
        let key = pick_api_key(Some(String::new()), Some("FILE_KEY"));
        assert_eq!(key.as_deref(), Some("FILE_KEY"));
    }

    #[test]
    fn file_value_used_when_environment_unset() {
        let key = pick_api_key(None, Some("FILE_KEY"));
        assert_eq!(key.as_deref(), Some("FILE_KEY"));
    }

    #[test]
    fn missing_everywhere_is_none() {
        assert_eq!(pick_api_key(None, None), None);
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let cfg = Config {
            api_key: Some("KEY".to_string()),
        };
        let serialized = toml::to_string_pretty(&cfg).expect("serialize");
        let parsed: Config = toml::from_str(&serialized).expect("parse");
        assert_eq!(parsed.api_key.as_deref(), Some("KEY"));
    }
}
