use std::fs;
use std::path::{Path, PathBuf};

use glyphpad_core::{FamilyChangePolicy, StyleMode};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "glyphpad";
const CONFIG_FILE: &str = "config.json";

/// Errors emitted while reading the application config file.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("config IO failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("config JSON failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Application configuration read from `~/.config/glyphpad/config.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    family_change_policy: FamilyChangePolicy,
    stylesheet_links: bool,
    catalog_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            family_change_policy: FamilyChangePolicy::Reset,
            stylesheet_links: true,
            catalog_path: None,
        }
    }
}

impl AppConfig {
    pub(crate) fn family_change_policy(&self) -> FamilyChangePolicy {
        self.family_change_policy
    }

    pub(crate) fn style_mode(&self) -> StyleMode {
        if self.stylesheet_links {
            StyleMode::WithStylesheetLink
        } else {
            StyleMode::InlineOnly
        }
    }

    pub(crate) fn catalog_path(&self) -> Option<&Path> {
        self.catalog_path.as_deref()
    }
}

/// Directory holding the config file and the settings store.
pub(crate) fn config_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home).join(".config").join(APP_DIR);
    }

    std::env::temp_dir().join(APP_DIR)
}

/// Load the config, falling back to defaults when it is missing or broken.
pub(crate) fn load_initial_config() -> AppConfig {
    match load_config_from_path(&config_dir().join(CONFIG_FILE)) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("failed to load config, using defaults: {err}");
            AppConfig::default()
        },
    }
}

fn load_config_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        },
        Err(err) => return Err(err.into()),
    };

    Ok(serde_json::from_str(&data)?)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use glyphpad_core::{FamilyChangePolicy, StyleMode};

    use super::{AppConfig, ConfigError, load_config_from_path};

    #[test]
    fn given_missing_file_when_loaded_then_defaults_are_used() {
        let root = test_temp_dir("missing");

        let config = load_config_from_path(&root.join("config.json"))
            .expect("missing config is not an error");

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.family_change_policy(), FamilyChangePolicy::Reset);
        assert_eq!(config.style_mode(), StyleMode::WithStylesheetLink);
    }

    #[test]
    fn given_partial_config_when_loaded_then_other_fields_default() {
        let root = test_temp_dir("partial");
        fs::create_dir_all(&root).expect("temporary directory should exist");
        let path = root.join("config.json");
        fs::write(
            &path,
            r#"{"family_change_policy": "closest_match", "stylesheet_links": false}"#,
        )
        .expect("config should be written");

        let config =
            load_config_from_path(&path).expect("config should parse");

        assert_eq!(
            config.family_change_policy(),
            FamilyChangePolicy::ClosestMatch
        );
        assert_eq!(config.style_mode(), StyleMode::InlineOnly);
        assert_eq!(config.catalog_path(), None);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_unknown_policy_when_loaded_then_json_error() {
        let root = test_temp_dir("unknown_policy");
        fs::create_dir_all(&root).expect("temporary directory should exist");
        let path = root.join("config.json");
        fs::write(&path, r#"{"family_change_policy": "nearest"}"#)
            .expect("config should be written");

        let result = load_config_from_path(&path);

        assert!(matches!(result, Err(ConfigError::Json(_))));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "glyphpad-config-{test_name}-{stamp}-{}",
            std::process::id()
        ))
    }
}
