use crate::store;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    pub title: String,
    pub show_search: bool,
    pub show_help: bool,
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Select directory".to_string(),
            show_search: true,
            show_help: true,
            theme: ThemeConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeConfig {
    pub highlight: String,
    pub border: String,
    pub help: String,
    pub text: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            highlight: "Blue".to_string(),
            border: "DarkGray".to_string(),
            help: "Green".to_string(),
            text: "White".to_string(),
        }
    }
}

pub fn load_ui_config(override_path: Option<PathBuf>) -> Result<UiConfig> {
    let path = resolve_ui_config_path(override_path)?;
    if let Some(path) = path {
        let data = fs::read_to_string(&path)
            .with_context(|| format!("unable to read {}", path.display()))?;
        let config = serde_json::from_str(&data)
            .with_context(|| format!("unable to parse {}", path.display()))?;
        return Ok(config);
    }
    Ok(UiConfig::default())
}

fn resolve_ui_config_path(override_path: Option<PathBuf>) -> Result<Option<PathBuf>> {
    if let Some(path) = override_path {
        return Ok(Some(path));
    }

    let candidate = store::config_dir()?.join("ui.json");
    if candidate.exists() {
        Ok(Some(candidate))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ui_config_default_values() {
        let config = UiConfig::default();
        assert_eq!(config.title, "Select directory");
        assert!(config.show_search);
        assert!(config.show_help);
        assert_eq!(config.theme.highlight, "Blue");
        assert_eq!(config.theme.border, "DarkGray");
        assert_eq!(config.theme.help, "Green");
        assert_eq!(config.theme.text, "White");
    }

    #[test]
    fn deserialize_partial_config() {
        let json = r#"{"title": "Jump to", "theme": {"highlight": "Magenta"}}"#;
        let config: UiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.title, "Jump to");
        assert!(config.show_search);
        assert_eq!(config.theme.highlight, "Magenta");
        assert_eq!(config.theme.border, "DarkGray");
    }

    #[test]
    fn deserialize_empty_config() {
        let config: UiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, UiConfig::default());
    }

    #[test]
    fn load_from_override_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ui.json");
        fs::write(&path, r#"{"show_help": false}"#).unwrap();
        let config = load_ui_config(Some(path)).unwrap();
        assert!(!config.show_help);
    }

    #[test]
    fn load_reports_bad_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ui.json");
        fs::write(&path, "{").unwrap();
        let err = load_ui_config(Some(path)).unwrap_err();
        assert!(err.to_string().contains("unable to parse"));
    }

    #[test]
    fn missing_default_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        temp_env::with_vars(
            [
                ("XDG_CONFIG_HOME", Some(dir.path().as_os_str())),
                ("HOME", Some(dir.path().as_os_str())),
            ],
            || {
                assert_eq!(load_ui_config(None).unwrap(), UiConfig::default());
            },
        );
    }
}
