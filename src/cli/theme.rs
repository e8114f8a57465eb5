use crate::store;
use anyhow::{Context, Result};
use crossterm::style::Color;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliThemeConfig {
    pub enabled: bool,
    pub index: String,
    pub path: String,
}

impl Default for CliThemeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            index: "DarkGray".to_string(),
            path: "Cyan".to_string(),
        }
    }
}

pub struct CliTheme {
    pub enabled: bool,
    pub index: Color,
    pub path: Color,
}

impl CliTheme {
    fn from_config(config: CliThemeConfig) -> Self {
        Self {
            enabled: config.enabled,
            index: parse_color(&config.index),
            path: parse_color(&config.path),
        }
    }
}

pub fn load_cli_theme(override_path: Option<PathBuf>) -> Result<CliTheme> {
    let path = resolve_cli_theme_path(override_path)?;
    if let Some(path) = path {
        let data = fs::read_to_string(&path)
            .with_context(|| format!("unable to read {}", path.display()))?;
        let config = serde_json::from_str(&data)
            .with_context(|| format!("unable to parse {}", path.display()))?;
        return Ok(CliTheme::from_config(config));
    }
    Ok(CliTheme::from_config(CliThemeConfig::default()))
}

fn resolve_cli_theme_path(override_path: Option<PathBuf>) -> Result<Option<PathBuf>> {
    if let Some(path) = override_path {
        return Ok(Some(path));
    }

    let candidate = store::config_dir()?.join("cli.json");
    if candidate.exists() {
        Ok(Some(candidate))
    } else {
        Ok(None)
    }
}

fn parse_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::DarkRed,
        "green" => Color::DarkGreen,
        "yellow" => Color::DarkYellow,
        "blue" => Color::DarkBlue,
        "magenta" => Color::DarkMagenta,
        "cyan" => Color::DarkCyan,
        "gray" => Color::Grey,
        "darkgray" | "dark_gray" => Color::DarkGrey,
        "lightred" | "light_red" => Color::Red,
        "lightgreen" | "light_green" => Color::Green,
        "lightyellow" | "light_yellow" => Color::Yellow,
        "lightblue" | "light_blue" => Color::Blue,
        "lightmagenta" | "light_magenta" => Color::Magenta,
        "lightcyan" | "light_cyan" => Color::Cyan,
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_theme_config_default_values() {
        let config = CliThemeConfig::default();
        assert!(config.enabled);
        assert_eq!(config.index, "DarkGray");
        assert_eq!(config.path, "Cyan");
    }

    #[test]
    fn cli_theme_from_config() {
        let theme = CliTheme::from_config(CliThemeConfig {
            enabled: false,
            index: "Yellow".to_string(),
            path: "light_green".to_string(),
        });
        assert!(!theme.enabled);
        assert_eq!(theme.index, Color::DarkYellow);
        assert_eq!(theme.path, Color::Green);
    }

    #[test]
    fn parse_color_case_insensitive() {
        assert_eq!(parse_color("RED"), Color::DarkRed);
        assert_eq!(parse_color("rEd"), Color::DarkRed);
        assert_eq!(parse_color("DarkGray"), Color::DarkGrey);
    }

    #[test]
    fn parse_color_invalid_defaults_to_white() {
        assert_eq!(parse_color("invalidcolor"), Color::White);
        assert_eq!(parse_color(""), Color::White);
    }

    #[test]
    fn load_partial_theme_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cli.json");
        fs::write(&path, r#"{"enabled": false}"#).unwrap();
        let theme = load_cli_theme(Some(path)).unwrap();
        assert!(!theme.enabled);
        assert_eq!(theme.path, Color::DarkCyan);
    }
}
