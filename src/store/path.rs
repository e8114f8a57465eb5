use super::error::{Result, StoreError};
use directories::BaseDirs;
use std::path::PathBuf;

pub const APP_DIR: &str = "stashdir";
pub const STORE_FILE: &str = "config.json";

/// `<user-config-dir>/stashdir`, home of the store and the optional
/// `ui.json` / `cli.json` overrides.
pub fn config_dir() -> Result<PathBuf> {
    let base = BaseDirs::new().ok_or(StoreError::NoConfigDir)?;
    Ok(base.config_dir().join(APP_DIR))
}

pub fn resolve_store_path(override_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path);
    }
    Ok(config_dir()?.join(STORE_FILE))
}
