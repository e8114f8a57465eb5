mod error;
mod normalize;
mod path;

use crate::model::Database;
use crate::ui::Chooser;
use log::{debug, info, warn};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub use error::{Result, StoreError};
pub use normalize::CaseMode;
pub use path::{config_dir, resolve_store_path};

/// Rows shown at once by the interactive chooser.
pub const SELECT_PAGE_SIZE: usize = 12;

/// Handle over the bookmark file. Every mutation rewrites the whole file
/// before the in-memory list is updated, so a failed write leaves both
/// untouched.
pub struct Store {
    path: PathBuf,
    items: Vec<String>,
    case: CaseMode,
}

impl Store {
    pub fn open(override_path: Option<PathBuf>) -> Result<Self> {
        let path = resolve_store_path(override_path)?;
        Self::open_at(path, CaseMode::platform())
    }

    pub fn open_at(path: PathBuf, case: CaseMode) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|err| StoreError::io("create store directory", parent, err))?;
        }

        let mut items = dedup_paths(load(&path)?, case);
        sort_paths(&mut items);
        debug!("opened store {} ({} entries)", path.display(), items.len());

        Ok(Self { path, items, case })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn list(&self) -> Vec<String> {
        self.items.clone()
    }

    pub fn get(&self, index: usize) -> Result<&str> {
        self.items
            .get(index)
            .map(String::as_str)
            .ok_or(StoreError::OutOfRange {
                index,
                len: self.items.len(),
            })
    }

    /// Returns `false` when an equivalent path is already stored.
    pub fn add(&mut self, raw: &str) -> Result<bool> {
        let normalized = normalize::normalize(raw)
            .ok_or_else(|| StoreError::Validation("path is empty".to_string()))?;
        let key = self.case.key(&normalized);
        if self.position(&key).is_some() {
            debug!("{} already stored", normalized);
            return Ok(false);
        }

        let mut items = self.items.clone();
        items.push(normalized.clone());
        sort_paths(&mut items);
        self.commit(items)?;
        info!("added {}", normalized);
        Ok(true)
    }

    pub fn remove_index(&mut self, index: usize) -> Result<String> {
        if index >= self.items.len() {
            return Err(StoreError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }

        let mut items = self.items.clone();
        let removed = items.remove(index);
        self.commit(items)?;
        info!("removed {}", removed);
        Ok(removed)
    }

    pub fn remove_path(&mut self, raw: &str) -> Result<String> {
        let position = normalize::normalize(raw)
            .and_then(|normalized| self.position(&self.case.key(&normalized)))
            .ok_or_else(|| StoreError::NotFound(raw.trim().to_string()))?;
        self.remove_index(position)
    }

    /// `Ok(None)` when there is nothing to choose from or the user backed out.
    pub fn select_interactive(&self, chooser: &mut dyn Chooser) -> Result<Option<String>> {
        if self.items.is_empty() {
            return Ok(None);
        }
        let choice = chooser
            .choose(&self.items, SELECT_PAGE_SIZE)
            .map_err(StoreError::Interaction)?;
        Ok(choice.filter(|path| !path.is_empty()))
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.items.iter().position(|item| {
            normalize::normalize(item)
                .map(|normalized| self.case.key(&normalized) == key)
                .unwrap_or(false)
        })
    }

    fn commit(&mut self, items: Vec<String>) -> Result<()> {
        let db = Database::new(items);
        save(&self.path, &db)?;
        self.items = db.items;
        Ok(())
    }
}

fn sort_paths(items: &mut [String]) {
    items.sort_by_cached_key(|item| item.to_lowercase());
}

/// Cleans hand-edited entries and keeps the first of each equivalent group,
/// so every stored path is unique under `case`.
fn dedup_paths(raw: Vec<String>, case: CaseMode) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(raw.len());
    for entry in raw {
        let Some(normalized) = normalize::normalize(&entry) else {
            warn!("dropping blank store entry");
            continue;
        };
        if seen.insert(case.key(&normalized)) {
            items.push(normalized);
        } else {
            debug!("dropping duplicate store entry {:?}", entry);
        }
    }
    items
}

fn load(path: &Path) -> Result<Vec<String>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(StoreError::io("read store", path, err)),
    };
    if data.trim().is_empty() {
        return Ok(Vec::new());
    }
    let db = Database::from_json(&data).map_err(|source| StoreError::Format {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(db.items)
}

fn save(path: &Path, db: &Database) -> Result<()> {
    let mut data = serde_json::to_string_pretty(db).map_err(|source| StoreError::Format {
        path: path.to_path_buf(),
        source,
    })?;
    data.push('\n');

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, data).map_err(|err| StoreError::io("write store", &tmp_path, err))?;
    fs::rename(&tmp_path, path).map_err(|err| StoreError::io("replace store", path, err))?;
    debug!("saved {} entries to {}", db.items.len(), path.display());
    Ok(())
}
