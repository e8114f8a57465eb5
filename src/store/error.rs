use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("unable to {} {}: {}", .action, .path.display(), .source)]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to resolve config directory")]
    NoConfigDir,

    #[error("unable to parse store {}: {}", .path.display(), .source)]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid path: {}", .0)]
    Validation(String),

    #[error("index {} out of range (store has {} entries)", .index, .len)]
    OutOfRange { index: usize, len: usize },

    #[error("path not found: {}", .0)]
    NotFound(String),

    #[error("interactive selection failed: {}", .0)]
    Interaction(#[source] io::Error),
}

impl StoreError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
