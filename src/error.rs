use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to open {path}: {source}")]
    Open { path: PathBuf, source: io::Error },

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("property {0} could not be set")]
    Property(String),

    #[error("settings {action} {key} failed: {reason}")]
    Settings { action: &'static str, key: String, reason: String },

    #[error("failed to execute 'settings' command: {0}")]
    Spawn(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
