use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{interpreter::angle::AngleMode, session::history::HistoryEntry};

/// Everything the store persists.
///
/// Serialized as a JSON object with the string keys `history_entries` and
/// `angle_mode`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoryState {
    /// Entries, newest first.
    #[serde(rename = "history_entries", default)]
    pub history:    Vec<HistoryEntry>,
    #[serde(default)]
    pub angle_mode: AngleMode,
}

/// Errors raised while reading or writing the history file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The file could not be read or written.
    #[error("cannot access history file {}: {source}", .path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file exists but does not hold a valid history document.
    #[error("history file {} is corrupt: {source}", .path.display())]
    Corrupt {
        path:   PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The state could not be encoded; nothing was written.
    #[error("cannot encode history for {}: {source}", .path.display())]
    Serialize {
        path:   PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A history document on disk.
///
/// Saves replace the whole document: the new content is written next to the
/// target and renamed over it, so a crash mid-save leaves the previous
/// document intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Creates a store for the document at `path`. Nothing is read until
    /// [`HistoryStore::load`].
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored state. A missing file is an empty state.
    ///
    /// # Errors
    /// Returns `StoreError::Io` if the file exists but cannot be read, and
    /// `StoreError::Corrupt` if its content is not a history document.
    pub fn try_load(&self) -> Result<HistoryState, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(HistoryState::default()),
            Err(source) => {
                return Err(StoreError::Io { path: self.path.clone(),
                                            source });
            },
        };
        serde_json::from_str(&text).map_err(|source| StoreError::Corrupt { path: self.path.clone(),
                                                                           source })
    }

    /// Reads the stored state, falling back to an empty state in degree mode
    /// when the document cannot be used.
    #[must_use]
    pub fn load(&self) -> HistoryState {
        self.try_load().unwrap_or_else(|error| {
                           tracing::warn!(%error, "starting with an empty history");
                           HistoryState::default()
                       })
    }

    /// Replaces the stored state.
    ///
    /// # Errors
    /// Returns `StoreError::Io` if the document or its directory cannot be
    /// written, and `StoreError::Serialize` if the state cannot be encoded.
    pub fn save(&self, state: &HistoryState) -> Result<(), StoreError> {
        let io_error = |source: io::Error| StoreError::Io { path: self.path.clone(),
                                                 source };

        if let Some(parent) = self.path.parent()
           && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        let json = serde_json::to_string_pretty(state).map_err(|source| StoreError::Serialize { path: self.path.clone(),
                                                                                               source })?;
        let staging = self.staging_path();
        fs::write(&staging, json).map_err(io_error)?;
        fs::rename(&staging, &self.path).map_err(io_error)?;

        tracing::debug!(path = %self.path.display(), entries = state.history.len(), "saved history");
        Ok(())
    }

    /// Where [`HistoryStore::save`] writes before renaming: the document's
    /// full file name with `.tmp` appended, e.g. `history.json.tmp`.
    #[must_use]
    pub fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Stores an empty history, keeping `angle_mode`.
    ///
    /// # Errors
    /// Same as [`HistoryStore::save`].
    pub fn clear(&self, angle_mode: AngleMode) -> Result<(), StoreError> {
        self.save(&HistoryState { history: Vec::new(),
                                  angle_mode })
    }
}
