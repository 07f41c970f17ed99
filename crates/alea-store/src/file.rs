//! JSON-file-backed preference storage.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreResult;
use crate::prefs::{PrefStore, Preferences};

/// Preferences stored as a JSON file.
///
/// A missing file reads as defaults. Writes go through a sibling temp file
/// and a rename, so a crash mid-write leaves the previous record intact.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Create a store backed by the given path. The file need not exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PrefStore for JsonStore {
    fn read(&self) -> StoreResult<Preferences> {
        match fs::read_to_string(&self.path) {
            Ok(data) => Ok(serde_json::from_str(&data)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Preferences::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, prefs: &Preferences) -> StoreResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(prefs)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
