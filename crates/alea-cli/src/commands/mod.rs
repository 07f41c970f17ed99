pub mod best;
pub mod config;
pub mod draw;
pub mod flip;
pub mod play;
pub mod roll;

use std::path::Path;

use alea_store::{JsonStore, PrefStore, Preferences};

/// Read the preference record, mapping store errors to CLI errors.
fn read_prefs(path: &Path) -> Result<Preferences, String> {
    JsonStore::new(path)
        .read()
        .map_err(|e| format!("cannot read preferences from {}: {e}", path.display()))
}

/// Write the preference record, mapping store errors to CLI errors.
fn write_prefs(path: &Path, prefs: &Preferences) -> Result<(), String> {
    JsonStore::new(path)
        .write(prefs)
        .map_err(|e| format!("cannot write preferences to {}: {e}", path.display()))
}
