use std::path::Path;

use colored::Colorize;

use alea_store::{JsonStore, PrefStore};

pub fn run(store_path: &Path, reset: bool) -> Result<(), String> {
    if reset {
        let mut store = JsonStore::new(store_path);
        store
            .set_best_streak(0)
            .map_err(|e| format!("cannot update preferences: {e}"))?;
        println!("  Best streak reset to 0.");
        return Ok(());
    }

    let prefs = super::read_prefs(store_path)?;
    println!("  Best streak: {}", prefs.best_streak.to_string().bold());
    Ok(())
}
