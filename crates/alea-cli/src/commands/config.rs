use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use alea_store::{JsonStore, PrefStore};

pub fn show(store_path: &Path) -> Result<(), String> {
    let prefs = super::read_prefs(store_path)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Setting", "Value"]);
    table.add_row(vec!["die faces".to_string(), prefs.die_sides.to_string()]);
    table.add_row(vec!["coin heads".to_string(), prefs.coin_heads.clone()]);
    table.add_row(vec!["coin tails".to_string(), prefs.coin_tails.clone()]);
    let cards = if prefs.custom_cards.is_empty() {
        "(none)".to_string()
    } else {
        prefs
            .custom_cards
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    };
    table.add_row(vec!["custom cards".to_string(), cards]);
    table.add_row(vec![
        "best streak".to_string(),
        prefs.best_streak.to_string(),
    ]);

    println!("{table}");
    Ok(())
}

pub fn set_die(store_path: &Path, sides: u32) -> Result<(), String> {
    let mut store = JsonStore::new(store_path);
    store
        .set_die_sides(sides)
        .map_err(|e| format!("cannot update preferences: {e}"))?;
    println!("  Die faces set to {}.", sides.max(1));
    Ok(())
}

pub fn set_coin(store_path: &Path, heads: &str, tails: &str) -> Result<(), String> {
    let heads = heads.trim();
    let tails = tails.trim();
    if heads.is_empty() || tails.is_empty() {
        return Err("coin labels must not be empty".to_string());
    }
    let mut store = JsonStore::new(store_path);
    store
        .set_coin_labels(heads, tails)
        .map_err(|e| format!("cannot update preferences: {e}"))?;
    println!("  Coin faces set to {heads} / {tails}.");
    Ok(())
}

pub fn card_add(store_path: &Path, label: &str) -> Result<(), String> {
    let label = label.trim();
    if label.is_empty() {
        return Err("card label must not be empty".to_string());
    }
    let mut prefs = super::read_prefs(store_path)?;
    if prefs.custom_cards.insert(label.to_string()) {
        super::write_prefs(store_path, &prefs)?;
        println!("  Card added: {label}");
    } else {
        println!("  Card already present: {label}");
    }
    Ok(())
}

pub fn card_remove(store_path: &Path, label: &str) -> Result<(), String> {
    let mut prefs = super::read_prefs(store_path)?;
    if prefs.custom_cards.remove(label.trim()) {
        super::write_prefs(store_path, &prefs)?;
        println!("  Card removed: {label}");
    } else {
        println!("  Card not found: {label}");
    }
    Ok(())
}

pub fn card_clear(store_path: &Path) -> Result<(), String> {
    let mut prefs = super::read_prefs(store_path)?;
    let count = prefs.custom_cards.len();
    prefs.custom_cards.clear();
    super::write_prefs(store_path, &prefs)?;
    println!("  Removed {count} custom cards.");
    Ok(())
}
