use std::path::Path;

use colored::Colorize;

use alea_core::{Generator, Outcome};

pub fn run(store_path: &Path, sides: Option<u32>) -> Result<(), String> {
    let prefs = super::read_prefs(store_path)?;
    let sides = sides.unwrap_or(prefs.die_sides).max(1);

    let mut generator = Generator::new();
    if let Outcome::DieRoll(value) = generator.roll_die(sides) {
        println!("  {} ({sides} faces)", value.to_string().bold());
    }
    Ok(())
}
