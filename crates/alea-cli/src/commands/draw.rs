use std::path::Path;

use colored::Colorize;

use alea_core::{Generator, Outcome};

pub fn run(store_path: &Path, custom: bool) -> Result<(), String> {
    let prefs = super::read_prefs(store_path)?;

    let mut generator = Generator::new();
    let outcome = if custom {
        generator
            .draw_custom(&prefs.custom_cards)
            .map_err(|e| e.to_string())?
    } else {
        generator.draw_card()
    };

    if let Outcome::CardDraw(card) = outcome {
        println!("  {}", card.bold());
    }
    Ok(())
}
