use std::path::Path;

use colored::Colorize;

use alea_core::{Generator, Outcome};

pub fn run(store_path: &Path) -> Result<(), String> {
    let prefs = super::read_prefs(store_path)?;

    let mut generator = Generator::new();
    if let Outcome::CoinFlip(heads) = generator.flip_coin() {
        let label = if heads {
            &prefs.coin_heads
        } else {
            &prefs.coin_tails
        };
        println!("  {}", label.bold());
    }
    Ok(())
}
