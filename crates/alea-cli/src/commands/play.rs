use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use alea_core::PlaySession;
use alea_store::{JsonStore, PrefStore};

pub fn run(store_path: &Path, seed: Option<u64>) -> Result<(), String> {
    let mut store = JsonStore::new(store_path);
    let prefs = store
        .read()
        .map_err(|e| format!("cannot read preferences: {e}"))?;

    let mut session = match seed {
        Some(seed) => PlaySession::seeded(prefs.generator_config(), prefs.best_streak, seed),
        None => PlaySession::new(prefs.generator_config(), prefs.best_streak),
    };

    println!("  {} alea", "Starting".bold());
    println!(
        "  Die: {} faces | Coin: {} / {} | Best streak: {}",
        prefs.die_sides.max(1),
        prefs.coin_heads,
        prefs.coin_tails,
        prefs.best_streak
    );
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                persist(&mut store, &session);
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}

/// Push the session's settings and best streak back to the store.
///
/// Failures leave the previous record in place; the next command retries.
fn persist(store: &mut JsonStore, session: &PlaySession) {
    let mut prefs = store.read().unwrap_or_default();
    prefs.apply_generator_config(session.config());
    if session.best_streak() > prefs.best_streak {
        prefs.best_streak = session.best_streak();
    }
    store.write(&prefs).ok();
}
