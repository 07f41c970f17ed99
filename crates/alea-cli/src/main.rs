//! CLI frontend for the alea randomization toys.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "alea",
    about = "alea — dice, coins, and cards with a prediction game",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll the configured die
    Roll {
        /// Override the configured face count for this roll
        #[arg(short = 'n', long)]
        sides: Option<u32>,

        /// Preference file path
        #[arg(short, long, default_value = "alea.json")]
        store: PathBuf,
    },

    /// Flip the coin
    Flip {
        /// Preference file path
        #[arg(short, long, default_value = "alea.json")]
        store: PathBuf,
    },

    /// Draw a card
    Draw {
        /// Draw from the custom card set instead of the standard deck
        #[arg(short, long)]
        custom: bool,

        /// Preference file path
        #[arg(short, long, default_value = "alea.json")]
        store: PathBuf,
    },

    /// Start an interactive session with prediction mode
    Play {
        /// RNG seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,

        /// Preference file path
        #[arg(short, long, default_value = "alea.json")]
        store: PathBuf,
    },

    /// Show or change the generation parameters
    Config {
        #[command(subcommand)]
        action: ConfigAction,

        /// Preference file path
        #[arg(short, long, default_value = "alea.json")]
        store: PathBuf,
    },

    /// Show or reset the persisted best streak
    Best {
        /// Reset the best streak to zero
        #[arg(long)]
        reset: bool,

        /// Preference file path
        #[arg(short, long, default_value = "alea.json")]
        store: PathBuf,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show all parameters
    Show,

    /// Set the die face count
    Die {
        /// Number of faces (minimum 1)
        sides: u32,
    },

    /// Set the coin face labels
    Coin {
        /// Label for the heads face
        heads: String,

        /// Label for the tails face
        tails: String,
    },

    /// Add a custom card label
    CardAdd {
        /// The label to add
        label: String,
    },

    /// Remove a custom card label
    CardRemove {
        /// The label to remove
        label: String,
    },

    /// Remove all custom card labels
    CardClear,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll { sides, store } => commands::roll::run(&store, sides),
        Commands::Flip { store } => commands::flip::run(&store),
        Commands::Draw { custom, store } => commands::draw::run(&store, custom),
        Commands::Play { seed, store } => commands::play::run(&store, seed),
        Commands::Config { action, store } => match action {
            ConfigAction::Show => commands::config::show(&store),
            ConfigAction::Die { sides } => commands::config::set_die(&store, sides),
            ConfigAction::Coin { heads, tails } => {
                commands::config::set_coin(&store, &heads, &tails)
            }
            ConfigAction::CardAdd { label } => commands::config::card_add(&store, &label),
            ConfigAction::CardRemove { label } => commands::config::card_remove(&store, &label),
            ConfigAction::CardClear => commands::config::card_clear(&store),
        },
        Commands::Best { reset, store } => commands::best::run(&store, reset),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
