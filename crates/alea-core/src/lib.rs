//! Randomization toys with an optional prediction game.
//!
//! Provides uniform value generators (die roll, coin flip, card draw),
//! user-editable generation parameters, a guess-streak engine for
//! prediction mode, and an interactive command session that drives
//! all of it the way a frontend would.

pub mod config;
pub mod error;
pub mod generator;
pub mod history;
pub mod outcome;
pub mod predict;
pub mod session;

pub use config::{CoinLabels, GeneratorConfig};
pub use error::{AleaError, AleaResult};
pub use generator::Generator;
pub use history::{History, HistoryEntry};
pub use outcome::{Outcome, OutcomeKind};
pub use predict::{Guess, PredictionGame, StreakState, Verdict};
pub use session::PlaySession;
