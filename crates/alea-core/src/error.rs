//! Error types for the generators and the prediction game.

use thiserror::Error;

/// Result type for alea operations.
pub type AleaResult<T> = Result<T, AleaError>;

/// Errors that can occur while playing.
///
/// Every variant is a recoverable input rejection that leaves state
/// unchanged; none are fatal.
#[derive(Debug, Error)]
pub enum AleaError {
    /// A die guess outside the configured face range.
    #[error("guess {value} is out of range for a {sides}-sided die")]
    GuessOutOfRange {
        /// The guessed face.
        value: u32,
        /// The configured face count.
        sides: u32,
    },

    /// A guess was submitted outside prediction mode.
    #[error("not in prediction mode")]
    NotPredicting,

    /// A guess is already waiting on the next action.
    #[error("a guess is already pending")]
    GuessPending,

    /// A custom card draw was requested with no custom cards configured.
    #[error("no custom cards configured")]
    NoCustomCards,

    /// A blank label where a non-empty one is required.
    #[error("label must not be empty")]
    EmptyLabel,

    /// Invalid choice or input.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// Unknown command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}
