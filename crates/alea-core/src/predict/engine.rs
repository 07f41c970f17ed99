//! The prediction-mode state machine.
//!
//! Idle until [`PredictionGame::enter`] is called; while active it holds a
//! streak and at most one pending guess, which the next resolved action
//! consumes. Actions taken without a matching pending guess are free: they
//! never touch the streak.

use crate::error::{AleaError, AleaResult};
use crate::outcome::Outcome;

use super::guess::Guess;
use super::streak::{StreakState, Verdict};

/// The prediction-mode state machine.
#[derive(Debug, Clone, Default)]
pub struct PredictionGame {
    state: Option<StreakState>,
    pending: Option<Guess>,
}

impl PredictionGame {
    /// Create an idle game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether prediction mode is active.
    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// The streak state of the active run, if any.
    pub fn streak(&self) -> Option<&StreakState> {
        self.state.as_ref()
    }

    /// The guess waiting on the next action, if any.
    pub fn pending(&self) -> Option<Guess> {
        self.pending
    }

    /// Enter prediction mode, carrying a previously persisted best streak.
    ///
    /// Entering while already active restarts the run from zero.
    pub fn enter(&mut self, prior_best: u32) {
        self.state = Some(StreakState::new(prior_best));
        self.pending = None;
    }

    /// Leave prediction mode, discarding the run. Safe to call when idle.
    pub fn exit(&mut self) {
        self.state = None;
        self.pending = None;
    }

    /// Commit a guess for the next action of the matching kind.
    ///
    /// Rejected without state change when idle, when a guess is already
    /// pending, or when a die guess falls outside the configured face range.
    pub fn submit(&mut self, guess: Guess, die_sides: u32) -> AleaResult<()> {
        if self.state.is_none() {
            return Err(AleaError::NotPredicting);
        }
        if self.pending.is_some() {
            return Err(AleaError::GuessPending);
        }
        if let Guess::Die(value) = guess {
            let sides = die_sides.max(1);
            if !(1..=sides).contains(&value) {
                return Err(AleaError::GuessOutOfRange { value, sides });
            }
        }
        self.pending = Some(guess);
        Ok(())
    }

    /// Resolve one generated outcome against the pending guess, if any.
    ///
    /// Free actions (idle game, or no pending guess) leave the streak
    /// untouched and return no verdict. A pending guess whose kind differs
    /// from the outcome's is dropped without scoring. A matching guess is
    /// judged by exact equality. The pending slot is empty afterwards in
    /// every case.
    pub fn resolve(&mut self, outcome: &Outcome) -> Option<Verdict> {
        let state = self.state.as_mut()?;
        let guess = self.pending.take()?;
        if guess.kind() != outcome.kind() {
            return None;
        }
        Some(state.record(guess.matches(outcome)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_game(prior_best: u32) -> PredictionGame {
        let mut game = PredictionGame::new();
        game.enter(prior_best);
        game
    }

    #[test]
    fn enter_initializes_run() {
        let game = active_game(3);
        assert!(game.is_active());
        let streak = game.streak().unwrap();
        assert_eq!(streak.current(), 0);
        assert_eq!(streak.best(), 3);
    }

    #[test]
    fn exit_is_idempotent() {
        let mut game = active_game(3);
        game.exit();
        assert!(!game.is_active());
        game.exit();
        assert!(!game.is_active());
        assert!(game.pending().is_none());
    }

    #[test]
    fn reenter_restarts_run() {
        let mut game = active_game(0);
        game.submit(Guess::Die(4), 6).unwrap();
        game.resolve(&Outcome::DieRoll(4));
        assert_eq!(game.streak().unwrap().current(), 1);

        game.enter(1);
        let streak = game.streak().unwrap();
        assert_eq!(streak.current(), 0);
        assert_eq!(streak.best(), 1);
        assert!(game.pending().is_none());
    }

    #[test]
    fn correct_die_guess() {
        let mut game = active_game(3);
        game.submit(Guess::Die(4), 6).unwrap();
        let verdict = game.resolve(&Outcome::DieRoll(4));
        assert_eq!(verdict, Some(Verdict::Correct));
        let streak = game.streak().unwrap();
        assert_eq!(streak.current(), 1);
        assert_eq!(streak.best(), 3);
        assert!(game.pending().is_none());
    }

    #[test]
    fn broken_streak_reports_previous_length() {
        let mut game = active_game(0);
        for _ in 0..5 {
            game.submit(Guess::Coin(true), 6).unwrap();
            game.resolve(&Outcome::CoinFlip(true));
        }
        assert_eq!(game.streak().unwrap().current(), 5);

        game.submit(Guess::Coin(true), 6).unwrap();
        let verdict = game.resolve(&Outcome::CoinFlip(false));
        assert_eq!(verdict, Some(Verdict::StreakBroken { previous: 5 }));
        let streak = game.streak().unwrap();
        assert_eq!(streak.current(), 0);
        assert_eq!(streak.best(), 5);
    }

    #[test]
    fn miss_from_zero_is_plain_incorrect() {
        let mut game = active_game(2);
        game.submit(Guess::Die(1), 6).unwrap();
        let verdict = game.resolve(&Outcome::DieRoll(2));
        assert_eq!(verdict, Some(Verdict::Incorrect));
    }

    #[test]
    fn out_of_range_guess_rejected_without_state_change() {
        let mut game = active_game(0);
        let result = game.submit(Guess::Die(7), 6);
        assert!(matches!(
            result,
            Err(AleaError::GuessOutOfRange { value: 7, sides: 6 })
        ));
        assert!(game.pending().is_none());

        assert!(game.submit(Guess::Die(0), 6).is_err());
        assert!(game.pending().is_none());
    }

    #[test]
    fn guess_range_follows_configured_sides() {
        let mut game = active_game(0);
        game.submit(Guess::Die(15), 20).unwrap();
        assert_eq!(game.pending(), Some(Guess::Die(15)));
    }

    #[test]
    fn submit_rejected_when_idle() {
        let mut game = PredictionGame::new();
        assert!(matches!(
            game.submit(Guess::Coin(true), 6),
            Err(AleaError::NotPredicting)
        ));
    }

    #[test]
    fn second_submit_rejected_while_pending() {
        let mut game = active_game(0);
        game.submit(Guess::Die(2), 6).unwrap();
        assert!(matches!(
            game.submit(Guess::Die(3), 6),
            Err(AleaError::GuessPending)
        ));
        assert_eq!(game.pending(), Some(Guess::Die(2)));
    }

    #[test]
    fn free_action_leaves_streak_untouched() {
        let mut game = active_game(0);
        game.submit(Guess::Die(4), 6).unwrap();
        game.resolve(&Outcome::DieRoll(4));

        for _ in 0..3 {
            assert_eq!(game.resolve(&Outcome::DieRoll(1)), None);
        }
        let streak = game.streak().unwrap();
        assert_eq!(streak.current(), 1);
        assert_eq!(streak.best(), 1);
    }

    #[test]
    fn stale_guess_dropped_on_mismatched_kind() {
        let mut game = active_game(0);
        game.submit(Guess::Die(3), 6).unwrap();

        // A coin flip resolves while a die guess is pending: the guess is
        // discarded, the streak stays put.
        assert_eq!(game.resolve(&Outcome::CoinFlip(true)), None);
        assert!(game.pending().is_none());
        assert_eq!(game.streak().unwrap().current(), 0);

        // The slot is free again.
        game.submit(Guess::Coin(true), 6).unwrap();
    }

    #[test]
    fn card_draw_drops_pending_guess_without_scoring() {
        let mut game = active_game(0);
        game.submit(Guess::Die(3), 6).unwrap();
        game.resolve(&Outcome::DieRoll(3));
        game.submit(Guess::Die(3), 6).unwrap();

        assert_eq!(game.resolve(&Outcome::CardDraw("A♠".to_string())), None);
        assert!(game.pending().is_none());
        assert_eq!(game.streak().unwrap().current(), 1);
    }

    #[test]
    fn resolve_while_idle_is_a_no_op() {
        let mut game = PredictionGame::new();
        assert_eq!(game.resolve(&Outcome::DieRoll(3)), None);
        assert!(!game.is_active());
    }

    #[test]
    fn best_streak_monotonic_across_rounds() {
        let mut game = active_game(2);
        let rounds = [true, true, false, true, true, true, false, true];
        let mut last_best = 2;
        for (i, correct) in rounds.iter().enumerate() {
            game.submit(Guess::Coin(true), 6).unwrap();
            game.resolve(&Outcome::CoinFlip(*correct));
            let best = game.streak().unwrap().best();
            assert!(best >= last_best, "round {i} decreased best");
            last_best = best;
        }
        assert_eq!(game.streak().unwrap().best(), 3);
    }
}
