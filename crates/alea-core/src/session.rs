//! Interactive play session.
//!
//! `PlaySession` drives the generators and the prediction game through a
//! line-oriented command interface, the same way a frontend would: every
//! generator action is resolved against the pending guess, and best-streak
//! improvements are surfaced through accessors so the caller can persist
//! them.

use crate::config::{CoinLabels, GeneratorConfig};
use crate::error::{AleaError, AleaResult};
use crate::generator::Generator;
use crate::history::History;
use crate::outcome::Outcome;
use crate::predict::{Guess, PredictionGame, Verdict};

/// An interactive session over the generators and the prediction game.
pub struct PlaySession {
    config: GeneratorConfig,
    generator: Generator,
    game: PredictionGame,
    history: History,
    best_streak: u32,
}

impl PlaySession {
    /// Create a session with the given configuration and persisted best
    /// streak, seeded from the operating system.
    pub fn new(config: GeneratorConfig, best_streak: u32) -> Self {
        Self::with_generator(config, best_streak, Generator::new())
    }

    /// Create a session with a fixed seed for reproducible runs.
    pub fn seeded(config: GeneratorConfig, best_streak: u32, seed: u64) -> Self {
        Self::with_generator(config, best_streak, Generator::seeded(seed))
    }

    fn with_generator(config: GeneratorConfig, best_streak: u32, generator: Generator) -> Self {
        Self {
            config,
            generator,
            game: PredictionGame::new(),
            history: History::new(),
            best_streak,
        }
    }

    /// The current configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The best streak across all runs, including persisted history.
    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    /// The round history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The prediction game.
    pub fn game(&self) -> &PredictionGame {
        &self.game
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> AleaResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "roll" => self.do_roll(),
            "flip" => self.do_flip(),
            "draw" => self.do_draw(rest),
            "predict" => self.do_predict(),
            "stop" => self.do_stop(),
            "guess" => self.do_guess(rest),
            "set" => self.do_set(rest),
            "card" => self.do_card(rest),
            "cards" => self.do_cards(),
            "status" => self.do_status(),
            "history" => self.do_history(),
            "help" => Ok(help_text(rest)),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ => Err(AleaError::UnknownCommand(cmd)),
        }
    }

    fn do_roll(&mut self) -> AleaResult<String> {
        let outcome = self.generator.roll_die(self.config.die_sides);
        let text = format!("You rolled {outcome}.");
        Ok(self.finish_action(outcome, text))
    }

    fn do_flip(&mut self) -> AleaResult<String> {
        let outcome = self.generator.flip_coin();
        let text = format!("The coin shows {}.", self.describe(&outcome));
        Ok(self.finish_action(outcome, text))
    }

    fn do_draw(&mut self, rest: &str) -> AleaResult<String> {
        let outcome = match rest.to_lowercase().as_str() {
            "" => self.generator.draw_card(),
            "custom" => self.generator.draw_custom(&self.config.custom_cards)?,
            other => {
                return Err(AleaError::InvalidChoice(format!(
                    "usage: draw [custom], not 'draw {other}'"
                )));
            }
        };
        let text = format!("You drew {outcome}.");
        Ok(self.finish_action(outcome, text))
    }

    /// Resolve the outcome against the pending guess, record it, and append
    /// any verdict line to the action text.
    fn finish_action(&mut self, outcome: Outcome, mut text: String) -> String {
        let verdict = self.game.resolve(&outcome);
        if let Some(streak) = self.game.streak()
            && streak.best() > self.best_streak
        {
            self.best_streak = streak.best();
        }
        self.history.push(outcome, verdict);

        match verdict {
            Some(Verdict::Correct) => {
                if let Some(streak) = self.game.streak() {
                    text.push_str(&format!(
                        "\nCorrect! Streak: {} (best {}).",
                        streak.current(),
                        streak.best()
                    ));
                }
            }
            Some(Verdict::StreakBroken { previous }) => {
                text.push_str(&format!("\nIncorrect. You lost a streak of {previous}."));
            }
            Some(Verdict::Incorrect) => text.push_str("\nIncorrect."),
            None => {}
        }
        text
    }

    fn do_predict(&mut self) -> AleaResult<String> {
        let restarted = self.game.is_active();
        self.game.enter(self.best_streak);
        if restarted {
            Ok("Prediction mode restarted. Streak back to zero.".to_string())
        } else {
            Ok(format!(
                "Prediction mode on. Best streak so far: {}. Commit a guess, then roll or flip.",
                self.best_streak
            ))
        }
    }

    fn do_stop(&mut self) -> AleaResult<String> {
        self.game.exit();
        Ok(format!(
            "Prediction mode off. Best streak: {}.",
            self.best_streak
        ))
    }

    fn do_guess(&mut self, rest: &str) -> AleaResult<String> {
        if rest.is_empty() {
            return Err(AleaError::InvalidChoice(
                "usage: guess <face number|heads|tails>".to_string(),
            ));
        }
        let guess = self.parse_guess(rest)?;
        self.game.submit(guess, self.config.die_sides)?;
        Ok(match guess {
            Guess::Die(value) => format!("Guess locked in: the die shows {value}."),
            Guess::Coin(heads) => format!(
                "Guess locked in: the coin shows {}.",
                self.config.coin.label(heads)
            ),
        })
    }

    /// Parse a guess: a number is a die face, anything else is matched
    /// against the coin labels (canonical names included).
    fn parse_guess(&self, input: &str) -> AleaResult<Guess> {
        let lower = input.to_lowercase();
        if let Ok(value) = lower.parse::<u32>() {
            return Ok(Guess::Die(value));
        }
        if lower == "heads" || lower == self.config.coin.heads.to_lowercase() {
            return Ok(Guess::Coin(true));
        }
        if lower == "tails" || lower == self.config.coin.tails.to_lowercase() {
            return Ok(Guess::Coin(false));
        }
        Err(AleaError::InvalidChoice(format!(
            "cannot guess '{input}': use a face number, '{}', or '{}'",
            self.config.coin.heads, self.config.coin.tails
        )))
    }

    fn do_set(&mut self, rest: &str) -> AleaResult<String> {
        let parts: Vec<&str> = rest.split_whitespace().collect();
        match parts.as_slice() {
            ["die", sides] => {
                let sides: u32 = sides.parse().map_err(|_| {
                    AleaError::InvalidChoice(format!("not a face count: {sides}"))
                })?;
                self.config.set_die_sides(sides);
                Ok(format!("Die faces set to {}.", self.config.die_sides))
            }
            ["coin", heads, tails] => {
                self.config.coin = CoinLabels::new(heads, tails)?;
                Ok(format!(
                    "Coin faces set to {} / {}.",
                    self.config.coin.heads, self.config.coin.tails
                ))
            }
            _ => Err(AleaError::InvalidChoice(
                "usage: set die <faces> | set coin <heads> <tails>".to_string(),
            )),
        }
    }

    fn do_card(&mut self, rest: &str) -> AleaResult<String> {
        let parts: Vec<&str> = rest.splitn(2, ' ').collect();
        let sub = parts[0].to_lowercase();
        let arg = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match sub.as_str() {
            "add" if !arg.is_empty() => {
                if self.config.add_card(arg)? {
                    Ok(format!("Card added: {arg}"))
                } else {
                    Ok(format!("Card already present: {arg}"))
                }
            }
            "remove" if !arg.is_empty() => {
                if self.config.remove_card(arg) {
                    Ok(format!("Card removed: {arg}"))
                } else {
                    Ok(format!("Card not found: {arg}"))
                }
            }
            "clear" => {
                self.config.custom_cards.clear();
                Ok("Custom cards cleared.".to_string())
            }
            _ => Err(AleaError::InvalidChoice(
                "usage: card add|remove <label> | card clear".to_string(),
            )),
        }
    }

    fn do_cards(&self) -> AleaResult<String> {
        if self.config.custom_cards.is_empty() {
            return Ok("No custom cards.".to_string());
        }
        let mut out = format!("Custom cards ({}):\n", self.config.custom_cards.len());
        for (i, card) in self.config.custom_cards.iter().enumerate() {
            out.push_str(&format!("  {}. {card}\n", i + 1));
        }
        Ok(out.trim_end().to_string())
    }

    fn do_status(&self) -> AleaResult<String> {
        let mut out = String::new();
        match self.game.streak() {
            Some(streak) => {
                out.push_str("Prediction mode: on\n");
                out.push_str(&format!(
                    "  Streak: {} (best {})\n",
                    streak.current(),
                    streak.best()
                ));
                match self.game.pending() {
                    Some(guess) => {
                        out.push_str(&format!("  Pending guess: {}\n", self.pending_label(guess)))
                    }
                    None => out.push_str("  Pending guess: none\n"),
                }
            }
            None => {
                out.push_str("Prediction mode: off\n");
                out.push_str(&format!("  Best streak: {}\n", self.best_streak));
            }
        }
        out.push_str(&format!("Die: {} faces\n", self.config.die_sides));
        out.push_str(&format!(
            "Coin: {} / {}\n",
            self.config.coin.heads, self.config.coin.tails
        ));
        out.push_str(&format!(
            "Custom cards: {}\n",
            self.config.custom_cards.len()
        ));
        out.push_str(&format!("History: {} actions", self.history.len()));
        Ok(out)
    }

    fn do_history(&self) -> AleaResult<String> {
        if self.history.is_empty() {
            return Ok("Nothing has happened yet.".to_string());
        }
        let recent = self.history.recent(10);
        let mut out = format!(
            "History ({} actions, showing last {}):\n",
            self.history.len(),
            recent.len()
        );
        for entry in recent {
            let time = entry.timestamp.format("%H:%M:%S");
            let what = self.describe(&entry.outcome);
            let mark = match entry.verdict {
                Some(Verdict::Correct) => "  [correct]",
                Some(Verdict::StreakBroken { .. }) => "  [streak lost]",
                Some(Verdict::Incorrect) => "  [incorrect]",
                None => "",
            };
            let kind = entry.outcome.kind();
            out.push_str(&format!("  {time}  {kind}: {what}{mark}\n"));
        }
        Ok(out.trim_end().to_string())
    }

    /// Display an outcome with the configured coin labels.
    fn describe(&self, outcome: &Outcome) -> String {
        match outcome {
            Outcome::CoinFlip(heads) => self.config.coin.label(*heads).to_string(),
            other => other.to_string(),
        }
    }

    /// Display a pending guess with the configured coin labels.
    fn pending_label(&self, guess: Guess) -> String {
        match guess {
            Guess::Die(value) => format!("die shows {value}"),
            Guess::Coin(heads) => format!("coin shows {}", self.config.coin.label(heads)),
        }
    }
}

/// Static help text, with optional per-topic detail.
fn help_text(topic: &str) -> String {
    match topic.to_lowercase().as_str() {
        "predict" | "guess" => "\
Prediction Commands:
  predict                      Enter prediction mode (restarts if active)
  stop                         Leave prediction mode
  guess <face number>          Commit a die guess (1 to the face count)
  guess <heads|tails|label>    Commit a coin guess

Commit a guess, then roll or flip: a matching action settles the guess.
Actions without a committed guess never touch the streak."
            .to_string(),
        "set" | "card" | "cards" => "\
Customization Commands:
  set die <faces>              Set the die face count
  set coin <heads> <tails>     Rename the coin faces
  card add <label>             Add a custom card
  card remove <label>          Remove a custom card
  card clear                   Remove all custom cards
  cards                        List custom cards"
            .to_string(),
        _ => "\
Commands:
  roll                         Roll the die
  flip                         Flip the coin
  draw [custom]                Draw a card (standard deck, or your custom set)
  predict                      Enter prediction mode
  stop                         Leave prediction mode
  guess <face|heads|tails>     Commit a guess for the next action
  set die|coin ...             Change generation parameters
  card add|remove|clear        Manage custom cards
  cards                        List custom cards
  status                       Show session status
  history                      Show recent actions
  help [predict|set]           Show help
  quit                         Exit"
            .to_string(),
    }
}
