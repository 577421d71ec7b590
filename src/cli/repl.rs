// Game session loop
//
// Prompt -> validate -> submit -> display, until the player quits or
// cracks the code. One network call in flight at a time; re-prompting is
// a loop over `Turn`, never recursion.

use anyhow::Result;
use tracing::debug;

use super::display;
use super::input::InputHandler;
use crate::client::GameClient;
use crate::game::{GameSession, Guess};

const PROMPT: &str = "Enter guess: ";

/// Outcome of processing one line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Keep prompting.
    Continue,
    /// Player asked to leave; session torn down.
    Quit,
    /// Guess matched the secret code; session torn down.
    Won,
}

/// Interactive loop for one game session.
///
/// Owns the client and the session explicitly; no process-wide state.
pub struct GameRepl {
    client: GameClient,
    session: GameSession,
}

impl GameRepl {
    pub fn new(client: GameClient, session: GameSession) -> Self {
        Self { client, session }
    }

    /// Run the prompt loop until the player quits or wins.
    pub async fn run_interactive(mut self) -> Result<()> {
        println!("Game ID: {}", self.session.id());
        println!("Enter your guesses (4 digits, 1-6). Type 'exit' to quit.\n");

        let mut input = InputHandler::new()?;
        loop {
            let line = match input.read_line(PROMPT)? {
                Some(line) => line,
                None => {
                    // Ctrl+C, Ctrl+D, or closed stdin: same cleanup as 'exit'.
                    self.quit().await;
                    break;
                }
            };

            match self.process_line(line.trim()).await {
                Turn::Continue => {}
                Turn::Quit | Turn::Won => break,
            }
        }

        if let Err(e) = input.save_history() {
            debug!("Failed to save prompt history: {e:#}");
        }
        Ok(())
    }

    /// Advance the session by one line of input.
    ///
    /// All recoverable errors (bad syntax, failed submission) are reported
    /// to the player here and answered with `Turn::Continue`.
    pub async fn process_line(&mut self, line: &str) -> Turn {
        if line.is_empty() {
            println!("Invalid input. Try again.\n");
            return Turn::Continue;
        }

        if line.eq_ignore_ascii_case("exit") {
            self.quit().await;
            return Turn::Quit;
        }

        let guess: Guess = match line.parse() {
            Ok(guess) => guess,
            Err(_) => {
                println!("Invalid guess. Must be exactly 4 digits from 1 to 6.\n");
                return Turn::Continue;
            }
        };

        match self.client.submit_guess(&self.session, &guess).await {
            Ok(feedback) => {
                display::print_result(&feedback);
                if feedback.is_win() {
                    display::print_divider();
                    println!("Congratulations! You've cracked the code!");
                    display::print_divider();
                    self.delete_best_effort().await;
                    Turn::Won
                } else {
                    Turn::Continue
                }
            }
            Err(e) => {
                debug!("Guess submission failed: {e:#}");
                println!("Failed to get result. Try again.\n");
                Turn::Continue
            }
        }
    }

    async fn quit(&self) {
        self.delete_best_effort().await;
        println!("\nThank you for playing. Goodbye!");
    }

    /// Session teardown is best-effort: a failed delete never reaches the
    /// player or blocks exit.
    async fn delete_best_effort(&self) {
        if let Err(e) = self.client.delete_game(&self.session).await {
            debug!(game_id = %self.session.id(), "Failed to delete game: {e:#}");
        }
    }
}
