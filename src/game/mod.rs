// Domain types: guesses and game sessions

mod guess;
mod session;

pub use guess::{Guess, GuessError, CODE_LENGTH};
pub use session::GameSession;
