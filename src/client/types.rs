// Wire types for the game server's HTTP contract

use serde::{Deserialize, Serialize};

use crate::game::CODE_LENGTH;

/// Response to `POST /game`.
#[derive(Debug, Deserialize)]
pub struct NewGameResponse {
    pub game_id: String,
}

/// Request body for `POST /guess`.
#[derive(Debug, Serialize)]
pub struct GuessRequest {
    pub game_id: String,
    pub guess: String,
}

/// Peg feedback the server reports for a submitted guess.
///
/// `black` counts symbols matching both value and position; `white` counts
/// symbols present in the code but misplaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GuessFeedback {
    pub black: u32,
    pub white: u32,
}

impl GuessFeedback {
    /// The guess cracked the code: every position is an exact match.
    pub fn is_win(&self) -> bool {
        self.black as usize == CODE_LENGTH
    }
}

/// Error body the server attaches to non-success responses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
