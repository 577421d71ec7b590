// Terminal front end
// Prompt loop, input handling, and display formatting

pub mod display;
mod input;
mod repl;

pub use input::InputHandler;
pub use repl::{GameRepl, Turn};
