// Mastermind - command-line client for the remote guessing game
// Library exports

pub mod cli;
pub mod client; // HTTP transport to the game server
pub mod config;
pub mod game;
