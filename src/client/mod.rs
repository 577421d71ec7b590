// Transport to the remote game server

mod game_client;
pub mod types;

pub use game_client::GameClient;
