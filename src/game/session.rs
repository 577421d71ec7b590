// Game session handle

/// Server-side game instance, identified by the opaque id issued at
/// creation. Held by the session loop from creation until the delete call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    id: String,
}

impl GameSession {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The server-issued game id.
    pub fn id(&self) -> &str {
        &self.id
    }
}
