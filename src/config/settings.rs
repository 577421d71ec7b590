// Configuration structs

/// Server the client talks to when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "https://mastermind.darkube.app";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Mastermind server.
    pub server_url: String,

    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}
