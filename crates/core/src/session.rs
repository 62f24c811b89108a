//! State that outlives any single screen.

/// Name shown when no player name has been entered.
pub const DEFAULT_PLAYER_NAME: &str = "Anonim Tusk";

/// Per-run session data, threaded through screens explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    player_name: String,
}

impl Session {
    /// Start a session for the given player.
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
        }
    }

    /// Current player name.
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Replace the player name.
    pub fn set_player_name(&mut self, name: impl Into<String>) {
        self.player_name = name.into();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_NAME)
    }
}
