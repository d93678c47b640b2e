//! Session error types.

/// Errors returned by session operations.
///
/// Problems with persisted data are not errors: the session recovers by
/// falling back to a fresh roster.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// `start_game` was given an empty or whitespace-only name.
    #[error("player name must not be blank")]
    BlankPlayerName,

    /// `restart` found no current player in the store.
    #[error("no current player is stored")]
    NoPlayer,

    /// `hit` before any game was started or restored.
    #[error("no game in progress")]
    NotStarted,

    /// The roster cannot produce a fightable swarm.
    #[error("invalid roster: {0}")]
    InvalidRoster(String),

    /// Failed to encode the snapshot history.
    #[error("failed to encode snapshot history: {0}")]
    Encode(#[source] serde_json::Error),

    /// Failed to parse a session config.
    #[error("invalid session config: {0}")]
    Config(#[source] serde_json::Error),
}
