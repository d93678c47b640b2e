//! Game session: a swarm, a player, and persisted progress.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::view::{GameView, SessionPhase};
use crate::core::{RandomSource, SessionConfig};
use crate::error::SessionError;
use crate::persistence::{KeyValueStore, Snapshot, SnapshotHistory};
use crate::swarm::{Hit, Swarm};

/// Result of [`GameSession::hit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitOutcome {
    /// The entity that was hit, or `None` if there was no legal move.
    pub hit: Option<Hit>,
    pub game_over: bool,
}

/// Orchestrates one player's fight against one swarm.
///
/// Progress survives a reload: every mutation writes the snapshot history
/// through the injected store, and construction restores the latest
/// snapshot.
///
/// ## Example
///
/// ```
/// use swarm_strike::core::{GameRng, SessionConfig};
/// use swarm_strike::persistence::MemoryStore;
/// use swarm_strike::session::{GameSession, SessionPhase};
///
/// let mut store = MemoryStore::new();
///
/// let mut session = GameSession::new(SessionConfig::default(), &mut store, GameRng::new(42)).unwrap();
/// assert_eq!(session.phase(), SessionPhase::NotStarted);
///
/// session.start_game("Ada").unwrap();
/// let outcome = session.hit().unwrap();
/// assert!(outcome.hit.is_some());
/// drop(session);
///
/// // A new session picks up where the last one left off
/// let session = GameSession::new(SessionConfig::default(), &mut store, GameRng::new(7)).unwrap();
/// assert_eq!(session.player_name(), "Ada");
/// assert_eq!(session.phase(), SessionPhase::InProgress);
/// ```
#[derive(Debug)]
pub struct GameSession<S, R> {
    config: SessionConfig,
    store: S,
    rng: R,
    player_name: String,
    swarm: Swarm,
    history: SnapshotHistory,
    phase: SessionPhase,
    last_hit: Option<Hit>,
}

impl<S: KeyValueStore, R: RandomSource> GameSession<S, R> {
    /// Create a session and restore any persisted progress.
    ///
    /// Fails if the roster does not pass [`Roster::validate`](crate::core::Roster::validate).
    pub fn new(config: SessionConfig, store: S, rng: R) -> Result<Self, SessionError> {
        config.roster.validate()?;
        let swarm = Swarm::build(&config.roster);
        let history = SnapshotHistory::new(config.max_history);

        let mut session = Self {
            config,
            store,
            rng,
            player_name: String::new(),
            swarm,
            history,
            phase: SessionPhase::NotStarted,
            last_hit: None,
        };
        session.restore();
        Ok(session)
    }

    /// Reload state from the store.
    ///
    /// Missing or malformed history means a fresh game; it is never an error.
    pub fn restore(&mut self) {
        self.history = self.load_history();
        self.swarm = Swarm::build(&self.config.roster);
        self.last_hit = None;

        match self.history.latest() {
            Some(snapshot) => {
                if snapshot.health_points.len() != self.swarm.len() {
                    debug!(
                        saved = snapshot.health_points.len(),
                        swarm = self.swarm.len(),
                        "snapshot size differs from roster"
                    );
                }
                self.player_name = snapshot.player_name.clone();
                self.swarm.apply_health_points(&snapshot.health_points);
                info!(
                    player = %self.player_name,
                    alive = self.swarm.alive_count(),
                    "restored game"
                );
                if self.swarm.is_game_over() {
                    // Finished games are not kept around for the next visit
                    self.clear_history();
                    self.phase = SessionPhase::Over;
                } else {
                    self.phase = SessionPhase::InProgress;
                }
            }
            None => {
                self.player_name = self.store.load(&self.config.player_key).unwrap_or_default();
                self.phase = SessionPhase::NotStarted;
            }
        }
    }

    fn load_history(&self) -> SnapshotHistory {
        let max = self.config.max_history;
        let Some(json) = self.store.load(&self.config.history_key) else {
            return SnapshotHistory::new(max);
        };

        match SnapshotHistory::decode(&json, max) {
            Ok(history) => history,
            Err(e) => {
                warn!(error = %e, "discarding unreadable snapshot history");
                SnapshotHistory::new(max)
            }
        }
    }

    /// Start a new game for `player_name`, discarding any fight in progress.
    ///
    /// A blank name is rejected and leaves the session untouched.
    pub fn start_game(&mut self, player_name: &str) -> Result<GameView, SessionError> {
        let name = player_name.trim();
        if name.is_empty() {
            return Err(SessionError::BlankPlayerName);
        }

        self.player_name = name.to_string();
        self.store.save(&self.config.player_key, self.player_name.clone());

        self.swarm = Swarm::build(&self.config.roster);
        self.last_hit = None;
        self.phase = if self.swarm.is_game_over() {
            SessionPhase::Over
        } else {
            SessionPhase::InProgress
        };
        self.save_snapshot()?;

        info!(player = %self.player_name, swarm = self.swarm.len(), "game started");
        Ok(self.view())
    }

    /// Start over with the stored current player.
    pub fn restart(&mut self) -> Result<GameView, SessionError> {
        let name = self
            .store
            .load(&self.config.player_key)
            .ok_or(SessionError::NoPlayer)?;
        self.start_game(&name)
    }

    /// Drop all saved history, then [`restart`](Self::restart).
    pub fn reset(&mut self) -> Result<GameView, SessionError> {
        self.clear_history();
        self.restart()
    }

    /// Hit a random living member of the swarm.
    ///
    /// Once the game is over this is a no-op reporting `game_over`.
    pub fn hit(&mut self) -> Result<HitOutcome, SessionError> {
        match self.phase {
            SessionPhase::NotStarted => return Err(SessionError::NotStarted),
            SessionPhase::Over => {
                return Ok(HitOutcome {
                    hit: None,
                    game_over: true,
                })
            }
            SessionPhase::InProgress => {}
        }

        let Some(hit) = self
            .swarm
            .hit_random_entity(&mut self.rng, self.config.damage_model)
        else {
            self.phase = SessionPhase::Over;
            return Ok(HitOutcome {
                hit: None,
                game_over: true,
            });
        };

        self.last_hit = Some(hit);
        self.save_snapshot()?;

        let game_over = self.swarm.is_game_over();
        if game_over {
            self.clear_history();
            self.phase = SessionPhase::Over;
            info!(player = %self.player_name, last = %hit.entity.kind, "swarm defeated");
        }

        Ok(HitOutcome {
            hit: Some(hit),
            game_over,
        })
    }

    /// Append the current state to the history and write it out.
    pub fn save_snapshot(&mut self) -> Result<(), SessionError> {
        self.history.push(Snapshot::new(
            self.player_name.clone(),
            self.swarm.health_points(),
            Utc::now(),
        ));

        let json = self.history.encode().map_err(SessionError::Encode)?;
        self.store.save(&self.config.history_key, json);
        Ok(())
    }

    /// Remove the persisted history. The current player key is kept.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.store.remove(&self.config.history_key);
    }

    /// Everything a presentation layer needs to render.
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView::build(
            &self.player_name,
            self.phase,
            &self.swarm,
            &self.config.roster,
            self.last_hit,
        )
    }

    // === Accessors ===

    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn swarm(&self) -> &Swarm {
        &self.swarm
    }

    #[must_use]
    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    #[must_use]
    pub fn last_hit(&self) -> Option<Hit> {
        self.last_hit
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the session, returning its store.
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EntityKind, Roster, RosterEntry, SequenceRng};
    use crate::persistence::MemoryStore;

    fn config() -> SessionConfig {
        SessionConfig::new(
            Roster::new()
                .with_entry(RosterEntry::new(EntityKind::Queen, 1, 10, 5))
                .with_entry(RosterEntry::new(EntityKind::Worker, 2, 10, 5))
                .with_queen(EntityKind::Queen),
        )
    }

    #[test]
    fn test_fresh_session_not_started() {
        let session = GameSession::new(config(), MemoryStore::new(), SequenceRng::default()).unwrap();
        assert_eq!(session.phase(), SessionPhase::NotStarted);
        assert_eq!(session.player_name(), "");
        assert_eq!(session.swarm().health_points(), vec![10, 10, 10]);
    }

    #[test]
    fn test_hit_before_start_is_error() {
        let mut session = GameSession::new(config(), MemoryStore::new(), SequenceRng::default()).unwrap();
        assert!(matches!(session.hit(), Err(SessionError::NotStarted)));
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_start_trims_and_persists() {
        let mut session = GameSession::new(config(), MemoryStore::new(), SequenceRng::default()).unwrap();
        let view = session.start_game("  Ada ").unwrap();

        assert_eq!(view.player_name, "Ada");
        assert_eq!(view.phase, SessionPhase::InProgress);
        assert_eq!(session.store().load("playerName").as_deref(), Some("Ada"));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut session = GameSession::new(config(), MemoryStore::new(), SequenceRng::default()).unwrap();
        assert!(matches!(session.start_game("   "), Err(SessionError::BlankPlayerName)));
        assert_eq!(session.phase(), SessionPhase::NotStarted);
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_hit_appends_snapshot() {
        let mut session = GameSession::new(config(), MemoryStore::new(), SequenceRng::new([1])).unwrap();
        session.start_game("Ada").unwrap();

        let outcome = session.hit().unwrap();
        let hit = outcome.hit.unwrap();
        assert_eq!(hit.entity.kind, EntityKind::Worker);
        assert!(!outcome.game_over);
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history().latest().unwrap().health_points, vec![10, 5, 10]);
        assert_eq!(session.last_hit(), Some(hit));
    }

    #[test]
    fn test_over_clears_history_and_ignores_hits() {
        let mut session = GameSession::new(config(), MemoryStore::new(), SequenceRng::new([0])).unwrap();
        session.start_game("Ada").unwrap();

        session.hit().unwrap();
        let outcome = session.hit().unwrap();
        assert!(outcome.game_over);
        assert_eq!(session.phase(), SessionPhase::Over);
        assert!(!session.store().contains_key("swarmStates"));
        assert!(session.store().contains_key("playerName"));

        let before = session.swarm().health_points();
        let outcome = session.hit().unwrap();
        assert_eq!(outcome, HitOutcome { hit: None, game_over: true });
        assert_eq!(session.swarm().health_points(), before);
        assert!(!session.store().contains_key("swarmStates"));
    }

    #[test]
    fn test_restart_requires_stored_player() {
        let mut session = GameSession::new(config(), MemoryStore::new(), SequenceRng::default()).unwrap();
        assert!(matches!(session.restart(), Err(SessionError::NoPlayer)));
    }
}
