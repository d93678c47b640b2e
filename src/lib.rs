//! # swarm-strike
//!
//! A turn-based swarm combat engine: a player hits random members of an
//! opposing swarm (a queen, workers, drones) until the queen or the whole
//! swarm is dead. Progress survives reloads through an injected key/value
//! store.
//!
//! ## Design Principles
//!
//! 1. **Roster-Driven**: swarm composition and stats come from a `Roster`,
//!    not from per-kind types.
//!
//! 2. **Injected Boundaries**: randomness (`RandomSource`) and storage
//!    (`KeyValueStore`) are passed in, so tests run deterministically
//!    against in-memory fakes.
//!
//! 3. **Plain Data Out**: operations return `HitOutcome` / `GameView`;
//!    rendering is the caller's job.
//!
//! ## Modules
//!
//! - `core`: Entities, RNG, roster and session configuration
//! - `swarm`: Target selection, damage, game-over predicate
//! - `persistence`: Store boundary, snapshots, bounded history
//! - `session`: Game session state machine and observable view

pub mod core;
pub mod error;
pub mod persistence;
pub mod session;
pub mod swarm;

// Re-export commonly used types
pub use crate::core::{
    DamageModel, Entity, EntityId, EntityKind, GameRng, GameRngState, RandomSource, Roster,
    RosterEntry, SequenceRng, SessionConfig,
};

pub use crate::error::SessionError;

pub use crate::persistence::{KeyValueStore, MemoryStore, Snapshot, SnapshotHistory};

pub use crate::session::{
    EntityView, GameSession, GameView, HealthBand, HitOutcome, KindCount, SessionPhase,
};

pub use crate::swarm::{Hit, Swarm};
