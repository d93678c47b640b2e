//! Core engine types: entities, RNG, configuration.
//!
//! This module contains the building blocks the swarm and session are made
//! of. Games configure them via `SessionConfig` rather than modifying them.

pub mod entity;
pub mod rng;
pub mod config;

pub use entity::{Entity, EntityId, EntityKind};
pub use rng::{GameRng, GameRngState, RandomSource, SequenceRng};
pub use config::{DamageModel, Roster, RosterEntry, SessionConfig};
