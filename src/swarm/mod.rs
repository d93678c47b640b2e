//! Swarm: the opposing side in a game.
//!
//! A `Swarm` is built from a `Roster` and supports:
//! - Alive filtering (lazy, order-preserving)
//! - Uniform random target selection with damage application
//! - The game-over predicate (queen dead, or everything dead)
//! - Positional health save/apply for persistence

mod engine;

pub use engine::{Hit, Swarm};
