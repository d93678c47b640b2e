//! Game session: orchestration, persistence, and the observable view.
//!
//! ## Phases
//!
//! - `NotStarted` → `InProgress`: `start_game`, or restoring a live swarm
//! - `InProgress` → `InProgress`: a hit that leaves the swarm standing
//! - `InProgress` → `Over`: a hit that kills the queen or the last entity
//! - `Over` → `InProgress`: only `start_game` / `restart` / `reset`

mod game;
mod view;

pub use game::{GameSession, HitOutcome};
pub use view::{EntityView, GameView, HealthBand, KindCount, SessionPhase};
