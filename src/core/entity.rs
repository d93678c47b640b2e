//! Combatants and their identifiers.
//!
//! Every member of a swarm is an `Entity` tagged with an `EntityKind`.
//! Kinds carry no behavior of their own: stats come from the roster, and the
//! only kind-dependent rule (queen death ends the game) is an equality check
//! against the roster's distinguished kind.
//!
//! ## Usage
//!
//! ```
//! use swarm_strike::core::{Entity, EntityKind};
//!
//! let mut worker = Entity::new(EntityKind::Worker, 10, 4);
//!
//! assert_eq!(worker.receive_damage(4), 6);
//! assert_eq!(worker.receive_damage(100), 0);
//! assert!(!worker.is_alive());
//! ```

use serde::{Deserialize, Serialize};

/// Positional identifier of an entity within its swarm.
///
/// Swarm order is roster order, so the same `EntityId` refers to the same
/// slot across save and restore.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Get the index into the swarm's entity list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<usize> for EntityId {
    type Error = std::num::TryFromIntError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        u32::try_from(index).map(Self)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Closed set of entity types a roster can field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Queen,
    Worker,
    Drone,
}

impl EntityKind {
    /// All kinds, in default roster order.
    pub const ALL: [EntityKind; 3] = [EntityKind::Queen, EntityKind::Worker, EntityKind::Drone];

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EntityKind::Queen => "Queen",
            EntityKind::Worker => "Worker",
            EntityKind::Drone => "Drone",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single combatant.
///
/// `max_health` and `damage` are fixed at creation. `health` only ever goes
/// down through [`Entity::receive_damage`] (or is overwritten on restore) and
/// never leaves `0..=max_health`. A dead entity stays in its swarm at 0.
///
/// Deserialization enforces the same bounds and rejects anything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EntityRecord")]
pub struct Entity {
    pub kind: EntityKind,
    max_health: u32,
    health: u32,
    damage: u32,
}

impl Entity {
    /// Create an entity at full health.
    #[must_use]
    pub const fn new(kind: EntityKind, max_health: u32, damage: u32) -> Self {
        Self {
            kind,
            max_health,
            health: max_health,
            damage,
        }
    }

    #[must_use]
    pub const fn max_health(&self) -> u32 {
        self.max_health
    }

    #[must_use]
    pub const fn health(&self) -> u32 {
        self.health
    }

    /// Damage this entity deals per hit (and, under the fixed damage model,
    /// the damage it takes per hit).
    #[must_use]
    pub const fn damage(&self) -> u32 {
        self.damage
    }

    /// Subtract `amount` from health, clamping at 0. Returns the new health.
    pub fn receive_damage(&mut self, amount: u32) -> u32 {
        self.health = self.health.saturating_sub(amount);
        self.health
    }

    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Overwrite health with a persisted value, clamped to `max_health`.
    pub fn restore_health(&mut self, value: u32) {
        self.health = value.min(self.max_health);
    }

    /// Fraction of health remaining, in `0.0..=1.0`.
    #[must_use]
    pub fn health_ratio(&self) -> f64 {
        if self.max_health == 0 {
            return 0.0;
        }
        f64::from(self.health) / f64::from(self.max_health)
    }
}

/// Unchecked wire form of an [`Entity`].
#[derive(Deserialize)]
struct EntityRecord {
    kind: EntityKind,
    max_health: u32,
    health: u32,
    damage: u32,
}

impl TryFrom<EntityRecord> for Entity {
    type Error = String;

    fn try_from(record: EntityRecord) -> Result<Self, Self::Error> {
        if record.max_health == 0 {
            return Err(format!("{} has zero max health", record.kind));
        }
        if record.health > record.max_health {
            return Err(format!(
                "{} health {} exceeds max health {}",
                record.kind, record.health, record.max_health
            ));
        }
        Ok(Self {
            kind: record.kind,
            max_health: record.max_health,
            health: record.health,
            damage: record.damage,
        })
    }
}
