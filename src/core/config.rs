//! Roster and session configuration.
//!
//! Games configure the engine by providing:
//! - `RosterEntry`: how many entities of one kind, and their stats
//! - `Roster`: ordered entries plus the distinguished queen kind
//! - `SessionConfig`: roster, damage model, history bound, storage keys
//!
//! All of these derive serde, so a config can be loaded from JSON with
//! [`SessionConfig::from_json`].

use serde::{Deserialize, Serialize};

use super::entity::EntityKind;
use crate::error::SessionError;

/// Template for one kind of entity in a fresh swarm.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub kind: EntityKind,
    /// Number of entities of this kind.
    pub count: u32,
    /// Starting (and maximum) health.
    pub health: u32,
    /// Damage per hit.
    pub damage: u32,
    /// Display asset for the presentation layer (image path).
    #[serde(default)]
    pub asset: Option<String>,
}

impl RosterEntry {
    /// Create a new roster entry with no asset.
    pub fn new(kind: EntityKind, count: u32, health: u32, damage: u32) -> Self {
        Self {
            kind,
            count,
            health,
            damage,
            asset: None,
        }
    }

    /// Attach a display asset reference.
    #[must_use]
    pub fn with_asset(mut self, asset: impl Into<String>) -> Self {
        self.asset = Some(asset.into());
        self
    }
}

/// Declarative template used to build a fresh swarm.
///
/// Entry order is swarm order, which persisted snapshots depend on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub entries: Vec<RosterEntry>,

    /// Kind whose death alone ends the game. `None` means only a fully
    /// dead swarm ends it.
    #[serde(default)]
    pub queen: Option<EntityKind>,
}

impl Default for Roster {
    /// One queen, five workers and eight drones.
    fn default() -> Self {
        Self::new()
            .with_entry(RosterEntry::new(EntityKind::Queen, 1, 100, 8).with_asset("assets/queen-bee.png"))
            .with_entry(RosterEntry::new(EntityKind::Worker, 5, 75, 10).with_asset("assets/worker-bee.png"))
            .with_entry(RosterEntry::new(EntityKind::Drone, 8, 50, 12).with_asset("assets/drone-bee.png"))
            .with_queen(EntityKind::Queen)
    }
}

impl Roster {
    /// Create an empty roster with no queen.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            queen: None,
        }
    }

    /// Append an entry.
    #[must_use]
    pub fn with_entry(mut self, entry: RosterEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Set the distinguished queen kind.
    #[must_use]
    pub fn with_queen(mut self, kind: EntityKind) -> Self {
        self.queen = Some(kind);
        self
    }

    /// Total number of entities a swarm built from this roster holds.
    #[must_use]
    pub fn size(&self) -> usize {
        self.entries.iter().map(|e| e.count as usize).sum()
    }

    /// Get the first entry for a kind.
    #[must_use]
    pub fn entry(&self, kind: EntityKind) -> Option<&RosterEntry> {
        self.entries.iter().find(|e| e.kind == kind)
    }

    /// Check that a swarm built from this roster can be fought.
    ///
    /// Every entry must start alive, the roster must field at least one
    /// entity, and the total must fit an [`EntityId`](super::EntityId).
    pub fn validate(&self) -> Result<(), SessionError> {
        if let Some(entry) = self.entries.iter().find(|e| e.health == 0) {
            return Err(SessionError::InvalidRoster(format!(
                "{} entries must have health above 0",
                entry.kind
            )));
        }
        let size = self.size();
        if size == 0 {
            return Err(SessionError::InvalidRoster("roster fields no entities".to_string()));
        }
        if u32::try_from(size).is_err() {
            return Err(SessionError::InvalidRoster(format!("{size} entities exceed the id range")));
        }
        Ok(())
    }

    /// Kinds in roster order, without duplicates.
    pub fn kinds(&self) -> Vec<EntityKind> {
        let mut kinds = Vec::new();
        for entry in &self.entries {
            if !kinds.contains(&entry.kind) {
                kinds.push(entry.kind);
            }
        }
        kinds
    }
}

/// How much damage a hit deals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageModel {
    /// The hit entity loses exactly its own `damage` value. Deterministic.
    #[default]
    Fixed,
    /// The hit entity loses a uniform roll in `[0, damage)`.
    Random,
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub roster: Roster,

    pub damage_model: DamageModel,

    /// Maximum snapshots kept in the persisted history (oldest evicted).
    pub max_history: usize,

    /// Store key for the snapshot history.
    pub history_key: String,

    /// Store key for the current player's name.
    pub player_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            roster: Roster::default(),
            damage_model: DamageModel::Fixed,
            max_history: 100,
            history_key: "swarmStates".to_string(),
            player_key: "playerName".to_string(),
        }
    }
}

impl SessionConfig {
    /// Create a config for a roster with default settings.
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            ..Self::default()
        }
    }

    /// Load a config from JSON. Missing fields take their defaults.
    ///
    /// The roster is validated with [`Roster::validate`].
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        let config: Self = serde_json::from_str(json).map_err(SessionError::Config)?;
        config.roster.validate()?;
        Ok(config)
    }

    /// Set the damage model.
    #[must_use]
    pub fn with_damage_model(mut self, model: DamageModel) -> Self {
        self.damage_model = model;
        self
    }

    /// Set the history bound.
    #[must_use]
    pub fn with_max_history(mut self, max: usize) -> Self {
        self.max_history = max;
        self
    }

    /// Override the storage keys.
    #[must_use]
    pub fn with_keys(mut self, history_key: impl Into<String>, player_key: impl Into<String>) -> Self {
        self.history_key = history_key.into();
        self.player_key = player_key.into();
        self
    }
}
