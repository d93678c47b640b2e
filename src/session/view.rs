//! Read-only view of a session for the presentation layer.

use serde::{Deserialize, Serialize};

use crate::core::{EntityId, EntityKind, Roster};
use crate::swarm::{Hit, Swarm};

/// Session state machine position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No game started and nothing restored.
    #[default]
    NotStarted,
    /// A live swarm is being fought.
    InProgress,
    /// The swarm is defeated. Only a new start leaves this phase.
    Over,
}

/// Coarse health bucket for health bars.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthBand {
    /// Above half health.
    Healthy,
    /// Above a fifth.
    Wounded,
    Critical,
}

impl HealthBand {
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > 0.5 {
            HealthBand::Healthy
        } else if ratio > 0.2 {
            HealthBand::Wounded
        } else {
            HealthBand::Critical
        }
    }
}

/// Alive/total counts for one kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindCount {
    pub kind: EntityKind,
    pub alive: usize,
    pub total: usize,
}

/// One entity, as the presentation layer sees it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: EntityId,
    pub kind: EntityKind,
    pub health: u32,
    pub max_health: u32,
    pub band: HealthBand,
    pub asset: Option<String>,
}

/// Snapshot of everything a UI renders after an operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameView {
    pub player_name: String,
    pub phase: SessionPhase,
    pub alive: usize,
    pub total: usize,
    pub kinds: Vec<KindCount>,
    pub current_health: u64,
    pub total_health: u64,
    pub band: HealthBand,
    pub entities: Vec<EntityView>,
    pub last_hit: Option<Hit>,
}

impl GameView {
    pub(crate) fn build(
        player_name: &str,
        phase: SessionPhase,
        swarm: &Swarm,
        roster: &Roster,
        last_hit: Option<Hit>,
    ) -> Self {
        let kinds = roster
            .kinds()
            .into_iter()
            .map(|kind| KindCount {
                kind,
                alive: swarm.alive_count_of(kind),
                total: swarm.count_of(kind),
            })
            .collect();

        let entities = swarm
            .iter()
            .map(|(id, e)| EntityView {
                id,
                kind: e.kind,
                health: e.health(),
                max_health: e.max_health(),
                band: HealthBand::from_ratio(e.health_ratio()),
                asset: roster.entry(e.kind).and_then(|r| r.asset.clone()),
            })
            .collect();

        let current_health = swarm.current_health();
        let total_health = swarm.total_health();
        let ratio = if total_health == 0 {
            0.0
        } else {
            current_health as f64 / total_health as f64
        };

        Self {
            player_name: player_name.to_string(),
            phase,
            alive: swarm.alive_count(),
            total: swarm.len(),
            kinds,
            current_health,
            total_health,
            band: HealthBand::from_ratio(ratio),
            entities,
            last_hit,
        }
    }

    /// Alive/total for one kind, if the roster fields it.
    #[must_use]
    pub fn kind_count(&self, kind: EntityKind) -> Option<KindCount> {
        self.kinds.iter().find(|k| k.kind == kind).copied()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == SessionPhase::Over
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_band_thresholds() {
        assert_eq!(HealthBand::from_ratio(1.0), HealthBand::Healthy);
        assert_eq!(HealthBand::from_ratio(0.51), HealthBand::Healthy);
        assert_eq!(HealthBand::from_ratio(0.5), HealthBand::Wounded);
        assert_eq!(HealthBand::from_ratio(0.21), HealthBand::Wounded);
        assert_eq!(HealthBand::from_ratio(0.2), HealthBand::Critical);
        assert_eq!(HealthBand::from_ratio(0.0), HealthBand::Critical);
    }

    #[test]
    fn test_view_of_fresh_swarm() {
        let roster = Roster::default();
        let swarm = Swarm::build(&roster);
        let view = GameView::build("Ada", SessionPhase::InProgress, &swarm, &roster, None);

        assert_eq!(view.alive, 14);
        assert_eq!(view.total, 14);
        assert_eq!(view.band, HealthBand::Healthy);
        assert_eq!(view.current_health, view.total_health);
        assert_eq!(
            view.kind_count(EntityKind::Worker),
            Some(KindCount { kind: EntityKind::Worker, alive: 5, total: 5 })
        );
        assert_eq!(view.entities[0].asset.as_deref(), Some("assets/queen-bee.png"));
        assert!(!view.is_over());
    }
}
