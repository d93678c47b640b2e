//! The swarm combat engine.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DamageModel, Entity, EntityId, EntityKind, RandomSource, Roster};

/// Outcome of a single hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    /// Which slot was hit.
    pub id: EntityId,
    /// The entity after damage was applied (possibly dead).
    pub entity: Entity,
    /// Damage actually applied.
    pub damage_dealt: u32,
}

/// Ordered collection of entities built from a roster.
///
/// Entities are never removed: a dead entity stays in place at 0 health so
/// that positional save/restore keeps lining up.
///
/// ## Example
///
/// ```
/// use swarm_strike::core::{DamageModel, EntityKind, Roster, RosterEntry, SequenceRng};
/// use swarm_strike::swarm::Swarm;
///
/// let roster = Roster::new()
///     .with_entry(RosterEntry::new(EntityKind::Queen, 1, 10, 5))
///     .with_entry(RosterEntry::new(EntityKind::Worker, 2, 10, 5))
///     .with_queen(EntityKind::Queen);
///
/// let mut swarm = Swarm::build(&roster);
/// let mut rng = SequenceRng::new([0]);
///
/// let hit = swarm.hit_random_entity(&mut rng, DamageModel::Fixed).unwrap();
/// assert_eq!(hit.entity.kind, EntityKind::Queen);
/// assert_eq!(hit.entity.health(), 5);
/// assert!(!swarm.is_game_over());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Swarm {
    entities: Vec<Entity>,
    queen: Option<EntityKind>,
}

impl Swarm {
    /// Build a fresh swarm in roster order.
    ///
    /// A swarm holds at most `u32::MAX` entities; anything past that is
    /// left out, which [`Roster::validate`] rejects up front.
    #[must_use]
    pub fn build(roster: &Roster) -> Self {
        let entities: Vec<Entity> = roster
            .entries
            .iter()
            .flat_map(|entry| {
                (0..entry.count).map(|_| Entity::new(entry.kind, entry.health, entry.damage))
            })
            .take(u32::MAX as usize)
            .collect();

        Self {
            entities,
            queen: roster.queen,
        }
    }

    /// Number of entities, dead or alive.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// All entities in roster order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Get an entity by position.
    #[must_use]
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    /// Iterate over every entity with its id, in order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> + '_ {
        self.entities.iter().zip(0u32..).map(|(e, i)| (EntityId(i), e))
    }

    /// Iterate over living entities, in order.
    pub fn alive_entities(&self) -> impl Iterator<Item = (EntityId, &Entity)> + '_ {
        self.iter().filter(|(_, e)| e.is_alive())
    }

    /// Hit a uniformly chosen living entity.
    ///
    /// Returns `None` when nothing is alive; that is "no legal move", not an
    /// error.
    pub fn hit_random_entity<R: RandomSource>(
        &mut self,
        rng: &mut R,
        model: DamageModel,
    ) -> Option<Hit> {
        let alive: Vec<EntityId> = self.alive_entities().map(|(id, _)| id).collect();
        if alive.is_empty() {
            return None;
        }

        let id = alive[rng.next_index(alive.len())];
        let entity = &mut self.entities[id.index()];

        let amount = match model {
            DamageModel::Fixed => entity.damage(),
            DamageModel::Random if entity.damage() == 0 => 0,
            DamageModel::Random => rng.next_below(entity.damage()),
        };
        let before = entity.health();
        entity.receive_damage(amount);

        debug!(
            target_id = id.0,
            kind = %entity.kind,
            damage = amount,
            health = entity.health(),
            "entity hit"
        );

        Some(Hit {
            id,
            entity: *entity,
            damage_dealt: before - entity.health(),
        })
    }

    /// The first entity of the queen kind, if the roster names one.
    #[must_use]
    pub fn queen(&self) -> Option<(EntityId, &Entity)> {
        let kind = self.queen?;
        self.iter().find(|(_, e)| e.kind == kind)
    }

    /// True once the queen is dead or nothing at all is alive.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        let queen_dead = self.queen().is_some_and(|(_, q)| !q.is_alive());
        queen_dead || self.alive_count() == 0
    }

    // === Aggregates ===

    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.alive_entities().count()
    }

    #[must_use]
    pub fn alive_count_of(&self, kind: EntityKind) -> usize {
        self.alive_entities().filter(|(_, e)| e.kind == kind).count()
    }

    #[must_use]
    pub fn count_of(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|e| e.kind == kind).count()
    }

    /// Sum of current health.
    #[must_use]
    pub fn current_health(&self) -> u64 {
        self.entities.iter().map(|e| u64::from(e.health())).sum()
    }

    /// Sum of maximum health.
    #[must_use]
    pub fn total_health(&self) -> u64 {
        self.entities.iter().map(|e| u64::from(e.max_health())).sum()
    }

    // === Persistence ===

    /// Current health of every entity, by position.
    #[must_use]
    pub fn health_points(&self) -> Vec<u32> {
        self.entities.iter().map(Entity::health).collect()
    }

    /// Overwrite health by position.
    ///
    /// Values are clamped to each entity's max health. Extra values are
    /// ignored; entities past the end of `points` keep their current health.
    pub fn apply_health_points(&mut self, points: &[u32]) {
        for (entity, &value) in self.entities.iter_mut().zip(points) {
            entity.restore_health(value);
        }
    }
}
