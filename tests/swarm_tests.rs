//! Swarm invariants, checked over generated rosters and hit sequences.

use proptest::prelude::*;
use swarm_strike::core::{DamageModel, Entity, EntityKind, GameRng, Roster, RosterEntry, SequenceRng};
use swarm_strike::swarm::Swarm;

fn kind() -> impl Strategy<Value = EntityKind> {
    prop_oneof![
        Just(EntityKind::Queen),
        Just(EntityKind::Worker),
        Just(EntityKind::Drone),
    ]
}

fn roster() -> impl Strategy<Value = Roster> {
    (
        prop::collection::vec((kind(), 0u32..6, 1u32..200, 0u32..40), 0..5),
        prop::option::of(kind()),
    )
        .prop_map(|(entries, queen)| Roster {
            entries: entries
                .into_iter()
                .map(|(kind, count, health, damage)| RosterEntry::new(kind, count, health, damage))
                .collect(),
            queen,
        })
}

fn damage_model() -> impl Strategy<Value = DamageModel> {
    prop_oneof![Just(DamageModel::Fixed), Just(DamageModel::Random)]
}

proptest! {
    #[test]
    fn prop_build_size_is_sum_of_counts(roster in roster()) {
        let swarm = Swarm::build(&roster);
        let expected: u32 = roster.entries.iter().map(|e| e.count).sum();
        prop_assert_eq!(swarm.len(), expected as usize);
    }

    #[test]
    fn prop_receive_damage_clamps(health in 1u32..500, spent in 0u32..500, amount in 0u32..1000) {
        let mut entity = Entity::new(EntityKind::Worker, health, 1);
        entity.receive_damage(spent);
        let old = entity.health();

        let new = entity.receive_damage(amount);
        prop_assert_eq!(new, old.saturating_sub(amount));
        prop_assert!(new <= entity.max_health());
    }

    #[test]
    fn prop_hits_never_target_dead(
        roster in roster(),
        model in damage_model(),
        seed in any::<u64>(),
        hits in 0usize..60,
    ) {
        let mut swarm = Swarm::build(&roster);
        let mut rng = GameRng::new(seed);

        for _ in 0..hits {
            let before = swarm.health_points();
            match swarm.hit_random_entity(&mut rng, model) {
                Some(hit) => {
                    prop_assert!(before[hit.id.index()] > 0);
                    prop_assert_eq!(
                        hit.entity.health(),
                        before[hit.id.index()] - hit.damage_dealt
                    );
                }
                None => prop_assert_eq!(swarm.alive_count(), 0),
            }
        }
    }

    #[test]
    fn prop_health_stays_in_bounds(roster in roster(), points in prop::collection::vec(0u32..400, 0..40)) {
        let mut swarm = Swarm::build(&roster);
        swarm.apply_health_points(&points);

        for (i, entity) in swarm.entities().iter().enumerate() {
            prop_assert!(entity.health() <= entity.max_health());
            if i >= points.len() {
                prop_assert_eq!(entity.health(), entity.max_health());
            }
        }
    }
}

#[test]
fn test_single_survivor_always_chosen() {
    let roster = Roster::new()
        .with_entry(RosterEntry::new(EntityKind::Worker, 4, 1000, 1))
        .with_queen(EntityKind::Queen);
    let mut swarm = Swarm::build(&roster);
    swarm.apply_health_points(&[0, 0, 1000, 0]);

    let mut rng = GameRng::new(99);
    for _ in 0..50 {
        let hit = swarm.hit_random_entity(&mut rng, DamageModel::Fixed).unwrap();
        assert_eq!(hit.id.index(), 2);
    }
}

#[test]
fn test_queen_death_overrides_survivors() {
    let roster = Roster::default();
    let mut swarm = Swarm::build(&roster);
    let mut rng = SequenceRng::new([0]);

    // Queen has 100 health and takes 8 per hit
    let mut hits = 0;
    while !swarm.is_game_over() {
        let hit = swarm.hit_random_entity(&mut rng, DamageModel::Fixed).unwrap();
        assert_eq!(hit.entity.kind, EntityKind::Queen);
        hits += 1;
    }

    assert_eq!(hits, 13);
    assert_eq!(swarm.alive_count(), 13);
    assert_eq!(swarm.alive_count_of(EntityKind::Queen), 0);
}

#[test]
fn test_fight_to_the_end_terminates() {
    let mut swarm = Swarm::build(&Roster::default());
    let mut rng = GameRng::new(2024);

    let mut hits = 0;
    while !swarm.is_game_over() {
        assert!(swarm.hit_random_entity(&mut rng, DamageModel::Fixed).is_some());
        hits += 1;
        assert!(hits < 10_000, "game should end");
    }

    // With a queen in the roster, every ending goes through her death
    assert_eq!(swarm.alive_count_of(EntityKind::Queen), 0);
}
