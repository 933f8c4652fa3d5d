//! Combat integration tests
//!
//! End-to-end checks of the entity capabilities working together: attacks
//! between combatants, traps springing on whatever steps on them, and the
//! scripted encounter.

use dungeon_sim::combat::{select_dice, CombatLog, DieRoller, LoadedDie};
use dungeon_sim::core::config::SimulationConfig;
use dungeon_sim::core::error::DungeonError;
use dungeon_sim::entity::{Alive, Monster, Offensive, Player, Trap, TrapBonus};
use dungeon_sim::simulation::{run_encounter, EncounterSetup};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn hero() -> Player {
    Player::new("Sir Bugsalot", "Knight", 150, 20).unwrap()
}

fn goblin() -> Monster {
    Monster::new("Grumble", 50, 10, "Goblin").unwrap()
}

fn spike_pit() -> Trap {
    Trap::new("Spike Pit", 100, 100, 25).unwrap()
}

/// A die that hands out a fixed sequence of faces
struct ScriptedDie {
    faces: Vec<u32>,
    next: usize,
}

impl DieRoller for ScriptedDie {
    fn roll(&mut self, _sides: u32) -> u32 {
        let face = self.faces[self.next % self.faces.len()];
        self.next += 1;
        face
    }
}

#[test]
fn test_hero_attacks_goblin() {
    let hero = hero();
    let mut goblin = goblin();
    let mut log = CombatLog::new();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let dealt = hero.attack(&mut goblin, &mut rng, &mut log);

    assert!((21..=26).contains(&dealt));
    assert_eq!(goblin.current_hit_points(), 50 - dealt);
    assert!(goblin.is_alive());
}

#[test]
fn test_trap_springs_on_hero() {
    let mut trap = spike_pit();
    let mut hero = hero();
    let mut log = CombatLog::new();

    trap.spring_trap(&mut hero, &mut log).unwrap();

    assert_eq!(hero.current_hit_points(), 125);
    assert!(!trap.is_alive());

    let second = trap.spring_trap(&mut hero, &mut log);
    assert!(matches!(second, Err(DungeonError::TrapDisarmed(_))));
    assert_eq!(hero.current_hit_points(), 125);
}

#[test]
fn test_fight_to_the_death() {
    let hero = hero();
    let mut goblin = Monster::new("Grumble", 47, 10, "Goblin").unwrap();
    let mut log = CombatLog::new();
    let mut die = ScriptedDie {
        faces: vec![1, 6],
        next: 0,
    };

    // 21 then 26: exactly 47
    hero.attack(&mut goblin, &mut die, &mut log);
    assert_eq!(goblin.current_hit_points(), 26);
    assert!(goblin.is_alive());
    hero.attack(&mut goblin, &mut die, &mut log);

    assert_eq!(goblin.current_hit_points(), 0);
    assert!(!goblin.is_alive());
    assert_eq!(goblin.health_percentage(), 0.0);
}

#[test]
fn test_exchange_of_blows() {
    let mut hero = hero();
    let mut goblin = goblin();
    let mut log = CombatLog::new();
    let mut die = LoadedDie::new(2);

    hero.attack(&mut goblin, &mut die, &mut log);
    goblin.attack(&mut hero, &mut die, &mut log);

    assert_eq!(goblin.current_hit_points(), 28);
    assert_eq!(hero.current_hit_points(), 138);
    assert_eq!(hero.to_string(), "[Player: Sir Bugsalot, HP: 138/150]");
    assert_eq!(log.len(), 4);
}

#[test]
fn test_roster_of_mixed_entities() {
    let mut roster: Vec<Box<dyn Alive>> =
        vec![Box::new(hero()), Box::new(goblin()), Box::new(spike_pit())];
    let mut log = CombatLog::new();

    for entity in roster.iter_mut() {
        entity.take_damage(10, &mut log);
    }

    let hit_points: Vec<u32> = roster.iter().map(|e| e.current_hit_points()).collect();
    assert_eq!(hit_points, vec![140, 40, 100]);
    assert!(log.mentions("no effect on the Spike Pit trap"));
}

#[test]
fn test_bonus_trap_on_small_and_large_targets() {
    let mut log = CombatLog::new();

    let mut big = hero();
    spike_pit()
        .with_bonus(TrapBonus::default())
        .spring_trap(&mut big, &mut log)
        .unwrap();
    assert_eq!(big.current_hit_points(), 100);

    let mut small = goblin();
    spike_pit()
        .with_bonus(TrapBonus::default())
        .spring_trap(&mut small, &mut log)
        .unwrap();
    assert_eq!(small.current_hit_points(), 25);
}

#[test]
fn test_seeded_encounters_are_reproducible() {
    let setup = EncounterSetup::default();
    let config = SimulationConfig::default();

    let a = run_encounter(&setup, &config, &mut ChaCha8Rng::seed_from_u64(99)).unwrap();
    let b = run_encounter(&setup, &config, &mut ChaCha8Rng::seed_from_u64(99)).unwrap();

    assert_eq!(a, b);
    assert!((21..=26).contains(&a.attack_damage));
    assert_eq!(a.monster_hit_points, 50 - a.attack_damage);
    assert_eq!(a.hero_hit_points, 125);
    assert!(a.monster_alive);
}

#[test]
fn test_outcome_serializes_to_json() {
    let outcome = run_encounter(
        &EncounterSetup::default(),
        &SimulationConfig::default(),
        &mut LoadedDie::new(5),
    )
    .unwrap();

    let json: serde_json::Value = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["attack_damage"], 25);
    assert_eq!(json["monster_alive"], true);
    assert_eq!(json["hero_hit_points"], 125);
    assert_eq!(json["trap_armed"], false);
    assert!(json["narration"].is_array());
}

#[test]
fn test_loaded_face_off_the_die_stops_the_run() {
    let config = SimulationConfig::default();

    for face in [0, 7, 9] {
        let result = select_dice(Some(face), 0, config.damage_die_sides);
        let err = result.err().expect("face off the die");
        assert_eq!(err.kind(), "InvalidArgument");
    }

    let mut dice = select_dice(Some(6), 0, config.damage_die_sides).unwrap();
    let outcome = run_encounter(&EncounterSetup::default(), &config, &mut *dice).unwrap();
    assert_eq!(outcome.attack_damage, 26);
    assert!(outcome.to_string().ends_with("Hero Status: 83.3% HP\nMonster Status: true\n"));
}
