//! The scripted encounter
//!
//! Builds a hero, a monster and a trap from literal constructor arguments,
//! has the hero attack once, springs the trap on the hero and reports the
//! result. There is no branching beyond the fixed script.

use std::fmt;

use serde::Serialize;

use crate::combat::{CombatLog, DieRoller};
use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::entity::{Alive, Monster, Offensive, Player, Trap};

/// Constructor arguments for a combatant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatantParams {
    pub name: String,
    /// Player class or monster type
    pub flavor: String,
    pub max_hit_points: i32,
    pub power: i32,
}

/// Constructor arguments for a trap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrapParams {
    pub name: String,
    pub max_hit_points: i32,
    pub current_hit_points: i32,
    pub damage: i32,
}

/// Everything the script needs to build its cast
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterSetup {
    pub hero: CombatantParams,
    pub monster: CombatantParams,
    pub trap: TrapParams,
}

impl Default for EncounterSetup {
    fn default() -> Self {
        Self {
            hero: CombatantParams {
                name: "Sir Bugsalot".into(),
                flavor: "Knight".into(),
                max_hit_points: 150,
                power: 20,
            },
            monster: CombatantParams {
                name: "Grumble".into(),
                flavor: "Goblin".into(),
                max_hit_points: 50,
                power: 10,
            },
            trap: TrapParams {
                name: "Spike Pit".into(),
                max_hit_points: 100,
                current_hit_points: 100,
                damage: 25,
            },
        }
    }
}

/// What the script observed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncounterOutcome {
    pub hero_health_percentage: f64,
    pub hero_hit_points: u32,
    pub monster_alive: bool,
    pub monster_hit_points: u32,
    pub trap_armed: bool,
    /// Damage of the hero's attack
    pub attack_damage: u32,
    /// Damage the trap applied to the hero
    pub trap_damage: u32,
    pub narration: CombatLog,
}

impl EncounterOutcome {
    /// The two summary lines closing a text report
    pub fn summary(&self) -> String {
        format!(
            "Hero Status: {:.1}% HP\nMonster Status: {}",
            self.hero_health_percentage, self.monster_alive
        )
    }
}

/// Text report: narration with a blank line before each section header,
/// then the summary
impl fmt::Display for EncounterOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.narration.entries() {
            if line.starts_with("---") {
                writeln!(f)?;
            }
            writeln!(f, "{}", line)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.summary())
    }
}

/// Run the scripted encounter
///
/// Construction failures propagate unchanged; the cast is only built if the
/// config validates.
pub fn run_encounter(
    setup: &EncounterSetup,
    config: &SimulationConfig,
    dice: &mut dyn DieRoller,
) -> Result<EncounterOutcome> {
    config.validate()?;
    let mut log = CombatLog::new();

    let mut hero = Player::new(
        setup.hero.name.as_str(),
        setup.hero.flavor.as_str(),
        setup.hero.max_hit_points,
        setup.hero.power,
    )?
    .with_damage_die(config.damage_die_sides)?;
    log.record(format!("Hero created: {}", hero.name()));

    let mut monster = Monster::new(
        setup.monster.name.as_str(),
        setup.monster.max_hit_points,
        setup.monster.power,
        setup.monster.flavor.as_str(),
    )?
    .with_damage_die(config.damage_die_sides)?;
    log.record(format!("Monster created: {}", monster.name()));

    let mut trap = Trap::new(
        setup.trap.name.as_str(),
        setup.trap.max_hit_points,
        setup.trap.current_hit_points,
        setup.trap.damage,
    )?;
    if let Some(bonus) = config.trap_bonus {
        trap = trap.with_bonus(bonus);
    }
    log.record(format!("A dangerous {} trap is set.", trap.name()));

    tracing::info!(hero = %hero, monster = monster.name(), "Encounter started");

    log.record("--- Combat Begins! ---");
    let attack_damage = hero.attack(&mut monster, dice, &mut log);

    log.record("--- Hero steps on a trap! ---");
    let trap_damage = trap.spring_trap(&mut hero, &mut log)?;

    tracing::info!(
        hero_hit_points = hero.current_hit_points(),
        monster_alive = monster.is_alive(),
        "Encounter finished"
    );

    Ok(EncounterOutcome {
        hero_health_percentage: hero.health_percentage(),
        hero_hit_points: hero.current_hit_points(),
        monster_alive: monster.is_alive(),
        monster_hit_points: monster.current_hit_points(),
        trap_armed: trap.is_armed(),
        attack_damage,
        trap_damage,
        narration: log,
    })
}
