//! The hero

use std::fmt;

use crate::combat::{strike, CombatLog, DieRoller, DAMAGE_DIE_SIDES};
use crate::core::error::{DungeonError, Result};
use crate::entity::health::{non_negative, Health};
use crate::entity::{entity_name, Alive, Offensive};

#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    player_class: String,
    health: Health,
    power: u32,
    damage_die: u32,
}

impl Player {
    /// Create a player at full health
    ///
    /// Fails with `InvalidArgument` on a blank name, non-positive
    /// `max_hit_points` or negative `power`.
    pub fn new(
        name: impl Into<String>,
        player_class: impl Into<String>,
        max_hit_points: i32,
        power: i32,
    ) -> Result<Self> {
        let player = Self {
            name: entity_name(name)?,
            player_class: player_class.into(),
            health: Health::new(max_hit_points)?,
            power: non_negative("power", power)?,
            damage_die: DAMAGE_DIE_SIDES,
        };
        tracing::debug!(
            name = %player.name,
            max_hit_points = player.health.max(),
            "Player initialized"
        );
        Ok(player)
    }

    /// Roll a different damage die on attacks; a die needs at least one side
    pub fn with_damage_die(mut self, sides: u32) -> Result<Self> {
        if sides == 0 {
            return Err(DungeonError::invalid("damage die must have at least one side"));
        }
        self.damage_die = sides;
        Ok(self)
    }

    pub fn player_class(&self) -> &str {
        &self.player_class
    }

    fn title(&self) -> String {
        format!("'{} the {}'", self.name, self.player_class)
    }
}

impl Alive for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> &Health {
        &self.health
    }

    fn take_damage(&mut self, amount: u32, log: &mut CombatLog) {
        self.health.apply_damage(amount);
        log.record(format!(
            "{} screams in pain! HP: {}",
            self.title(),
            self.health.current()
        ));
        if !self.is_alive() {
            log.record(format!("'{}' has fallen.", self.name));
        }
    }
}

impl Offensive for Player {
    fn power(&self) -> u32 {
        self.power
    }

    fn damage_die(&self) -> u32 {
        self.damage_die
    }

    fn attack(
        &self,
        target: &mut dyn Alive,
        dice: &mut dyn DieRoller,
        log: &mut CombatLog,
    ) -> u32 {
        log.record(format!("{} attacks {}!", self.title(), target.name()));
        strike(self.power, self.damage_die, target, dice, log)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Player: {}, HP: {}]", self.name, self.health)
    }
}
