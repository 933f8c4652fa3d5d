use crate::combat::{strike, CombatLog, DieRoller, DAMAGE_DIE_SIDES};
use crate::core::error::{DungeonError, Result};
use crate::entity::health::{non_negative, Health};
use crate::entity::{entity_name, Alive, Offensive};

#[derive(Debug, Clone)]
pub struct Monster {
    name: String,
    monster_type: String,
    health: Health,
    power: u32,
    damage_die: u32,
}

impl Monster {
    /// Create a monster at full health
    pub fn new(
        name: impl Into<String>,
        max_hit_points: i32,
        power: i32,
        monster_type: impl Into<String>,
    ) -> Result<Self> {
        let monster = Self {
            name: entity_name(name)?,
            monster_type: monster_type.into(),
            health: Health::new(max_hit_points)?,
            power: non_negative("power", power)?,
            damage_die: DAMAGE_DIE_SIDES,
        };
        tracing::debug!(
            name = %monster.name,
            max_hit_points = monster.health.max(),
            "Monster initialized"
        );
        Ok(monster)
    }

    /// Roll a different damage die on attacks; a die needs at least one side
    pub fn with_damage_die(mut self, sides: u32) -> Result<Self> {
        if sides == 0 {
            return Err(DungeonError::invalid("damage die must have at least one side"));
        }
        self.damage_die = sides;
        Ok(self)
    }

    pub fn monster_type(&self) -> &str {
        &self.monster_type
    }

    fn title(&self) -> String {
        format!("The {} {}", self.name, self.monster_type)
    }
}

impl Alive for Monster {
    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> &Health {
        &self.health
    }

    fn take_damage(&mut self, amount: u32, log: &mut CombatLog) {
        self.health.apply_damage(amount);
        log.record(format!(
            "{} takes {} damage! HP: {}",
            self.title(),
            amount,
            self.health.current()
        ));
    }
}

impl Offensive for Monster {
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
