//! One-shot traps
//!
//! A trap has hit points only so it can sit in the same roster as other
//! entities. Its real state is `armed`: springing it is a one-way
//! Armed -> Disarmed transition and attacks do nothing to it.

use crate::combat::CombatLog;
use crate::core::error::{DungeonError, Result};
use crate::entity::health::{non_negative, Health};
use crate::entity::{entity_name, Alive};

/// Extra damage against large targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrapBonus {
    /// Targets with more max hit points than this take bonus damage
    pub threshold: u32,
    /// Damage multiplier applied to such targets
    pub multiplier: u32,
}

impl Default for TrapBonus {
    fn default() -> Self {
        Self {
            threshold: 100,
            multiplier: 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Trap {
    name: String,
    health: Health,
    damage: u32,
    armed: bool,
    bonus: Option<TrapBonus>,
}

impl Trap {
    /// Create a trap; it starts armed iff `current_hit_points > 0`
    pub fn new(
        name: impl Into<String>,
        max_hit_points: i32,
        current_hit_points: i32,
        damage: i32,
    ) -> Result<Self> {
        let health = Health::with_current(current_hit_points, max_hit_points)?;
        let trap = Self {
            name: entity_name(name)?,
            armed: !health.is_depleted(),
            health,
            damage: non_negative("trap damage", damage)?,
            bonus: None,
        };
        tracing::debug!(name = %trap.name, damage = trap.damage, armed = trap.armed, "Trap set");
        Ok(trap)
    }

    pub fn with_bonus(mut self, bonus: TrapBonus) -> Self {
        self.bonus = Some(bonus);
        self
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn bonus(&self) -> Option<TrapBonus> {
        self.bonus
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    fn bonus_against(&self, target: &dyn Alive) -> Option<TrapBonus> {
        self.bonus
            .filter(|bonus| target.max_hit_points() > bonus.threshold)
    }

    /// Damage this trap would deal to `target` right now
    pub fn damage_against(&self, target: &dyn Alive) -> u32 {
        match self.bonus_against(target) {
            Some(bonus) => self.damage.saturating_mul(bonus.multiplier),
            None => self.damage,
        }
    }

    /// Spring the trap on `target`, then disarm
    ///
    /// Returns the damage applied. A disarmed trap fails with
    /// `TrapDisarmed` and leaves the target untouched.
    pub fn spring_trap(&mut self, target: &mut dyn Alive, log: &mut CombatLog) -> Result<u32> {
        if !self.armed {
            tracing::warn!(name = %self.name, "Disarmed trap sprung again");
            return Err(DungeonError::TrapDisarmed(self.name.clone()));
        }

        log.record(format!("The {} springs on {}!", self.name, target.name()));

        if self.bonus_against(target).is_some() {
            log.record("The trap is extra effective!");
        }
        let damage = self.damage_against(target);
        target.take_damage(damage, log);

        self.health.deplete();
        self.armed = false;
        log.record(format!("The {} trap has been deactivated.", self.name));

        Ok(damage)
    }
}

impl Alive for Trap {
    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> &Health {
        &self.health
    }

    /// Traps shrug off attacks; only springing disarms them
    fn take_damage(&mut self, _amount: u32, log: &mut CombatLog) {
        log.record(format!("The attack has no effect on the {} trap!", self.name));
    }

    fn is_alive(&self) -> bool {
        self.armed
    }
}
