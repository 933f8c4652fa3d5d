//! Entities and their capabilities
//!
//! `Alive` is implemented by everything with hit points; `Offensive` by
//! everything that can attack. Each concrete type owns a `Health` value
//! built by its own constructor.

pub mod health;
pub mod monster;
pub mod player;
pub mod trap;

pub use health::Health;
pub use monster::Monster;
pub use player::Player;
pub use trap::{Trap, TrapBonus};

use crate::combat::{CombatLog, DieRoller};
use crate::core::error::{DungeonError, Result};

/// Something with hit points that can be hurt
pub trait Alive {
    fn name(&self) -> &str;

    fn health(&self) -> &Health;

    /// Receive `amount` damage and narrate the result
    fn take_damage(&mut self, amount: u32, log: &mut CombatLog);

    fn is_alive(&self) -> bool {
        !self.health().is_depleted()
    }

    fn current_hit_points(&self) -> u32 {
        self.health().current()
    }

    fn max_hit_points(&self) -> u32 {
        self.health().max()
    }

    fn health_percentage(&self) -> f64 {
        self.health().percentage()
    }
}

/// Something that can attack another entity
pub trait Offensive: Alive {
    /// Base attack strength
    fn power(&self) -> u32;

    /// Sides on the die rolled on top of `power`
    fn damage_die(&self) -> u32;

    /// Attack `target`, returning the damage dealt
    fn attack(&self, target: &mut dyn Alive, dice: &mut dyn DieRoller, log: &mut CombatLog)
        -> u32;
}

/// Validate and own an entity name
pub(crate) fn entity_name(name: impl Into<String>) -> Result<String> {
    let name = name.into();
    if name.trim().is_empty() {
        return Err(DungeonError::invalid("entity name must not be empty"));
    }
    Ok(name)
}
