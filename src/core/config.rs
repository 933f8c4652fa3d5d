//! Simulation configuration with documented constants
//!
//! Everything here is a constructor argument in disguise: the driver fills
//! a config from its command line and hands it to the encounter.

use crate::combat::dice::DAMAGE_DIE_SIDES;
use crate::core::error::{DungeonError, Result};
use crate::entity::trap::TrapBonus;

/// Configuration for the combat rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Sides on the die added to a combatant's power on every attack
    ///
    /// At the default (6) an attack deals `power + 1..=6`.
    pub damage_die_sides: u32,

    /// Optional "extra effective" rule applied to every trap
    ///
    /// `None` keeps trap damage flat. With a bonus, targets whose max hit
    /// points exceed the threshold take multiplied damage.
    pub trap_bonus: Option<TrapBonus>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            damage_die_sides: DAMAGE_DIE_SIDES,
            trap_bonus: None,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the trap bonus rule with its classic values (over 100 HP, x2)
    pub fn with_brutal_traps(mut self) -> Self {
        self.trap_bonus = Some(TrapBonus::default());
        self
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.damage_die_sides == 0 {
            return Err(DungeonError::invalid("damage die must have at least one side"));
        }

        if let Some(bonus) = &self.trap_bonus {
            if bonus.multiplier == 0 {
                return Err(DungeonError::invalid(
                    "trap bonus multiplier must be at least 1",
                ));
            }
        }

        Ok(())
    }
}
