//! Damage dice
//!
//! Combat never reaches for an ambient random source. Every roll goes
//! through a `DieRoller` handed in by the caller, so a seeded RNG or a
//! loaded die makes an encounter reproducible.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::error::{DungeonError, Result};

/// Sides on the standard damage die
pub const DAMAGE_DIE_SIDES: u32 = 6;

/// Source of die rolls
pub trait DieRoller {
    /// Roll a die with `sides` faces (1..=sides inclusive)
    fn roll(&mut self, sides: u32) -> u32;
}

/// Any RNG can roll dice
impl<R: RngCore + ?Sized> DieRoller for R {
    fn roll(&mut self, sides: u32) -> u32 {
        self.gen_range(1..=sides.max(1))
    }
}

/// A die that always lands on the same face
///
/// Use `checked` for faces that come from outside the program. A die built
/// with `new` is clamped to the die being rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadedDie {
    face: u32,
}

impl LoadedDie {
    pub fn new(face: u32) -> Self {
        Self { face }
    }

    /// A loaded die whose face must exist on a die with `sides` faces
    pub fn checked(face: u32, sides: u32) -> Result<Self> {
        if face == 0 || face > sides {
            return Err(DungeonError::invalid(format!(
                "loaded face {} is not on a {}-sided die",
                face, sides
            )));
        }
        Ok(Self { face })
    }
}

impl DieRoller for LoadedDie {
    fn roll(&mut self, sides: u32) -> u32 {
        self.face.clamp(1, sides.max(1))
    }
}

/// Dice for a run: a loaded die when a face is given, otherwise a ChaCha8
/// stream seeded with `seed`
pub fn select_dice(loaded: Option<u32>, seed: u64, sides: u32) -> Result<Box<dyn DieRoller>> {
    match loaded {
        Some(face) => Ok(Box::new(LoadedDie::checked(face, sides)?)),
        None => Ok(Box::new(ChaCha8Rng::seed_from_u64(seed))),
    }
}

/// Damage of one attack: base power plus the die roll
pub fn attack_damage(power: u32, roll: u32) -> u32 {
    power.saturating_add(roll)
}
