pub mod dice;
pub mod log;
pub mod strike;

pub use dice::{attack_damage, select_dice, DieRoller, LoadedDie, DAMAGE_DIE_SIDES};
pub use log::CombatLog;
pub use strike::strike;
