//! Attack resolution shared by every combatant

use crate::combat::dice::{attack_damage, DieRoller};
use crate::combat::log::CombatLog;
use crate::entity::Alive;

/// Roll damage for an attacker with `power` and apply it to `target`
///
/// Returns the damage dealt. The caller narrates the swing itself; the
/// target narrates how it took the hit.
pub fn strike(
    power: u32,
    die_sides: u32,
    target: &mut dyn Alive,
    dice: &mut dyn DieRoller,
    log: &mut CombatLog,
) -> u32 {
    let roll = dice.roll(die_sides);
    let damage = attack_damage(power, roll);

    tracing::debug!(
        target_name = target.name(),
        power,
        roll,
        damage,
        "Attack resolved"
    );

    target.take_damage(damage, log);
    damage
}
