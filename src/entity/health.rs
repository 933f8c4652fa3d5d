//! Hit point bookkeeping
//!
//! The fields are private: other types read health through accessors and
//! change it only through damage. A `Health` value can only be obtained from
//! a validating constructor, so there is no half-initialized state.

use std::fmt;

use crate::core::error::{DungeonError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    current: u32,
    max: u32,
}

impl Health {
    /// Full health with `max` hit points
    pub fn new(max: i32) -> Result<Self> {
        let max = positive("max hit points", max)?;
        Ok(Self { current: max, max })
    }

    /// Health starting at an explicit `current` value within `0..=max`
    pub fn with_current(current: i32, max: i32) -> Result<Self> {
        let max = positive("max hit points", max)?;
        let current = non_negative("current hit points", current)?;
        if current > max {
            return Err(DungeonError::invalid(format!(
                "current hit points ({}) exceed max hit points ({})",
                current, max
            )));
        }
        Ok(Self { current, max })
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Percentage of max hit points remaining (0.0..=100.0)
    pub fn percentage(&self) -> f64 {
        100.0 * f64::from(self.current) / f64::from(self.max)
    }

    /// Remove up to `amount` hit points, flooring at zero
    ///
    /// Returns the hit points actually lost.
    pub(crate) fn apply_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.current);
        self.current -= lost;
        lost
    }

    /// Drop straight to zero
    pub(crate) fn deplete(&mut self) {
        self.current = 0;
    }
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

/// Validate a strictly positive constructor argument
pub(crate) fn positive(field: &str, value: i32) -> Result<u32> {
    if value <= 0 {
        return Err(DungeonError::invalid(format!(
            "{} must be positive, got {}",
            field, value
        )));
    }
    Ok(value as u32)
}

/// Validate a non-negative constructor argument
pub(crate) fn non_negative(field: &str, value: i32) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        DungeonError::invalid(format!("{} must not be negative, got {}", field, value))
    })
}
