//! Clamped health pools.
//!
//! Every mutation goes through a clamp, so `0 <= current <= max` holds for
//! the player and every creature at all times.

use std::fmt;

/// A health pool clamped between zero and its maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vitality {
    current: u32,
    max: u32,
}

impl Vitality {
    /// Create a pool starting at its maximum.
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Current health.
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Maximum health.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Remove health. Returns the new value.
    pub fn wound(&mut self, amount: u32) -> u32 {
        self.current = self.current.saturating_sub(amount);
        self.current
    }

    /// Set health directly (clamped).
    pub fn set(&mut self, value: u32) {
        self.current = value.min(self.max);
    }

    /// True once health has reached zero.
    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Fraction of health remaining (0.0 to 1.0).
    pub fn fraction(&self) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        f64::from(self.current) / f64::from(self.max)
    }
}

impl fmt::Display for Vitality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}
