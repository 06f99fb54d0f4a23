//! Explicit rounding direction for integer settlement.

/// Rounding direction used when an exact [`Fraction`](super::Fraction)
/// must be settled to an integer raw amount, e.g. when sizing a
/// transaction parameter.
///
/// # Examples
///
/// ```
/// use lendgine_engine::domain::Rounding;
///
/// let r = Rounding::Up;
/// assert!(r.is_up());
/// assert!(!r.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor for non-negative values).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
