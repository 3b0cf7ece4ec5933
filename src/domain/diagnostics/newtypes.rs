// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.

/// Buffer capacity bounds (10 to 10000 events).
///
/// A session produces a few events per interaction.
pub mod buffer_capacity_bounds {
    /// Minimum buffer capacity.
    pub const MIN: usize = 10;
    /// Maximum buffer capacity.
    pub const MAX: usize = 10_000;
    /// Default buffer capacity.
    pub const DEFAULT: usize = 500;
}

/// Number of diagnostic events kept in memory before the oldest are evicted.
///
/// Always within [`buffer_capacity_bounds::MIN`]..=[`buffer_capacity_bounds::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(BufferCapacity::new(0).value(), buffer_capacity_bounds::MIN);
        assert_eq!(
            BufferCapacity::new(usize::MAX).value(),
            buffer_capacity_bounds::MAX
        );
    }

    #[test]
    fn in_range_values_are_kept() {
        assert_eq!(BufferCapacity::new(10).value(), 10);
        assert_eq!(BufferCapacity::new(750).value(), 750);
    }

    #[test]
    fn default_sits_inside_bounds() {
        let default = BufferCapacity::default().value();
        assert!((buffer_capacity_bounds::MIN..=buffer_capacity_bounds::MAX).contains(&default));
    }
}
