//! Position range module

use serde::{Deserialize, Serialize};
use std::fmt;

/// Feasible finishing positions `[min, max]` for one boat (1-indexed)
///
/// A range is a point when the evidence pins the boat down exactly, and
/// wider when the evidence leaves room on either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionRange {
    /// Best feasible position
    pub min: u32,
    /// Worst feasible position
    pub max: u32,
}

impl PositionRange {
    /// Create a new position range
    ///
    /// # Panics
    /// Panics if `min` is zero or `min > max`
    pub fn new(min: u32, max: u32) -> Self {
        assert!(min >= 1, "Positions are 1-indexed");
        assert!(min <= max, "Range minimum must be <= maximum");

        Self { min, max }
    }

    /// A degenerate range holding exactly one position
    pub fn point(position: u32) -> Self {
        Self::new(position, position)
    }

    /// Whether the range pins the boat to one position
    pub fn is_exact(&self) -> bool {
        self.min == self.max
    }

    /// Check if the range contains a position
    pub fn contains(&self, position: u32) -> bool {
        position >= self.min && position <= self.max
    }
}

impl fmt::Display for PositionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_range() {
        let range = PositionRange::point(3);
        assert!(range.is_exact());
        assert!(range.contains(3));
        assert!(!range.contains(2));
    }

    #[test]
    fn test_display() {
        assert_eq!(PositionRange::new(1, 4).to_string(), "1-4");
    }

    #[test]
    #[should_panic]
    fn test_inverted_bounds() {
        PositionRange::new(3, 2);
    }

    #[test]
    #[should_panic]
    fn test_zero_position() {
        PositionRange::new(0, 2);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: a range contains exactly its bounds and everything between
        #[test]
        fn test_contains_matches_bounds(min in 1u32..50, extra in 0u32..50) {
            let range = PositionRange::new(min, min + extra);
            let inside = (1..=120).filter(|&p| range.contains(p)).count() as u32;
            prop_assert_eq!(inside, extra + 1);
            prop_assert_eq!(range.is_exact(), extra == 0);
        }
    }
}
