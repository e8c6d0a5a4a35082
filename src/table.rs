//! The tabletop the robot roams on, and the headings it can face.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A grid coordinate on the table, `(x, y)` with `y` growing northwards.
pub type Position = IVec2;

/// Smallest valid coordinate on either axis.
pub const MIN_BOUND: i32 = 0;

/// Largest valid coordinate on either axis. The table is 5x5.
pub const MAX_BOUND: i32 = 4;

/// Returns `true` if `position` lies on the table.
pub fn contains(position: Position) -> bool {
    position.cmpge(IVec2::splat(MIN_BOUND)).all()
        && position.cmple(IVec2::splat(MAX_BOUND)).all()
}

/// The direction the robot is facing.
///
/// Variants are declared clockwise; rotation walks this cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings in clockwise order, starting at north.
    pub const CLOCKWISE: [Heading; 4] = [
        Heading::North,
        Heading::East,
        Heading::South,
        Heading::West,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn step(self, offset: usize) -> Heading {
        let len = Self::CLOCKWISE.len();
        Self::CLOCKWISE[(self.index() + offset) % len]
    }

    /// The heading after a quarter turn clockwise.
    pub fn right(self) -> Heading {
        self.step(1)
    }

    /// The heading after a quarter turn counter-clockwise.
    pub fn left(self) -> Heading {
        self.step(Self::CLOCKWISE.len() - 1)
    }

    /// Unit step taken by a single `MOVE` in this heading.
    pub fn delta(self) -> IVec2 {
        match self {
            Heading::North => IVec2::Y,
            Heading::East => IVec2::X,
            Heading::South => IVec2::NEG_Y,
            Heading::West => IVec2::NEG_X,
        }
    }

    /// Canonical uppercase name, as used on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Heading::North => "NORTH",
            Heading::East => "EAST",
            Heading::South => "SOUTH",
            Heading::West => "WEST",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string is not one of the four heading names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownHeading(pub String);

impl FromStr for Heading {
    type Err = UnknownHeading;

    /// Matches the uppercase names exactly; `north` is not a heading.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heading::CLOCKWISE
            .into_iter()
            .find(|h| h.name() == s)
            .ok_or_else(|| UnknownHeading(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_on_the_table() {
        for (x, y) in [(0, 0), (0, 4), (4, 0), (4, 4)] {
            assert!(contains(IVec2::new(x, y)), "({x},{y}) should be on the table");
        }
    }

    #[test]
    fn edges_plus_one_are_off_the_table() {
        for (x, y) in [(-1, 0), (0, -1), (5, 0), (0, 5), (5, 5), (-1, -1)] {
            assert!(!contains(IVec2::new(x, y)), "({x},{y}) should be off the table");
        }
    }

    #[test]
    fn turning_wraps_around_the_cycle() {
        assert_eq!(Heading::North.left(), Heading::West);
        assert_eq!(Heading::West.right(), Heading::North);
        assert_eq!(Heading::East.left(), Heading::North);
        assert_eq!(Heading::South.right(), Heading::West);
    }

    #[test]
    fn left_undoes_right() {
        for h in Heading::CLOCKWISE {
            assert_eq!(h.right().left(), h);
        }
    }

    #[test]
    fn deltas_are_unit_steps() {
        assert_eq!(Heading::North.delta(), IVec2::new(0, 1));
        assert_eq!(Heading::South.delta(), IVec2::new(0, -1));
        assert_eq!(Heading::East.delta(), IVec2::new(1, 0));
        assert_eq!(Heading::West.delta(), IVec2::new(-1, 0));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!("SOUTH".parse::<Heading>(), Ok(Heading::South));
        assert_eq!(
            "south".parse::<Heading>(),
            Err(UnknownHeading("south".to_string()))
        );
        assert!("SOUTHWEST".parse::<Heading>().is_err());
        assert!("".parse::<Heading>().is_err());
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Heading::West.to_string(), "WEST");
    }
}
