//! Four-way compass bucketing of a facing angle.

use std::fmt;

use crate::DIRECTION_SECTOR;

/// Compass direction an entity appears to face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Facing up the screen.
    North,
    /// Facing down the screen.
    South,
    /// Facing right.
    East,
    /// Facing left.
    West,
}

impl Direction {
    /// Every direction, in the order images are conventionally listed.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Buckets a facing angle (radians, y growing downwards).
    ///
    /// # Examples
    /// ```
    /// use turkey_field::direction::Direction;
    /// assert_eq!(Direction::from_angle(0.0), Direction::East);
    /// assert_eq!(Direction::from_angle(1.5), Direction::South);
    /// assert_eq!(Direction::from_angle(-1.5), Direction::North);
    /// assert_eq!(Direction::from_angle(3.0), Direction::West);
    /// ```
    #[must_use]
    pub fn from_angle(angle: f32) -> Self {
        let magnitude = angle.abs();
        if magnitude < DIRECTION_SECTOR {
            Self::East
        } else if magnitude < DIRECTION_SECTOR * 3.0 {
            if angle > 0.0 {
                Self::South
            } else {
                Self::North
            }
        } else {
            Self::West
        }
    }

    /// Single-letter code used in image names.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::South => "S",
            Self::East => "E",
            Self::West => "W",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
