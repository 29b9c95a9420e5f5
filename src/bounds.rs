//! Axis-aligned field bounds and the four sides of the field.
//!
//! Bounds are validated once at construction so that the steering maths never
//! sees inverted or degenerate geometry.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a set of bounds is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BoundsError {
    /// One of the edges is NaN or infinite.
    #[error("bounds must be finite (top {top}, right {right}, bottom {bottom}, left {left})")]
    NonFinite {
        /// Top edge.
        top: f32,
        /// Right edge.
        right: f32,
        /// Bottom edge.
        bottom: f32,
        /// Left edge.
        left: f32,
    },
    /// The right edge does not lie strictly right of the left edge.
    #[error("right bound {right} must be greater than left bound {left}")]
    InvertedHorizontal {
        /// Left edge.
        left: f32,
        /// Right edge.
        right: f32,
    },
    /// The bottom edge does not lie strictly below the top edge.
    #[error("bottom bound {bottom} must be greater than top bound {top}")]
    InvertedVertical {
        /// Top edge.
        top: f32,
        /// Bottom edge.
        bottom: f32,
    },
}

/// One edge of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The edge with the smallest y.
    Top,
    /// The edge with the largest x.
    Right,
    /// The edge with the largest y.
    Bottom,
    /// The edge with the smallest x.
    Left,
}

impl Side {
    /// Every side, clockwise from the top.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The side across the field from this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// Picks a side uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.gen_range(0..4_u8) {
            0 => Self::Top,
            1 => Self::Right,
            2 => Self::Bottom,
            _ => Self::Left,
        }
    }
}

/// Rectangle clamping where moving entities may go.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds", into = "RawBounds")]
pub struct Bounds {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

#[derive(Serialize, Deserialize)]
struct RawBounds {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl TryFrom<RawBounds> for Bounds {
    type Error = BoundsError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        Self::new(raw.top, raw.right, raw.bottom, raw.left)
    }
}

impl From<Bounds> for RawBounds {
    fn from(bounds: Bounds) -> Self {
        Self {
            top: bounds.top,
            right: bounds.right,
            bottom: bounds.bottom,
            left: bounds.left,
        }
    }
}

impl Default for Bounds {
    /// The standard 600×600 playing area inside a 750 unit canvas.
    fn default() -> Self {
        Self {
            top: 50.0,
            right: 650.0,
            bottom: 650.0,
            left: 50.0,
        }
    }
}

impl Bounds {
    /// Builds validated bounds, in the same top/right/bottom/left order as
    /// CSS margins.
    ///
    /// # Errors
    /// Returns [`BoundsError`] when an edge is not finite or when the
    /// rectangle has zero or negative width or height.
    ///
    /// # Examples
    /// ```
    /// use turkey_field::bounds::Bounds;
    /// assert!(Bounds::new(50.0, 650.0, 650.0, 50.0).is_ok());
    /// assert!(Bounds::new(50.0, 40.0, 650.0, 50.0).is_err());
    /// ```
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Result<Self, BoundsError> {
        if ![top, right, bottom, left].iter().all(|edge| edge.is_finite()) {
            return Err(BoundsError::NonFinite {
                top,
                right,
                bottom,
                left,
            });
        }
        if right <= left {
            return Err(BoundsError::InvertedHorizontal { left, right });
        }
        if bottom <= top {
            return Err(BoundsError::InvertedVertical { top, bottom });
        }
        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }

    /// Top edge.
    #[must_use]
    pub const fn top(&self) -> f32 {
        self.top
    }

    /// Right edge.
    #[must_use]
    pub const fn right(&self) -> f32 {
        self.right
    }

    /// Bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> f32 {
        self.bottom
    }

    /// Left edge.
    #[must_use]
    pub const fn left(&self) -> f32 {
        self.left
    }

    /// Centre of the rectangle.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Whether `point` lies inside or on the rectangle.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        (self.left..=self.right).contains(&point.x) && (self.top..=self.bottom).contains(&point.y)
    }

    /// Signed distance from `point` to `side`; negative once past the edge.
    #[must_use]
    pub fn distance_from_side(&self, point: Vec2, side: Side) -> f32 {
        match side {
            Side::Top => point.y - self.top,
            Side::Right => self.right - point.x,
            Side::Bottom => self.bottom - point.y,
            Side::Left => point.x - self.left,
        }
    }

    /// Side nearest to `point`.
    ///
    /// A side only wins when it is strictly closer than all three others;
    /// ties fall through to [`Side::Left`].
    #[must_use]
    pub fn closest_side(&self, point: Vec2) -> Side {
        let top = self.distance_from_side(point, Side::Top);
        let right = self.distance_from_side(point, Side::Right);
        let bottom = self.distance_from_side(point, Side::Bottom);
        let left = self.distance_from_side(point, Side::Left);

        if top < right && top < bottom && top < left {
            Side::Top
        } else if right < top && right < bottom && right < left {
            Side::Right
        } else if bottom < top && bottom < right && bottom < left {
            Side::Bottom
        } else {
            Side::Left
        }
    }

    /// Uniform random x inside the bounds.
    pub fn random_x<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.gen_range(self.left..self.right)
    }

    /// Uniform random y inside the bounds.
    pub fn random_y<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.gen_range(self.top..self.bottom)
    }

    /// Uniform random point inside the bounds.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        Vec2::new(self.random_x(rng), self.random_y(rng))
    }

    /// Uniform random point lying on `side`.
    pub fn random_point_on<R: Rng + ?Sized>(&self, side: Side, rng: &mut R) -> Vec2 {
        match side {
            Side::Top => Vec2::new(self.random_x(rng), self.top),
            Side::Right => Vec2::new(self.right, self.random_y(rng)),
            Side::Bottom => Vec2::new(self.random_x(rng), self.bottom),
            Side::Left => Vec2::new(self.left, self.random_y(rng)),
        }
    }

    /// Moves `point` onto `side`, keeping its other coordinate.
    #[must_use]
    pub const fn project_onto(&self, point: Vec2, side: Side) -> Vec2 {
        match side {
            Side::Top => Vec2::new(point.x, self.top),
            Side::Right => Vec2::new(self.right, point.y),
            Side::Bottom => Vec2::new(point.x, self.bottom),
            Side::Left => Vec2::new(self.left, point.y),
        }
    }
}
