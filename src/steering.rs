//! Target-seeking motion shared by the farmer and the turkeys.
//!
//! [`Steerable`] is the capability both controllers embed: a position, a
//! target with a jitter deadband, a base speed, a facing angle and the bounds
//! the entity may not leave. Controllers apply speed changes as a per-move
//! multiplier, so the stored base speed never drifts.

use glam::Vec2;

use crate::bounds::{Bounds, Side};
use crate::direction::Direction;
use crate::numeric::expect_f32;
use crate::vector_math::{angle_to, distance, opposite_point, polar_offset};
use crate::{ARRIVAL_DISTANCE, FLEE_DISTANCE, TARGET_DEADBAND};

/// Result of one bounded step towards a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Movement {
    /// Position after the step.
    pub position: Vec2,
    /// Facing after the step.
    pub facing: f32,
}

/// Advances `current` towards `target` for `elapsed_seconds` at `speed`.
///
/// Snaps onto the target when it is within [`ARRIVAL_DISTANCE`] or when the
/// step would reach it. Otherwise each axis moves independently and only if
/// the move does not carry it across the bound it is heading for, which lets
/// an entity outside the bounds walk back in but never further out. The
/// facing is re-aimed at the target whenever a partial step is taken and is
/// left alone on a snap.
///
/// # Examples
/// ```
/// use glam::Vec2;
/// use turkey_field::bounds::Bounds;
/// use turkey_field::steering::move_toward;
///
/// let bounds = Bounds::new(-10.0, 200.0, 10.0, -10.0).unwrap();
/// let step = move_toward(Vec2::ZERO, Vec2::new(100.0, 0.0), 0.0, 50.0, 1.0, &bounds);
/// assert_eq!(step.position, Vec2::new(50.0, 0.0));
/// ```
#[must_use]
pub fn move_toward(
    current: Vec2,
    target: Vec2,
    facing: f32,
    speed: f32,
    elapsed_seconds: f32,
    bounds: &Bounds,
) -> Movement {
    let remaining = distance(current, target);
    let step = speed * elapsed_seconds;

    if remaining <= ARRIVAL_DISTANCE || step >= remaining {
        return Movement {
            position: target,
            facing,
        };
    }

    let heading = angle_to(current, target);
    let delta = polar_offset(heading, step);
    let mut position = current;

    let next_x = current.x + delta.x;
    let moving_right = delta.x > 0.0;
    if (moving_right || next_x > bounds.left()) && (!moving_right || next_x < bounds.right()) {
        position.x = next_x;
    }

    let next_y = current.y + delta.y;
    let moving_down = delta.y > 0.0;
    if (moving_down || next_y > bounds.top()) && (!moving_down || next_y < bounds.bottom()) {
        position.y = next_y;
    }

    Movement {
        position,
        facing: heading,
    }
}

/// Position, target, speed and facing of something that walks the field.
#[derive(Debug, Clone, PartialEq)]
pub struct Steerable {
    position: Vec2,
    target: Vec2,
    speed: f32,
    facing: f32,
    bounds: Bounds,
    last_moved_at: Option<f64>,
}

impl Steerable {
    /// Creates a steerable at `position` already facing `target`.
    #[must_use]
    pub fn new(position: Vec2, target: Vec2, speed: f32, bounds: Bounds) -> Self {
        Self {
            position,
            target,
            speed,
            facing: angle_to(position, target),
            bounds,
            last_moved_at: None,
        }
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Current target.
    #[must_use]
    pub const fn target(&self) -> Vec2 {
        self.target
    }

    /// Base speed in units per second.
    #[must_use]
    pub const fn speed(&self) -> f32 {
        self.speed
    }

    /// Facing angle in radians.
    #[must_use]
    pub const fn facing(&self) -> f32 {
        self.facing
    }

    /// Bounds this entity is confined to.
    #[must_use]
    pub const fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Compass bucket of the current facing.
    #[must_use]
    pub fn direction(&self) -> Direction {
        Direction::from_angle(self.facing)
    }

    /// Distance from this entity to `point`.
    #[must_use]
    pub fn distance_to(&self, point: Vec2) -> f32 {
        distance(self.position, point)
    }

    /// Distance left to the current target.
    #[must_use]
    pub fn distance_to_target(&self) -> f32 {
        distance(self.position, self.target)
    }

    /// Field side nearest to this entity.
    #[must_use]
    pub fn closest_side(&self) -> Side {
        self.bounds.closest_side(self.position)
    }

    /// Distance from this entity to `side`.
    #[must_use]
    pub fn distance_from_side(&self, side: Side) -> f32 {
        self.bounds.distance_from_side(self.position, side)
    }

    /// Moves the entity without walking there.
    pub fn place(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Aims at a new target, ignoring axis changes within the deadband.
    ///
    /// Each axis is compared independently; only axes that moved by more than
    /// [`TARGET_DEADBAND`] are updated. The facing is recomputed when either
    /// axis changed. Returns whether the target changed.
    pub fn set_target(&mut self, point: Vec2) -> bool {
        let change_x = (self.target.x - point.x).abs() > TARGET_DEADBAND;
        let change_y = (self.target.y - point.y).abs() > TARGET_DEADBAND;
        if change_x {
            self.target.x = point.x;
        }
        if change_y {
            self.target.y = point.y;
        }
        if change_x || change_y {
            self.facing = angle_to(self.position, self.target);
        }
        change_x || change_y
    }

    /// Sets the target exactly, bypassing the deadband, and faces it.
    pub fn aim_at(&mut self, point: Vec2) {
        self.target = point;
        self.facing = angle_to(self.position, point);
    }

    /// Aims at a far point on the ray leading directly away from `threat`.
    pub fn set_target_opposite(&mut self, threat: Vec2) -> bool {
        self.set_target(opposite_point(self.position, threat, FLEE_DISTANCE))
    }

    /// Walks towards the target for the time since the previous call.
    ///
    /// The first call only starts the clock. `speed_multiplier` scales the
    /// base speed for this step alone. Returns the elapsed seconds used.
    pub fn advance(&mut self, now: f64, speed_multiplier: f32) -> f64 {
        let elapsed = self
            .last_moved_at
            .map_or(0.0, |previous| (now - previous).max(0.0));
        self.last_moved_at = Some(now);

        let movement = move_toward(
            self.position,
            self.target,
            self.facing,
            self.speed * speed_multiplier,
            expect_f32(elapsed),
            &self.bounds,
        );
        self.position = movement.position;
        self.facing = movement.facing;
        elapsed
    }
}
