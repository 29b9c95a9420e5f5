//! Basic vector math helper functions.
//! Distances, headings and points along a ray used by the steering code.
use glam::Vec2;

/// Returns the straight-line distance between two points.
///
/// # Examples
/// ```
/// use glam::Vec2;
/// use turkey_field::vector_math::distance;
/// let d = distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0));
/// assert!((d - 5.0).abs() < f32::EPSILON);
/// ```
#[must_use]
pub fn distance(from: Vec2, to: Vec2) -> f32 {
    from.distance(to)
}

/// Returns the heading in radians from `from` towards `to`.
///
/// Screen coordinates grow downwards, so a positive angle points south.
/// Coincident points yield `0.0` (east).
#[must_use]
pub fn angle_to(from: Vec2, to: Vec2) -> f32 {
    let delta = to - from;
    delta.y.atan2(delta.x)
}

/// Returns the displacement of `length` units along `angle`.
#[must_use]
pub fn polar_offset(angle: f32, length: f32) -> Vec2 {
    Vec2::from_angle(angle) * length
}

/// Returns the point `reach` units from `origin` on the ray pointing away
/// from `threat`.
///
/// When the threat sits exactly on the origin the ray points east.
///
/// # Examples
/// ```
/// use glam::Vec2;
/// use turkey_field::vector_math::opposite_point;
/// let away = opposite_point(Vec2::new(10.0, 0.0), Vec2::ZERO, 5.0);
/// assert!((away.x - 15.0).abs() < 1e-5);
/// assert!(away.y.abs() < 1e-5);
/// ```
#[must_use]
pub fn opposite_point(origin: Vec2, threat: Vec2, reach: f32) -> Vec2 {
    origin + polar_offset(angle_to(threat, origin), reach)
}
