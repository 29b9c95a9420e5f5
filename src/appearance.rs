//! Symbolic images and direction-keyed animations.
//!
//! The core never touches pixels. It chooses an [`ImageId`] for each entity
//! and hands it to the [`crate::render::Canvas`], which owns resolution and
//! caching. An animation with no frames simply produces no image.

use std::fmt;

use hashbrown::HashMap;

use crate::direction::Direction;
use crate::numeric::whole_seconds;
use crate::ANIMATION_CYCLE_MS;

/// Name of an image known to the asset collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(String);

impl ImageId {
    /// Wraps an image name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrows the image name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Frames shown in sequence over a fixed cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animation {
    frames: Vec<ImageId>,
    cycle_ms: u64,
}

impl Animation {
    /// Builds an animation cycling through `frames` every `cycle_ms`.
    #[must_use]
    pub const fn new(frames: Vec<ImageId>, cycle_ms: u64) -> Self {
        Self { frames, cycle_ms }
    }

    /// Builds the conventional `base`, `base2`, `base3`… frame sequence.
    ///
    /// # Examples
    /// ```
    /// use turkey_field::appearance::Animation;
    /// let walk = Animation::numbered("turkey_N", 3);
    /// let names: Vec<_> = (0..3).filter_map(|i| walk.frame(i)).map(|f| f.as_str()).collect();
    /// assert_eq!(names, ["turkey_N", "turkey_N2", "turkey_N3"]);
    /// ```
    #[must_use]
    pub fn numbered(base: &str, count: usize) -> Self {
        let frames = (1..=count)
            .map(|n| {
                if n == 1 {
                    ImageId::new(base)
                } else {
                    ImageId::new(format!("{base}{n}"))
                }
            })
            .collect();
        Self::new(frames, ANIMATION_CYCLE_MS)
    }

    /// Number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the animation has no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame at `index`, if any.
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<&ImageId> {
        self.frames.get(index)
    }

    /// Frame showing `elapsed_ms` into the animation.
    ///
    /// A zero cycle, or one shorter than the frame count, holds the first
    /// frame rather than dividing by zero.
    #[must_use]
    pub fn frame_at(&self, elapsed_ms: u64) -> Option<&ImageId> {
        let count = u64::try_from(self.frames.len()).ok()?;
        if count == 0 {
            return None;
        }
        let per_frame = self.cycle_ms / count;
        if per_frame == 0 {
            return self.frames.first();
        }
        let in_cycle = elapsed_ms % self.cycle_ms;
        let index = (in_cycle / per_frame).min(count - 1);
        usize::try_from(index)
            .ok()
            .and_then(|i| self.frames.get(i))
    }
}

/// Per-direction animations for one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    animations: HashMap<Direction, Animation>,
    started_at: f64,
}

impl Appearance {
    /// An appearance with no images at all.
    #[must_use]
    pub fn empty(started_at: f64) -> Self {
        Self {
            animations: HashMap::new(),
            started_at,
        }
    }

    /// Walking animations named `{prefix}_{D}`, `{prefix}_{D}2`… for each
    /// compass direction.
    #[must_use]
    pub fn walking(prefix: &str, frames: usize, started_at: f64) -> Self {
        let animations = Direction::ALL
            .into_iter()
            .map(|direction| {
                let base = format!("{prefix}_{direction}");
                (direction, Animation::numbered(&base, frames))
            })
            .collect();
        Self {
            animations,
            started_at,
        }
    }

    /// Image to draw for an entity facing `direction` at time `now`.
    ///
    /// Moving entities cycle through their frames; stationary ones hold the
    /// first frame.
    #[must_use]
    pub fn image(&self, direction: Direction, moving: bool, now: f64) -> Option<&ImageId> {
        let animation = self.animations.get(&direction)?;
        if moving {
            let elapsed_ms = u64::from(whole_seconds((now - self.started_at) * 1_000.0));
            animation.frame_at(elapsed_ms)
        } else {
            animation.frame(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "farmer_S")]
    #[case(249, "farmer_S")]
    #[case(250, "farmer_S2")]
    #[case(999, "farmer_S4")]
    #[case(1_000, "farmer_S")]
    fn frames_follow_the_cycle(#[case] elapsed_ms: u64, #[case] expected: &str) {
        let walk = Animation::numbered("farmer_S", 4);
        assert_eq!(walk.frame_at(elapsed_ms).map(ImageId::as_str), Some(expected));
    }

    #[rstest]
    fn last_frame_covers_the_rounding_tail() {
        let walk = Animation::numbered("turkey_E", 3);
        assert_eq!(
            walk.frame_at(999).map(ImageId::as_str),
            Some("turkey_E3")
        );
    }

    #[rstest]
    #[case(Animation::new(Vec::new(), 1_000), None)]
    #[case(Animation::new(vec![ImageId::from("a"), ImageId::from("b")], 0), Some("a"))]
    #[case(Animation::new(vec![ImageId::from("a"), ImageId::from("b")], 1), Some("a"))]
    fn degenerate_animations_do_not_divide_by_zero(
        #[case] animation: Animation,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(animation.frame_at(12_345).map(ImageId::as_str), expected);
    }

    #[rstest]
    fn stationary_entities_hold_the_first_frame() {
        let look = Appearance::walking("zturkey", 3, 0.0);
        let image = look.image(Direction::West, false, 0.5);
        assert_eq!(image.map(ImageId::as_str), Some("zturkey_W"));
        let moving = look.image(Direction::West, true, 0.5);
        assert_eq!(moving.map(ImageId::as_str), Some("zturkey_W2"));
    }

    #[rstest]
    fn empty_appearance_has_no_image() {
        assert!(Appearance::empty(0.0).image(Direction::North, true, 1.0).is_none());
    }
}
