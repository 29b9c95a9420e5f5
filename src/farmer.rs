//! The player's farmer: pointer-driven walking, sprinting and catching.
//!
//! Sprinting is a timed state machine. For [`SPRINT_SECONDS`] after the
//! command the farmer moves at double speed, then crawls at half speed for
//! [`SPRINT_RECOVERY_SECONDS`], then returns to normal. The multiplier is
//! applied to each move only; the base speed is never rewritten.

use glam::Vec2;
use log::info;

use crate::appearance::{Appearance, ImageId};
use crate::bounds::Bounds;
use crate::steering::Steerable;
use crate::turkey::Turkey;
use crate::{
    ANIMATION_MOVING_DISTANCE, CATCH_RADIUS, RECOVERY_MULTIPLIER, SPRINT_MULTIPLIER,
    SPRINT_RECOVERY_SECONDS, SPRINT_SECONDS,
};

/// Where the farmer is in the sprint cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SprintPhase {
    /// Walking at base speed.
    Idle,
    /// Running at double speed.
    Sprinting,
    /// Out of breath and moving at half speed.
    Recovering,
}

impl SprintPhase {
    /// Phase `now` for a sprint started at `started_at`.
    ///
    /// # Examples
    /// ```
    /// use turkey_field::farmer::SprintPhase;
    /// assert_eq!(SprintPhase::at(Some(0.0), 5.0), SprintPhase::Sprinting);
    /// assert_eq!(SprintPhase::at(Some(0.0), 5.5), SprintPhase::Recovering);
    /// assert_eq!(SprintPhase::at(Some(0.0), 15.5), SprintPhase::Idle);
    /// assert_eq!(SprintPhase::at(None, 1.0), SprintPhase::Idle);
    /// ```
    #[must_use]
    pub fn at(started_at: Option<f64>, now: f64) -> Self {
        let Some(start) = started_at else {
            return Self::Idle;
        };
        let running = now - start;
        if (0.0..=SPRINT_SECONDS).contains(&running) {
            Self::Sprinting
        } else if running > SPRINT_SECONDS && running <= SPRINT_SECONDS + SPRINT_RECOVERY_SECONDS
        {
            Self::Recovering
        } else {
            Self::Idle
        }
    }

    /// Speed multiplier applied while in this phase.
    #[must_use]
    pub const fn multiplier(self) -> f32 {
        match self {
            Self::Idle => 1.0,
            Self::Sprinting => SPRINT_MULTIPLIER,
            Self::Recovering => RECOVERY_MULTIPLIER,
        }
    }
}

/// One-shot message raised when the farmer enters a sprint phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SprintNotice {
    /// The sprint started.
    Started,
    /// The sprint ended and recovery began.
    Tired,
    /// Recovery finished.
    Recovered,
}

impl SprintNotice {
    /// Text shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Started => "You sprint! Movement speed is doubled.",
            Self::Tired => "You're tired. Movement speed is halved.",
            Self::Recovered => "You've recovered",
        }
    }
}

/// The player-controlled farmer.
#[derive(Debug, Clone)]
pub struct Farmer {
    steer: Steerable,
    appearance: Appearance,
    caught: u32,
    death: Option<String>,
    sprint_started_at: Option<f64>,
    announced: SprintPhase,
}

impl Farmer {
    /// A farmer at `position`, facing south.
    #[must_use]
    pub fn new(position: Vec2, speed: f32, bounds: Bounds, now: f64) -> Self {
        Self {
            steer: Steerable::new(position, position + Vec2::Y, speed, bounds),
            appearance: Appearance::walking("farmer", 4, now),
            caught: 0,
            death: None,
            sprint_started_at: None,
            announced: SprintPhase::Idle,
        }
    }

    /// Steering state.
    #[must_use]
    pub const fn steer(&self) -> &Steerable {
        &self.steer
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.steer.position()
    }

    /// Turkeys caught this session.
    #[must_use]
    pub const fn caught(&self) -> u32 {
        self.caught
    }

    /// Whether the farmer has died.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.death.is_some()
    }

    /// How the farmer died, if they have.
    #[must_use]
    pub fn death_message(&self) -> Option<&str> {
        self.death.as_deref()
    }

    /// Kills the farmer. The first cause of death sticks.
    pub fn make_dead(&mut self, message: impl Into<String>) {
        if self.death.is_none() {
            let cause = message.into();
            info!("farmer died: {cause}");
            self.death = Some(cause);
        }
    }

    /// Aims the farmer at `point` (subject to the steering deadband).
    pub fn set_target(&mut self, point: Vec2) -> bool {
        self.steer.set_target(point)
    }

    /// Turns to face down the screen without walking, however close the
    /// previous target was.
    pub fn face_south(&mut self) {
        let below = self.position() + Vec2::Y;
        self.steer.aim_at(below);
    }

    /// Starts or restarts a sprint. Ignored once dead.
    pub fn sprint(&mut self, now: f64) {
        if self.is_dead() {
            return;
        }
        self.sprint_started_at = Some(now);
        self.announced = SprintPhase::Idle;
    }

    /// Sprint phase at `now`.
    #[must_use]
    pub fn sprint_phase(&self, now: f64) -> SprintPhase {
        SprintPhase::at(self.sprint_started_at, now)
    }

    /// Speed multiplier at `now`.
    #[must_use]
    pub fn speed_multiplier(&self, now: f64) -> f32 {
        self.sprint_phase(now).multiplier()
    }

    /// Walks towards the target and reports a sprint phase change, if any.
    ///
    /// Dead farmers stay where they fell.
    pub fn advance(&mut self, now: f64) -> Option<SprintNotice> {
        if self.is_dead() {
            return None;
        }
        let phase = self.sprint_phase(now);
        let notice = self.announce(phase);
        self.steer.advance(now, phase.multiplier());
        notice
    }

    fn announce(&mut self, phase: SprintPhase) -> Option<SprintNotice> {
        if phase == self.announced {
            return None;
        }
        let previous = self.announced;
        self.announced = phase;
        match (previous, phase) {
            (_, SprintPhase::Sprinting) => Some(SprintNotice::Started),
            (_, SprintPhase::Recovering) => Some(SprintNotice::Tired),
            (SprintPhase::Recovering, SprintPhase::Idle) => {
                self.sprint_started_at = None;
                Some(SprintNotice::Recovered)
            }
            (_, SprintPhase::Idle) => None,
        }
    }

    /// Grabs every non-zombie turkey within [`CATCH_RADIUS`] (inclusive).
    ///
    /// Caught turkeys are removed from `turkeys`. Returns how many were
    /// caught; always zero for a dead farmer.
    pub fn try_to_catch(&mut self, turkeys: &mut Vec<Turkey>, now: f64) -> u32 {
        if self.is_dead() {
            return 0;
        }
        let reach = self.position();
        let before = turkeys.len();
        turkeys.retain(|turkey| {
            turkey.is_zombie(now) || turkey.steer().distance_to(reach) > CATCH_RADIUS
        });
        let grabbed = u32::try_from(before - turkeys.len()).unwrap_or(u32::MAX);
        if grabbed > 0 {
            self.caught = self.caught.saturating_add(grabbed);
            info!("caught {grabbed} turkey(s), {} total", self.caught);
        }
        grabbed
    }

    /// Image for the current facing; walking frames while far from target.
    #[must_use]
    pub fn image(&self, now: f64) -> Option<&ImageId> {
        let moving = self.steer.distance_to_target() > ANIMATION_MOVING_DISTANCE;
        self.appearance.image(self.steer.direction(), moving, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn farmer() -> Farmer {
        Farmer::new(Vec2::new(375.0, 375.0), 55.0, Bounds::default(), 0.0)
    }

    #[rstest]
    #[case(0.0, 2.0)]
    #[case(2.5, 2.0)]
    #[case(5.0, 2.0)]
    #[case(5.001, 0.5)]
    #[case(15.0, 0.5)]
    #[case(15.001, 1.0)]
    #[case(-1.0, 1.0)]
    fn sprint_multiplier_follows_the_timer(#[case] elapsed: f64, #[case] expected: f32) {
        let mut farmer = farmer();
        farmer.sprint(100.0);
        assert_eq!(farmer.speed_multiplier(100.0 + elapsed), expected);
    }

    #[test]
    fn notices_fire_once_per_phase() {
        let mut farmer = farmer();
        farmer.sprint(0.0);
        let notices: Vec<_> = [0.0, 0.5, 4.9, 5.2, 6.0, 14.0, 15.2, 16.0, 20.0]
            .into_iter()
            .filter_map(|now| farmer.advance(now))
            .collect();
        assert_eq!(
            notices,
            [
                SprintNotice::Started,
                SprintNotice::Tired,
                SprintNotice::Recovered
            ]
        );
        assert_eq!(farmer.sprint_phase(30.0), SprintPhase::Idle);
    }

    #[test]
    fn restarting_a_sprint_announces_again() {
        let mut farmer = farmer();
        farmer.sprint(0.0);
        assert_eq!(farmer.advance(0.1), Some(SprintNotice::Started));
        farmer.sprint(3.0);
        assert_eq!(farmer.advance(3.1), Some(SprintNotice::Started));
        assert_eq!(farmer.speed_multiplier(7.9), 2.0);
    }

    #[test]
    fn sprint_does_not_touch_base_speed() {
        let mut farmer = farmer();
        farmer.set_target(Vec2::new(600.0, 375.0));
        farmer.sprint(0.0);
        farmer.advance(0.0);
        farmer.advance(1.0);
        let travelled = farmer.position().distance(Vec2::new(375.0, 375.0));
        assert_relative_eq!(travelled, 110.0, epsilon = 1e-3);
        assert_relative_eq!(farmer.position().x, 485.0, epsilon = 1e-2);
        assert_eq!(farmer.steer().speed(), 55.0);
    }

    #[test]
    fn death_is_terminal() {
        let mut farmer = farmer();
        farmer.set_target(Vec2::new(600.0, 375.0));
        farmer.make_dead("eaten");
        farmer.make_dead("something else");
        farmer.sprint(0.0);
        assert_eq!(farmer.death_message(), Some("eaten"));
        assert_eq!(farmer.advance(0.0), None);
        assert_eq!(farmer.advance(1.0), None);
        assert_eq!(farmer.position(), Vec2::new(375.0, 375.0));
        assert_eq!(farmer.sprint_phase(1.0), SprintPhase::Idle);
    }

    #[test]
    fn starts_facing_south() {
        assert_eq!(farmer().steer().direction(), Direction::South);
        assert_eq!(farmer().image(0.0).map(ImageId::as_str), Some("farmer_S"));
    }
}
