//! Turkey behaviour and the infection state machine.
//!
//! Health is derived, never stored: a turkey is infected once it has an
//! infection record and a zombie once the incubation has strictly elapsed.
//! Neither transition can be undone. Each tick a turkey reads a
//! [`Senses`] snapshot built by the field before any turkey moves, so the
//! order turkeys are visited never changes what they see. Effects on other
//! entities (infections and eating the farmer) are returned in a
//! [`TurkeyOutcome`] for the field to apply after the pass.

use glam::Vec2;
use log::{debug, info};
use ordered_float::OrderedFloat;
use rand::Rng;

use crate::appearance::{Appearance, ImageId};
use crate::bounds::{Bounds, Side};
use crate::numeric::{floor_to_i32, whole_seconds};
use crate::rng::RngExt;
use crate::steering::Steerable;
use crate::{
    ANIMATION_MOVING_DISTANCE, ARRIVAL_DISTANCE, FARMER_FLEE_RADIUS, FLEE_MULTIPLIER,
    INFECTION_RADIUS, KILL_RADIUS, PERSONAL_SPACE_RADIUS, PERSONAL_SPACE_SLACK,
    ZOMBIE_CHASE_MULTIPLIER, ZOMBIE_FARMER_SIGHT, ZOMBIE_TURKEY_SIGHT,
};

/// Stable identity of a turkey within one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TurkeyId(pub u64);

/// Derived health of a turkey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    /// Never infected.
    Healthy,
    /// Infected but still incubating; behaves like a healthy turkey.
    Infected,
    /// Incubation is over; hunts turkeys and the farmer.
    Zombie,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Infection {
    started_at: f64,
    incubation: f64,
}

/// What one turkey looked like at the start of the tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurkeySighting {
    /// Which turkey this is.
    pub id: TurkeyId,
    /// Where it stood.
    pub position: Vec2,
    /// Whether it carried an infection.
    pub infected: bool,
    /// Whether it had turned.
    pub zombie: bool,
}

impl TurkeySighting {
    const fn is_healthy(&self) -> bool {
        !self.infected && !self.zombie
    }
}

/// Read-only view of the field handed to each turkey.
#[derive(Debug, Clone, Copy)]
pub struct Senses<'a> {
    /// Farmer position after the farmer's move this tick.
    pub farmer: Vec2,
    /// Every turkey, including the one sensing.
    pub flock: &'a [TurkeySighting],
}

/// Effects of one turkey's tick on the rest of the field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurkeyOutcome {
    /// Turkeys this zombie bit.
    pub infected: Vec<TurkeyId>,
    /// Whether this zombie reached the farmer.
    pub ate_farmer: bool,
}

/// A turkey wandering the field.
#[derive(Debug, Clone)]
pub struct Turkey {
    id: TurkeyId,
    steer: Steerable,
    infection: Option<Infection>,
    was_zombie: bool,
    personal_space: f32,
    exit_side: Side,
    appearance: Appearance,
}

impl Turkey {
    /// A healthy turkey at `position` heading for `target`.
    #[must_use]
    pub fn new(
        id: TurkeyId,
        position: Vec2,
        target: Vec2,
        speed: f32,
        bounds: Bounds,
        now: f64,
    ) -> Self {
        let steer = Steerable::new(position, target, speed, bounds);
        let exit_side = bounds.closest_side(target);
        Self {
            id,
            steer,
            infection: None,
            was_zombie: false,
            personal_space: PERSONAL_SPACE_RADIUS,
            exit_side,
            appearance: Appearance::walking("turkey", 3, now),
        }
    }

    /// Spawns a turkey on a random edge, bound for the opposite edge.
    ///
    /// The speed is `base_speed` scaled by a uniform draw from
    /// `speed_multipliers`.
    pub fn spawn<R: Rng + ?Sized>(
        id: TurkeyId,
        base_speed: f32,
        speed_multipliers: (f32, f32),
        bounds: Bounds,
        now: f64,
        rng: &mut R,
    ) -> Self {
        let entry = Side::random(rng);
        let position = bounds.random_point_on(entry, rng);
        let exit_side = entry.opposite();
        let target = bounds.random_point_on(exit_side, rng);
        let (low, high) = speed_multipliers;
        let speed = base_speed * rng.random_f32(low, high);
        debug!("spawned turkey {} on {entry:?} at {position}", id.0);
        Self {
            exit_side,
            ..Self::new(id, position, target, speed, bounds, now)
        }
    }

    /// Identity within the session.
    #[must_use]
    pub const fn id(&self) -> TurkeyId {
        self.id
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

    /// Edge the turkey was sent towards when it spawned.
    #[must_use]
    pub const fn exit_side(&self) -> Side {
        self.exit_side
    }

    /// Teleports the turkey.
    pub fn place(&mut self, position: Vec2) {
        self.steer.place(position);
    }

    /// Infects the turkey, which turns once `incubation` seconds have
    /// strictly passed. No-op when already infected.
    pub fn infect_for(&mut self, now: f64, incubation: f64) -> bool {
        if self.infection.is_some() {
            return false;
        }
        debug!("turkey {} infected, turns in {incubation}s", self.id.0);
        self.infection = Some(Infection {
            started_at: now,
            incubation,
        });
        true
    }

    /// Whether the turkey carries an infection, turned or not.
    #[must_use]
    pub const fn is_infected(&self) -> bool {
        self.infection.is_some()
    }

    /// Whether the incubation has strictly elapsed at `now`.
    #[must_use]
    pub fn is_zombie(&self, now: f64) -> bool {
        self.was_zombie
            || self
                .infection
                .is_some_and(|infection| now - infection.started_at > infection.incubation)
    }

    /// Health at `now`.
    #[must_use]
    pub fn health(&self, now: f64) -> Health {
        if self.is_zombie(now) {
            Health::Zombie
        } else if self.is_infected() {
            Health::Infected
        } else {
            Health::Healthy
        }
    }

    /// Whole seconds left before an infected turkey turns.
    ///
    /// `None` for healthy turkeys and zombies.
    #[must_use]
    pub fn seconds_until_zombie(&self, now: f64) -> Option<i32> {
        if self.is_zombie(now) {
            return None;
        }
        let infection = self.infection?;
        let waited = i32::try_from(whole_seconds(now - infection.started_at)).unwrap_or(i32::MAX);
        Some(floor_to_i32(infection.incubation).saturating_sub(waited))
    }

    /// Swaps to the zombie look the first time the turkey is seen turned.
    ///
    /// Returns `true` on that one call only.
    pub fn refresh_appearance(&mut self, now: f64) -> bool {
        if self.was_zombie || !self.is_zombie(now) {
            return false;
        }
        self.was_zombie = true;
        self.appearance = Appearance::walking("zturkey", 3, now);
        info!("turkey {} turned", self.id.0);
        true
    }

    /// Snapshot of this turkey for the tick at `now`.
    #[must_use]
    pub fn sighting(&self, now: f64) -> TurkeySighting {
        TurkeySighting {
            id: self.id,
            position: self.position(),
            infected: self.is_infected(),
            zombie: self.is_zombie(now),
        }
    }

    /// Runs one tick of behaviour and movement.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        senses: &Senses<'_>,
        now: f64,
        rng: &mut R,
    ) -> TurkeyOutcome {
        let mut outcome = TurkeyOutcome::default();
        let multiplier = if self.is_zombie(now) {
            self.hunt(senses, &mut outcome)
        } else {
            self.shy_away(senses)
        };
        self.avoid_edges(rng);
        if self.steer.distance_to_target() < ARRIVAL_DISTANCE {
            let wander = self.steer.bounds().random_point(rng);
            self.steer.set_target(wander);
        }
        self.steer.advance(now, multiplier);
        outcome
    }

    fn shy_away(&mut self, senses: &Senses<'_>) -> f32 {
        let mut multiplier = 1.0;
        if self.steer.distance_to(senses.farmer) <= FARMER_FLEE_RADIUS {
            self.steer.set_target_opposite(senses.farmer);
            multiplier = FLEE_MULTIPLIER;
        }
        let crowding = self.personal_space - PERSONAL_SPACE_SLACK;
        // Last neighbour in range wins; avoidance is not blended.
        for other in senses.flock {
            if other.id != self.id
                && !other.zombie
                && self.steer.distance_to(other.position) < crowding
            {
                self.steer.set_target_opposite(other.position);
            }
        }
        multiplier
    }

    fn hunt(&mut self, senses: &Senses<'_>, outcome: &mut TurkeyOutcome) -> f32 {
        outcome.infected = senses
            .flock
            .iter()
            .filter(|other| {
                other.id != self.id
                    && !other.infected
                    && self.steer.distance_to(other.position) < INFECTION_RADIUS
            })
            .map(|other| other.id)
            .collect();

        let to_farmer = self.steer.distance_to(senses.farmer);
        if to_farmer < KILL_RADIUS {
            outcome.ate_farmer = true;
            return 1.0;
        }

        let nearest_healthy = senses
            .flock
            .iter()
            .filter(|other| other.id != self.id && other.is_healthy())
            .map(|other| (self.steer.distance_to(other.position), other.position))
            .min_by_key(|(gap, _)| OrderedFloat(*gap));

        match nearest_healthy {
            Some((gap, _)) if to_farmer < ZOMBIE_FARMER_SIGHT && to_farmer < gap => {
                self.steer.set_target(senses.farmer);
                ZOMBIE_CHASE_MULTIPLIER
            }
            Some((gap, prey)) => {
                if gap < ZOMBIE_TURKEY_SIGHT {
                    self.steer.set_target(prey);
                }
                1.0
            }
            None if to_farmer < ZOMBIE_FARMER_SIGHT => {
                self.steer.set_target(senses.farmer);
                ZOMBIE_CHASE_MULTIPLIER
            }
            None => 1.0,
        }
    }

    fn avoid_edges<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let side = self.steer.closest_side();
        if self.steer.distance_from_side(side) < self.personal_space {
            let destination = self.steer.bounds().random_point_on(side.opposite(), rng);
            self.steer.set_target(destination);
        }
    }

    /// Image for the current facing and health.
    #[must_use]
    pub fn image(&self, now: f64) -> Option<&ImageId> {
        let moving = self.steer.distance_to_target() > ANIMATION_MOVING_DISTANCE;
        self.appearance.image(self.steer.direction(), moving, now)
    }
}
