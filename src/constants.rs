//! Gameplay constants shared by the steering, farmer and turkey modules.
//!
//! Distances are in field units, durations in seconds and angles in radians.
//! Session-level tunables (speeds, quotas, spawn rates) live in
//! [`crate::config::FieldConfig`] instead.

/// Target changes smaller than this on an axis are ignored.
pub const TARGET_DEADBAND: f32 = 5.0;
/// Within this distance an entity snaps onto its target.
pub const ARRIVAL_DISTANCE: f32 = 2.0;
/// Distance from its target beyond which an entity shows its walking frames.
pub const ANIMATION_MOVING_DISTANCE: f32 = 5.0;
/// Length of the ray used when fleeing directly away from something.
pub const FLEE_DISTANCE: f32 = 999_999.0;

/// Half-width of the eastward facing sector.
pub const DIRECTION_SECTOR: f32 = 0.75;

/// Farmer reach when grabbing turkeys (inclusive).
pub const CATCH_RADIUS: f32 = 45.0;
/// Length of a sprint.
pub const SPRINT_SECONDS: f64 = 5.0;
/// Length of the slow recovery that follows a sprint.
pub const SPRINT_RECOVERY_SECONDS: f64 = 10.0;
/// Speed multiplier while sprinting.
pub const SPRINT_MULTIPLIER: f32 = 2.0;
/// Speed multiplier while recovering.
pub const RECOVERY_MULTIPLIER: f32 = 0.5;

/// A healthy turkey panics when the farmer is at most this far away.
pub const FARMER_FLEE_RADIUS: f32 = 50.0;
/// Speed multiplier of a panicking turkey.
pub const FLEE_MULTIPLIER: f32 = 2.0;
/// Comfortable distance a turkey keeps from neighbours and field edges.
pub const PERSONAL_SPACE_RADIUS: f32 = 20.0;
/// Slack subtracted from the personal space radius before a neighbour is
/// considered crowding.
pub const PERSONAL_SPACE_SLACK: f32 = 5.0;
/// Zombies infect uninfected turkeys closer than this.
pub const INFECTION_RADIUS: f32 = 35.0;
/// Zombies kill a farmer closer than this.
pub const KILL_RADIUS: f32 = 25.0;
/// Zombies only notice a farmer closer than this.
pub const ZOMBIE_FARMER_SIGHT: f32 = 150.0;
/// Zombies only notice healthy turkeys closer than this.
pub const ZOMBIE_TURKEY_SIGHT: f32 = 250.0;
/// Speed multiplier of a zombie chasing the farmer.
pub const ZOMBIE_CHASE_MULTIPLIER: f32 = 1.5;
/// Default incubation for turkeys bitten by a zombie.
pub const DEFAULT_INCUBATION_SECONDS: f64 = 9.0;

/// Default time taken by an animation to cycle through all of its frames.
pub const ANIMATION_CYCLE_MS: u64 = 1_000;
