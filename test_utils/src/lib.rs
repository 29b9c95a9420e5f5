//! Utility helpers for tests.
//!
//! Fixture builders for fields and turkeys plus a [`canvas::RecordingCanvas`]
//! that keeps every draw call for later inspection.

pub mod canvas;

use anyhow::{Context, Result};
use glam::Vec2;
use turkey_field::bounds::Bounds;
use turkey_field::config::FieldConfig;
use turkey_field::field::Field;
use turkey_field::turkey::{Turkey, TurkeyId};

pub use canvas::{DrawCall, RecordingCanvas};

/// Seconds of intro before the player may act on the field.
pub const INTRO_SECONDS: u32 = 16;

/// The standard 600×600 playing area.
///
/// # Examples
/// ```
/// let bounds = test_utils::bounds();
/// assert_eq!(bounds.left(), 50.0);
/// ```
#[must_use]
pub fn bounds() -> Bounds {
    Bounds::default()
}

/// Default configuration with a fixed RNG seed.
#[must_use]
pub fn seeded_config(seed: u64) -> FieldConfig {
    FieldConfig {
        seed: Some(seed),
        ..FieldConfig::default()
    }
}

/// A field built from [`seeded_config`].
///
/// # Errors
/// Fails if the default configuration stops validating.
pub fn seeded_field(seed: u64) -> Result<Field> {
    Field::new(seeded_config(seed)).context("default config should build a field")
}

/// Advances `field` one second at a time.
pub fn run_seconds(field: &mut Field, seconds: u32) {
    for _ in 0..seconds {
        field.advance(1.0);
    }
}

/// A seeded field advanced past the intro so clicks are accepted.
///
/// # Errors
/// Fails if the field cannot be built.
pub fn playing_field(seed: u64) -> Result<Field> {
    let mut field = seeded_field(seed)?;
    run_seconds(&mut field, INTRO_SECONDS);
    Ok(field)
}

/// A healthy, standing turkey at (`x`, `y`).
#[must_use]
pub fn turkey_at(id: u64, x: f32, y: f32) -> Turkey {
    let position = Vec2::new(x, y);
    Turkey::new(TurkeyId(id), position, position, 20.0, bounds(), 0.0)
}

/// A standing turkey infected at time zero that turns once `incubation`
/// seconds have strictly passed.
#[must_use]
pub fn infected_at(id: u64, x: f32, y: f32, incubation: f64) -> Turkey {
    let mut turkey = turkey_at(id, x, y);
    turkey.infect_for(0.0, incubation);
    turkey
}
