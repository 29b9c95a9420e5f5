//! Construction-time configuration for a turkey field.
//!
//! Every value has a default matching the classic game, so an empty JSON
//! object is a complete configuration. [`FieldConfig::validate`] runs before
//! a field is built; invalid geometry or rates never reach the simulation.

use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bounds::Bounds;
use crate::DEFAULT_INCUBATION_SECONDS;

/// Errors raised while loading or validating a [`FieldConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path:?}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The configuration was not valid JSON for [`FieldConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value was out of range.
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid {
        /// Name of the offending setting.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// How each win makes the next session harder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WinScaling {
    /// Change to the starting flock per win (usually negative).
    pub starting_turkeys: i32,
    /// Added to the pre-infection chance per win.
    pub infection_chance: f64,
    /// Added to the catch quota per win.
    pub quota: u32,
    /// Added to the population cap per win.
    pub max_turkeys: u32,
}

impl Default for WinScaling {
    fn default() -> Self {
        Self {
            starting_turkeys: -1,
            infection_chance: 0.05,
            quota: 5,
            max_turkeys: 5,
        }
    }
}

/// Tunables for one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Width and height of the square canvas.
    pub canvas_size: f32,
    /// Area the farmer and turkeys may walk.
    pub bounds: Bounds,
    /// Farmer base speed in units per second.
    pub farmer_speed: f32,
    /// Turkey base speed before the per-turkey multiplier.
    pub turkey_speed: f32,
    /// Lower end of the per-turkey speed multiplier.
    pub turkey_speed_min_multiplier: f32,
    /// Upper end of the per-turkey speed multiplier.
    pub turkey_speed_max_multiplier: f32,
    /// Turkeys released when play starts, before win scaling.
    pub starting_turkeys: i32,
    /// Catches needed to win, before win scaling.
    pub quota: u32,
    /// Population cap, before win scaling.
    pub max_turkeys: u32,
    /// Chance a steadily spawned turkey arrives infected, before win scaling.
    pub infection_chance: f64,
    /// Per-win difficulty adjustments.
    pub win_scaling: WinScaling,
    /// Seconds until the first steady spawn interval elapses.
    pub first_spawn_interval_seconds: u32,
    /// Shortest randomised spawn interval.
    pub spawn_interval_min_seconds: u32,
    /// Exclusive upper end of the randomised spawn interval.
    pub spawn_interval_max_seconds: u32,
    /// Shortest incubation for a turkey that spawns infected.
    pub spawn_incubation_min_seconds: u32,
    /// Exclusive upper end of the spawn incubation range.
    pub spawn_incubation_max_seconds: u32,
    /// Incubation of the sick turkey released during the intro.
    pub intro_sick_incubation_seconds: f64,
    /// Incubation used when an infection does not name one.
    pub default_incubation_seconds: f64,
    /// Seconds a player message stays up before it is cleared.
    pub message_seconds: u32,
    /// Longest frame delta the clock accepts.
    pub max_frame_seconds: f64,
    /// Fixed RNG seed; drawn from the OS when absent.
    pub seed: Option<u64>,
    /// Draw target lines and facing labels.
    pub debug: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            canvas_size: 750.0,
            bounds: Bounds::default(),
            farmer_speed: 55.0,
            turkey_speed: 20.0,
            turkey_speed_min_multiplier: 0.7,
            turkey_speed_max_multiplier: 1.3,
            starting_turkeys: 5,
            quota: 10,
            max_turkeys: 30,
            infection_chance: 0.1,
            win_scaling: WinScaling::default(),
            first_spawn_interval_seconds: 10,
            spawn_interval_min_seconds: 2,
            spawn_interval_max_seconds: 20,
            spawn_incubation_min_seconds: 5,
            spawn_incubation_max_seconds: 20,
            intro_sick_incubation_seconds: 4.0,
            default_incubation_seconds: DEFAULT_INCUBATION_SECONDS,
            message_seconds: 6,
            max_frame_seconds: 1.0,
            seed: None,
            debug: false,
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("must be a positive finite number, got {value}"),
        ))
    }
}

fn probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("must lie within [0, 1], got {value}"),
        ))
    }
}

impl FieldConfig {
    /// Centre of the canvas, where the farmer starts.
    #[must_use]
    pub fn canvas_center(&self) -> Vec2 {
        Vec2::splat(self.canvas_size / 2.0)
    }

    /// Reads and validates a JSON configuration file.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the file cannot be read, is not valid
    /// JSON, or holds out-of-range values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = path.as_ref();
        let text = fs::read_to_string(file).map_err(|source| ConfigError::Io {
            path: file.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the text is not valid JSON or holds
    /// out-of-range values.
    ///
    /// # Examples
    /// ```
    /// use turkey_field::config::FieldConfig;
    /// let config = FieldConfig::from_json(r#"{ "quota": 3, "seed": 7 }"#).unwrap();
    /// assert_eq!(config.quota, 3);
    /// assert_eq!(config.farmer_speed, 55.0);
    /// ```
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every value is usable by the simulation.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming the first bad setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("canvas_size", f64::from(self.canvas_size))?;
        positive("farmer_speed", f64::from(self.farmer_speed))?;
        positive("turkey_speed", f64::from(self.turkey_speed))?;
        positive(
            "turkey_speed_min_multiplier",
            f64::from(self.turkey_speed_min_multiplier),
        )?;
        if !self.turkey_speed_max_multiplier.is_finite()
            || self.turkey_speed_max_multiplier < self.turkey_speed_min_multiplier
        {
            return Err(ConfigError::invalid(
                "turkey_speed_max_multiplier",
                "must not be below turkey_speed_min_multiplier",
            ));
        }
        if self.quota == 0 {
            return Err(ConfigError::invalid("quota", "must be at least one"));
        }
        if self.max_turkeys == 0 {
            return Err(ConfigError::invalid("max_turkeys", "must be at least one"));
        }
        probability("infection_chance", self.infection_chance)?;
        if !self.win_scaling.infection_chance.is_finite() {
            return Err(ConfigError::invalid(
                "win_scaling.infection_chance",
                "must be finite",
            ));
        }
        if self.first_spawn_interval_seconds == 0 {
            return Err(ConfigError::invalid(
                "first_spawn_interval_seconds",
                "must be at least one second",
            ));
        }
        if self.spawn_interval_min_seconds == 0
            || self.spawn_interval_max_seconds <= self.spawn_interval_min_seconds
        {
            return Err(ConfigError::invalid(
                "spawn_interval_max_seconds",
                "spawn interval range must be non-empty and start at one second or more",
            ));
        }
        if self.spawn_incubation_max_seconds <= self.spawn_incubation_min_seconds {
            return Err(ConfigError::invalid(
                "spawn_incubation_max_seconds",
                "must exceed spawn_incubation_min_seconds",
            ));
        }
        positive(
            "intro_sick_incubation_seconds",
            self.intro_sick_incubation_seconds,
        )?;
        positive(
            "default_incubation_seconds",
            self.default_incubation_seconds,
        )?;
        positive("max_frame_seconds", self.max_frame_seconds)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_are_valid() {
        assert!(FieldConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_object_yields_defaults() {
        let parsed = FieldConfig::from_json("{}").expect("defaults parse");
        assert_eq!(parsed, FieldConfig::default());
    }

    #[test]
    fn round_trips_through_json() {
        let config = FieldConfig {
            seed: Some(11),
            quota: 4,
            ..FieldConfig::default()
        };
        let text = serde_json::to_string(&config).expect("serialise");
        assert_eq!(FieldConfig::from_json(&text).expect("parse"), config);
    }

    #[rstest]
    #[case(r#"{ "farmer_speed": 0.0 }"#, "farmer_speed")]
    #[case(r#"{ "infection_chance": 1.5 }"#, "infection_chance")]
    #[case(r#"{ "quota": 0 }"#, "quota")]
    #[case(r#"{ "first_spawn_interval_seconds": 0 }"#, "first_spawn_interval_seconds")]
    #[case(
        r#"{ "spawn_interval_min_seconds": 20, "spawn_interval_max_seconds": 2 }"#,
        "spawn_interval_max_seconds"
    )]
    #[case(
        r#"{ "turkey_speed_min_multiplier": 1.5, "turkey_speed_max_multiplier": 1.0 }"#,
        "turkey_speed_max_multiplier"
    )]
    fn rejects_out_of_range_values(#[case] json: &str, #[case] expected: &str) {
        match FieldConfig::from_json(json) {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected invalid {expected}, got {other:?}"),
        }
    }

    #[test]
    fn inverted_bounds_fail_to_parse() {
        let json =
            r#"{ "bounds": { "top": 650.0, "right": 650.0, "bottom": 50.0, "left": 50.0 } }"#;
        assert!(matches!(
            FieldConfig::from_json(json),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = FieldConfig::load("/definitely/not/here.json").expect_err("missing file");
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
