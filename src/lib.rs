#![cfg_attr(docsrs, feature(doc_cfg))]
//! Simulation core of a small arcade game: a farmer chases turkeys around a
//! bounded field while an infection slowly turns the flock into zombies.
//!
//! [`field::Field`] owns every entity and is driven by a host that feeds it
//! frame deltas and pointer events and supplies a [`render::Canvas`]. Nothing
//! in this crate reads the wall clock or touches pixels.
pub mod appearance;
pub mod bounds;
pub mod clock;
pub mod config;
pub mod constants;
pub mod direction;
pub mod farmer;
pub mod field;
pub mod hud;
pub mod input;
pub mod logging;
pub mod numeric;
pub mod render;
pub mod rng;
pub mod session;
pub mod steering;
pub mod timeline;
pub mod turkey;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use appearance::{Animation, Appearance, ImageId};
pub use bounds::{Bounds, BoundsError, Side};
pub use config::{ConfigError, FieldConfig};
pub use direction::Direction;
pub use farmer::{Farmer, SprintNotice, SprintPhase};
pub use field::Field;
pub use input::PointerButton;
pub use logging::init as init_logging;
pub use render::{Canvas, Color, Font, MissingImage};
pub use session::Phase;
pub use steering::Steerable;
pub use turkey::{Health, Turkey, TurkeyId};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust
    //! use turkey_field::prelude::*;
    //! let field = Field::new(FieldConfig::default())?;
    //! assert_eq!(field.phase(), Phase::Intro);
    //! # Ok::<(), ConfigError>(())
    //! ```

    pub use crate::config::{ConfigError, FieldConfig};
    pub use crate::field::Field;
    pub use crate::input::PointerButton;
    pub use crate::render::Canvas;
    pub use crate::session::Phase;
    pub use glam::Vec2;
}
