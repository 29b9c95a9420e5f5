//! Pointer buttons as delivered by the host's mouse plumbing.

use thiserror::Error;

/// Button attached to a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Plain movement, no button.
    None,
    /// Left click: catch, or retry below the field.
    Primary,
    /// Right click: sprint.
    Secondary,
}

/// A raw button code that maps to no [`PointerButton`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown pointer button code {0}")]
pub struct UnknownButton(pub i32);

impl TryFrom<i32> for PointerButton {
    type Error = UnknownButton;

    /// Decodes the host's codes: `-1` none, `1` primary, `3` secondary.
    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(Self::None),
            1 => Ok(Self::Primary),
            3 => Ok(Self::Secondary),
            other => Err(UnknownButton(other)),
        }
    }
}
