//! Render boundary between the simulation and whatever paints the screen.
//!
//! The field issues draw calls against [`Canvas`]; resolving image names,
//! caching and pixel output belong to the implementor. A canvas that cannot
//! resolve an image returns [`MissingImage`], which the field logs once per
//! name and otherwise ignores.

use glam::Vec2;
use hashbrown::HashSet;
use log::warn;
use thiserror::Error;

use crate::appearance::ImageId;

/// Typeface used for text draw calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    /// Bold 16pt face used for player messages.
    Message,
    /// Plain 13pt face used for status text.
    Regular,
}

/// Packed `0xRRGGBB` colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    /// Pure white.
    pub const WHITE: Self = Self(0x00ff_ffff);
    /// Pure black.
    pub const BLACK: Self = Self(0x0000_0000);
}

/// Raised by a canvas when an image name cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("image `{0}` is not available")]
pub struct MissingImage(pub ImageId);

/// Drawing surface supplied by the host.
pub trait Canvas {
    /// Draws `image` with its top-left corner at (`x`, `y`).
    ///
    /// # Errors
    /// Returns [`MissingImage`] when the image cannot be resolved.
    fn draw_sprite(&mut self, image: &ImageId, x: f32, y: f32) -> Result<(), MissingImage>;

    /// Draws `image` centred on (`x`, `y`).
    ///
    /// # Errors
    /// Returns [`MissingImage`] when the image cannot be resolved.
    fn draw_centered_sprite(&mut self, image: &ImageId, x: f32, y: f32)
        -> Result<(), MissingImage>;

    /// Draws `text` with its baseline starting at (`x`, `y`).
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font: Font, color: Color);

    /// Draws a straight line, used by the debug overlay.
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color);
}

/// Remembers which images have already been reported missing.
#[derive(Debug, Default, Clone)]
pub struct MissingImageLog {
    reported: HashSet<ImageId>,
}

impl MissingImageLog {
    /// Logs a missing image the first time it is seen. Returns whether this
    /// was the first report.
    pub fn report(&mut self, missing: MissingImage) -> bool {
        let MissingImage(image) = missing;
        if self.reported.contains(&image) {
            return false;
        }
        warn!("drawing without image `{image}`");
        self.reported.insert(image)
    }

    /// Number of distinct images reported missing so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reported.len()
    }

    /// Whether no image has been reported missing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reported.is_empty()
    }
}

/// Canvas that counts draw calls instead of painting.
///
/// When built with [`TallyCanvas::with_known_images`] it rejects any other
/// name, standing in for an asset pack with gaps.
#[derive(Debug, Default, Clone)]
pub struct TallyCanvas {
    known: Option<HashSet<ImageId>>,
    /// Sprites drawn successfully.
    pub sprites: usize,
    /// Text draw calls.
    pub texts: usize,
    /// Line draw calls.
    pub lines: usize,
    /// Sprite draws refused for lack of an image.
    pub missing: usize,
    /// Most recent text drawn in the message font.
    pub last_message: Option<String>,
}

impl TallyCanvas {
    /// A canvas that accepts every image name.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A canvas that only resolves the given names.
    pub fn with_known_images(names: impl IntoIterator<Item = ImageId>) -> Self {
        Self {
            known: Some(names.into_iter().collect()),
            ..Self::default()
        }
    }

    fn resolve(&mut self, image: &ImageId) -> Result<(), MissingImage> {
        let found = self.known.as_ref().map_or(true, |known| known.contains(image));
        if found {
            self.sprites += 1;
            Ok(())
        } else {
            self.missing += 1;
            Err(MissingImage(image.clone()))
        }
    }
}

impl Canvas for TallyCanvas {
    fn draw_sprite(&mut self, image: &ImageId, _x: f32, _y: f32) -> Result<(), MissingImage> {
        self.resolve(image)
    }

    fn draw_centered_sprite(
        &mut self,
        image: &ImageId,
        _x: f32,
        _y: f32,
    ) -> Result<(), MissingImage> {
        self.resolve(image)
    }

    fn draw_text(&mut self, text: &str, _x: f32, _y: f32, font: Font, _color: Color) {
        self.texts += 1;
        if font == Font::Message {
            self.last_message = Some(text.to_owned());
        }
    }

    fn draw_line(&mut self, _from: Vec2, _to: Vec2, _color: Color) {
        self.lines += 1;
    }
}
