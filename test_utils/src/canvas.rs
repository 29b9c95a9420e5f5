//! A canvas that remembers what it was asked to draw.

use glam::Vec2;
use turkey_field::appearance::ImageId;
use turkey_field::render::{Canvas, Color, Font, MissingImage};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    /// `draw_sprite` or `draw_centered_sprite`.
    Sprite {
        /// Image name.
        image: String,
        /// Anchor point.
        at: Vec2,
        /// Whether the sprite was centred on `at`.
        centered: bool,
    },
    /// `draw_text`.
    Text {
        /// Text drawn.
        text: String,
        /// Baseline start.
        at: Vec2,
        /// Typeface.
        font: Font,
    },
    /// `draw_line`.
    Line {
        /// Start point.
        from: Vec2,
        /// End point.
        to: Vec2,
    },
}

/// Canvas recording every call in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    /// Calls since the last [`RecordingCanvas::clear`].
    pub calls: Vec<DrawCall>,
    /// Names to refuse with [`MissingImage`].
    pub missing: Vec<String>,
}

impl RecordingCanvas {
    /// A canvas that resolves every image.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Names of sprites drawn, in order.
    #[must_use]
    pub fn sprite_names(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Sprite { image, .. } => Some(image.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Texts drawn, in order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Position a text was drawn at, if it was drawn.
    #[must_use]
    pub fn text_position(&self, wanted: &str) -> Option<Vec2> {
        self.calls.iter().find_map(|call| match call {
            DrawCall::Text { text, at, .. } if text == wanted => Some(*at),
            _ => None,
        })
    }

    /// Number of debug lines drawn.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Line { .. }))
            .count()
    }

    fn record_sprite(
        &mut self,
        image: &ImageId,
        at: Vec2,
        centered: bool,
    ) -> Result<(), MissingImage> {
        if self.missing.iter().any(|name| name == image.as_str()) {
            return Err(MissingImage(image.clone()));
        }
        self.calls.push(DrawCall::Sprite {
            image: image.as_str().to_owned(),
            at,
            centered,
        });
        Ok(())
    }
}

impl Canvas for RecordingCanvas {
    fn draw_sprite(&mut self, image: &ImageId, x: f32, y: f32) -> Result<(), MissingImage> {
        self.record_sprite(image, Vec2::new(x, y), false)
    }

    fn draw_centered_sprite(
        &mut self,
        image: &ImageId,
        x: f32,
        y: f32,
    ) -> Result<(), MissingImage> {
        self.record_sprite(image, Vec2::new(x, y), true)
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font: Font, _color: Color) {
        self.calls.push(DrawCall::Text {
            text: text.to_owned(),
            at: Vec2::new(x, y),
            font,
        });
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, _color: Color) {
        self.calls.push(DrawCall::Line { from, to });
    }
}
