//! Layer data model.
//!
//! A document is a flat, ordered list of [`Layer`] values (see
//! [`crate::stack`]). Each layer carries one of four content variants —
//! flat color, image, styled text, vector shape — as a closed sum type so
//! that every consumer (renderer, exporter, codec) matches exhaustively.
//!
//! Layers are plain values: all mutation happens in their owners (the
//! gesture controller and the layer stack), never through methods here.

use crate::geometry::{Point, Size};
use crate::id::LayerId;
use serde::{Deserialize, Serialize};

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0]. The codec writes colors
/// component-by-component; this type never hits the wire itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    pub const RED: Self = Self::rgba(1.0, 0.0, 0.0, 1.0);
    pub const BLUE: Self = Self::rgba(0.0, 0.0, 1.0, 1.0);
}

// ─── Text ────────────────────────────────────────────────────────────────

/// Font weight with a stable string encoding for the document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    UltraLight,
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
}

impl FontWeight {
    /// The encoding written to saved documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UltraLight => "Ultra Light",
            Self::Light => "Light",
            Self::Regular => "Regular",
            Self::Medium => "Medium",
            Self::Semibold => "Semibold",
            Self::Bold => "Bold",
            Self::Heavy => "Heavy",
        }
    }

    /// Decode a stored weight string. Unknown strings fall back to
    /// `Regular`, so documents from newer versions still load.
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "Ultra Light" => Self::UltraLight,
            "Light" => Self::Light,
            "Medium" => Self::Medium,
            "Semibold" => Self::Semibold,
            "Bold" => Self::Bold,
            "Heavy" => Self::Heavy,
            _ => Self::Regular,
        }
    }
}

/// Styling for a text layer.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub weight: FontWeight,
    pub italic: bool,
    pub color: Color,
    pub font_family: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 20.0,
            weight: FontWeight::Regular,
            italic: false,
            color: Color::BLACK,
            font_family: "Helvetica Neue".into(),
        }
    }
}

/// The payload of a text layer.
#[derive(Debug, Clone, PartialEq)]
pub struct TextContent {
    pub text: String,
    pub style: TextStyle,
}

impl TextContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }
}

// ─── Shapes ──────────────────────────────────────────────────────────────

/// The two shape primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Circle,
}

/// The payload of a shape layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub kind: ShapeKind,
    pub color: Color,
}

// ─── Images ──────────────────────────────────────────────────────────────

/// Opaque pixel payload of an image layer. Never written to documents;
/// on load it comes back as [`ImageSource::placeholder`] and the user has
/// to re-add the picture.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSource {
    pub width: u32,
    pub height: u32,
    /// RGBA8, row-major, `width * height * 4` bytes.
    pub rgba: Vec<u8>,
}

impl ImageSource {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self {
            width,
            height,
            rgba,
        }
    }

    /// The fixed stand-in an image layer resolves to after decode.
    pub fn placeholder() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![0, 0, 0, 0],
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.width == 1 && self.height == 1 && self.rgba == [0, 0, 0, 0]
    }
}

// ─── Layer content ───────────────────────────────────────────────────────

/// What a layer draws. Exactly one variant per layer.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerContent {
    Color(Color),
    Image(ImageSource),
    Text(TextContent),
    Shape(ShapeStyle),
}

impl LayerContent {
    /// Default display name for a layer holding this content.
    pub fn default_name(&self) -> &'static str {
        match self {
            Self::Color(_) => "Color Layer",
            Self::Image(_) => "Image Layer",
            Self::Text(_) => "Text Layer",
            Self::Shape(_) => "Shape Layer",
        }
    }
}

// ─── Layer ───────────────────────────────────────────────────────────────

/// Default size of a freshly created layer, in canvas units.
pub const DEFAULT_LAYER_SIZE: Size = Size::new(100.0, 100.0);

/// One stacked element of the canvas.
///
/// `position` is the top-left corner of the (unrotated) bounding box in
/// canvas-space. `rotation` is degrees, deliberately unbounded — it
/// accumulates additively across rotate gestures. Identity is by `id`;
/// the derived `PartialEq` compares all fields and exists for tests and
/// the codec round-trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub id: LayerId,
    pub name: String,
    pub visible: bool,
    pub active: bool,
    pub locked: bool,
    pub opacity: f32,
    pub position: Point,
    pub rotation: f32,
    pub size: Size,
    pub content: LayerContent,
}

impl Layer {
    /// Create a layer with a fresh id and the standard defaults.
    pub fn new(name: impl Into<String>, content: LayerContent) -> Self {
        Self {
            id: LayerId::fresh(),
            name: name.into(),
            visible: true,
            active: false,
            locked: false,
            opacity: 1.0,
            position: Point::ZERO,
            rotation: 0.0,
            size: DEFAULT_LAYER_SIZE,
            content,
        }
    }

    /// A flat color layer named "Color Layer".
    pub fn color(fill: Color) -> Self {
        let content = LayerContent::Color(fill);
        Self::new(content.default_name(), content)
    }

    /// A text layer named "Text Layer" with default styling.
    pub fn text(text: impl Into<String>) -> Self {
        let content = LayerContent::Text(TextContent::new(text));
        Self::new(content.default_name(), content)
    }

    /// A shape layer named "Shape Layer".
    pub fn shape(kind: ShapeKind, color: Color) -> Self {
        let content = LayerContent::Shape(ShapeStyle { kind, color });
        Self::new(content.default_name(), content)
    }

    /// An image layer named "Image Layer".
    pub fn image(source: ImageSource) -> Self {
        let content = LayerContent::Image(source);
        Self::new(content.default_name(), content)
    }

    /// Builder-style position override.
    pub fn at(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Builder-style size override.
    pub fn sized(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Center of the bounding box in canvas-space. The rotation pivot.
    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.size.width / 2.0,
            self.position.y + self.size.height / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_use_content_derived_names() {
        assert_eq!(Layer::color(Color::RED).name, "Color Layer");
        assert_eq!(Layer::text("hi").name, "Text Layer");
        assert_eq!(
            Layer::shape(ShapeKind::Circle, Color::BLUE).name,
            "Shape Layer"
        );
        assert_eq!(Layer::image(ImageSource::placeholder()).name, "Image Layer");
    }

    #[test]
    fn defaults() {
        let layer = Layer::color(Color::RED);
        assert!(layer.visible);
        assert!(!layer.active);
        assert!(!layer.locked);
        assert_eq!(layer.opacity, 1.0);
        assert_eq!(layer.rotation, 0.0);
        assert_eq!(layer.size, DEFAULT_LAYER_SIZE);
        assert_eq!(layer.position, Point::ZERO);
    }

    #[test]
    fn center_is_midpoint() {
        let layer = Layer::color(Color::RED)
            .at(Point::new(100.0, 100.0))
            .sized(Size::new(100.0, 100.0));
        assert_eq!(layer.center(), Point::new(150.0, 150.0));
    }

    #[test]
    fn weight_encoding_roundtrip() {
        for w in [
            FontWeight::UltraLight,
            FontWeight::Light,
            FontWeight::Regular,
            FontWeight::Medium,
            FontWeight::Semibold,
            FontWeight::Bold,
            FontWeight::Heavy,
        ] {
            assert_eq!(FontWeight::from_str_lossy(w.as_str()), w);
        }
        assert_eq!(
            FontWeight::from_str_lossy("Extra Chonky"),
            FontWeight::Regular
        );
    }
}
