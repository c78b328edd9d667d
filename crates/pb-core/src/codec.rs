//! Project document codec.
//!
//! Encodes the ordered layer list to a stable JSON document and back.
//! The stored types here are deliberately separate from the live model:
//! the file format keeps its `"type"` content tag, camelCase field names,
//! component-wise colors, and string font weights no matter how the
//! in-memory representations evolve. Documents written by this codec stay
//! decodable as the model grows; unknown font weights and missing color
//! payloads degrade to defaults rather than failing the load.
//!
//! Known asymmetry: image pixel data is not persisted. An `"image"` entry
//! decodes to [`ImageSource::placeholder`] and the user has to re-add the
//! picture after load.

use crate::geometry::{MIN_LAYER_DIMENSION, Point, Size};
use crate::id::LayerId;
use crate::model::{
    Color, FontWeight, ImageSource, Layer, LayerContent, ShapeKind, ShapeStyle, TextContent,
    TextStyle,
};
use crate::stack::LayerStack;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to read or write a project document. Decoding never produces a
/// partial layer list: on error the caller's in-memory state is untouched.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed project document: {0}")]
    Malformed(#[from] serde_json::Error),
}

// ─── Stored types (the on-disk format) ───────────────────────────────────

/// Normalized color components, stored field-by-field so the format never
/// depends on a platform color representation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct StoredColor {
    red: f32,
    green: f32,
    blue: f32,
    opacity: f32,
}

impl From<Color> for StoredColor {
    fn from(c: Color) -> Self {
        Self {
            red: c.r,
            green: c.g,
            blue: c.b,
            opacity: c.a,
        }
    }
}

impl From<StoredColor> for Color {
    fn from(c: StoredColor) -> Self {
        Self::rgba(c.red, c.green, c.blue, c.opacity)
    }
}

/// Fallback for `color` entries from old documents that predate the
/// component payload.
fn default_color() -> StoredColor {
    Color::BLUE.into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTextStyle {
    size: f32,
    weight: String,
    is_italic: bool,
    color: StoredColor,
    font_family: String,
}

impl From<&TextStyle> for StoredTextStyle {
    fn from(s: &TextStyle) -> Self {
        Self {
            size: s.size,
            weight: s.weight.as_str().to_string(),
            is_italic: s.italic,
            color: s.color.into(),
            font_family: s.font_family.clone(),
        }
    }
}

impl From<StoredTextStyle> for TextStyle {
    fn from(s: StoredTextStyle) -> Self {
        Self {
            size: s.size,
            weight: FontWeight::from_str_lossy(&s.weight),
            italic: s.is_italic,
            color: s.color.into(),
            font_family: s.font_family,
        }
    }
}

/// Layer content as written to disk. The `type` tag is the format's
/// closed variant set; an unrecognized tag is a decode error, never a
/// silent default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum StoredContent {
    Color {
        #[serde(default = "default_color")]
        color: StoredColor,
    },
    Image {},
    Text {
        text: String,
        #[serde(rename = "textStyle")]
        style: StoredTextStyle,
    },
    Shape {
        shape: ShapeKind,
        color: StoredColor,
    },
}

impl From<&LayerContent> for StoredContent {
    fn from(content: &LayerContent) -> Self {
        match content {
            LayerContent::Color(c) => Self::Color { color: (*c).into() },
            // Pixel data is not round-tripped; only the tag survives.
            LayerContent::Image(_) => Self::Image {},
            LayerContent::Text(t) => Self::Text {
                text: t.text.clone(),
                style: (&t.style).into(),
            },
            LayerContent::Shape(s) => Self::Shape {
                shape: s.kind,
                color: s.color.into(),
            },
        }
    }
}

impl From<StoredContent> for LayerContent {
    fn from(content: StoredContent) -> Self {
        match content {
            StoredContent::Color { color } => Self::Color(color.into()),
            StoredContent::Image {} => Self::Image(ImageSource::placeholder()),
            StoredContent::Text { text, style } => Self::Text(TextContent {
                text,
                style: style.into(),
            }),
            StoredContent::Shape { shape, color } => Self::Shape(ShapeStyle {
                kind: shape,
                color: color.into(),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredLayer {
    id: String,
    name: String,
    is_visible: bool,
    is_active: bool,
    is_locked: bool,
    opacity: f32,
    position: Point,
    rotation: f32,
    size: Size,
    content: StoredContent,
}

impl From<&Layer> for StoredLayer {
    fn from(layer: &Layer) -> Self {
        Self {
            id: layer.id.as_str().to_string(),
            name: layer.name.clone(),
            is_visible: layer.visible,
            is_active: layer.active,
            is_locked: layer.locked,
            opacity: layer.opacity,
            position: layer.position,
            rotation: layer.rotation,
            size: layer.size,
            content: (&layer.content).into(),
        }
    }
}

impl StoredLayer {
    fn into_layer(self) -> Layer {
        // Loaded ids must never collide with future fresh ids.
        LayerId::reserve(&self.id);
        Layer {
            id: LayerId::intern(&self.id),
            name: self.name,
            visible: self.is_visible,
            active: self.is_active,
            locked: self.is_locked,
            opacity: self.opacity.clamp(0.0, 1.0),
            position: self.position,
            rotation: self.rotation,
            // A hand-edited or corrupt file must not smuggle in a layer
            // smaller than anything a resize could produce.
            size: Size::new(
                self.size.width.max(MIN_LAYER_DIMENSION),
                self.size.height.max(MIN_LAYER_DIMENSION),
            ),
            content: self.content.into(),
        }
    }
}

// ─── Entry points ────────────────────────────────────────────────────────

/// Serialize the layer list to the project document format. The caller
/// owns the actual file write.
pub fn encode_document(stack: &LayerStack) -> Result<String, CodecError> {
    let stored: Vec<StoredLayer> = stack.iter().map(StoredLayer::from).collect();
    log::debug!("encode {} layers", stored.len());
    Ok(serde_json::to_string_pretty(&stored)?)
}

/// Parse a project document into a fresh [`LayerStack`].
///
/// # Errors
/// Any malformed entry — including an unknown content `type` tag — fails
/// the whole decode; there is no partial load.
pub fn decode_document(text: &str) -> Result<LayerStack, CodecError> {
    let stored: Vec<StoredLayer> = serde_json::from_str(text)?;
    log::debug!("decode {} layers", stored.len());
    let layers = stored.into_iter().map(StoredLayer::into_layer).collect();
    // from_layers also re-establishes the single-active invariant in case
    // the file claims more than one active layer.
    Ok(LayerStack::from_layers(layers))
}
