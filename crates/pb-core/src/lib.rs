pub mod canvas;
pub mod codec;
pub mod geometry;
pub mod id;
pub mod model;
pub mod stack;

pub use canvas::{CANVAS_PRESETS, CanvasConfig, ViewTransform};
pub use codec::{CodecError, decode_document, encode_document};
pub use geometry::{
    MIN_LAYER_DIMENSION, Point, Size, constrained_resize, rotate_point, rotation_angle,
    wrap_angle_delta,
};
pub use id::LayerId;
pub use model::*;
pub use stack::LayerStack;
