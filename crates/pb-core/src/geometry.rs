//! Pure geometry for layer transforms.
//!
//! Everything here is a stateless value computation. The angle convention
//! matches the rotation handle: 0° points straight up and angles grow
//! clockwise, which in y-down view coordinates is `atan2(dx, -dy)`.

use serde::{Deserialize, Serialize};

/// Smallest width/height a layer may reach through any resize path.
pub const MIN_LAYER_DIMENSION: f32 = 20.0;

/// A point in either canvas-space or view-space (the mapper converts).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair, same space rules as [`Point`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Angle of the vector from `center` to `point`, in degrees clockwise from
/// straight up, normalized to `[0, 360)`.
pub fn rotation_angle(center: Point, point: Point) -> f32 {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    let degrees = dx.atan2(-dy).to_degrees();
    if degrees < 0.0 { degrees + 360.0 } else { degrees }
}

/// Rotate `point` about `center` by `degrees`, clockwise-positive
/// (consistent with [`rotation_angle`] in y-down coordinates).
pub fn rotate_point(point: Point, center: Point, degrees: f32) -> Point {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    Point {
        x: center.x + dx * cos - dy * sin,
        y: center.y + dx * sin + dy * cos,
    }
}

/// Wrap an angle difference into `(-180, 180]` with at most one ±360
/// correction. Keeps a rotate drag continuous when the raw handle angle
/// crosses the 0°/360° seam.
pub fn wrap_angle_delta(diff: f32) -> f32 {
    if diff > 180.0 {
        diff - 360.0
    } else if diff <= -180.0 {
        diff + 360.0
    } else {
        diff
    }
}

/// Apply a corner-handle drag delta to a starting size.
///
/// With the aspect lock on, the dominant delta (`max(dx, dy)`) scales the
/// width and the height follows from the original ratio, so dragging
/// outward on either axis grows the shape. With the lock off, each axis
/// gets its own delta. Both paths clamp each dimension to `min`.
pub fn constrained_resize(
    initial: Size,
    delta_x: f32,
    delta_y: f32,
    maintain_aspect_ratio: bool,
    min: f32,
) -> Size {
    if maintain_aspect_ratio && initial.width > 0.0 {
        let dominant = delta_x.max(delta_y);
        let width = (initial.width + dominant).max(min);
        let height = (width * initial.height / initial.width).max(min);
        Size { width, height }
    } else {
        Size {
            width: (initial.width + delta_x).max(min),
            height: (initial.height + delta_y).max(min),
        }
    }
}
