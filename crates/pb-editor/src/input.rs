//! Input abstraction layer.
//!
//! Normalizes mouse, touch, and stylus events into the three pointer
//! events the gesture controller consumes. Coordinates are view-space —
//! whatever pixel space the hosting surface reports. The upstream surface
//! is responsible for delivering one coherent stream: a second
//! pointer-down while a drag is live simply restarts the gesture.

use pb_core::geometry::Point;

/// A normalized pointer event from any pointing device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed (mouse down, touch start).
    Down { x: f32, y: f32 },

    /// Pointer moved while pressed.
    Move { x: f32, y: f32 },

    /// Pointer released.
    Up { x: f32, y: f32 },
}

impl PointerEvent {
    pub fn down(x: f32, y: f32) -> Self {
        Self::Down { x, y }
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::Move { x, y }
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::Up { x, y }
    }

    /// The event's view-space position.
    pub fn position(&self) -> Point {
        match self {
            Self::Down { x, y } | Self::Move { x, y } | Self::Up { x, y } => Point::new(*x, *y),
        }
    }
}
