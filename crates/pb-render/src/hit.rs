//! Hit testing: view-space point → layer lookup.
//!
//! Walks the stack front-to-back (storage order — index 0 is topmost) and
//! returns the first visible layer under the point. Rotated layers are
//! handled by inverse-rotating the probe point about the layer center
//! instead of rotating the box: the containment check then runs against
//! the plain axis-aligned frame.

use pb_core::canvas::ViewTransform;
use pb_core::geometry::{Point, rotate_point};
use pb_core::id::LayerId;
use pb_core::model::Layer;
use pb_core::stack::LayerStack;

/// How far (in view pixels) from the handle anchor a pointer-down still
/// grabs the handle.
pub const HANDLE_HIT_RADIUS: f32 = 12.0;

/// Find the topmost visible layer at a view-space position.
/// Locked layers are still hits — the gesture layer decides what a tap on
/// a locked layer means.
pub fn hit_test(stack: &LayerStack, view: &ViewTransform, point: Point) -> Option<LayerId> {
    stack
        .iter()
        .find(|layer| layer.visible && layer_contains(layer, view, point))
        .map(|layer| layer.id)
}

/// Whether a view-space point falls inside a layer's (possibly rotated)
/// frame.
pub fn layer_contains(layer: &Layer, view: &ViewTransform, point: Point) -> bool {
    let origin = view.to_view(layer.position);
    let size = view.size_to_view(layer.size);
    let center = Point::new(origin.x + size.width / 2.0, origin.y + size.height / 2.0);

    // Undo the layer's rotation, then test the axis-aligned box.
    let probe = rotate_point(point, center, -layer.rotation);
    probe.x >= origin.x
        && probe.x <= origin.x + size.width
        && probe.y >= origin.y
        && probe.y <= origin.y + size.height
}

/// View-space position of the resize/rotate handle: the bottom-right
/// corner of the unrotated frame, rotated about the layer center by the
/// current rotation so it tracks the visually rotated box.
pub fn handle_position(layer: &Layer, view: &ViewTransform) -> Point {
    let origin = view.to_view(layer.position);
    let size = view.size_to_view(layer.size);
    let center = Point::new(origin.x + size.width / 2.0, origin.y + size.height / 2.0);
    let corner = Point::new(origin.x + size.width, origin.y + size.height);
    rotate_point(corner, center, layer.rotation)
}

/// Whether a view-space pointer-down lands on the layer's handle.
pub fn hit_handle(layer: &Layer, view: &ViewTransform, point: Point) -> bool {
    let anchor = handle_position(layer, view);
    let dx = point.x - anchor.x;
    let dy = point.y - anchor.y;
    dx * dx + dy * dy <= HANDLE_HIT_RADIUS * HANDLE_HIT_RADIUS
}
