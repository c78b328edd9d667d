//! The transform gesture controller.
//!
//! One state machine owns the single live drag: `Idle` is `drag: None`,
//! `Dragging` is `drag: Some(..)` with everything the gesture needs
//! snapshotted at pointer-down. All position/size math works from those
//! snapshots plus the *whole-gesture* pointer delta — never from
//! per-frame increments, which accumulate visible jitter.
//!
//! `Option<DragState>` replaces the zero-point "no gesture" sentinel the
//! original app used; a layer legitimately sitting at (0, 0) can no longer
//! be mistaken for an idle gesture.

use crate::input::PointerEvent;
use pb_core::canvas::ViewTransform;
use pb_core::geometry::{
    MIN_LAYER_DIMENSION, Point, Size, constrained_resize, rotation_angle, wrap_angle_delta,
};
use pb_core::id::LayerId;
use pb_core::stack::LayerStack;
use pb_render::hit::{hit_handle, hit_test};

/// What a corner-handle drag does to the active layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolKind {
    /// Handle drag resizes; body drag moves.
    #[default]
    Move,
    /// Handle drag rotates about the layer center.
    Rotate,
}

/// Which part of the layer the pointer went down on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragSurface {
    Body,
    Handle,
}

/// Everything captured at pointer-down. Dropped wholesale at pointer-up or
/// cancel, so a malformed stream can never apply stale snapshots.
#[derive(Debug, Clone, Copy)]
struct DragState {
    surface: DragSurface,
    layer: LayerId,
    /// Pointer-down position, view-space.
    start_view: Point,
    /// Layer fields as they were at pointer-down.
    initial_position: Point,
    initial_size: Size,
    initial_rotation: f32,
    /// Handle angle at pointer-down (rotate tool reference).
    last_angle: f32,
    /// Signed rotation accumulated over this gesture. Each move adds the
    /// wrapped per-step delta, so the value stays continuous across the
    /// 0°/360° seam even over multiple full turns.
    accumulated_angle: f32,
}

/// Turns a pointer event stream into transform edits on the active layer.
///
/// Exactly one gesture is live at a time. Pointer-down routes by hit
/// test: the active layer's handle starts a resize/rotate drag, the
/// active layer's body starts a move drag, another unlocked layer's body
/// activates it (tap semantics), and empty canvas deactivates everything.
#[derive(Debug)]
pub struct GestureController {
    pub tool: ToolKind,
    /// Whether handle-resize preserves the layer's aspect ratio.
    pub maintain_aspect_ratio: bool,
    drag: Option<DragState>,
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureController {
    pub fn new() -> Self {
        Self {
            tool: ToolKind::Move,
            maintain_aspect_ratio: true,
            drag: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Abort the live gesture without applying anything further. The layer
    /// keeps whatever transform the last move produced.
    pub fn cancel(&mut self) {
        self.drag = None;
    }

    /// Feed one pointer event. Mutates the stack in place.
    pub fn handle(&mut self, stack: &mut LayerStack, view: &ViewTransform, event: PointerEvent) {
        match event {
            PointerEvent::Down { .. } => self.pointer_down(stack, view, event.position()),
            PointerEvent::Move { .. } => self.pointer_move(stack, view, event.position()),
            // Stream tolerance: an Up with no live drag is a no-op.
            PointerEvent::Up { .. } => self.drag = None,
        }
    }

    fn pointer_down(&mut self, stack: &mut LayerStack, view: &ViewTransform, point: Point) {
        // A fresh down always re-snapshots; a drag that never saw its Up
        // cannot leak stale state into this gesture.
        self.drag = None;

        // The active layer's handle takes priority over anything under it.
        if let Some(active) = stack.active()
            && !active.locked
            && hit_handle(active, view, point)
        {
            let center = view.to_view(active.center());
            self.drag = Some(DragState {
                surface: DragSurface::Handle,
                layer: active.id,
                start_view: point,
                initial_position: active.position,
                initial_size: active.size,
                initial_rotation: active.rotation,
                last_angle: rotation_angle(center, point),
                accumulated_angle: 0.0,
            });
            log::trace!("handle drag start on {} ({:?})", active.id, self.tool);
            return;
        }

        match hit_test(stack, view, point) {
            Some(id) if stack.active_id() == Some(id) => {
                let layer = match stack.get(id) {
                    Some(layer) if !layer.locked => layer,
                    _ => return,
                };
                self.drag = Some(DragState {
                    surface: DragSurface::Body,
                    layer: id,
                    start_view: point,
                    initial_position: layer.position,
                    initial_size: layer.size,
                    initial_rotation: layer.rotation,
                    last_angle: 0.0,
                    accumulated_angle: 0.0,
                });
                log::trace!("move drag start on {id}");
            }
            // Tap on an inactive layer: activation only (locked layers
            // refuse inside `activate`). The next gesture can drag it.
            Some(id) => {
                stack.activate(id);
            }
            // Tap on empty canvas.
            None => stack.deactivate_all(),
        }
    }

    fn pointer_move(&mut self, stack: &mut LayerStack, view: &ViewTransform, point: Point) {
        // Stream tolerance: a Move with no live drag is a no-op.
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let Some(layer) = stack.get_mut(drag.layer) else {
            // The layer was deleted out from under the gesture.
            self.drag = None;
            return;
        };
        if layer.locked || !layer.active {
            return;
        }

        match drag.surface {
            DragSurface::Body => {
                let (dx, dy) = view.delta_to_canvas(
                    point.x - drag.start_view.x,
                    point.y - drag.start_view.y,
                );
                layer.position =
                    Point::new(drag.initial_position.x + dx, drag.initial_position.y + dy);
            }
            DragSurface::Handle => match self.tool {
                ToolKind::Move => {
                    let (dx, dy) = view.delta_to_canvas(
                        point.x - drag.start_view.x,
                        point.y - drag.start_view.y,
                    );
                    layer.size = constrained_resize(
                        drag.initial_size,
                        dx,
                        dy,
                        self.maintain_aspect_ratio,
                        MIN_LAYER_DIMENSION,
                    );
                }
                ToolKind::Rotate => {
                    // Rotation never moves the center, so the live layer
                    // center and the snapshot center coincide.
                    let center = view.to_view(layer.center());
                    let current = rotation_angle(center, point);
                    drag.accumulated_angle += wrap_angle_delta(current - drag.last_angle);
                    drag.last_angle = current;
                    layer.rotation = drag.initial_rotation + drag.accumulated_angle;
                }
            },
        }
    }
}
