//! End-to-end gesture scenarios: pointer streams in, layer transforms out.
//!
//! These drive the controller through the public event API only, with the
//! handle located via `pb_render::hit::handle_position` the way a hosting
//! surface would.

use pb_core::canvas::{CanvasConfig, ViewTransform};
use pb_core::geometry::{Point, Size};
use pb_core::model::{Color, Layer};
use pb_core::stack::LayerStack;
use pb_editor::gesture::{GestureController, ToolKind};
use pb_editor::input::PointerEvent;
use pb_render::hit::handle_position;
use pretty_assertions::assert_eq;

/// Canvas 1000×1000 shown at width 500 → scale factor 0.5.
fn half_scale_setup() -> (GestureController, LayerStack, ViewTransform) {
    let controller = GestureController::new();
    let mut stack = LayerStack::new();
    stack.insert(
        Layer::color(Color::RED)
            .at(Point::new(100.0, 100.0))
            .sized(Size::new(100.0, 100.0)),
    );
    let view = ViewTransform::fit_width(CanvasConfig::new(1000.0, 1000.0), 500.0);
    (controller, stack, view)
}

/// A point at `angle` degrees (clockwise from up) and distance `r` from
/// `center`, in the same space as `center`.
fn point_at_angle(center: Point, angle: f32, r: f32) -> Point {
    let rad = angle.to_radians();
    Point::new(center.x + r * rad.sin(), center.y - r * rad.cos())
}

#[test]
fn handle_drag_resizes_through_the_view_scale() {
    let (mut controller, mut stack, view) = half_scale_setup();
    controller.maintain_aspect_ratio = false;
    let id = stack.active_id().unwrap();

    // Handle sits at canvas (200, 200) → view (100, 100).
    let anchor = handle_position(stack.get(id).unwrap(), &view);
    assert_eq!(anchor, Point::new(100.0, 100.0));

    // A 50 px view drag is a 100-unit canvas delta at scale 0.5.
    controller.handle(&mut stack, &view, PointerEvent::down(anchor.x, anchor.y));
    controller.handle(
        &mut stack,
        &view,
        PointerEvent::moved(anchor.x + 50.0, anchor.y + 50.0),
    );
    controller.handle(
        &mut stack,
        &view,
        PointerEvent::up(anchor.x + 50.0, anchor.y + 50.0),
    );

    assert_eq!(stack.get(id).unwrap().size, Size::new(200.0, 200.0));
    // Position is untouched by a resize.
    assert_eq!(stack.get(id).unwrap().position, Point::new(100.0, 100.0));
}

#[test]
fn aspect_locked_resize_keeps_the_ratio() {
    let mut controller = GestureController::new();
    controller.maintain_aspect_ratio = true;
    let mut stack = LayerStack::new();
    let id = stack.insert(
        Layer::color(Color::BLUE)
            .at(Point::new(100.0, 100.0))
            .sized(Size::new(200.0, 100.0)),
    );
    let view = ViewTransform::fit_width(CanvasConfig::new(1000.0, 1000.0), 1000.0);

    let anchor = handle_position(stack.get(id).unwrap(), &view);
    controller.handle(&mut stack, &view, PointerEvent::down(anchor.x, anchor.y));
    controller.handle(
        &mut stack,
        &view,
        PointerEvent::moved(anchor.x + 50.0, anchor.y + 10.0),
    );
    controller.handle(
        &mut stack,
        &view,
        PointerEvent::up(anchor.x + 50.0, anchor.y + 10.0),
    );

    // Dominant delta +50 → width 250; 2:1 ratio → height 125.
    let size = stack.get(id).unwrap().size;
    assert!((size.width - 250.0).abs() < 1e-3);
    assert!((size.height - size.width / 2.0).abs() < 1e-3);
}

#[test]
fn rotate_drag_applies_the_swept_angle() {
    let (mut controller, mut stack, view) = half_scale_setup();
    controller.tool = ToolKind::Rotate;
    let id = stack.active_id().unwrap();

    // Layer center canvas (150, 150) → view (75, 75); the handle (corner)
    // sits at 135° from it.
    let center = Point::new(75.0, 75.0);
    let anchor = handle_position(stack.get(id).unwrap(), &view);
    controller.handle(&mut stack, &view, PointerEvent::down(anchor.x, anchor.y));

    // Sweep the pointer 90° clockwise around the center.
    let target = point_at_angle(center, 135.0 + 90.0, 35.0);
    controller.handle(&mut stack, &view, PointerEvent::moved(target.x, target.y));
    controller.handle(&mut stack, &view, PointerEvent::up(target.x, target.y));

    assert!((stack.get(id).unwrap().rotation - 90.0).abs() < 1e-2);
}

#[test]
fn rotation_is_continuous_across_the_seam_and_accumulates() {
    let (mut controller, mut stack, view) = half_scale_setup();
    controller.tool = ToolKind::Rotate;
    let id = stack.active_id().unwrap();

    let center = Point::new(75.0, 75.0);
    let anchor = handle_position(stack.get(id).unwrap(), &view);
    let start_angle = 135.0;
    controller.handle(&mut stack, &view, PointerEvent::down(anchor.x, anchor.y));

    // Two full clockwise turns in 10° steps. The raw handle angle crosses
    // the 0°/360° seam four times; the applied rotation must never jump.
    let mut previous = stack.get(id).unwrap().rotation;
    for step in 1..=72 {
        let angle = start_angle + 10.0 * step as f32;
        let p = point_at_angle(center, angle, 35.0);
        controller.handle(&mut stack, &view, PointerEvent::moved(p.x, p.y));

        let current = stack.get(id).unwrap().rotation;
        let step_delta = current - previous;
        assert!(
            (step_delta - 10.0).abs() < 1e-2,
            "discontinuity at step {step}: {step_delta}"
        );
        previous = current;
    }
    controller.handle(&mut stack, &view, PointerEvent::up(anchor.x, anchor.y));

    // Rotation is stored unbounded: 720°, not 0°.
    assert!((stack.get(id).unwrap().rotation - 720.0).abs() < 0.5);

    // A second gesture accumulates on top instead of restarting at zero.
    let anchor = handle_position(stack.get(id).unwrap(), &view);
    controller.handle(&mut stack, &view, PointerEvent::down(anchor.x, anchor.y));
    let resumed_angle = pb_core::geometry::rotation_angle(center, anchor);
    let target = point_at_angle(center, resumed_angle + 30.0, 35.0);
    controller.handle(&mut stack, &view, PointerEvent::moved(target.x, target.y));
    assert!((stack.get(id).unwrap().rotation - 750.0).abs() < 0.5);
}

#[test]
fn insert_then_delete_returns_to_no_active_layer() {
    let mut stack = LayerStack::new();
    let id = stack.insert(Layer::text("Hello, World!"));

    assert_eq!(stack.index_of(id), Some(0));
    assert_eq!(stack.active_id(), Some(id));
    assert_eq!(stack.iter().filter(|l| l.active).count(), 1);

    stack.remove_active();
    assert_eq!(stack.active_id(), None);
    assert!(stack.is_empty());
}

#[test]
fn resize_never_shrinks_below_minimum() {
    let (mut controller, mut stack, view) = half_scale_setup();
    controller.maintain_aspect_ratio = false;
    let id = stack.active_id().unwrap();

    let anchor = handle_position(stack.get(id).unwrap(), &view);
    controller.handle(&mut stack, &view, PointerEvent::down(anchor.x, anchor.y));
    controller.handle(
        &mut stack,
        &view,
        PointerEvent::moved(anchor.x - 400.0, anchor.y - 400.0),
    );
    controller.handle(
        &mut stack,
        &view,
        PointerEvent::up(anchor.x - 400.0, anchor.y - 400.0),
    );

    let size = stack.get(id).unwrap().size;
    assert_eq!(size, Size::new(20.0, 20.0));
}
