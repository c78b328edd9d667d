//! Export layout: resolved view-space frames for an external rasterizer.
//!
//! The exporter asks for a target width; every visible layer comes back
//! with its frame scaled by `target_width / canvas.width`, in back-to-front
//! paint order. The live editing viewport plays no part here — exporting a
//! 1080-wide canvas to 2000 px gives identical output on every device.

use pb_core::canvas::{CanvasConfig, ViewTransform};
use pb_core::geometry::{Point, Size};
use pb_core::model::Layer;
use pb_core::stack::LayerStack;

/// One layer resolved for painting: the borrowed layer (content, opacity,
/// rotation) plus its frame in output pixels.
#[derive(Debug, Clone, Copy)]
pub struct ExportLayer<'a> {
    pub layer: &'a Layer,
    /// Top-left corner in output pixels.
    pub position: Point,
    /// Frame size in output pixels.
    pub size: Size,
}

/// Output bitmap dimensions for a given target width; height follows from
/// the canvas aspect ratio.
pub fn export_size(canvas: CanvasConfig, target_width: f32) -> Size {
    Size::new(target_width, target_width * canvas.height / canvas.width)
}

/// Resolve all visible layers at the target resolution, in paint order
/// (bottom of the stack first, topmost layer last).
pub fn export_layout(
    stack: &LayerStack,
    canvas: CanvasConfig,
    target_width: f32,
) -> Vec<ExportLayer<'_>> {
    let view = ViewTransform::fit_width(canvas, target_width);
    log::trace!(
        "export layout: {} layers at width {target_width}",
        stack.len()
    );
    stack
        .draw_order()
        .filter(|layer| layer.visible)
        .map(|layer| ExportLayer {
            layer,
            position: view.to_view(layer.position),
            size: view.size_to_view(layer.size),
        })
        .collect()
}
