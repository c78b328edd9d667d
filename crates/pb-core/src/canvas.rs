//! Canvas configuration and canvas ↔ view coordinate mapping.
//!
//! Canvas-space is the document's logical resolution, fixed per document.
//! View-space is whatever the canvas is currently rendered at — the
//! on-screen viewport while editing, or the target bitmap during export.
//! The canvas always renders at a uniform scale that fits its width, so a
//! single scale factor converts both axes.
//!
//! Every drag delta arrives in view-space and must go through
//! [`ViewTransform::delta_to_canvas`] before touching a layer's canvas-space
//! fields. Applying raw view deltas is the classic bug this module exists
//! to prevent.

use crate::geometry::{Point, Size};
use serde::{Deserialize, Serialize};

/// Named preset dimensions offered by the canvas settings form.
pub const CANVAS_PRESETS: [(&str, f32, f32); 4] = [
    ("Square", 1080.0, 1080.0),
    ("Story", 1080.0, 1920.0),
    ("HD", 1280.0, 720.0),
    ("Full HD", 1920.0, 1080.0),
];

/// The document's logical resolution, independent of any screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1080.0,
            height: 1080.0,
        }
    }
}

impl CanvasConfig {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Set the logical resolution. Rejects non-positive or non-finite
    /// values and returns whether the config changed.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }
}

/// A canvas ↔ view conversion at one specific rendered width.
///
/// Built per frame from the live viewport width while editing, or from the
/// caller's target width during export — export must never see the
/// viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    scale_factor: f32,
}

impl ViewTransform {
    /// Fit the canvas width to `rendered_width`. Height follows from the
    /// canvas's own aspect ratio.
    pub fn fit_width(canvas: CanvasConfig, rendered_width: f32) -> Self {
        Self {
            scale_factor: rendered_width / canvas.width,
        }
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    pub fn to_view(&self, p: Point) -> Point {
        Point::new(p.x * self.scale_factor, p.y * self.scale_factor)
    }

    pub fn to_canvas(&self, p: Point) -> Point {
        Point::new(p.x / self.scale_factor, p.y / self.scale_factor)
    }

    pub fn size_to_view(&self, s: Size) -> Size {
        Size::new(s.width * self.scale_factor, s.height * self.scale_factor)
    }

    pub fn size_to_canvas(&self, s: Size) -> Size {
        Size::new(s.width / self.scale_factor, s.height / self.scale_factor)
    }

    /// Convert a view-space drag delta into canvas units.
    pub fn delta_to_canvas(&self, dx: f32, dy: f32) -> (f32, f32) {
        (dx / self.scale_factor, dy / self.scale_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scale_factor_fits_width() {
        let view = ViewTransform::fit_width(CanvasConfig::new(1000.0, 1000.0), 500.0);
        assert_eq!(view.scale_factor(), 0.5);
    }

    #[test]
    fn roundtrip_is_identity() {
        let view = ViewTransform::fit_width(CanvasConfig::new(1080.0, 1920.0), 393.0);
        for p in [
            Point::new(0.0, 0.0),
            Point::new(540.0, 960.0),
            Point::new(1079.5, 1.25),
        ] {
            let back = view.to_canvas(view.to_view(p));
            assert!((back.x - p.x).abs() < 1e-3);
            assert!((back.y - p.y).abs() < 1e-3);
        }
    }

    #[test]
    fn deltas_divide_by_scale() {
        let view = ViewTransform::fit_width(CanvasConfig::new(1000.0, 1000.0), 500.0);
        assert_eq!(view.delta_to_canvas(50.0, 50.0), (100.0, 100.0));
    }

    #[test]
    fn resize_rejects_bad_values() {
        let mut canvas = CanvasConfig::default();
        assert!(!canvas.resize(0.0, 100.0));
        assert!(!canvas.resize(100.0, -5.0));
        assert!(!canvas.resize(f32::NAN, 100.0));
        assert!(!canvas.resize(f32::INFINITY, 100.0));
        assert_eq!(canvas, CanvasConfig::default());

        assert!(canvas.resize(1280.0, 720.0));
        assert_eq!(canvas, CanvasConfig::new(1280.0, 720.0));
    }

    #[test]
    fn presets_are_positive() {
        for (name, w, h) in CANVAS_PRESETS {
            let mut canvas = CanvasConfig::default();
            assert!(canvas.resize(w, h), "{name}");
        }
    }
}
