//! The ordered layer collection.
//!
//! Index 0 is the topmost layer: it is drawn last and wins hit tests.
//! Renderers therefore iterate [`LayerStack::draw_order`] (the reverse of
//! storage order) to paint back-to-front.
//!
//! The stack owns the single-active invariant: at most one layer has
//! `active == true` after any operation here.

use crate::geometry::Point;
use crate::id::LayerId;
use crate::model::Layer;

/// Canvas-unit offset applied to a duplicated layer so it doesn't sit
/// exactly on top of the original.
pub const DUPLICATE_OFFSET: f32 = 10.0;

/// Ordered list of layers with activation bookkeeping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerStack {
    layers: Vec<Layer>,
}

impl LayerStack {
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Build a stack from an already-ordered list, clearing any activation
    /// beyond the first active entry. Used by the codec after decode.
    pub fn from_layers(mut layers: Vec<Layer>) -> Self {
        let mut seen_active = false;
        for layer in &mut layers {
            if layer.active {
                if seen_active {
                    layer.active = false;
                } else {
                    seen_active = true;
                }
            }
        }
        Self { layers }
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }

    /// Layers in paint order: bottom first, topmost (index 0) last.
    pub fn draw_order(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter().rev()
    }

    pub fn index_of(&self, id: LayerId) -> Option<usize> {
        self.layers.iter().position(|l| l.id == id)
    }

    pub fn get(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    pub fn get_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id == id)
    }

    pub fn active(&self) -> Option<&Layer> {
        self.layers.iter().find(|l| l.active)
    }

    pub fn active_mut(&mut self) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.active)
    }

    pub fn active_id(&self) -> Option<LayerId> {
        self.active().map(|l| l.id)
    }

    // ─── Insertion / removal ─────────────────────────────────────────────

    /// Insert a layer at the top of the stack and make it the sole active
    /// layer. Returns its id.
    pub fn insert(&mut self, mut layer: Layer) -> LayerId {
        let id = layer.id;
        for existing in &mut self.layers {
            existing.active = false;
        }
        layer.active = true;
        self.layers.insert(0, layer);
        log::trace!("insert {id} (top, active)");
        id
    }

    /// Clone a layer under a fresh id, " copy"-suffixed name, and a small
    /// position offset, inserted directly below the original in stacking
    /// order. The copy is never active. Returns the new id.
    pub fn duplicate(&mut self, id: LayerId) -> Option<LayerId> {
        let index = self.index_of(id)?;
        let mut copy = self.layers[index].clone();
        copy.id = LayerId::fresh();
        copy.name.push_str(" copy");
        copy.position = Point::new(
            copy.position.x + DUPLICATE_OFFSET,
            copy.position.y + DUPLICATE_OFFSET,
        );
        copy.active = false;
        let copy_id = copy.id;
        self.layers.insert(index + 1, copy);
        log::trace!("duplicate {id} -> {copy_id}");
        Some(copy_id)
    }

    /// Remove a layer by id. If it was the active layer, no other layer
    /// becomes active. Returns the removed layer.
    pub fn remove(&mut self, id: LayerId) -> Option<Layer> {
        let index = self.index_of(id)?;
        Some(self.layers.remove(index))
    }

    /// Remove the active layer, leaving the stack with no active layer.
    pub fn remove_active(&mut self) -> Option<Layer> {
        let id = self.active_id()?;
        self.remove(id)
    }

    // ─── Activation ──────────────────────────────────────────────────────

    /// Activate a layer, deactivating all others. A locked or unknown id
    /// is a no-op. Returns whether the layer is now active.
    pub fn activate(&mut self, id: LayerId) -> bool {
        match self.get(id) {
            Some(layer) if !layer.locked => {}
            _ => return false,
        }
        for layer in &mut self.layers {
            layer.active = layer.id == id;
        }
        true
    }

    /// Deactivate every layer (tap on empty canvas).
    pub fn deactivate_all(&mut self) {
        for layer in &mut self.layers {
            layer.active = false;
        }
    }

    // ─── Field mutation ──────────────────────────────────────────────────

    pub fn set_visible(&mut self, id: LayerId, visible: bool) -> bool {
        match self.get_mut(id) {
            Some(layer) => {
                layer.visible = visible;
                true
            }
            None => false,
        }
    }

    pub fn set_locked(&mut self, id: LayerId, locked: bool) -> bool {
        match self.get_mut(id) {
            Some(layer) => {
                layer.locked = locked;
                true
            }
            None => false,
        }
    }

    /// Set a layer's opacity, clamped to `[0, 1]`.
    pub fn set_opacity(&mut self, id: LayerId, opacity: f32) -> bool {
        match self.get_mut(id) {
            Some(layer) => {
                layer.opacity = opacity.clamp(0.0, 1.0);
                true
            }
            None => false,
        }
    }

    pub fn rename(&mut self, id: LayerId, name: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(layer) => {
                layer.name = name.into();
                true
            }
            None => false,
        }
    }

    // ─── Z-order ─────────────────────────────────────────────────────────

    /// Move the layer at `from` to index `to`. Changes stacking order
    /// only — position, size, and rotation are untouched. Returns whether
    /// anything moved.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if from >= self.layers.len() || to >= self.layers.len() || from == to {
            return false;
        }
        let layer = self.layers.remove(from);
        self.layers.insert(to, layer);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Color;

    fn assert_single_active(stack: &LayerStack) {
        assert!(stack.iter().filter(|l| l.active).count() <= 1);
    }

    #[test]
    fn insert_goes_on_top_and_activates() {
        let mut stack = LayerStack::new();
        let first = stack.insert(Layer::color(Color::RED));
        let second = stack.insert(Layer::text("hello"));

        assert_eq!(stack.index_of(second), Some(0));
        assert_eq!(stack.index_of(first), Some(1));
        assert_eq!(stack.active_id(), Some(second));
        assert_single_active(&stack);
    }

    #[test]
    fn remove_active_leaves_nothing_active() {
        let mut stack = LayerStack::new();
        stack.insert(Layer::color(Color::RED));
        let top = stack.insert(Layer::text("hello"));

        let removed = stack.remove_active().expect("active layer");
        assert_eq!(removed.id, top);
        assert_eq!(stack.active_id(), None);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn activate_is_exclusive_and_respects_lock() {
        let mut stack = LayerStack::new();
        let a = stack.insert(Layer::color(Color::RED));
        let b = stack.insert(Layer::color(Color::BLUE));

        assert!(stack.activate(a));
        assert_eq!(stack.active_id(), Some(a));
        assert_single_active(&stack);

        stack.set_locked(b, true);
        assert!(!stack.activate(b));
        // Activation unchanged by the refused tap.
        assert_eq!(stack.active_id(), Some(a));
    }

    #[test]
    fn duplicate_sits_below_original_and_stays_inactive() {
        let mut stack = LayerStack::new();
        let original = stack.insert(Layer::color(Color::RED).at(Point::new(30.0, 40.0)));

        let copy = stack.duplicate(original).expect("copy");
        assert_eq!(stack.index_of(original), Some(0));
        assert_eq!(stack.index_of(copy), Some(1));

        let copied = stack.get(copy).unwrap();
        assert_eq!(copied.name, "Color Layer copy");
        assert_eq!(
            copied.position,
            Point::new(30.0 + DUPLICATE_OFFSET, 40.0 + DUPLICATE_OFFSET)
        );
        assert!(!copied.active);
        // Original keeps its activation.
        assert_eq!(stack.active_id(), Some(original));
        assert_single_active(&stack);
    }

    #[test]
    fn opacity_is_clamped() {
        let mut stack = LayerStack::new();
        let id = stack.insert(Layer::color(Color::RED));
        stack.set_opacity(id, 2.5);
        assert_eq!(stack.get(id).unwrap().opacity, 1.0);
        stack.set_opacity(id, -0.5);
        assert_eq!(stack.get(id).unwrap().opacity, 0.0);
    }

    #[test]
    fn reorder_changes_stacking_only() {
        let mut stack = LayerStack::new();
        let a = stack.insert(Layer::color(Color::RED).at(Point::new(5.0, 5.0)));
        let _b = stack.insert(Layer::color(Color::BLUE));
        let _c = stack.insert(Layer::text("hi"));

        assert!(stack.reorder(2, 0));
        assert_eq!(stack.index_of(a), Some(0));
        assert_eq!(stack.get(a).unwrap().position, Point::new(5.0, 5.0));

        assert!(!stack.reorder(0, 0));
        assert!(!stack.reorder(0, 9));
    }

    #[test]
    fn draw_order_is_reverse_of_storage() {
        let mut stack = LayerStack::new();
        let bottom = stack.insert(Layer::color(Color::RED));
        let top = stack.insert(Layer::color(Color::BLUE));

        let order: Vec<LayerId> = stack.draw_order().map(|l| l.id).collect();
        assert_eq!(order, vec![bottom, top]);
    }

    #[test]
    fn from_layers_keeps_first_active_only() {
        let mut a = Layer::color(Color::RED);
        let mut b = Layer::color(Color::BLUE);
        a.active = true;
        b.active = true;
        let stack = LayerStack::from_layers(vec![a, b]);
        assert_eq!(stack.iter().filter(|l| l.active).count(), 1);
        assert!(stack.iter().next().unwrap().active);
    }
}
