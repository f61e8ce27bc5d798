use crate::animation::AnimationDescriptor;
use crate::coords::{CanvasDelta, CanvasPoint, CanvasSize, LocalPoint, LocalRect};
use crate::handle::{create_handles, Handle, ResizeHandle};
use crate::keyframe::{adjust_keyframes, Keyframe, Time};
use crate::resize::{interpret_drag, ResizeOutcome};
use crate::ShapeId;
use glam::Vec2;
use palette::Srgba;
use serde::{Deserialize, Serialize};

/// Fill style (brush) for a shape.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub color: Srgba,
}

impl Fill {
    pub fn new(color: Srgba) -> Self {
        Self { color }
    }
}

/// Outline style (pen) for a shape.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Srgba,
    pub width: f32,
}

impl Stroke {
    pub fn new(color: Srgba, width: f32) -> Self {
        Self { color, width }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: Srgba::new(0.0, 0.0, 0.0, 1.0),
            width: 2.0,
        }
    }
}

/// A resizable, animatable shape.
///
/// Geometry is split in two: `rect` is local to the shape and normally sits at
/// (0, 0), while `position` places the shape on the canvas. The resize path
/// only ever writes the rect size and moves `position` to compensate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    /// User-visible name, editable from the inspector.
    identifier: String,

    pub position: CanvasPoint,
    rect: LocalRect,
    scale: Vec2,
    pub opacity: f32,

    // Style
    stroke: Option<Stroke>,
    fill: Option<Fill>,

    // Animation
    animations: Vec<AnimationDescriptor>,
    keyframes: Vec<Keyframe>,

    /// Present exactly while the shape is selected.
    #[serde(skip)]
    handles: Vec<Handle>,
}

impl Shape {
    pub fn new(position: CanvasPoint, size: CanvasSize) -> Self {
        Self {
            id: ShapeId::new(),
            identifier: String::new(),
            position,
            rect: LocalRect {
                origin: LocalPoint::default(),
                size,
            },
            scale: Vec2::ONE,
            opacity: 1.0,
            stroke: Some(Stroke::default()),
            fill: None,
            animations: Vec::new(),
            keyframes: Vec::new(),
            handles: Vec::new(),
        }
    }

    pub fn rectangle(position: Vec2, size: Vec2) -> Self {
        Self::new(CanvasPoint(position), CanvasSize(size))
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    pub fn with_fill(mut self, color: Srgba) -> Self {
        self.fill = Some(Fill::new(color));
        self
    }

    pub fn with_stroke(mut self, color: Srgba, width: f32) -> Self {
        self.stroke = Some(Stroke::new(color, width));
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    // === Geometry ===

    pub fn rect(&self) -> LocalRect {
        self.rect
    }

    pub fn size(&self) -> CanvasSize {
        self.rect.size
    }

    /// Replace the local rect. No validation: callers enforce the size floor.
    pub fn set_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.rect = LocalRect::new(x, y, width, height);
    }

    pub fn set_width(&mut self, width: f32) {
        self.rect.set_width(width);
        self.place_handles();
    }

    pub fn set_height(&mut self, height: f32) {
        self.rect.set_height(height);
        self.place_handles();
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn set_scale(&mut self, x: f32, y: f32) {
        self.scale = Vec2::new(x, y);
    }

    /// Move the shape by a delta.
    pub fn translate(&mut self, delta: CanvasDelta) {
        self.position += delta;
    }

    /// Returns the bounding box in canvas space as (min, max) corners.
    pub fn bounds(&self) -> (CanvasPoint, CanvasPoint) {
        let min = self.rect.origin.to_canvas(self.position);
        let max = CanvasPoint(min.0 + self.rect.size.0);
        (min, max)
    }

    /// Check if a canvas point is inside this shape's bounding box.
    pub fn contains_point(&self, point: CanvasPoint) -> bool {
        self.rect.contains(LocalPoint::from_canvas(point, self.position))
    }

    // === Identity and style ===

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn set_identifier(&mut self, identifier: impl Into<String>) {
        self.identifier = identifier.into();
    }

    pub fn stroke(&self) -> Option<Stroke> {
        self.stroke
    }

    pub fn set_stroke(&mut self, stroke: Option<Stroke>) {
        self.stroke = stroke;
    }

    pub fn fill(&self) -> Option<Fill> {
        self.fill
    }

    pub fn set_fill(&mut self, fill: Option<Fill>) {
        self.fill = fill;
    }

    // === Handles ===

    pub fn is_selected(&self) -> bool {
        !self.handles.is_empty()
    }

    /// Create the eight handles. Returns false if they already exist.
    pub fn select(&mut self) -> bool {
        if self.is_selected() {
            return false;
        }
        self.handles = create_handles(self.id, self.rect.size);
        true
    }

    /// Drop the handles. Returns false if the shape was not selected.
    pub fn deselect(&mut self) -> bool {
        if !self.is_selected() {
            return false;
        }
        self.handles.clear();
        true
    }

    pub fn handles(&self) -> &[Handle] {
        &self.handles
    }

    pub fn handle(&self, role: ResizeHandle) -> Option<&Handle> {
        self.handles.get(role.index())
    }

    pub fn handle_mut(&mut self, role: ResizeHandle) -> Option<&mut Handle> {
        self.handles.get_mut(role.index())
    }

    /// Reposition all handles around the current rect.
    pub fn place_handles(&mut self) {
        let size = self.rect.size;
        for handle in &mut self.handles {
            handle.place(size);
        }
    }

    /// Continue a drag on `role` with the pointer at `pos` (handle-local).
    ///
    /// Applies the new size and position compensation and re-places the
    /// handles. Returns `None` if the handle is missing or was not pressed.
    pub fn drag_handle(
        &mut self,
        role: ResizeHandle,
        pos: LocalPoint,
        lock_aspect: bool,
        min_size: f32,
    ) -> Option<ResizeOutcome> {
        let handle = self.handle_mut(role)?;
        if !handle.drag() {
            return None;
        }
        let pulled = CanvasDelta(handle.mouse_down().0 - pos.0);

        let outcome = interpret_drag(self.rect.size, role, pulled, lock_aspect, min_size);
        self.set_rect(0.0, 0.0, outcome.size.width(), outcome.size.height());
        if let Some(shift) = outcome.position_shift {
            self.translate(shift);
        }
        self.place_handles();
        Some(outcome)
    }

    // === Animation ===

    pub fn add_animation(&mut self, animation: AnimationDescriptor) {
        self.animations.push(animation);
    }

    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }

    pub fn animation(&self, index: usize) -> Option<&AnimationDescriptor> {
        self.animations.get(index)
    }

    pub fn add_keyframe(&mut self, keyframe: Keyframe) {
        self.keyframes.push(keyframe);
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Correct the keyframe governing `property` at the playhead.
    ///
    /// Without a playhead (no timeline attached) this does nothing.
    pub fn adjust_keyframes(&mut self, property: &str, value: f32, playhead: Option<Time>) -> bool {
        match playhead {
            Some(time) => adjust_keyframes(&mut self.keyframes, property, value, time),
            None => false,
        }
    }
}
