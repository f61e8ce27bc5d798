use crate::order::{self, CanvasItem, DecorationId};
use crate::{CanvasConfig, CanvasEvent, EventSource, Modifiers, PointerEvent, Timeline};
use node::{
    AnimatedProperty, AnimationDescriptor, CanvasDelta, CanvasPoint, Fill, HandleId, Keyframe,
    LocalPoint, Shape, ShapeId, Stroke, Time,
};
use std::collections::HashSet;

/// The editor document: shapes, their stacking order, selection and timeline.
///
/// All mutation goes through `&mut self`, so handle creation and teardown
/// are strictly ordered with selection changes. Notifications are queued and
/// handed out by [`Canvas::drain_events`].
#[derive(Debug, Default)]
pub struct Canvas {
    /// Shape storage, in insertion order.
    shapes: Vec<Shape>,

    /// Stacking order, front to back.
    items: Vec<CanvasItem>,

    /// Currently selected shape IDs.
    selection: HashSet<ShapeId>,

    /// Attached timeline, if any.
    timeline: Option<Timeline>,

    pub config: CanvasConfig,

    events: Vec<CanvasEvent>,
}

impl Canvas {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    fn emit(&mut self, event: CanvasEvent) {
        self.events.push(event);
    }

    /// Take all events emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<CanvasEvent> {
        std::mem::take(&mut self.events)
    }

    // === Items ===

    /// Add a shape on top of everything else.
    pub fn add_shape(&mut self, mut shape: Shape) -> ShapeId {
        let id = shape.id;
        // Selection is owned by the canvas; a shape arrives unselected.
        shape.deselect();
        log::debug!("add shape {} ({:?})", id, shape.identifier());
        self.shapes.push(shape);
        self.items.insert(0, CanvasItem::Shape(id));
        self.emit(CanvasEvent::ShapeAdded { shape: id });
        id
    }

    /// Add a non-document item on top of everything else.
    pub fn add_decoration(&mut self) -> DecorationId {
        let id = DecorationId::new();
        self.items.insert(0, CanvasItem::Decoration(id));
        id
    }

    /// Remove a shape. Its handles go with it.
    pub fn remove_shape(&mut self, id: ShapeId) -> bool {
        let Some(pos) = self.shapes.iter().position(|s| s.id == id) else {
            return false;
        };
        self.shapes.remove(pos);
        self.items.retain(|item| *item != CanvasItem::Shape(id));
        if self.selection.remove(&id) {
            self.emit(CanvasEvent::SelectionChanged);
        }
        log::debug!("removed shape {id}");
        self.emit(CanvasEvent::ShapeRemoved { shape: id });
        true
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Direct access to a shape. Changes made through it emit no events
    /// and bypass selection bookkeeping.
    pub(crate) fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Stacking order, front to back.
    pub fn items(&self) -> &[CanvasItem] {
        &self.items
    }

    /// Shapes in stacking order, front to back.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.items
            .iter()
            .filter_map(CanvasItem::shape_id)
            .filter_map(|id| self.shape(id))
    }

    /// Shape IDs in stacking order, front to back.
    pub fn shape_order(&self) -> Vec<ShapeId> {
        self.items.iter().filter_map(CanvasItem::shape_id).collect()
    }

    /// Find the topmost shape at a canvas point.
    pub fn shape_at_point(&self, point: CanvasPoint) -> Option<ShapeId> {
        self.shapes().find(|s| s.contains_point(point)).map(|s| s.id)
    }

    // === Selection ===

    pub fn selection(&self) -> &HashSet<ShapeId> {
        &self.selection
    }

    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selection.contains(&id)
    }

    /// Select a shape, optionally adding to the selection.
    ///
    /// Selecting creates the shape's handles; re-selecting an already selected
    /// shape leaves its handles alone.
    pub fn select(&mut self, id: ShapeId, add_to_selection: bool) -> bool {
        if self.shape(id).is_none() {
            return false;
        }
        if !add_to_selection {
            let others: Vec<_> = self.selection.iter().copied().filter(|s| *s != id).collect();
            for other in others {
                self.deselect_inner(other);
            }
        }
        if let Some(shape) = self.shape_mut(id) {
            shape.select();
        }
        self.selection.insert(id);
        self.emit(CanvasEvent::SelectionChanged);
        true
    }

    /// Remove one shape from the selection, destroying its handles.
    pub fn deselect(&mut self, id: ShapeId) -> bool {
        if !self.deselect_inner(id) {
            return false;
        }
        self.emit(CanvasEvent::SelectionChanged);
        true
    }

    fn deselect_inner(&mut self, id: ShapeId) -> bool {
        if let Some(shape) = self.shape_mut(id) {
            shape.deselect();
        }
        self.selection.remove(&id)
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let selected: Vec<_> = self.selection.iter().copied().collect();
        for id in selected {
            self.deselect_inner(id);
        }
        self.emit(CanvasEvent::SelectionChanged);
    }

    // === Geometry ===

    pub fn set_rect(&mut self, id: ShapeId, x: f32, y: f32, width: f32, height: f32) -> bool {
        let Some(shape) = self.shape_mut(id) else {
            return false;
        };
        shape.set_rect(x, y, width, height);
        shape.place_handles();
        self.emit(CanvasEvent::RedrawRequested { shape: id });
        self.emit(CanvasEvent::SizeChanged {
            shape: id,
            width,
            height,
        });
        true
    }

    pub fn set_width(&mut self, id: ShapeId, width: f32) -> bool {
        let Some(shape) = self.shape_mut(id) else {
            return false;
        };
        shape.set_width(width);
        self.emit(CanvasEvent::RedrawRequested { shape: id });
        true
    }

    pub fn set_height(&mut self, id: ShapeId, height: f32) -> bool {
        let Some(shape) = self.shape_mut(id) else {
            return false;
        };
        shape.set_height(height);
        self.emit(CanvasEvent::RedrawRequested { shape: id });
        true
    }

    /// Move a shape by a delta.
    ///
    /// A selected shape being moved counts as a live edit: the `left`/`top`
    /// keyframes at the playhead follow it.
    pub fn move_shape(&mut self, id: ShapeId, delta: CanvasDelta) -> bool {
        let Some(shape) = self.shape_mut(id) else {
            return false;
        };
        shape.translate(delta);
        self.after_move(id);
        true
    }

    /// Set the absolute position of a shape. See [`Canvas::move_shape`].
    pub fn set_position(&mut self, id: ShapeId, position: CanvasPoint) -> bool {
        let Some(shape) = self.shape_mut(id) else {
            return false;
        };
        shape.position = position;
        self.after_move(id);
        true
    }

    fn after_move(&mut self, id: ShapeId) {
        if self.is_selected(id) {
            self.position_changed(id);
        }
        self.emit(CanvasEvent::RedrawRequested { shape: id });
    }

    /// Push the shape's position into its keyframes and notify.
    fn position_changed(&mut self, id: ShapeId) {
        let playhead = self.playhead();
        let Some(shape) = self.shape_mut(id) else {
            return;
        };
        let (x, y) = (shape.position.x(), shape.position.y());
        shape.adjust_keyframes(AnimatedProperty::Left.name(), x, playhead);
        shape.adjust_keyframes(AnimatedProperty::Top.name(), y, playhead);
        self.emit(CanvasEvent::PositionChanged { shape: id, x, y });
    }

    // === Identity and style ===

    pub fn set_identifier(&mut self, id: ShapeId, identifier: impl Into<String>) -> bool {
        let Some(shape) = self.shape_mut(id) else {
            return false;
        };
        let identifier = identifier.into();
        shape.set_identifier(identifier.clone());
        self.emit(CanvasEvent::IdentifierChanged {
            shape: id,
            identifier,
        });
        true
    }

    pub fn set_stroke(&mut self, id: ShapeId, stroke: Option<Stroke>) -> bool {
        let Some(shape) = self.shape_mut(id) else {
            return false;
        };
        shape.set_stroke(stroke);
        self.emit(CanvasEvent::RedrawRequested { shape: id });
        true
    }

    pub fn set_fill(&mut self, id: ShapeId, fill: Option<Fill>) -> bool {
        let Some(shape) = self.shape_mut(id) else {
            return false;
        };
        shape.set_fill(fill);
        self.emit(CanvasEvent::RedrawRequested { shape: id });
        true
    }

    // === Pointer input ===

    /// Convert a canvas-space pointer position into a handle's local space.
    pub fn handle_local_point(&self, handle: HandleId, point: CanvasPoint) -> Option<LocalPoint> {
        let shape = self.shape(handle.shape)?;
        let local = shape.handle(handle.role)?.position();
        let origin = local.to_canvas(shape.position);
        Some(LocalPoint::from_canvas(point, origin))
    }

    /// Route a pointer event. Returns true if the canvas consumed it.
    ///
    /// Only resize handles are intercepted. Everything else, and events the
    /// handle cannot use, is left for default processing.
    pub fn intercept(
        &mut self,
        source: EventSource,
        event: PointerEvent,
        modifiers: Modifiers,
    ) -> bool {
        let EventSource::ResizeHandle(handle_id) = source else {
            return false;
        };
        let min_size = self.config.min_size;
        let Some(shape) = self.shape_mut(handle_id.shape) else {
            log::debug!("pointer event for stale handle {handle_id:?}");
            return false;
        };

        match event {
            PointerEvent::Press { pos } => match shape.handle_mut(handle_id.role) {
                Some(handle) => {
                    handle.press(pos);
                    true
                }
                None => false,
            },
            PointerEvent::Release { .. } => match shape.handle_mut(handle_id.role) {
                Some(handle) => {
                    handle.release();
                    log::trace!("release {} on {}", handle_id.role, handle_id.shape);
                    // The interaction is over; the next press starts fresh.
                    handle.reset();
                    true
                }
                None => false,
            },
            PointerEvent::Move { pos } => {
                let Some(outcome) =
                    shape.drag_handle(handle_id.role, pos, modifiers.lock_aspect, min_size)
                else {
                    return false;
                };
                log::trace!(
                    "drag {} on {}: size {:?}",
                    handle_id.role,
                    handle_id.shape,
                    outcome.size
                );
                let id = handle_id.shape;
                self.emit(CanvasEvent::SizeChanged {
                    shape: id,
                    width: outcome.size.width(),
                    height: outcome.size.height(),
                });
                if outcome.position_shift.is_some() {
                    self.position_changed(id);
                }
                self.emit(CanvasEvent::RedrawRequested { shape: id });
                true
            }
            PointerEvent::Other => false,
        }
    }

    // === Z-order ===

    /// Swap a shape with the nearest shape in front of it.
    pub fn raise(&mut self, id: ShapeId) -> bool {
        let moved = order::raise(&mut self.items, id);
        self.after_reorder(id, moved, "raise")
    }

    /// Swap a shape with the nearest shape behind it.
    pub fn lower(&mut self, id: ShapeId) -> bool {
        let moved = order::lower(&mut self.items, id);
        self.after_reorder(id, moved, "lower")
    }

    /// Put a shape in front of every other shape.
    pub fn bring_to_front(&mut self, id: ShapeId) -> bool {
        let moved = order::bring_to_front(&mut self.items, id);
        self.after_reorder(id, moved, "bring to front")
    }

    /// Put a shape behind every other shape.
    pub fn send_to_back(&mut self, id: ShapeId) -> bool {
        let moved = order::send_to_back(&mut self.items, id);
        self.after_reorder(id, moved, "send to back")
    }

    fn after_reorder(&mut self, id: ShapeId, moved: bool, op: &str) -> bool {
        if moved {
            log::debug!("{op} {id}");
            self.emit(CanvasEvent::OrderChanged);
            self.emit(CanvasEvent::RedrawRequested { shape: id });
        }
        moved
    }

    // === Timeline ===

    pub fn timeline(&self) -> Option<Timeline> {
        self.timeline
    }

    pub fn attach_timeline(&mut self, timeline: Timeline) {
        self.timeline = Some(timeline);
    }

    pub fn detach_timeline(&mut self) {
        self.timeline = None;
    }

    /// Move the playhead. Ignored when no timeline is attached.
    pub fn set_playhead(&mut self, time: Time) -> bool {
        match &mut self.timeline {
            Some(timeline) => {
                timeline.playhead = time;
                true
            }
            None => false,
        }
    }

    pub fn playhead(&self) -> Option<Time> {
        self.timeline.map(|t| t.playhead)
    }

    /// Overwrite the keyframe of `property` governing the playhead.
    pub fn adjust_keyframes(&mut self, id: ShapeId, property: &str, value: f32) -> bool {
        let playhead = self.playhead();
        match self.shape_mut(id) {
            Some(shape) => shape.adjust_keyframes(property, value, playhead),
            None => false,
        }
    }

    pub fn add_keyframe(&mut self, id: ShapeId, keyframe: Keyframe) -> bool {
        let Some(shape) = self.shape_mut(id) else {
            return false;
        };
        shape.add_keyframe(keyframe);
        true
    }

    // === Animation ===

    pub fn add_animation(&mut self, id: ShapeId, animation: AnimationDescriptor) -> bool {
        let Some(shape) = self.shape_mut(id) else {
            return false;
        };
        shape.add_animation(animation);
        true
    }

    /// Ask the host to create an animation for `property` starting from the
    /// shape's current value.
    pub fn request_animation(&mut self, id: ShapeId, property: AnimatedProperty) -> bool {
        let Some(shape) = self.shape(id) else {
            return false;
        };
        let current_value = match property {
            AnimatedProperty::Opacity => shape.opacity,
            AnimatedProperty::Left => shape.position.x(),
            AnimatedProperty::Top => shape.position.y(),
        };
        let (min, max) = property.bounds(self.config.position_limit);
        self.emit(CanvasEvent::AddAnimationRequested {
            shape: id,
            property,
            current_value,
            min,
            max,
        });
        true
    }
}
