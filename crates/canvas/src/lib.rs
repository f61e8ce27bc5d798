//! Headless editor canvas for Tween.
//!
//! Owns the shapes, their stacking order, the selection and the timeline
//! context. A UI toolkit feeds pointer events in through
//! [`Canvas::intercept`] and reads notifications back with
//! [`Canvas::drain_events`].

mod canvas;
mod config;
mod event;
pub mod order;
mod timeline;

pub use canvas::Canvas;
pub use config::CanvasConfig;
pub use event::{CanvasEvent, EventSource, Modifiers, PointerEvent};
pub use order::{CanvasItem, DecorationId};
pub use timeline::Timeline;
// Re-export the shape model for convenience
pub use node::{
    AnimatedProperty, AnimationDescriptor, CanvasDelta, CanvasPoint, CanvasSize, Fill, HandleId,
    Keyframe, LocalPoint, LocalRect, ResizeHandle, Shape, ShapeId, Stroke, Time,
};
