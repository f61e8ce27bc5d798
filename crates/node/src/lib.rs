//! Shape model for Tween.
//!
//! Shapes own their geometry, style, animation descriptors and keyframes.
//! While selected they also own eight resize handles. Everything here is pure
//! data plus the drag interpretation; the canvas crate drives it with events.

pub mod coords;
mod animation;
mod handle;
mod keyframe;
pub mod resize;
mod shape;
mod shape_id;

pub use animation::{AnimatedProperty, AnimationDescriptor};
pub use coords::{CanvasDelta, CanvasPoint, CanvasSize, LocalPoint, LocalRect};
pub use handle::{create_handles, Handle, HandleId, MouseState, ResizeHandle, HANDLE_SIZE};
pub use keyframe::{adjust_keyframes, Keyframe, Time};
pub use resize::{interpret_drag, ResizeOutcome, MIN_SIZE};
pub use shape::{Fill, Shape, Stroke};
pub use shape_id::ShapeId;
