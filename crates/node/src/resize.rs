//! Handle-drag interpretation.
//!
//! Turns "handle X was pulled by this much" into a new size and the position
//! shift that keeps the opposite side of the shape anchored. Pure: the caller
//! supplies the current size, the pointer travel and the modifier state.

use crate::coords::{CanvasDelta, CanvasSize};
use crate::handle::ResizeHandle;
use glam::Vec2;

/// Smallest width or height the resize path will produce.
pub const MIN_SIZE: f32 = 40.0;

/// Result of one drag step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeOutcome {
    /// New width and height. The rect origin is reset to (0, 0).
    pub size: CanvasSize,
    /// Change in size relative to the size before the step.
    pub delta: CanvasDelta,
    /// Position compensation, or `None` when this handle never moves the shape.
    pub position_shift: Option<CanvasDelta>,
}

/// Per-axis growth direction of a handle.
///
/// Multiplying by `mouse_down - current` gives the growth along that axis.
/// Zero means the handle does not resize that axis.
pub fn axis_signs(role: ResizeHandle) -> Vec2 {
    match role {
        ResizeHandle::TopLeft => Vec2::new(1.0, 1.0),
        ResizeHandle::TopRight => Vec2::new(-1.0, 1.0),
        ResizeHandle::BottomRight => Vec2::new(-1.0, -1.0),
        ResizeHandle::BottomLeft => Vec2::new(1.0, -1.0),
        ResizeHandle::Top => Vec2::new(0.0, 1.0),
        ResizeHandle::Right => Vec2::new(-1.0, 0.0),
        ResizeHandle::Bottom => Vec2::new(0.0, -1.0),
        ResizeHandle::Left => Vec2::new(1.0, 0.0),
    }
}

/// Interpret a drag step on `role`.
///
/// `pulled` is the pointer travel expressed as `mouse_down - current`, both
/// measured in the handle's local space. With `lock_aspect` set the current
/// width/height ratio is kept.
pub fn interpret_drag(
    size: CanvasSize,
    role: ResizeHandle,
    pulled: CanvasDelta,
    lock_aspect: bool,
    min_size: f32,
) -> ResizeOutcome {
    let (w, h) = (size.width(), size.height());
    let signs = axis_signs(role);

    let new_w = (w + signs.x * pulled.dx()).max(min_size);
    let new_h = (h + signs.y * pulled.dy()).max(min_size);

    let mut dw = new_w - w;
    let mut dh = new_h - h;

    let ratio = size.aspect_ratio();
    let lock = lock_aspect && ratio.is_finite() && ratio > 0.0;
    if lock {
        (dw, dh) = lock_deltas(role, dw, dh, ratio);
        (dw, dh) = enforce_floor(w, h, dw, dh, min_size);
    }

    let size = CanvasSize::new(w + dw, h + dh);
    let delta = CanvasDelta::new(dw, dh);

    ResizeOutcome {
        size,
        delta,
        position_shift: position_shift(role, -dw, -dh, lock),
    }
}

/// Recompute the follower delta from the driving one.
fn lock_deltas(role: ResizeHandle, dw: f32, dh: f32, ratio: f32) -> (f32, f32) {
    let width_drives = if role.is_corner() {
        dw.abs() >= dh.abs()
    } else {
        axis_signs(role).x != 0.0
    };
    if width_drives {
        (dw, dw / ratio)
    } else {
        (dh * ratio, dh)
    }
}

/// Scale a ratio-locked result up until the smaller side reaches `min_size`.
fn enforce_floor(w: f32, h: f32, dw: f32, dh: f32, min_size: f32) -> (f32, f32) {
    let (new_w, new_h) = (w + dw, h + dh);
    if new_w >= min_size && new_h >= min_size {
        return (dw, dh);
    }
    let k = (min_size / new_w).max(min_size / new_h);
    (new_w * k - w, new_h * k - h)
}

/// Where the shape must move so the side opposite the handle stays put.
///
/// `ndw`/`ndh` are the negated size deltas.
fn position_shift(role: ResizeHandle, ndw: f32, ndh: f32, locked: bool) -> Option<CanvasDelta> {
    match role {
        ResizeHandle::TopLeft => Some(CanvasDelta::new(ndw, ndh)),
        ResizeHandle::TopRight => Some(CanvasDelta::new(0.0, ndh)),
        ResizeHandle::BottomRight => None,
        ResizeHandle::BottomLeft => Some(CanvasDelta::new(ndw, 0.0)),
        ResizeHandle::Top if locked => Some(CanvasDelta::new(ndw / 2.0, ndh)),
        ResizeHandle::Top => Some(CanvasDelta::new(0.0, ndh)),
        ResizeHandle::Right if locked => Some(CanvasDelta::new(0.0, ndh / 2.0)),
        ResizeHandle::Right => None,
        ResizeHandle::Bottom if locked => Some(CanvasDelta::new(ndw / 2.0, 0.0)),
        ResizeHandle::Bottom => None,
        ResizeHandle::Left if locked => Some(CanvasDelta::new(ndw, ndh / 2.0)),
        ResizeHandle::Left => Some(CanvasDelta::new(ndw, 0.0)),
    }
}
