//! Typed coordinates for shapes and their handles.
//!
//! Distinct wrappers keep the three spaces the editor deals with apart:
//!
//! - **Canvas space**: where shape positions live.
//! - **Local space**: relative to a shape's (or handle's) own origin. A shape's
//!   rect and its handle positions are local to the shape; pointer events on a
//!   handle are local to the handle.
//! - **Sizes and deltas**: extents and movements, never absolute positions.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Sub};

/// Position in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasPoint(pub Vec2);

/// Position relative to the origin of a shape or handle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LocalPoint(pub Vec2);

/// Width and height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasSize(pub Vec2);

/// Movement in canvas space (not a position).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasDelta(pub Vec2);

/// Axis-aligned rectangle in shape-local space.
///
/// The resize path always resets the origin to (0, 0); the shape's placement
/// on the canvas is carried by its position instead.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LocalRect {
    pub origin: LocalPoint,
    pub size: CanvasSize,
}

// === CanvasPoint ===

impl CanvasPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    pub fn x(&self) -> f32 {
        self.0.x
    }

    pub fn y(&self) -> f32 {
        self.0.y
    }
}

impl From<Vec2> for CanvasPoint {
    fn from(v: Vec2) -> Self {
        Self(v)
    }
}

impl From<CanvasPoint> for Vec2 {
    fn from(p: CanvasPoint) -> Self {
        p.0
    }
}

impl Add<CanvasDelta> for CanvasPoint {
    type Output = CanvasPoint;

    fn add(self, delta: CanvasDelta) -> Self::Output {
        CanvasPoint(self.0 + delta.0)
    }
}

impl AddAssign<CanvasDelta> for CanvasPoint {
    fn add_assign(&mut self, delta: CanvasDelta) {
        self.0 += delta.0;
    }
}

impl Sub for CanvasPoint {
    type Output = CanvasDelta;

    /// Subtracting two points gives a delta.
    fn sub(self, other: CanvasPoint) -> Self::Output {
        CanvasDelta(self.0 - other.0)
    }
}

// === LocalPoint ===

impl LocalPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    pub fn x(&self) -> f32 {
        self.0.x
    }

    pub fn y(&self) -> f32 {
        self.0.y
    }

    /// Convert to a canvas point given the world position of the local origin.
    pub fn to_canvas(&self, origin: CanvasPoint) -> CanvasPoint {
        CanvasPoint(self.0 + origin.0)
    }

    /// Express a canvas point relative to `origin`.
    pub fn from_canvas(point: CanvasPoint, origin: CanvasPoint) -> Self {
        Self(point.0 - origin.0)
    }
}

impl From<Vec2> for LocalPoint {
    fn from(v: Vec2) -> Self {
        Self(v)
    }
}

impl From<LocalPoint> for Vec2 {
    fn from(p: LocalPoint) -> Self {
        p.0
    }
}

// === CanvasSize ===

impl CanvasSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self(Vec2::new(width, height))
    }

    pub fn width(&self) -> f32 {
        self.0.x
    }

    pub fn height(&self) -> f32 {
        self.0.y
    }

    /// Width divided by height. Not finite for a zero height.
    pub fn aspect_ratio(&self) -> f32 {
        self.0.x / self.0.y
    }
}

impl From<Vec2> for CanvasSize {
    fn from(v: Vec2) -> Self {
        Self(v)
    }
}

impl From<CanvasSize> for Vec2 {
    fn from(s: CanvasSize) -> Self {
        s.0
    }
}

// === CanvasDelta ===

impl CanvasDelta {
    pub const ZERO: Self = Self(Vec2::ZERO);

    pub fn new(dx: f32, dy: f32) -> Self {
        Self(Vec2::new(dx, dy))
    }

    pub fn dx(&self) -> f32 {
        self.0.x
    }

    pub fn dy(&self) -> f32 {
        self.0.y
    }
}

impl From<Vec2> for CanvasDelta {
    fn from(v: Vec2) -> Self {
        Self(v)
    }
}

impl From<CanvasDelta> for Vec2 {
    fn from(d: CanvasDelta) -> Self {
        d.0
    }
}

impl Add for CanvasDelta {
    type Output = CanvasDelta;

    fn add(self, other: CanvasDelta) -> Self::Output {
        CanvasDelta(self.0 + other.0)
    }
}

// === LocalRect ===

impl LocalRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: LocalPoint::new(x, y),
            size: CanvasSize::new(width, height),
        }
    }

    pub fn x(&self) -> f32 {
        self.origin.x()
    }

    pub fn y(&self) -> f32 {
        self.origin.y()
    }

    pub fn width(&self) -> f32 {
        self.size.width()
    }

    pub fn height(&self) -> f32 {
        self.size.height()
    }

    pub fn set_width(&mut self, width: f32) {
        self.size.0.x = width;
    }

    pub fn set_height(&mut self, height: f32) {
        self.size.0.y = height;
    }

    /// Check if a local point is inside this rectangle (edges inclusive).
    pub fn contains(&self, point: LocalPoint) -> bool {
        point.x() >= self.x()
            && point.x() <= self.x() + self.width()
            && point.y() >= self.y()
            && point.y() <= self.y() + self.height()
    }
}
