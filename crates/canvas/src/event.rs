//! Input delivered to the canvas and notifications it emits.

use crate::DecorationId;
use node::{AnimatedProperty, HandleId, LocalPoint, ShapeId};
use serde::{Deserialize, Serialize};

/// Which item a pointer event was delivered to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventSource {
    ResizeHandle(HandleId),
    Shape(ShapeId),
    Decoration(DecorationId),
}

/// Pointer input, in the local space of the item it was delivered to.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerEvent {
    Press { pos: LocalPoint },
    Move { pos: LocalPoint },
    Release { pos: LocalPoint },
    /// Hover, wheel, double click and anything else the canvas ignores.
    Other,
}

/// Modifier state sampled with each pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Keep the width/height ratio while resizing.
    #[serde(default)]
    pub lock_aspect: bool,
}

impl Modifiers {
    pub fn lock_aspect() -> Self {
        Self { lock_aspect: true }
    }
}

/// Events emitted by the canvas.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CanvasEvent {
    ShapeAdded {
        shape: ShapeId,
    },
    ShapeRemoved {
        shape: ShapeId,
    },
    SelectionChanged,
    OrderChanged,
    SizeChanged {
        shape: ShapeId,
        width: f32,
        height: f32,
    },
    PositionChanged {
        shape: ShapeId,
        x: f32,
        y: f32,
    },
    IdentifierChanged {
        shape: ShapeId,
        identifier: String,
    },
    /// The user asked to animate a property; the host decides what to create.
    AddAnimationRequested {
        shape: ShapeId,
        property: AnimatedProperty,
        current_value: f32,
        min: f32,
        max: f32,
    },
    RedrawRequested {
        shape: ShapeId,
    },
}
