//! Tween commands - all operations that modify canvas state.
//!
//! Commands are intent-based: they describe what the user wants, not how the
//! canvas achieves it. A handle drag, for example, is expressed in canvas
//! coordinates and turned into press/move/release events by the executor.

use crate::Target;
use glam::Vec2;
use node::{AnimatedProperty, ResizeHandle, ShapeId, Time};
use palette::{FromColor, Hsla, Srgba};
use serde::{Deserialize, Serialize};

/// A command that modifies canvas state.
///
/// Commands are serializable so they can be recorded and replayed as scripts.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    // === Shapes ===
    /// Create a new shape on top of the stack.
    CreateShape {
        position: Vec2,
        size: Vec2,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        identifier: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fill: Option<ColorValue>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke: Option<StrokeValue>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        opacity: Option<f32>,
    },

    /// Add a non-document item (guide, overlay) on top of the stack.
    AddDecoration,

    /// Delete target shapes.
    Delete {
        #[serde(default)]
        target: Target,
    },

    /// Rename a shape.
    SetIdentifier { shape: ShapeId, identifier: String },

    // === Selection ===
    /// Select shapes, optionally adding to existing selection.
    Select {
        target: Target,
        #[serde(default)]
        add_to_selection: bool,
    },

    /// Clear the current selection.
    ClearSelection,

    /// Select all shapes.
    SelectAll,

    // === Geometry ===
    /// Replace the local rect of shapes.
    SetRect {
        #[serde(default)]
        target: Target,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },

    /// Set the width of shapes.
    SetWidth {
        #[serde(default)]
        target: Target,
        width: f32,
    },

    /// Set the height of shapes.
    SetHeight {
        #[serde(default)]
        target: Target,
        height: f32,
    },

    /// Move shapes by a delta.
    Move {
        #[serde(default)]
        target: Target,
        delta: Vec2,
    },

    /// Set absolute position of shapes.
    SetPosition {
        #[serde(default)]
        target: Target,
        position: Vec2,
    },

    /// Drag one resize handle of a selected shape from `from` to `to`
    /// (canvas coordinates).
    DragHandle {
        shape: ShapeId,
        handle: ResizeHandle,
        from: Vec2,
        to: Vec2,
        #[serde(default)]
        lock_aspect: bool,
    },

    // === Style ===
    /// Set fill color.
    SetFill {
        #[serde(default)]
        target: Target,
        fill: Option<ColorValue>,
    },

    /// Set stroke style.
    SetStroke {
        #[serde(default)]
        target: Target,
        stroke: Option<StrokeValue>,
    },

    // === Z-order ===
    /// Swap with the nearest shape in front.
    Raise {
        #[serde(default)]
        target: Target,
    },

    /// Swap with the nearest shape behind.
    Lower {
        #[serde(default)]
        target: Target,
    },

    /// Move in front of all other shapes.
    BringToFront {
        #[serde(default)]
        target: Target,
    },

    /// Move behind all other shapes.
    SendToBack {
        #[serde(default)]
        target: Target,
    },

    // === Animation ===
    /// Add a keyframe to a shape.
    AddKeyframe {
        shape: ShapeId,
        property: String,
        time: Time,
        value: f32,
    },

    /// Attach an animation descriptor to a shape.
    AddAnimation {
        shape: ShapeId,
        property: String,
        start_value: f32,
        end_value: f32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f32>,
    },

    /// Ask the host to create an animation for a property.
    RequestAnimation {
        #[serde(default)]
        target: Target,
        property: AnimatedProperty,
    },

    // === Timeline ===
    /// Attach a timeline with the playhead at `playhead`.
    AttachTimeline {
        #[serde(default)]
        playhead: Time,
    },

    /// Detach the timeline; keyframes stop following live edits.
    DetachTimeline,

    /// Move the playhead.
    SetPlayhead { time: Time },

    // === Batch ===
    /// Execute multiple commands in sequence.
    Batch { commands: Vec<Command> },
}

/// Color value for fill/stroke.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    /// HSLA color, all components in 0..=1.
    Hsla { h: f32, s: f32, l: f32, a: f32 },
    /// Hex color string (e.g., "#FF0000").
    Hex(HexColor),
}

/// Hex color wrapper for serde.
#[derive(Clone, Copy, Debug)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Serialize for HexColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let hex = format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b);
        serializer.serialize_str(&hex)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let s = s.trim_start_matches('#');
        if s.len() != 6 || !s.is_ascii() {
            return Err(serde::de::Error::custom("hex color must be 6 hex digits"));
        }
        let r = u8::from_str_radix(&s[0..2], 16).map_err(serde::de::Error::custom)?;
        let g = u8::from_str_radix(&s[2..4], 16).map_err(serde::de::Error::custom)?;
        let b = u8::from_str_radix(&s[4..6], 16).map_err(serde::de::Error::custom)?;
        Ok(HexColor { r, g, b })
    }
}

impl ColorValue {
    pub fn to_srgba(self) -> Srgba {
        match self {
            ColorValue::Hsla { h, s, l, a } => Srgba::from_color(Hsla::new(h * 360.0, s, l, a)),
            ColorValue::Hex(hex) => Srgba::new(
                f32::from(hex.r) / 255.0,
                f32::from(hex.g) / 255.0,
                f32::from(hex.b) / 255.0,
                1.0,
            ),
        }
    }
}

/// Stroke style value.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StrokeValue {
    pub color: ColorValue,
    pub width: f32,
}

/// Result of executing a command.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommandResult {
    /// Command succeeded.
    Success {
        /// IDs of shapes created, if any.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        created: Vec<ShapeId>,
        /// IDs of shapes modified, if any.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        modified: Vec<ShapeId>,
        /// IDs of shapes deleted, if any.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        deleted: Vec<ShapeId>,
    },
    /// Command failed.
    Error { message: String },
}

impl CommandResult {
    pub fn success() -> Self {
        Self::Success {
            created: vec![],
            modified: vec![],
            deleted: vec![],
        }
    }

    pub fn created(ids: Vec<ShapeId>) -> Self {
        Self::Success {
            created: ids,
            modified: vec![],
            deleted: vec![],
        }
    }

    pub fn modified(ids: Vec<ShapeId>) -> Self {
        Self::Success {
            created: vec![],
            modified: ids,
            deleted: vec![],
        }
    }

    pub fn deleted(ids: Vec<ShapeId>) -> Self {
        Self::Success {
            created: vec![],
            modified: vec![],
            deleted: ids,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}
