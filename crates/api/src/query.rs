//! Tween queries - read-only access to canvas state.
//!
//! Queries allow inspecting the canvas without modifying it.
//! Scripts use them to check the outcome of the commands they replay.

use crate::Target;
use canvas::CanvasItem;
use glam::Vec2;
use node::{Keyframe, ShapeId, Time};
use palette::Srgba;
use serde::{Deserialize, Serialize};

/// A query for canvas state (read-only).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Query {
    /// Get the current selection.
    GetSelection,

    /// Get all shapes, front to back.
    GetAllShapes,

    /// Get shapes matching a target.
    GetShapes { target: Target },

    /// Get a specific shape by ID.
    GetShape { id: ShapeId },

    /// Get the stacking order, front to back, decorations included.
    GetOrder,

    /// Get the keyframes of a shape.
    GetKeyframes { id: ShapeId },

    /// Get the animation descriptors of a shape.
    GetAnimations { id: ShapeId },

    /// Get the attached timeline.
    GetTimeline,

    /// Get shape count.
    GetShapeCount,
}

/// Response to a query.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QueryResult {
    /// Selection result.
    Selection { ids: Vec<ShapeId> },

    /// Shapes result.
    Shapes { shapes: Vec<ShapeInfo> },

    /// Single shape result.
    Shape { shape: Option<ShapeInfo> },

    /// Stacking order result.
    Order { items: Vec<OrderEntry> },

    /// Keyframes result.
    Keyframes { keyframes: Vec<Keyframe> },

    /// Animations result.
    Animations { animations: Vec<AnimationInfo> },

    /// Timeline result. `playhead` is absent when no timeline is attached.
    Timeline {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        playhead: Option<Time>,
    },

    /// Count result.
    Count { count: usize },

    /// Error result.
    Error { message: String },
}

/// One entry of the stacking order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OrderEntry {
    Shape { id: ShapeId },
    Decoration,
}

impl From<&CanvasItem> for OrderEntry {
    fn from(item: &CanvasItem) -> Self {
        match item {
            CanvasItem::Shape(id) => OrderEntry::Shape { id: *id },
            CanvasItem::Decoration(_) => OrderEntry::Decoration,
        }
    }
}

/// Serializable shape information.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShapeInfo {
    pub id: ShapeId,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub identifier: String,
    pub position: Vec2,
    pub size: Vec2,
    pub opacity: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<FillInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<StrokeInfo>,
    pub selected: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub animation_count: usize,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub keyframe_count: usize,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

/// Serializable fill info.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FillInfo {
    pub color: ColorInfo,
}

/// Serializable stroke info.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StrokeInfo {
    pub color: ColorInfo,
    pub width: f32,
}

/// Serializable animation descriptor info.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnimationInfo {
    pub property: String,
    pub start_value: f32,
    pub end_value: f32,
    pub min: f32,
    pub max: f32,
}

/// Serializable color info (always straight sRGB with alpha).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorInfo {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl From<Srgba> for ColorInfo {
    fn from(c: Srgba) -> Self {
        Self {
            r: c.red,
            g: c.green,
            b: c.blue,
            a: c.alpha,
        }
    }
}
