//! Which shapes a command applies to.
//!
//! Commands that can apply to several shapes name them through a `Target`:
//! the current selection, specific IDs, or a query.

use node::ShapeId;
use serde::{Deserialize, Serialize};

/// Specifies which shapes a command targets.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// The current selection (most common for user actions).
    #[default]
    Selection,

    /// Specific shape by ID.
    Shape(ShapeId),

    /// Multiple specific shapes by ID.
    Shapes(Vec<ShapeId>),

    /// All shapes on the canvas.
    All,

    /// Shapes matching a query.
    Query(ShapeQuery),
}

impl From<ShapeId> for Target {
    fn from(id: ShapeId) -> Self {
        Self::Shape(id)
    }
}

impl From<Vec<ShapeId>> for Target {
    fn from(ids: Vec<ShapeId>) -> Self {
        Self::Shapes(ids)
    }
}

/// Query to find shapes by properties.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeQuery {
    /// Shapes whose identifier matches exactly.
    ByIdentifier(String),

    /// Shapes intersecting a canvas-space box.
    InBounds {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}
