//! Stacking order of canvas items.
//!
//! Items are kept front to back: index 0 is drawn on top. Only shapes take
//! part in z-order operations. Decorations (guides, overlays and other
//! non-document items) keep their slots, so moving a shape never carries it
//! past a decoration.

use node::ShapeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a non-document canvas item.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecorationId(uuid::Uuid);

impl DecorationId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for DecorationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DecorationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecorationId({})", &self.0.to_string()[..8])
    }
}

/// An entry in the stacking order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanvasItem {
    Shape(ShapeId),
    Decoration(DecorationId),
}

impl CanvasItem {
    pub fn is_shape(&self) -> bool {
        matches!(self, CanvasItem::Shape(_))
    }

    pub fn shape_id(&self) -> Option<ShapeId> {
        match self {
            CanvasItem::Shape(id) => Some(*id),
            CanvasItem::Decoration(_) => None,
        }
    }
}

fn index_of(items: &[CanvasItem], id: ShapeId) -> Option<usize> {
    items.iter().position(|item| *item == CanvasItem::Shape(id))
}

/// Move the nearest shape in front of `id` to just behind it.
pub fn raise(items: &mut Vec<CanvasItem>, id: ShapeId) -> bool {
    let Some(pos) = index_of(items, id) else {
        return false;
    };
    let Some(ahead) = items[..pos].iter().rposition(CanvasItem::is_shape) else {
        return false;
    };
    let item = items.remove(ahead);
    // `id` is now at pos - 1.
    items.insert(pos, item);
    true
}

/// Move the nearest shape behind `id` to just in front of it.
pub fn lower(items: &mut Vec<CanvasItem>, id: ShapeId) -> bool {
    let Some(pos) = index_of(items, id) else {
        return false;
    };
    let Some(offset) = items[pos + 1..].iter().position(CanvasItem::is_shape) else {
        return false;
    };
    let item = items.remove(pos + 1 + offset);
    items.insert(pos, item);
    true
}

/// Move every shape in front of `id` to just behind it, keeping their order.
pub fn bring_to_front(items: &mut Vec<CanvasItem>, id: ShapeId) -> bool {
    let Some(pos) = index_of(items, id) else {
        return false;
    };
    let ahead: Vec<CanvasItem> = items[..pos]
        .iter()
        .filter(|item| item.is_shape())
        .copied()
        .collect();
    if ahead.is_empty() {
        return false;
    }
    items.retain(|item| !ahead.contains(item));
    let pos = pos - ahead.len();
    items.splice(pos + 1..pos + 1, ahead);
    true
}

/// Move every shape behind `id` to just in front of it, keeping their order.
pub fn send_to_back(items: &mut Vec<CanvasItem>, id: ShapeId) -> bool {
    let Some(pos) = index_of(items, id) else {
        return false;
    };
    let behind: Vec<CanvasItem> = items[pos + 1..]
        .iter()
        .filter(|item| item.is_shape())
        .copied()
        .collect();
    if behind.is_empty() {
        return false;
    }
    items.retain(|item| !behind.contains(item));
    items.splice(pos..pos, behind);
    true
}
