use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a shape within a canvas.
///
/// This is not the user-visible identifier string (see [`crate::Shape::identifier`]),
/// which can be renamed freely. Handles and canvas items refer to shapes through
/// this id only.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(uuid::Uuid);

impl ShapeId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Create a ShapeId from a u128 (useful for tests).
    pub fn from_u128(value: u128) -> Self {
        Self(uuid::Uuid::from_u128(value))
    }

    pub fn to_uuid_string(&self) -> String {
        self.0.to_string()
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShapeId({})", &self.0.to_string()[..8])
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_full_uuid() {
        let id = ShapeId::from_u128(42);
        let json = serde_json::to_value(id).unwrap();
        assert_eq!(json, id.to_uuid_string());
        assert_eq!(serde_json::from_value::<ShapeId>(json).unwrap(), id);
    }

    #[test]
    fn test_display_is_short_form() {
        let id = ShapeId::from_u128(0xabcdef12_0000_0000_0000_000000000000);
        assert_eq!(id.to_string(), "abcdef12");
    }
}
