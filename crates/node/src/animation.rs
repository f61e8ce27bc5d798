use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// A property animation attached to a shape.
///
/// The shape only stores and counts these; playback lives elsewhere.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationDescriptor {
    pub property: String,
    pub start_value: f32,
    pub end_value: f32,
    pub min: f32,
    pub max: f32,
}

impl AnimationDescriptor {
    pub fn new(property: impl Into<String>, start_value: f32, end_value: f32) -> Self {
        Self {
            property: property.into(),
            start_value,
            end_value,
            min: f32::MIN,
            max: f32::MAX,
        }
    }

    pub fn with_bounds(mut self, min: f32, max: f32) -> Self {
        self.min = min;
        self.max = max;
        self
    }
}

/// Properties the editor offers to animate from a shape's menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AnimatedProperty {
    Opacity,
    Left,
    Top,
}

impl AnimatedProperty {
    /// Keyframe/animation property name.
    pub fn name(self) -> &'static str {
        match self {
            AnimatedProperty::Opacity => "opacity",
            AnimatedProperty::Left => "left",
            AnimatedProperty::Top => "top",
        }
    }

    /// Range a value of this property may take.
    pub fn bounds(self, position_limit: f32) -> (f32, f32) {
        match self {
            AnimatedProperty::Opacity => (0.0, 1.0),
            AnimatedProperty::Left | AnimatedProperty::Top => (-position_limit, position_limit),
        }
    }
}
