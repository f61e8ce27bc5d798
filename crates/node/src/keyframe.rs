//! Keyframes and the timeline adapter.
//!
//! Live edits made while the playhead sits between keyframes correct the
//! keyframe that governs that moment: the last one at or before the playhead.
//! Later keyframes are never touched.

use serde::{Deserialize, Serialize};

/// Time on the animation timeline, in timeline units.
pub type Time = u32;

/// A property value at a point in time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub property: String,
    pub time: Time,
    pub value: f32,
}

impl Keyframe {
    pub fn new(property: impl Into<String>, time: Time, value: f32) -> Self {
        Self {
            property: property.into(),
            time,
            value,
        }
    }
}

/// Overwrite the value of the keyframe governing `property` at `playhead`.
///
/// Sorts `keyframes` by time first. The sort is stable, so among keyframes with
/// equal time the one that came last before sorting wins. Returns whether a
/// keyframe was updated.
pub fn adjust_keyframes(
    keyframes: &mut [Keyframe],
    property: &str,
    value: f32,
    playhead: Time,
) -> bool {
    keyframes.sort_by_key(|k| k.time);

    let governing = keyframes
        .iter_mut()
        .filter(|k| k.property == property && k.time <= playhead)
        .last();

    match governing {
        Some(keyframe) => {
            log::trace!(
                "keyframe {}@{} {} -> {}",
                property,
                keyframe.time,
                keyframe.value,
                value
            );
            keyframe.value = value;
            true
        }
        None => false,
    }
}
