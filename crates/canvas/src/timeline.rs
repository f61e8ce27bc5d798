use node::Time;
use serde::{Deserialize, Serialize};

/// Timeline context a canvas can be attached to.
///
/// Only the playhead matters to editing: live changes are written into the
/// keyframe that governs the playhead position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub playhead: Time,
}

impl Timeline {
    pub fn new(playhead: Time) -> Self {
        Self { playhead }
    }
}
