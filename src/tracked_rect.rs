use crate::rect::Rect;
use crate::tracked_object::{TrackedObject, TrackedState};
use serde_derive::{Deserialize, Serialize};
use std::ops::Deref;

/// Rectangle reported for a tracked object, with the object's tracking metadata
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedRect {
    #[serde(flatten)]
    pub rect: Rect,
    pub id: u32,
    pub state: TrackedState,
    pub num_detected_frames: u32,
    pub num_frames_not_detected: u32,
}

impl TrackedRect {
    pub(crate) fn new(obj: &TrackedObject, rect: Rect) -> Self {
        Self {
            rect,
            id: obj.id(),
            state: obj.state(),
            num_detected_frames: obj.num_detected_frames(),
            num_frames_not_detected: obj.num_frames_not_detected(),
        }
    }
}

impl Deref for TrackedRect {
    type Target = Rect;

    #[inline]
    fn deref(&self) -> &Rect {
        &self.rect
    }
}

impl From<TrackedRect> for Rect {
    #[inline]
    fn from(t: TrackedRect) -> Rect {
        t.rect
    }
}

impl From<&TrackedObject> for TrackedRect {
    fn from(obj: &TrackedObject) -> TrackedRect {
        TrackedRect::new(obj, obj.position())
    }
}
