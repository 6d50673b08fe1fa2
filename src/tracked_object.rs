use crate::history::History;
use crate::parameters::TrackerParameters;
use crate::rect::Rect;
use serde_derive::{Deserialize, Serialize};

/// Visibility state of a tracked object, ordered by lifecycle.
#[derive(
    Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub enum TrackedState {
    #[default]
    New,
    Pending,
    NewDisplayed,
    Displayed,
    NewHided,
    Hided,
    Deleted,
}

impl TrackedState {
    /// Only `Displayed` objects are reported to callers
    #[inline]
    pub fn is_visible(self) -> bool {
        self > TrackedState::NewDisplayed && self < TrackedState::NewHided
    }

    #[inline]
    fn has_been_displayed(self) -> bool {
        matches!(
            self,
            TrackedState::NewDisplayed
                | TrackedState::Displayed
                | TrackedState::NewHided
                | TrackedState::Hided
        )
    }
}

#[derive(Debug, Clone)]
pub struct TrackedObject {
    id: u32,
    state: TrackedState,
    num_detected_frames: u32,
    num_frames_not_detected: u32,
    last_positions: History<Rect>,
}

impl TrackedObject {
    pub(crate) fn new(id: u32, rect: Rect, history_depth: usize) -> Self {
        Self {
            id,
            state: TrackedState::New,
            num_detected_frames: 1,
            num_frames_not_detected: 0,
            last_positions: History::new(rect, history_depth),
        }
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn state(&self) -> TrackedState {
        self.state
    }

    /// Update calls lived through, matched or not
    #[inline]
    pub fn num_detected_frames(&self) -> u32 {
        self.num_detected_frames
    }

    /// Consecutive update calls without a match
    #[inline]
    pub fn num_frames_not_detected(&self) -> u32 {
        self.num_frames_not_detected
    }

    #[inline]
    pub fn position(&self) -> Rect {
        *self.last_positions.latest()
    }

    #[inline]
    pub fn num_positions(&self) -> usize {
        self.last_positions.len()
    }

    /// Oldest first
    #[inline]
    pub fn last_positions(&self) -> impl Iterator<Item = &'_ Rect> {
        self.last_positions.chronological()
    }

    #[inline]
    pub(crate) fn history(&self) -> &History<Rect> {
        &self.last_positions
    }

    #[inline]
    pub(crate) fn set_history_depth(&mut self, history_depth: usize) {
        self.last_positions.set_capacity(history_depth);
    }

    #[inline]
    pub(crate) fn tick(&mut self) {
        self.num_detected_frames += 1;
    }

    #[inline]
    pub(crate) fn miss(&mut self) {
        self.num_frames_not_detected += 1;
    }

    pub(crate) fn hit(&mut self, rect: Rect, history_depth: usize) {
        self.last_positions.push(rect, history_depth);
        self.num_frames_not_detected = 0;

        if self.state != TrackedState::Deleted {
            self.state = TrackedState::Displayed;
        }
    }

    #[inline]
    pub(crate) fn set_state(&mut self, state: TrackedState) {
        self.state = state;
    }

    /// State this object moves to at the end of an update, from its counters alone.
    pub fn next_state(&self, params: &TrackerParameters) -> TrackedState {
        next_state(
            self.state,
            self.num_detected_frames,
            self.num_frames_not_detected,
            params,
        )
    }
}

/// Lifecycle transition table applied once per update call.
pub fn next_state(
    state: TrackedState,
    num_detected_frames: u32,
    num_frames_not_detected: u32,
    params: &TrackerParameters,
) -> TrackedState {
    if state == TrackedState::Deleted {
        return state;
    }

    let never_shown_expired = num_detected_frames <= params.num_steps_to_wait_before_first_show
        && num_frames_not_detected
            > params.num_steps_to_track_without_detecting_if_object_has_not_been_shown;

    if num_frames_not_detected > params.max_track_lifetime || never_shown_expired {
        return TrackedState::Deleted;
    }

    if !state.has_been_displayed() {
        return state;
    }

    let wait = params.num_steps_to_wait_before_first_show;
    let show = params.num_steps_to_show_without_detecting;

    if num_detected_frames < wait {
        TrackedState::Pending
    } else if num_detected_frames == wait {
        TrackedState::NewDisplayed
    } else if num_frames_not_detected == show {
        TrackedState::NewHided
    } else if num_frames_not_detected > show {
        TrackedState::Hided
    } else {
        state
    }
}
