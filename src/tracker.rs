use crate::error::Result;
use crate::matching::map_detections;
use crate::parameters::TrackerParameters;
use crate::prediction::correct_by_speed;
use crate::rect::Rect;
use crate::smoothing::{smooth_rect, SmoothingWeights};
use crate::tracked_object::{TrackedObject, TrackedState};
use crate::tracked_rect::TrackedRect;
use tracing::{debug, trace};

/// Frame-to-frame tracker of detected rectangles.
///
/// Every update matches the detections of one frame against the predicted
/// positions of the live objects, spawns objects for unclaimed detections and
/// advances each object's visibility state. Only objects in
/// [`TrackedState::Displayed`] are reported by [`objects`](Self::objects) and
/// [`tracked_rects`](Self::tracked_rects).
///
/// The tracker does no locking. Mutating calls take `&mut self`; callers that
/// share it between threads put it behind a `Mutex` and hold the lock for
/// every call, getters included.
#[derive(Debug, Clone)]
pub struct RectangleTracker {
    tracked_objects: Vec<TrackedObject>,
    params: TrackerParameters,
    weights: SmoothingWeights,
    next_id: u32,
}

impl Default for RectangleTracker {
    fn default() -> Self {
        Self {
            tracked_objects: Vec::with_capacity(16),
            params: TrackerParameters::default(),
            weights: SmoothingWeights::default(),
            next_id: 0,
        }
    }
}

impl RectangleTracker {
    pub fn new(params: TrackerParameters) -> Result<Self> {
        params.validate()?;

        Ok(Self {
            params,
            ..Default::default()
        })
    }

    pub fn with_weights(params: TrackerParameters, weights: SmoothingWeights) -> Result<Self> {
        weights.validate()?;

        let mut tracker = Self::new(params)?;
        tracker.weights = weights;

        Ok(tracker)
    }

    #[inline]
    pub fn parameters(&self) -> &TrackerParameters {
        &self.params
    }

    /// A smaller history depth trims every live object right away.
    pub fn set_parameters(&mut self, params: TrackerParameters) -> Result<()> {
        params.validate()?;

        for obj in &mut self.tracked_objects {
            obj.set_history_depth(params.num_last_positions_to_track);
        }
        self.params = params;

        Ok(())
    }

    #[inline]
    pub fn weights(&self) -> &SmoothingWeights {
        &self.weights
    }

    pub fn set_weights(&mut self, weights: SmoothingWeights) -> Result<()> {
        weights.validate()?;
        self.weights = weights;

        Ok(())
    }

    #[inline]
    pub fn tracked_objects(&self) -> &[TrackedObject] {
        &self.tracked_objects
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tracked_objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tracked_objects.is_empty()
    }

    /// Feeds the detections of one frame, possibly none.
    pub fn update_tracked_objects(&mut self, detected: &[Rect]) {
        let predicted = self.create_correction_by_speed_of_rects();

        for obj in &mut self.tracked_objects {
            obj.tick();
        }

        let mapping = map_detections(&predicted, detected, self.params.coeff_rectangle_overlap);

        trace!(
            tracked = self.tracked_objects.len(),
            detected = detected.len(),
            missed = mapping.missed.len(),
            intersected = mapping.num_intersected(),
            "detections mapped"
        );

        for &i in &mapping.missed {
            self.tracked_objects[i].miss();
        }

        let depth = self.params.num_last_positions_to_track;

        for (i, rect) in mapping.matched() {
            self.tracked_objects[i].hit(*rect, depth);
        }

        for rect in mapping.unmatched() {
            let id = self.next_id;
            self.next_id += 1;

            debug!(id, ?rect, "new tracked object");
            self.tracked_objects.push(TrackedObject::new(id, *rect, depth));
        }

        self.sweep();
    }

    /// Drops objects deleted by the previous update, then advances every state.
    fn sweep(&mut self) {
        self.tracked_objects.retain(|obj| {
            let keep = obj.state() != TrackedState::Deleted;
            if !keep {
                debug!(id = obj.id(), "tracked object removed");
            }
            keep
        });

        for obj in &mut self.tracked_objects {
            let state = obj.next_state(&self.params);

            if state == TrackedState::Deleted {
                debug!(
                    id = obj.id(),
                    detected = obj.num_detected_frames(),
                    not_detected = obj.num_frames_not_detected(),
                    "tracked object deleted"
                );
            }

            obj.set_state(state);
        }
    }

    /// Visible objects, smoothed or at their latest position
    pub fn objects(&self, smoothing: bool) -> Vec<Rect> {
        let mut result = Vec::with_capacity(self.tracked_objects.len());
        self.objects_into(&mut result, smoothing);

        result
    }

    /// Same as [`objects`](Self::objects), reusing `result`
    pub fn objects_into(&self, result: &mut Vec<Rect>, smoothing: bool) {
        result.clear();
        result.extend(
            self.tracked_objects
                .iter()
                .filter(|obj| obj.state().is_visible())
                .map(|obj| self.output_rect(obj, smoothing)),
        );
    }

    /// Visible objects along with their tracking metadata
    pub fn tracked_rects(&self, smoothing: bool) -> Vec<TrackedRect> {
        let mut result = Vec::with_capacity(self.tracked_objects.len());
        self.tracked_rects_into(&mut result, smoothing);

        result
    }

    pub fn tracked_rects_into(&self, result: &mut Vec<TrackedRect>, smoothing: bool) {
        result.clear();
        result.extend(
            self.tracked_objects
                .iter()
                .filter(|obj| obj.state().is_visible())
                .map(|obj| {
                    if smoothing {
                        TrackedRect::new(obj, smooth_rect(obj.history(), &self.weights))
                    } else {
                        TrackedRect::from(obj)
                    }
                }),
        );
    }

    #[inline]
    fn output_rect(&self, obj: &TrackedObject, smoothing: bool) -> Rect {
        if smoothing {
            smooth_rect(obj.history(), &self.weights)
        } else {
            obj.position()
        }
    }

    /// Where every tracked object is expected in the next frame, in object order.
    ///
    /// Useful to pick search regions on frames where detection is skipped.
    pub fn create_correction_by_speed_of_rects(&self) -> Vec<Rect> {
        let coeff = self.params.coeff_object_speed_using_in_prediction;

        self.tracked_objects
            .iter()
            .map(|obj| correct_by_speed(obj.id(), obj.history(), coeff))
            .collect()
    }

    /// Latest position of every tracked object, in object order
    pub fn create_raw_rects(&self) -> Vec<Rect> {
        self.tracked_objects.iter().map(|obj| obj.position()).collect()
    }

    /// Smoothed position of the `i`-th tracked object
    pub fn smoothing_rect(&self, i: usize) -> Option<Rect> {
        self.tracked_objects
            .get(i)
            .map(|obj| smooth_rect(obj.history(), &self.weights))
    }

    /// Forgets every object and restarts ids from zero.
    pub fn reset(&mut self) {
        self.tracked_objects.clear();
        self.next_id = 0;
    }
}

impl crate::Tracking for RectangleTracker {
    #[inline]
    fn update(&mut self, detected: &[Rect]) {
        self.update_tracked_objects(detected)
    }

    #[inline]
    fn predict(&self) -> Vec<Rect> {
        self.create_correction_by_speed_of_rects()
    }

    #[inline]
    fn tracks(&self, smoothing: bool) -> Vec<TrackedRect> {
        self.tracked_rects(smoothing)
    }

    #[inline]
    fn reset(&mut self) {
        RectangleTracker::reset(self)
    }
}
