//! Tracking of detected rectangles across video frames.
//!
//! A detector (face, marker, ...) hands its raw rectangles for each frame to
//! [`RectangleTracker::update_tracked_objects`]. The tracker keeps identities
//! stable between frames, hides detector flicker and returns smoothed
//! rectangles for the objects it is confident about.
//!
//! ```
//! use rectrack::{Rect, RectangleTracker};
//!
//! let mut tracker = RectangleTracker::default();
//! for _ in 0..7 {
//!     tracker.update_tracked_objects(&[Rect::new(10, 10, 50, 50)]);
//! }
//!
//! assert_eq!(tracker.objects(true), vec![Rect::new(10, 10, 50, 50)]);
//! ```

pub mod error;
pub mod math;
pub mod matching;
pub mod parameters;
pub mod rect;
pub mod smoothing;
pub mod tracked_object;
pub mod tracked_rect;
pub mod tracker;

mod history;
mod prediction;

pub use error::{Error, Result};
pub use parameters::TrackerParameters;
pub use rect::Rect;
pub use smoothing::SmoothingWeights;
pub use tracked_object::{TrackedObject, TrackedState};
pub use tracked_rect::TrackedRect;
pub use tracker::RectangleTracker;

pub trait Tracking {
    /// Feeds the detections of one frame.
    fn update(&mut self, detected: &[Rect]);

    /// Expected positions of every live object in the next frame.
    fn predict(&self) -> Vec<Rect>;

    /// Visible tracks.
    fn tracks(&self, smoothing: bool) -> Vec<TrackedRect>;

    fn reset(&mut self);
}
