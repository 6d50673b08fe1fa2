use crate::math::{is_collide_by_rectangle, overlap_area};
use crate::rect::Rect;

/// What a detection turned out to be during one update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correspondence {
    /// Nothing claimed it, it starts a new object
    New,
    /// Overlapped a tracked object or a winning detection without being picked
    Intersected,
    /// Index of the tracked object it updates
    Matched(usize),
}

#[derive(Debug)]
pub struct DetectionsMapping<'a> {
    pub detections: &'a [Rect],
    pub correspondence: Vec<Correspondence>,
    /// Tracked objects left without a detection
    pub missed: Vec<usize>,
}

impl<'a> DetectionsMapping<'a> {
    /// `(object index, detection)` pairs
    pub fn matched(&self) -> impl Iterator<Item = (usize, &'a Rect)> + '_ {
        self.correspondence
            .iter()
            .zip(self.detections)
            .filter_map(|(c, r)| match c {
                Correspondence::Matched(i) => Some((*i, r)),
                _ => None,
            })
    }

    /// Detections that start new objects, in input order
    pub fn unmatched(&self) -> impl Iterator<Item = &'a Rect> + '_ {
        self.correspondence
            .iter()
            .zip(self.detections)
            .filter(|(c, _)| **c == Correspondence::New)
            .map(|(_, r)| r)
    }

    pub fn num_intersected(&self) -> usize {
        self.correspondence
            .iter()
            .filter(|c| **c == Correspondence::Intersected)
            .count()
    }
}

/// Greedy correspondence between predicted object positions and detections.
///
/// Objects are visited in order. Each one takes the unclaimed colliding
/// detection with the largest raw intersection; every other candidate it
/// collided with, and every unclaimed detection colliding with the winner, is
/// marked `Intersected` so that later objects and new tracks ignore it.
pub fn map_detections<'a>(
    predicted: &[Rect],
    detections: &'a [Rect],
    coeff_rectangle_overlap: f32,
) -> DetectionsMapping<'a> {
    let mut correspondence = vec![Correspondence::New; detections.len()];
    let mut missed = Vec::new();

    for (i, prev) in predicted.iter().enumerate() {
        let mut best: Option<(usize, i64)> = None;

        for (j, det) in detections.iter().enumerate() {
            if correspondence[j] != Correspondence::New {
                continue;
            }

            if let Some(area) = overlap_area(prev, det, coeff_rectangle_overlap) {
                correspondence[j] = Correspondence::Intersected;

                if best.map_or(true, |(_, best_area)| area > best_area) {
                    best = Some((j, area));
                }
            }
        }

        let (best_index, _) = match best {
            Some(best) => best,
            None => {
                missed.push(i);
                continue;
            }
        };

        correspondence[best_index] = Correspondence::Matched(i);
        let best_rect = &detections[best_index];

        for (j, det) in detections.iter().enumerate() {
            if correspondence[j] == Correspondence::New
                && is_collide_by_rectangle(det, best_rect, coeff_rectangle_overlap)
                && !det.intersect(best_rect).is_empty()
            {
                correspondence[j] = Correspondence::Intersected;
            }
        }
    }

    DetectionsMapping {
        detections,
        correspondence,
        missed,
    }
}
