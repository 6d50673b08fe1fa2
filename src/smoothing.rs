use crate::error::{Error, Result};
use crate::history::History;
use crate::math::round_to_i32;
use crate::rect::Rect;
use nalgebra as na;
use serde_derive::{Deserialize, Serialize};

/// Weights of the temporal smoother, newest position first.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SmoothingWeights {
    pub positions: Vec<f32>,
    pub sizes: Vec<f32>,
}

impl Default for SmoothingWeights {
    fn default() -> Self {
        Self {
            positions: vec![1.0],
            sizes: vec![0.5, 0.3, 0.2],
        }
    }
}

impl SmoothingWeights {
    pub fn new(positions: Vec<f32>, sizes: Vec<f32>) -> Result<Self> {
        let weights = Self { positions, sizes };
        weights.validate()?;

        Ok(weights)
    }

    pub fn validate(&self) -> Result<()> {
        check_weights("positions", &self.positions)?;
        check_weights("sizes", &self.sizes)
    }
}

fn check_weights(kind: &str, weights: &[f32]) -> Result<()> {
    if let Some(w) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
        return Err(Error::InvalidWeights(format!(
            "{} weight {} is not a finite non-negative number",
            kind, w
        )));
    }

    if !weights.is_empty() && weights.iter().sum::<f32>() <= 0.0 {
        return Err(Error::InvalidWeights(format!("{} weights sum to zero", kind)));
    }

    Ok(())
}

/// Weighted mean of `(value, weight)` pairs, `None` when nothing carries weight
fn weighted_mean<I>(items: I) -> Option<na::Vector2<f64>>
where
    I: IntoIterator<Item = (na::Vector2<f64>, f64)>,
{
    let mut acc = na::Vector2::zeros();
    let mut wsum = 0.0;

    for (v, w) in items {
        acc += v * w;
        wsum += w;
    }

    if wsum > 0.0 {
        Some(acc / wsum)
    } else {
        None
    }
}

/// Blends the most recent positions of a history into one rectangle.
///
/// Sizes are averaged with `weights.sizes` and centers with `weights.positions`,
/// over as many entries as both the history and the weight list have.
/// An empty weight list (or one whose used prefix weighs nothing) falls back to
/// the latest position.
pub fn smooth_rect(history: &History<Rect>, weights: &SmoothingWeights) -> Rect {
    let latest = history.latest();

    let size = weighted_mean(
        history
            .recent()
            .zip(weights.sizes.iter())
            .map(|(r, &w)| (na::Vector2::new(r.width as f64, r.height as f64), w as f64)),
    )
    .unwrap_or_else(|| na::Vector2::new(latest.width as f64, latest.height as f64));

    let center = weighted_mean(
        history
            .recent()
            .zip(weights.positions.iter())
            .map(|(r, &w)| (r.center().coords, w as f64)),
    )
    .unwrap_or_else(|| latest.center().coords);

    let tl = center - size * 0.5;

    Rect::new(
        round_to_i32(tl.x),
        round_to_i32(tl.y),
        round_to_i32(size.x),
        round_to_i32(size.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(rects: &[Rect]) -> History<Rect> {
        let mut h = History::new(rects[0], rects.len());
        for r in &rects[1..] {
            h.push(*r, rects.len());
        }
        h
    }

    #[test]
    fn single_position_is_returned_as_is() {
        let h = history(&[Rect::new(10, 10, 50, 50)]);

        assert_eq!(smooth_rect(&h, &SmoothingWeights::default()), Rect::new(10, 10, 50, 50));
    }

    #[test]
    fn sizes_are_blended_center_follows_latest() {
        let h = history(&[
            Rect::new(0, 0, 40, 40),
            Rect::new(0, 0, 50, 50),
            Rect::new(0, 0, 62, 62),
        ]);

        // size: 62*0.5 + 50*0.3 + 40*0.2 = 54, center of the latest = (31, 31)
        assert_eq!(smooth_rect(&h, &SmoothingWeights::default()), Rect::new(4, 4, 54, 54));
    }

    #[test]
    fn short_history_normalizes_by_used_weights() {
        let h = history(&[Rect::new(0, 0, 20, 20), Rect::new(0, 0, 60, 60)]);

        // (60*0.5 + 20*0.3) / 0.8
        let r = smooth_rect(&h, &SmoothingWeights::default());

        assert_eq!((r.width, r.height), (45, 45));
    }

    #[test]
    fn empty_weights_use_latest_only() {
        let h = history(&[Rect::new(0, 0, 20, 20), Rect::new(100, 100, 40, 40)]);
        let weights = SmoothingWeights::new(vec![], vec![]).unwrap();

        assert_eq!(smooth_rect(&h, &weights), Rect::new(100, 100, 40, 40));
    }

    #[test]
    fn centers_are_blended_with_position_weights() {
        let h = history(&[Rect::new(0, 0, 10, 10), Rect::new(20, 0, 10, 10)]);
        let weights = SmoothingWeights::new(vec![1.0, 1.0], vec![1.0]).unwrap();

        assert_eq!(smooth_rect(&h, &weights), Rect::new(10, 0, 10, 10));
    }

    #[test]
    fn rejects_negative_or_zero_sum_weights() {
        assert!(matches!(
            SmoothingWeights::new(vec![-1.0], vec![1.0]),
            Err(Error::InvalidWeights(_))
        ));
        assert!(SmoothingWeights::new(vec![1.0], vec![0.0, 0.0]).is_err());
        assert!(SmoothingWeights::new(vec![f32::NAN], vec![1.0]).is_err());
    }
}
