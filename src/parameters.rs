use crate::error::{Error, Result};
use serde_derive::{Deserialize, Serialize};

/// Tuning of the tracker, fixed for a run.
///
/// Deserializes from partial documents: missing fields take their defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TrackerParameters {
    /// History depth used for smoothing and speed correction
    pub num_last_positions_to_track: usize,

    /// Updates an object must live through before it may be shown
    pub num_steps_to_wait_before_first_show: u32,

    /// Misses tolerated by an object that has never been shown
    pub num_steps_to_track_without_detecting_if_object_has_not_been_shown: u32,

    /// Misses after which a shown object gets hidden
    pub num_steps_to_show_without_detecting: u32,

    /// Misses after which any object gets deleted
    pub max_track_lifetime: u32,

    /// Damping of the one-step velocity extrapolation
    pub coeff_object_speed_using_in_prediction: f32,

    /// Share of width and height kept in the core region used for collisions
    pub coeff_rectangle_overlap: f32,
}

impl Default for TrackerParameters {
    fn default() -> Self {
        Self {
            num_last_positions_to_track: 4,
            num_steps_to_wait_before_first_show: 6,
            num_steps_to_track_without_detecting_if_object_has_not_been_shown: 3,
            num_steps_to_show_without_detecting: 3,
            max_track_lifetime: 5,
            coeff_object_speed_using_in_prediction: 0.8,
            coeff_rectangle_overlap: 0.7,
        }
    }
}

impl TrackerParameters {
    pub fn validate(&self) -> Result<()> {
        if self.num_last_positions_to_track == 0 {
            return Err(Error::InvalidParameter {
                name: "num_last_positions_to_track",
                reason: "must keep at least one position".into(),
            });
        }

        let speed = self.coeff_object_speed_using_in_prediction;
        if !speed.is_finite() {
            return Err(Error::InvalidParameter {
                name: "coeff_object_speed_using_in_prediction",
                reason: format!("must be finite, got {}", speed),
            });
        }

        let overlap = self.coeff_rectangle_overlap;
        if !(overlap > 0.0 && overlap <= 1.0) {
            return Err(Error::InvalidParameter {
                name: "coeff_rectangle_overlap",
                reason: format!("must be in (0, 1], got {}", overlap),
            });
        }

        Ok(())
    }
}
