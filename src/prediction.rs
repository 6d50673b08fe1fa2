use crate::history::History;
use crate::math::{int_center, round_to_i32};
use crate::rect::Rect;
use tracing::warn;

/// One-step linear extrapolation of the latest position.
///
/// The shift is the center delta between the two latest positions scaled by
/// `coeff`. A single-entry history is returned unshifted.
pub fn correct_by_speed(id: u32, history: &History<Rect>, coeff: f32) -> Rect {
    let last = *history.latest();

    if last.area() == 0 {
        warn!(id, "tracked object has an empty position");
    }

    let prev = match history.previous() {
        Some(prev) => prev,
        None => return last,
    };

    let shift = int_center(&last) - int_center(prev);
    let coeff = coeff as f64;

    last.translated(
        round_to_i32(shift.x as f64 * coeff),
        round_to_i32(shift.y as f64 * coeff),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_position_is_not_shifted() {
        let h = History::new(Rect::new(5, 5, 10, 10), 4);

        assert_eq!(correct_by_speed(0, &h, 0.8), Rect::new(5, 5, 10, 10));
    }

    #[test]
    fn shifts_by_damped_velocity() {
        let mut h = History::new(Rect::new(0, 0, 10, 10), 4);
        h.push(Rect::new(10, 0, 10, 10), 4);

        assert_eq!(correct_by_speed(0, &h, 0.8), Rect::new(18, 0, 10, 10));
    }

    #[test]
    fn only_the_two_latest_positions_count() {
        let mut h = History::new(Rect::new(-100, -100, 10, 10), 4);
        h.push(Rect::new(0, 0, 10, 10), 4);
        h.push(Rect::new(0, -5, 10, 10), 4);

        // delta (0, -5) * 0.8 = (0, -4)
        assert_eq!(correct_by_speed(0, &h, 0.8), Rect::new(0, -9, 10, 10));
    }

    #[test]
    fn size_change_moves_integer_center() {
        let mut h = History::new(Rect::new(0, 0, 10, 10), 4);
        h.push(Rect::new(0, 0, 20, 20), 4);

        // centers (5, 5) -> (10, 10), delta 5 * 0.5 = 2.5 rounds to 2
        assert_eq!(correct_by_speed(0, &h, 0.5), Rect::new(2, 2, 20, 20));
    }
}
