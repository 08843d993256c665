//! Safe-field hints.
//!
//! When propagation stalls the seeker may ask for one field that is
//! guaranteed not to contain a mine. Every request is counted against the
//! run; a perfect run needs no hints beyond the initial seed.

use crate::seeker::{CellState, Seeker};
use crate::Point;

/// Source of guaranteed-safe fields.
pub trait HintOracle {
    /// Returns a currently hidden field that does not contain a mine, or
    /// `None` when no such field is left.
    fn safe_hint(&mut self, seeker: &Seeker<'_>) -> Option<Point>;
}

/// Hint oracle backed by the minefield itself. Prefers a boring safe
/// field, one that is hidden, mine-free and has no mines around it, and
/// falls back to any safe hidden field.
#[derive(Debug, Default)]
pub struct SafeFieldOracle;

impl HintOracle for SafeFieldOracle {
    fn safe_hint(&mut self, seeker: &Seeker<'_>) -> Option<Point> {
        let minefield = seeker.minefield();
        let mut fallback = None;
        for y in 0..minefield.height() {
            for x in 0..minefield.width() {
                if seeker.cell_at(x, y).state() != CellState::Hidden || minefield.is_mine(x, y) {
                    continue;
                }
                if minefield.count(x, y) == 0 {
                    return Some(Point::new(x, y));
                }
                if fallback.is_none() {
                    fallback = Some(Point::new(x, y));
                }
            }
        }
        fallback
    }
}

/// Oracle that never offers a hint. Useful to observe what pure deduction
/// achieves on its own.
#[derive(Debug, Default)]
pub struct NoHints;

impl HintOracle for NoHints {
    fn safe_hint(&mut self, _seeker: &Seeker<'_>) -> Option<Point> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minefield::Minefield;

    #[test]
    fn test_prefers_field_with_no_mines_around() {
        // 1*1
        // 111
        // 000  <- the bottom row is boring
        let mut minefield = Minefield::new(3, 3);
        minefield.set_mine(1, 0, true);
        minefield.close();

        let seeker = Seeker::new(&minefield);
        let mut oracle = SafeFieldOracle;
        let hint = oracle.safe_hint(&seeker).unwrap();
        assert_eq!(hint, Point::new(0, 2));
        assert!(!minefield.is_mine(hint.x, hint.y));
        assert_eq!(minefield.count(hint.x, hint.y), 0);
    }

    #[test]
    fn test_falls_back_to_any_safe_field() {
        // Every mine-free field touches a mine.
        let mut minefield = Minefield::new(2, 2);
        minefield.set_mine(0, 0, true);
        minefield.close();

        let seeker = Seeker::new(&minefield);
        let mut oracle = SafeFieldOracle;
        let hint = oracle.safe_hint(&seeker).unwrap();
        assert!(!minefield.is_mine(hint.x, hint.y));
    }

    #[test]
    fn test_no_hint_when_only_mines_are_hidden() {
        let mut minefield = Minefield::new(1, 2);
        minefield.set_mine(0, 0, true);
        minefield.close();

        let mut seeker = Seeker::new(&minefield);
        assert!(seeker.uncover_field(0, 1));
        let mut oracle = SafeFieldOracle;
        assert_eq!(oracle.safe_hint(&seeker), None);
    }

    #[test]
    fn test_no_hints_oracle() {
        let minefield = Minefield::parse("2 2\n0\n").unwrap();
        let seeker = Seeker::new(&minefield);
        assert_eq!(NoHints.safe_hint(&seeker), None);
    }
}
