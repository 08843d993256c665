//! Per-field solver state.

use serde::{Deserialize, Serialize};

use crate::config::ConfigSet;

/// Visibility of a field from the seeker's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    /// Not visited nor proven to contain a mine yet.
    Hidden,
    /// Proven to contain a mine.
    Mine,
    /// Uncovered and did not contain a mine.
    Uncovered,
}

/// Solver-side record for a single field: its visibility, the set of mine
/// configurations its neighbourhood still admits, and the transient
/// occupancy counter used during pairwise consistency.
#[derive(Debug, Clone)]
pub struct Cell {
    state: CellState,
    configurations: ConfigSet,
    temporary_status: i32,
}

impl Cell {
    pub fn new() -> Self {
        Self {
            state: CellState::Hidden,
            configurations: ConfigSet::full(),
            temporary_status: 0,
        }
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    /// True if this field may contain a mine: it was not uncovered yet, or
    /// it was already proven to contain one.
    pub fn is_possible_mine(&self) -> bool {
        self.state != CellState::Uncovered
    }

    /// True if exactly one admissible configuration is left.
    pub fn is_bound(&self) -> bool {
        self.configurations.len() == 1
    }

    pub fn is_possible_configuration(&self, config: u8) -> bool {
        self.configurations.contains(config)
    }

    pub fn num_configurations(&self) -> u32 {
        self.configurations.len()
    }

    pub fn configurations(&self) -> &ConfigSet {
        &self.configurations
    }

    pub(crate) fn remove_configuration(&mut self, config: u8) {
        self.configurations.remove(config);
    }

    /// Binds the field to `config`, discarding every other candidate.
    pub(crate) fn set_configuration(&mut self, config: u8) {
        self.configurations.bind_to(config);
    }

    pub fn temporary_status(&self) -> i32 {
        self.temporary_status
    }

    /// Records one pushed configuration that wants this field to be a mine.
    /// Returns true iff the previous occupancy was compatible (no pushed
    /// clear area outstanding). The counter is updated either way; the
    /// caller must pop.
    pub(crate) fn push_temporary_mine(&mut self) -> bool {
        let compatible = self.temporary_status >= 0;
        self.temporary_status += 1;
        compatible
    }

    pub(crate) fn pop_temporary_mine(&mut self) {
        self.temporary_status -= 1;
    }

    /// Records one pushed configuration that wants this field to be clear.
    /// Returns true iff the previous occupancy was compatible (no pushed
    /// mine outstanding). The counter is updated either way; the caller
    /// must pop.
    pub(crate) fn push_temporary_clear_area(&mut self) -> bool {
        let compatible = self.temporary_status <= 0;
        self.temporary_status -= 1;
        compatible
    }

    pub(crate) fn pop_temporary_clear_area(&mut self) {
        self.temporary_status += 1;
    }

    /// Zeroes the occupancy counter, discarding any unmatched pushes.
    pub fn reset_temporary_status(&mut self) {
        self.temporary_status = 0;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell() {
        let cell = Cell::new();
        assert_eq!(cell.state(), CellState::Hidden);
        assert_eq!(cell.num_configurations(), 256);
        assert_eq!(cell.temporary_status(), 0);
        assert!(cell.is_possible_mine());
        assert!(!cell.is_bound());
    }

    #[test]
    fn test_is_possible_mine_follows_state() {
        let mut cell = Cell::new();
        assert!(cell.is_possible_mine());
        cell.set_state(CellState::Mine);
        assert!(cell.is_possible_mine());
        cell.set_state(CellState::Uncovered);
        assert!(!cell.is_possible_mine());
    }

    #[test]
    fn test_set_configuration_binds() {
        let mut cell = Cell::new();
        cell.set_configuration(72);
        assert!(cell.is_bound());
        assert!(cell.is_possible_configuration(72));
        assert!(!cell.is_possible_configuration(73));
    }

    #[test]
    fn test_push_temporary_mine() {
        let mut cell = Cell::new();

        const NUM_ITERATIONS: i32 = 10;
        for i in 0..NUM_ITERATIONS {
            assert_eq!(cell.temporary_status(), i);
            assert!(cell.push_temporary_mine());
            assert_eq!(cell.temporary_status(), i + 1);
        }
        for i in (1..=NUM_ITERATIONS).rev() {
            assert_eq!(cell.temporary_status(), i);
            cell.pop_temporary_mine();
            assert_eq!(cell.temporary_status(), i - 1);
        }
    }

    #[test]
    fn test_push_temporary_clear_area() {
        let mut cell = Cell::new();

        const NUM_ITERATIONS: i32 = 10;
        for i in 0..NUM_ITERATIONS {
            assert_eq!(cell.temporary_status(), -i);
            assert!(cell.push_temporary_clear_area());
            assert_eq!(cell.temporary_status(), -i - 1);
        }
        for i in (1..=NUM_ITERATIONS).rev() {
            assert_eq!(cell.temporary_status(), -i);
            cell.pop_temporary_clear_area();
            assert_eq!(cell.temporary_status(), -i + 1);
        }
    }

    #[test]
    fn test_push_temporary_mine_on_clear_area() {
        let mut cell = Cell::new();

        assert!(cell.push_temporary_clear_area());
        assert_eq!(cell.temporary_status(), -1);
        assert!(!cell.push_temporary_mine());
        assert_eq!(cell.temporary_status(), 0);
    }

    #[test]
    fn test_push_temporary_clear_area_on_mine() {
        let mut cell = Cell::new();

        assert!(cell.push_temporary_mine());
        assert_eq!(cell.temporary_status(), 1);
        assert!(!cell.push_temporary_clear_area());
        assert_eq!(cell.temporary_status(), 0);
    }

    #[test]
    fn test_reset_temporary_status() {
        let mut cell = Cell::new();
        cell.push_temporary_mine();
        cell.push_temporary_mine();
        cell.reset_temporary_status();
        assert_eq!(cell.temporary_status(), 0);
    }
}
