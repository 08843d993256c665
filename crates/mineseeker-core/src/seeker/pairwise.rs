//! Pairwise consistency.
//!
//! Two uncovered fields whose neighbourhoods overlap constrain each other
//! through the shared fields: a configuration of the first is only
//! admissible if the second still has a configuration that wants the same
//! occupancy on every shared field. The check works by transiently pushing
//! the occupancy of a configuration onto the grid (the per-field
//! `temporary_status` counter) and probing the partner's configurations
//! against it. Every push is matched by a pop, so the counters are zero
//! again when the routine returns.

use super::{CellState, Seeker};
use crate::config::{self, NEIGHBOUR_OFFSETS};

impl Seeker<'_> {
    /// Removes every configuration of `(x1, y1)` that no admissible
    /// configuration of `(x2, y2)` is compatible with. Applies only while
    /// both fields are uncovered, the first is not yet bound, and the two
    /// lie within a two-field window of each other; stale tasks outside
    /// these conditions are dropped silently.
    pub(crate) fn update_pair_consistency(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        if !self.minefield().in_bounds(x1, y1) || !self.minefield().in_bounds(x2, y2) {
            return;
        }
        if (x1 - x2).abs() > 2 || (y1 - y2).abs() > 2 {
            return;
        }
        if self.cell_at(x1, y1).state() != CellState::Uncovered
            || self.cell_at(x2, y2).state() != CellState::Uncovered
        {
            return;
        }
        if self.cell_at(x1, y1).is_bound() {
            return;
        }

        let mut removed_any = false;
        for config in 0..=255u8 {
            if !self.cell_at(x1, y1).is_possible_configuration(config) {
                continue;
            }
            let pushed_ok = self.push_configuration_at(config, x1, y1);
            let compatible = pushed_ok && self.has_compatible_configuration_at(x2, y2);
            self.pop_configuration_at(config, x1, y1);
            if !compatible {
                self.cell_mut(x1, y1).remove_configuration(config);
                removed_any = true;
            }
        }

        if removed_any {
            self.update_configurations_at(x1, y1);
            self.update_neighbours_at(x1, y1);
        }
    }

    /// Probes the admissible configurations of `(x, y)` against the
    /// occupancy currently pushed onto the grid.
    fn has_compatible_configuration_at(&mut self, x: i32, y: i32) -> bool {
        for config in 0..=255u8 {
            if !self.cell_at(x, y).is_possible_configuration(config) {
                continue;
            }
            let fits = self.push_configuration_at(config, x, y);
            self.pop_configuration_at(config, x, y);
            if fits {
                return true;
            }
        }
        false
    }

    /// Pushes the occupancy implied by `config` onto the neighbours of
    /// `(x, y)`: a mine where the configuration has one, a clear area
    /// everywhere else. Returns true iff every push was compatible with
    /// the occupancy already recorded. The pushes are left in place either
    /// way; the caller must pop with the same configuration.
    pub(crate) fn push_configuration_at(&mut self, config: u8, x: i32, y: i32) -> bool {
        let mut all_compatible = true;
        for (dx, dy) in NEIGHBOUR_OFFSETS {
            let (nx, ny) = (x + dx, y + dy);
            if !self.minefield().in_bounds(nx, ny) {
                continue;
            }
            let compatible = if config::has_mine_at(config, dx, dy) {
                self.cell_mut(nx, ny).push_temporary_mine()
            } else {
                self.cell_mut(nx, ny).push_temporary_clear_area()
            };
            all_compatible &= compatible;
        }
        all_compatible
    }

    /// Reverts [`Seeker::push_configuration_at`] for the same `config`.
    pub(crate) fn pop_configuration_at(&mut self, config: u8, x: i32, y: i32) {
        for (dx, dy) in NEIGHBOUR_OFFSETS {
            let (nx, ny) = (x + dx, y + dy);
            if !self.minefield().in_bounds(nx, ny) {
                continue;
            }
            if config::has_mine_at(config, dx, dy) {
                self.cell_mut(nx, ny).pop_temporary_mine();
            } else {
                self.cell_mut(nx, ny).pop_temporary_clear_area();
            }
        }
    }
}
