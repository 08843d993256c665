//! Node consistency and neighbour deduction.
//!
//! The node filter keeps a configuration of a field only while it agrees
//! with everything already committed around it; neighbour deduction then
//! intersects what is left to find neighbours that are mines in every
//! admissible configuration, or in none.

use super::{CellState, Seeker};
use crate::config::{self, NEIGHBOUR_OFFSETS};
use crate::Point;

impl Seeker<'_> {
    /// Removes every configuration of `(x, y)` that disagrees with a
    /// committed neighbour or, on an uncovered field, with the observed
    /// neighbour mine count. Fields outside the grid count as uncovered,
    /// so border fields lose the configurations that would place a mine
    /// off the grid.
    ///
    /// Pairwise-consistency tasks against the surrounding fields are
    /// scheduled afterwards; if the filter removed anything, neighbour
    /// deduction runs immediately.
    pub(crate) fn update_configurations_at(&mut self, x: i32, y: i32) {
        let observed = if self.cell_at(x, y).state() == CellState::Uncovered {
            Some(self.minefield().count(x, y))
        } else {
            None
        };

        let mut removed_any = false;
        for config in 0..=255u8 {
            if !self.cell_at(x, y).is_possible_configuration(config) {
                continue;
            }
            if !self.configuration_fits_at(config, x, y, observed) {
                self.cell_mut(x, y).remove_configuration(config);
                removed_any = true;
            }
        }

        self.queue_pair_updates_at(x, y);
        if removed_any {
            self.update_neighbours_at(x, y);
        }
    }

    /// Tests `config` against the committed neighbourhood of `(x, y)` and,
    /// when a count was observed, against that count.
    fn configuration_fits_at(&self, config: u8, x: i32, y: i32, observed: Option<i8>) -> bool {
        if let Some(count) = observed {
            if config::mine_count(config) != count as u32 {
                return false;
            }
        }
        for (dx, dy) in NEIGHBOUR_OFFSETS {
            let state = self.state_or_uncovered(x + dx, y + dy);
            if state == CellState::Hidden {
                continue;
            }
            if config::has_mine_at(config, dx, dy) != (state == CellState::Mine) {
                return false;
            }
        }
        true
    }

    /// Intersects the admissible configurations of `(x, y)`: neighbours
    /// mined in every one of them are committed as mines, neighbours mined
    /// in none are scheduled for uncovering.
    pub(crate) fn update_neighbours_at(&mut self, x: i32, y: i32) {
        let (must_be_mine, must_be_safe) = {
            let cell = self.cell_at(x, y);
            assert!(
                !cell.configurations().is_empty(),
                "no admissible configuration left at ({x}, {y})"
            );
            let mut mine_mask = 0xFFu8;
            let mut safe_mask = 0xFFu8;
            for config in cell.configurations().iter() {
                mine_mask &= config;
                safe_mask &= !config;
            }
            (mine_mask, safe_mask)
        };

        for (bit, (dx, dy)) in NEIGHBOUR_OFFSETS.into_iter().enumerate() {
            let (nx, ny) = (x + dx, y + dy);
            if must_be_safe & (1 << bit) != 0 {
                if self.minefield().in_bounds(nx, ny)
                    && self.cell_at(nx, ny).state() == CellState::Hidden
                {
                    self.uncover_queue.push_back(Point::new(nx, ny));
                }
            } else if must_be_mine & (1 << bit) != 0 {
                // Configurations mining an off-grid field were removed at
                // construction, so the target is always on the grid.
                debug_assert!(self.minefield().in_bounds(nx, ny));
                self.mark_as_mine(nx, ny);
            }
        }
    }
}
