//! The mine seeker: a constraint-propagation engine that uncovers a closed
//! minefield without stepping on a mine.
//!
//! Per uncovered numbered field the engine keeps the set of locally
//! admissible mine configurations of the 3x3 neighbourhood and filters it
//! with two techniques: node consistency (the configuration must agree with
//! the observed neighbour count and with every committed neighbour) and
//! pairwise consistency (a configuration must be compatible with at least
//! one configuration of every overlapping uncovered field). Deductions feed
//! three priority queues; the hint oracle is consulted only when all of
//! them have drained.

mod cell;
mod node;
mod pairwise;

pub use cell::{Cell, CellState};

use std::collections::VecDeque;
use std::fmt;

use crate::config::NEIGHBOUR_OFFSETS;
use crate::hint::HintOracle;
use crate::minefield::Minefield;
use crate::Point;

/// Constraint-propagation solver for a closed [`Minefield`].
///
/// The seeker is the single owner of its per-field state; queues store
/// coordinates and every dequeued task rechecks the current state before
/// acting, so stale entries are harmless.
pub struct Seeker<'a> {
    minefield: &'a Minefield,
    cells: Vec<Cell>,
    pub(crate) uncover_queue: VecDeque<Point>,
    pub(crate) update_queue: VecDeque<Point>,
    pub(crate) pair_queue: VecDeque<(Point, Point)>,
    is_dead: bool,
    safe_field_requests: u32,
}

impl<'a> Seeker<'a> {
    /// Creates a seeker for `minefield`, which must already be closed.
    pub fn new(minefield: &'a Minefield) -> Self {
        assert!(
            minefield.is_closed(),
            "the minefield must be closed before solving"
        );
        let mut seeker = Self {
            minefield,
            cells: Vec::new(),
            uncover_queue: VecDeque::new(),
            update_queue: VecDeque::new(),
            pair_queue: VecDeque::new(),
            is_dead: false,
            safe_field_requests: 0,
        };
        seeker.reset();
        seeker
    }

    /// Discards all progress and returns the seeker to its initial state.
    pub fn reset(&mut self) {
        let size = self.minefield.width() as usize * self.minefield.height() as usize;
        self.cells = vec![Cell::new(); size];
        self.uncover_queue.clear();
        self.update_queue.clear();
        self.pair_queue.clear();
        self.is_dead = false;
        self.safe_field_requests = 0;
        self.initialise_border();
    }

    /// Node-filters every field on the outer border once. Configurations
    /// placing a mine outside the field disagree with the implicitly
    /// uncovered out-of-bounds neighbours and are removed, leaving 8
    /// admissible configurations in the corners and 32 on the edges.
    fn initialise_border(&mut self) {
        let (width, height) = (self.minefield.width(), self.minefield.height());
        for y in 0..height {
            for x in 0..width {
                if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                    self.update_configurations_at(x, y);
                }
            }
        }
    }

    pub fn minefield(&self) -> &Minefield {
        self.minefield
    }

    pub fn is_dead(&self) -> bool {
        self.is_dead
    }

    /// Number of safe-field hints requested so far. A perfect run needs
    /// none beyond the initial seed.
    pub fn safe_field_requests(&self) -> u32 {
        self.safe_field_requests
    }

    pub fn cell_at(&self, x: i32, y: i32) -> &Cell {
        &self.cells[self.cell_index(x, y)]
    }

    pub(crate) fn cell_mut(&mut self, x: i32, y: i32) -> &mut Cell {
        let index = self.cell_index(x, y);
        &mut self.cells[index]
    }

    fn cell_index(&self, x: i32, y: i32) -> usize {
        debug_assert!(self.minefield.in_bounds(x, y), "({x}, {y}) is out of bounds");
        y as usize * self.minefield.width() as usize + x as usize
    }

    /// The state at `(x, y)`, where everything outside the field counts as
    /// uncovered: there can be no mines there.
    pub(crate) fn state_or_uncovered(&self, x: i32, y: i32) -> CellState {
        if self.minefield.in_bounds(x, y) {
            self.cell_at(x, y).state()
        } else {
            CellState::Uncovered
        }
    }

    /// Tests if the current state allows a mine at `(x, y)`. Coordinates
    /// outside the field never do.
    pub fn is_possible_mine_at(&self, x: i32, y: i32) -> bool {
        self.minefield.in_bounds(x, y) && self.cell_at(x, y).is_possible_mine()
    }

    /// The observed neighbour mine count of an uncovered field, or -1 for
    /// fields the seeker has not uncovered.
    pub fn neighbour_count(&self, x: i32, y: i32) -> i8 {
        if self.cell_at(x, y).state() == CellState::Uncovered {
            self.minefield.count(x, y)
        } else {
            -1
        }
    }

    /// True once the run is over: the seeker is dead, or no hidden field
    /// is left.
    pub fn is_solved(&self) -> bool {
        self.is_dead || self.cells.iter().all(|c| c.state() != CellState::Hidden)
    }

    /// Uncovers the hidden field at `(x, y)`. Returns false if it
    /// contained a mine, in which case the seeker is dead and the run is
    /// over. Otherwise the observed count either floods the neighbourhood
    /// (count zero) or seeds the node filter, and the neighbours are
    /// scheduled for updating.
    pub fn uncover_field(&mut self, x: i32, y: i32) -> bool {
        debug_assert_eq!(self.cell_at(x, y).state(), CellState::Hidden);
        if self.minefield.is_mine(x, y) {
            self.cell_mut(x, y).set_state(CellState::Mine);
            self.is_dead = true;
            return false;
        }

        self.cell_mut(x, y).set_state(CellState::Uncovered);
        if self.minefield.count(x, y) == 0 {
            self.cell_mut(x, y).set_configuration(0);
            for (dx, dy) in NEIGHBOUR_OFFSETS {
                let (nx, ny) = (x + dx, y + dy);
                if self.minefield.in_bounds(nx, ny)
                    && self.cell_at(nx, ny).state() == CellState::Hidden
                {
                    self.uncover_queue.push_back(Point::new(nx, ny));
                }
            }
        } else {
            self.update_configurations_at(x, y);
        }
        self.queue_neighbours_for_update(x, y);
        true
    }

    /// Commits `(x, y)` as a mine. A field already known to be a mine is
    /// left alone; deducing a mine on an uncovered field is a contract
    /// violation.
    pub fn mark_as_mine(&mut self, x: i32, y: i32) {
        match self.cell_at(x, y).state() {
            CellState::Hidden => {
                self.cell_mut(x, y).set_state(CellState::Mine);
                self.queue_neighbours_for_update(x, y);
            }
            CellState::Mine => {}
            CellState::Uncovered => {
                panic!("marking the uncovered field ({x}, {y}) as a mine");
            }
        }
    }

    /// Schedules the uncovered numbered one-step neighbours of `(x, y)`
    /// for node filtering, and every field within two steps for pairwise
    /// consistency in both directions.
    pub(crate) fn queue_neighbours_for_update(&mut self, x: i32, y: i32) {
        for (dx, dy) in NEIGHBOUR_OFFSETS {
            let (nx, ny) = (x + dx, y + dy);
            if self.minefield.in_bounds(nx, ny)
                && self.cell_at(nx, ny).state() == CellState::Uncovered
                && self.minefield.count(nx, ny) > 0
            {
                self.update_queue.push_back(Point::new(nx, ny));
            }
        }
        self.queue_pair_updates_at(x, y);
    }

    /// Enqueues the directed pair tasks between `(x, y)` and every field
    /// within the (-2..=2, -2..=2) window around it.
    pub(crate) fn queue_pair_updates_at(&mut self, x: i32, y: i32) {
        for j in -2..=2 {
            for i in -2..=2 {
                if i == 0 && j == 0 {
                    continue;
                }
                let (nx, ny) = (x + i, y + j);
                if !self.minefield.in_bounds(nx, ny) {
                    continue;
                }
                self.pair_queue.push_back((Point::new(x, y), Point::new(nx, ny)));
                self.pair_queue.push_back((Point::new(nx, ny), Point::new(x, y)));
            }
        }
    }

    /// Asks the oracle for a safe field and counts the request. Embedders
    /// driving [`Seeker::solve_step`] themselves should seed the board
    /// through this method so the request counter stays accurate.
    pub fn request_safe_hint(&mut self, hints: &mut dyn HintOracle) -> Option<Point> {
        self.safe_field_requests += 1;
        hints.safe_hint(self)
    }

    /// Performs one unit of work: pops a task from the highest-priority
    /// non-empty queue (uncover, then update, then pair), or asks the hint
    /// oracle when every queue is empty. Returns false only when the
    /// oracle has nothing left to offer.
    pub fn solve_step(&mut self, hints: &mut dyn HintOracle) -> bool {
        if let Some(point) = self.uncover_queue.pop_front() {
            if self.cell_at(point.x, point.y).state() == CellState::Hidden {
                self.uncover_field(point.x, point.y);
            }
            return true;
        }
        if let Some(point) = self.update_queue.pop_front() {
            self.update_configurations_at(point.x, point.y);
            return true;
        }
        if let Some((first, second)) = self.pair_queue.pop_front() {
            self.update_pair_consistency(first.x, first.y, second.x, second.y);
            return true;
        }
        match self.request_safe_hint(hints) {
            Some(point) => {
                self.uncover_field(point.x, point.y);
                true
            }
            None => false,
        }
    }

    /// Runs the solver to completion: seeds the board with one safe-field
    /// hint, then repeats [`Seeker::solve_step`] until the board is
    /// solved, the seeker is dead, or the oracle refuses a hint. Returns
    /// true iff every mine-free field was uncovered without casualties.
    pub fn solve(&mut self, hints: &mut dyn HintOracle) -> bool {
        let Some(seed) = self.request_safe_hint(hints) else {
            return false;
        };
        self.uncover_field(seed.x, seed.y);
        while !self.is_solved() {
            if !self.solve_step(hints) {
                break;
            }
        }
        self.is_solved() && !self.is_dead
    }
}

impl fmt::Display for Seeker<'_> {
    /// Renders the board one row per line: `.` for hidden fields, `*` for
    /// mines, a space for uncovered fields with no mine around, and the
    /// neighbour count otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.minefield.height() {
            for x in 0..self.minefield.width() {
                let symbol = match self.cell_at(x, y).state() {
                    CellState::Hidden => '.',
                    CellState::Mine => '*',
                    CellState::Uncovered => match self.minefield.count(x, y) {
                        0 => ' ',
                        count => (b'0' + count as u8) as char,
                    },
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
