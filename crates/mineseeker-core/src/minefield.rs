//! The minefield: ground truth that the solver queries through a read-only
//! oracle interface.
//!
//! A `Minefield` is built open, populated with [`Minefield::set_mine`], and
//! then closed with [`Minefield::close`], which freezes the layout and
//! computes the neighbour mine counts. The solver only ever sees a closed
//! field.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Count value stored for fields that contain a mine. The solver never
/// reads the count of a mine field.
pub const MINE_SENTINEL: i8 = -1;

/// Errors raised when parsing a minefield description.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected end of input while reading {0}")]
    UnexpectedEnd(&'static str),
    #[error("invalid integer {token:?} while reading {what}")]
    InvalidInteger { what: &'static str, token: String },
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },
    #[error("invalid number of mines: {0}")]
    InvalidMineCount(i64),
    #[error("mine ({x}, {y}) lies outside the {width}x{height} field")]
    MineOutOfBounds {
        x: i64,
        y: i64,
        width: i32,
        height: i32,
    },
    #[error("unexpected trailing input starting at {0:?}")]
    TrailingInput(String),
}

/// A rectangular minefield with per-field neighbour mine counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Minefield {
    width: i32,
    height: i32,
    /// `MINE_SENTINEL` on mine fields; after closing, the number of mines
    /// in the 8-neighbourhood everywhere else.
    counts: Vec<i8>,
    is_closed: bool,
}

impl Minefield {
    /// Creates an open minefield of the given size with no mines in it.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0, "invalid width: {width}");
        assert!(height > 0, "invalid height: {height}");
        Self {
            width,
            height,
            counts: vec![0; width as usize * height as usize],
            is_closed: false,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    fn index(&self, x: i32, y: i32) -> usize {
        debug_assert!(self.in_bounds(x, y), "({x}, {y}) is out of bounds");
        y as usize * self.width as usize + x as usize
    }

    /// Places or removes a mine. Only valid while the field is still open.
    pub fn set_mine(&mut self, x: i32, y: i32, is_mine: bool) {
        assert!(!self.is_closed, "the minefield is closed for changes");
        let index = self.index(x, y);
        self.counts[index] = if is_mine { MINE_SENTINEL } else { 0 };
    }

    /// Closes the minefield for changes and computes the neighbour mine
    /// counts of all mine-free fields.
    pub fn close(&mut self) {
        assert!(!self.is_closed, "the minefield is already closed");
        for y in 0..self.height {
            for x in 0..self.width {
                if self.counts[self.index(x, y)] == MINE_SENTINEL {
                    self.increase_neighbour_counts(x, y);
                }
            }
        }
        self.is_closed = true;
    }

    fn increase_neighbour_counts(&mut self, x: i32, y: i32) {
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (nx, ny) = (x + dx, y + dy);
                if self.in_bounds(nx, ny) {
                    let index = self.index(nx, ny);
                    if self.counts[index] != MINE_SENTINEL {
                        self.counts[index] += 1;
                    }
                }
            }
        }
    }

    /// True once the layout is frozen and the counts are valid.
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    pub fn is_mine(&self, x: i32, y: i32) -> bool {
        self.counts[self.index(x, y)] == MINE_SENTINEL
    }

    /// The number of mines in the 8-neighbourhood of `(x, y)`. Returns
    /// [`MINE_SENTINEL`] if the field itself contains a mine.
    pub fn count(&self, x: i32, y: i32) -> i8 {
        self.counts[self.index(x, y)]
    }

    pub fn num_mines(&self) -> usize {
        self.counts.iter().filter(|&&c| c == MINE_SENTINEL).count()
    }

    /// Parses the whitespace-separated minefield description
    /// `<width> <height> <num_mines> <x_1> <y_1> ...` and returns the
    /// closed minefield. Coordinates are 0-based.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut tokens = input.split_whitespace();

        let width = next_int(&mut tokens, "width")?;
        let height = next_int(&mut tokens, "height")?;
        if width <= 0 || height <= 0 || width > i32::MAX as i64 || height > i32::MAX as i64 {
            return Err(ParseError::InvalidDimensions { width, height });
        }
        let mut minefield = Minefield::new(width as i32, height as i32);

        let num_mines = next_int(&mut tokens, "number of mines")?;
        if num_mines < 0 {
            return Err(ParseError::InvalidMineCount(num_mines));
        }
        for _ in 0..num_mines {
            let x = next_int(&mut tokens, "mine x coordinate")?;
            let y = next_int(&mut tokens, "mine y coordinate")?;
            if x < 0 || y < 0 || x >= width || y >= height {
                return Err(ParseError::MineOutOfBounds {
                    x,
                    y,
                    width: minefield.width,
                    height: minefield.height,
                });
            }
            minefield.set_mine(x as i32, y as i32, true);
        }
        if let Some(extra) = tokens.next() {
            return Err(ParseError::TrailingInput(extra.to_string()));
        }

        minefield.close();
        Ok(minefield)
    }
}

fn next_int<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &'static str,
) -> Result<i64, ParseError> {
    let token = tokens.next().ok_or(ParseError::UnexpectedEnd(what))?;
    token.parse().map_err(|_| ParseError::InvalidInteger {
        what,
        token: token.to_string(),
    })
}

impl FromStr for Minefield {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Minefield::parse(s)
    }
}

impl fmt::Display for Minefield {
    /// Prints the count matrix, one row per line: `*` on mine fields,
    /// the neighbour count everywhere else. Before closing, the matrix
    /// only has non-zero values on the fields with mines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                if self.is_mine(x, y) {
                    write!(f, "*")?;
                } else {
                    write!(f, "{}", self.count(x, y))?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
