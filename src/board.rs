//! The 5x5 card grid and the sweep that scores its lines.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use log::{debug, trace};

use crate::card::Card;
use crate::error::HandError;
use crate::hand::Hand;
use crate::result::{LineScore, SweepResult};

/// Width and height of the grid.
pub const GRID_SIZE: usize = 5;

/// Number of scored lines: five rows, five columns, two diagonals.
pub const LINE_COUNT: usize = 2 * GRID_SIZE + 2;

/// A scored line of the grid. Indices are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Line {
    /// A row, top to bottom.
    Row(u8),
    /// A column, left to right.
    Column(u8),
    /// `0` runs top-left to bottom-right, `1` runs top-right to bottom-left.
    Diagonal(u8),
}

impl Line {
    /// Every scored line in sweep order.
    pub const ALL: [Self; LINE_COUNT] = [
        Self::Row(0),
        Self::Row(1),
        Self::Row(2),
        Self::Row(3),
        Self::Row(4),
        Self::Column(0),
        Self::Column(1),
        Self::Column(2),
        Self::Column(3),
        Self::Column(4),
        Self::Diagonal(0),
        Self::Diagonal(1),
    ];

    /// Returns the `(row, col)` positions covered by the line.
    #[must_use]
    pub fn cells(self) -> [(usize, usize); GRID_SIZE] {
        core::array::from_fn(|i| match self {
            Self::Row(row) => (row as usize, i),
            Self::Column(col) => (i, col as usize),
            Self::Diagonal(0) => (i, i),
            Self::Diagonal(_) => (i, GRID_SIZE - 1 - i),
        })
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row(i) => write!(f, "Row {}", u16::from(*i) + 1),
            Self::Column(i) => write!(f, "Column {}", u16::from(*i) + 1),
            Self::Diagonal(i) => write!(f, "Diagonal {}", u16::from(*i) + 1),
        }
    }
}

/// A 5x5 grid of optional cards, stored row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Grid {
    cells: [[Option<Card>; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[None; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Creates a grid from row-major cells.
    #[must_use]
    pub const fn from_rows(cells: [[Option<Card>; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    /// Returns the card at a position, or `None` if the cell is empty or
    /// outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Card> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    /// Sets a cell, returning the previous content.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the grid.
    pub const fn set(&mut self, row: usize, col: usize, card: Option<Card>) -> Option<Card> {
        core::mem::replace(&mut self.cells[row][col], card)
    }

    /// Returns whether the position lies on the grid.
    #[must_use]
    pub const fn contains(row: usize, col: usize) -> bool {
        row < GRID_SIZE && col < GRID_SIZE
    }

    /// Returns the row-major cells.
    #[must_use]
    pub const fn rows(&self) -> &[[Option<Card>; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Returns the number of occupied cells.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Returns whether every cell holds a card.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupied() == GRID_SIZE * GRID_SIZE
    }

    /// Clears every cell.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

/// Scores all twelve lines of the grid.
///
/// Lines are reported as rows 1-5, columns 1-5, then diagonals 1-2. Empty
/// cells are skipped, so a partially filled line is scored on the cards it
/// holds.
///
/// # Errors
///
/// Returns a [`HandError`] if a line holds the same card twice.
pub fn sweep(grid: &Grid) -> Result<SweepResult, HandError> {
    let mut hand = Hand::new();
    let mut lines = Vec::with_capacity(LINE_COUNT);
    let mut total = 0;

    for line in Line::ALL {
        hand.reset();
        for (row, col) in line.cells() {
            if let Some(card) = grid.get(row, col) {
                hand.add(card)?;
            }
        }

        let category = hand.evaluate()?;
        let points = category.points();
        trace!("{line}: {category} with {} cards", hand.len());

        total += points;
        lines.push(LineScore {
            line,
            category,
            points,
        });
    }

    debug!("sweep total {total} over {} cards", grid.occupied());
    Ok(SweepResult { lines, total })
}
