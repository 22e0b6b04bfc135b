//! Scoring result types for the board sweep and card placement.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::board::Line;
use crate::card::Card;
use crate::hand::HandCategory;

/// Score of a single grid line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineScore {
    /// Which row, column, or diagonal.
    pub line: Line,
    /// The hand formed by the line's occupied cells.
    pub category: HandCategory,
    /// Points awarded for the category.
    pub points: u32,
}

impl fmt::Display for LineScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({} points)",
            self.line,
            self.category.label(),
            self.points
        )
    }
}

/// Result of scoring every line of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepResult {
    /// Rows, then columns, then the two diagonals.
    pub lines: Vec<LineScore>,
    /// Sum of all line points.
    pub total: u32,
}

impl SweepResult {
    /// Returns the score of an empty grid: every line scores nothing.
    #[must_use]
    pub fn empty() -> Self {
        let lines = Line::ALL
            .into_iter()
            .map(|line| LineScore {
                line,
                category: HandCategory::Nothing,
                points: 0,
            })
            .collect();
        Self { lines, total: 0 }
    }

    /// Returns the score of a specific line.
    #[must_use]
    pub fn line(&self, line: Line) -> Option<&LineScore> {
        self.lines.iter().find(|score| score.line == line)
    }
}

/// Outcome of placing a card on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// The card that was placed.
    pub card: Card,
    /// Row of the placed card.
    pub row: usize,
    /// Column of the placed card.
    pub col: usize,
    /// Board score after the placement.
    ///
    /// `None` when live scoring is disabled and the grid is not yet full.
    pub score: Option<SweepResult>,
    /// Whether this placement filled the grid.
    pub game_over: bool,
}
