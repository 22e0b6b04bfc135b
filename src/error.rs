//! Error types for card construction, hand evaluation, and game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside `2..=14`.
    #[error("invalid card rank {0}")]
    InvalidRank(u8),
    /// Suit index outside `0..4`.
    #[error("invalid card suit {0}")]
    InvalidSuit(u8),
}

/// Errors that can occur when collecting or classifying a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// More than five cards were supplied.
    #[error("a hand holds at most 5 cards, got {0}")]
    TooManyCards(usize),
    /// The same card appears twice in the hand.
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
    /// The hand already holds five cards.
    #[error("hand is full")]
    Full,
}

/// Errors that can occur when placing a card on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    /// Invalid game state for placing a card.
    #[error("invalid game state for placing a card")]
    InvalidState,
    /// Row or column outside the grid.
    #[error("position ({row}, {col}) is outside the grid")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The cell already holds a card.
    #[error("position ({row}, {col}) is already occupied")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// No card is waiting to be placed.
    #[error("no card to place")]
    NoCard,
    /// Scoring the board failed.
    #[error(transparent)]
    Hand(#[from] HandError),
}

/// Errors that can occur when starting a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NewGameError {
    /// The current game is still in progress.
    #[error("the current game is still in progress")]
    InvalidState,
}
