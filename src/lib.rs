//! A poker solitaire scoring engine with optional `no_std` support.
//!
//! Cards are placed one at a time on a 5x5 grid. Every row, column, and the
//! two main diagonals are scored as poker hands, including partially filled
//! lines. The crate provides the hand classifier, the scoring table, the
//! board sweep, and a [`Game`] type that deals and places cards.
//!
//! # Example
//!
//! ```
//! use pokersol::{Card, HandCategory, Suit, classify};
//!
//! let hand = [
//!     Card::new(Suit::Hearts, 10).unwrap(),
//!     Card::new(Suit::Hearts, 11).unwrap(),
//!     Card::new(Suit::Hearts, 12).unwrap(),
//!     Card::new(Suit::Hearts, 13).unwrap(),
//!     Card::new(Suit::Hearts, 14).unwrap(),
//! ];
//! let category = classify(&hand).unwrap();
//! assert_eq!(category, HandCategory::RoyalFlush);
//! assert_eq!(category.points(), 250);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod board;
pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod score;
mod sync;

// Re-export main types
pub use board::{GRID_SIZE, Grid, LINE_COUNT, Line, sweep};
pub use card::{Card, DECK_SIZE, Deck, Suit};
pub use error::{CardError, HandError, NewGameError, PlaceError};
pub use game::{Game, GameState};
pub use hand::{Hand, HandCategory, HandState, MAX_HAND_SIZE, classify};
pub use options::GameOptions;
pub use result::{LineScore, Placement, SweepResult};
pub use score::{SCORE_TABLE, Score, score};
