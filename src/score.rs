//! Points and labels for each hand category.
//!
//! These values decide every game's final total, so changing any of them
//! makes old high scores incomparable with new ones.

use crate::hand::HandCategory;

/// Points and display label for a hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Points awarded to a line.
    pub points: u32,
    /// Human-readable category name.
    pub label: &'static str,
}

/// The score table, indexed in [`HandCategory::ALL`] order.
pub const SCORE_TABLE: [(HandCategory, Score); 10] = [
    (HandCategory::Nothing, score(HandCategory::Nothing)),
    (HandCategory::OnePair, score(HandCategory::OnePair)),
    (HandCategory::TwoPair, score(HandCategory::TwoPair)),
    (HandCategory::ThreeOfAKind, score(HandCategory::ThreeOfAKind)),
    (HandCategory::Straight, score(HandCategory::Straight)),
    (HandCategory::Flush, score(HandCategory::Flush)),
    (HandCategory::FullHouse, score(HandCategory::FullHouse)),
    (HandCategory::FourOfAKind, score(HandCategory::FourOfAKind)),
    (HandCategory::StraightFlush, score(HandCategory::StraightFlush)),
    (HandCategory::RoyalFlush, score(HandCategory::RoyalFlush)),
];

/// Looks up the points and label for a category.
#[must_use]
pub const fn score(category: HandCategory) -> Score {
    let (points, label) = match category {
        HandCategory::Nothing => (0, "Nothing"),
        HandCategory::OnePair => (1, "One Pair"),
        HandCategory::TwoPair => (2, "Two Pairs"),
        HandCategory::ThreeOfAKind => (3, "Three of a Kind"),
        HandCategory::Straight => (4, "Straight"),
        HandCategory::Flush => (6, "Flush"),
        HandCategory::FullHouse => (9, "Full House"),
        HandCategory::FourOfAKind => (25, "Four of a Kind"),
        HandCategory::StraightFlush => (50, "Straight Flush"),
        HandCategory::RoyalFlush => (250, "Royal Flush"),
    };
    Score { points, label }
}
