//! Poker hand classification and the per-line hand accumulator.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::HandError;
use crate::score::score;

/// Largest number of cards a hand can hold.
pub const MAX_HAND_SIZE: usize = 5;

/// Slots in the rank tally, indexed directly by rank (0 and 1 stay unused).
const RANK_SLOTS: usize = Card::ACE as usize + 1;

const WHEEL: [u8; MAX_HAND_SIZE] = [2, 3, 4, 5, Card::ACE];
const BROADWAY: [u8; MAX_HAND_SIZE] = [10, Card::JACK, Card::QUEEN, Card::KING, Card::ACE];

/// Poker hand category, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandCategory {
    /// No pair, no straight, no flush.
    Nothing,
    /// Two cards of the same rank.
    OnePair,
    /// Two distinct pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three of a kind plus a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight in a single suit.
    StraightFlush,
    /// Ten to Ace in a single suit.
    RoyalFlush,
}

impl HandCategory {
    /// All categories, weakest first.
    pub const ALL: [Self; 10] = [
        Self::Nothing,
        Self::OnePair,
        Self::TwoPair,
        Self::ThreeOfAKind,
        Self::Straight,
        Self::Flush,
        Self::FullHouse,
        Self::FourOfAKind,
        Self::StraightFlush,
        Self::RoyalFlush,
    ];

    /// Returns the points scored by a line of this category.
    #[must_use]
    pub const fn points(self) -> u32 {
        score(self).points
    }

    /// Returns the display label, e.g. `"Two Pairs"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        score(self).label
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies up to five distinct cards.
///
/// Straights and flushes need all five cards, so smaller hands can only
/// score pairs, two pairs, or three of a kind. The input order does not
/// matter.
///
/// # Errors
///
/// Returns [`HandError::TooManyCards`] for more than five cards and
/// [`HandError::DuplicateCard`] if a card appears twice.
pub fn classify(cards: &[Card]) -> Result<HandCategory, HandError> {
    if cards.len() > MAX_HAND_SIZE {
        return Err(HandError::TooManyCards(cards.len()));
    }

    for (i, card) in cards.iter().enumerate() {
        if cards[..i].contains(card) {
            return Err(HandError::DuplicateCard(*card));
        }
    }

    if let Ok(five) = <&[Card; MAX_HAND_SIZE]>::try_from(cards) {
        let ranks = sorted_ranks(five);
        let flush = five.iter().all(|card| card.suit() == five[0].suit());
        let straight = ranks == WHEEL || ranks.windows(2).all(|w| w[1] == w[0] + 1);

        match (flush, straight) {
            (true, true) if ranks == BROADWAY => return Ok(HandCategory::RoyalFlush),
            (true, true) => return Ok(HandCategory::StraightFlush),
            (true, false) => return Ok(HandCategory::Flush),
            (false, true) => return Ok(HandCategory::Straight),
            (false, false) => {}
        }
    }

    Ok(by_multiplicity(cards))
}

fn sorted_ranks(cards: &[Card; MAX_HAND_SIZE]) -> [u8; MAX_HAND_SIZE] {
    let mut ranks = (*cards).map(|card| card.rank());
    ranks.sort_unstable();
    ranks
}

/// Categorizes by how many cards share each rank.
fn by_multiplicity(cards: &[Card]) -> HandCategory {
    let mut tally = [0u8; RANK_SLOTS];
    for card in cards {
        tally[card.rank() as usize] += 1;
    }

    let mut counts = [0u8; MAX_HAND_SIZE];
    for (slot, count) in counts
        .iter_mut()
        .zip(tally.into_iter().filter(|&count| count > 0))
    {
        *slot = count;
    }
    counts.sort_unstable_by(|a, b| b.cmp(a));

    match (counts[0], counts[1]) {
        (4, _) => HandCategory::FourOfAKind,
        (3, 2) => HandCategory::FullHouse,
        (3, _) => HandCategory::ThreeOfAKind,
        (2, 2) => HandCategory::TwoPair,
        (2, _) => HandCategory::OnePair,
        _ => HandCategory::Nothing,
    }
}

/// Accumulator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandState {
    /// No cards held.
    Empty,
    /// One to five cards held.
    Accumulating,
}

/// Collects the cards of one grid line for classification.
///
/// The hand starts [`HandState::Empty`], accepts up to five cards through
/// [`Hand::add`], and returns to empty on [`Hand::reset`].
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::Full`] if the hand already holds five cards.
    pub fn add(&mut self, card: Card) -> Result<(), HandError> {
        if self.is_full() {
            return Err(HandError::Full);
        }
        self.cards.push(card);
        Ok(())
    }

    /// Clears the hand.
    pub fn reset(&mut self) {
        self.cards.clear();
    }

    /// Classifies the cards currently held.
    ///
    /// An empty hand evaluates to [`HandCategory::Nothing`].
    ///
    /// # Errors
    ///
    /// Returns [`HandError::DuplicateCard`] if the same card was added twice.
    pub fn evaluate(&self) -> Result<HandCategory, HandError> {
        classify(&self.cards)
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> HandState {
        if self.cards.is_empty() {
            HandState::Empty
        } else {
            HandState::Accumulating
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand holds five cards.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= MAX_HAND_SIZE
    }
}
