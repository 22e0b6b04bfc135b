//! Card types and deck utilities.

use alloc::vec::Vec;
use core::fmt;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits, in index order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the suit for an index in `0..4`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] if the index is out of range.
    pub const fn from_index(index: u8) -> Result<Self, CardError> {
        match index {
            0 => Ok(Self::Hearts),
            1 => Ok(Self::Diamonds),
            2 => Ok(Self::Clubs),
            3 => Ok(Self::Spades),
            _ => Err(CardError::InvalidSuit(index)),
        }
    }

    /// Returns the index of the suit.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Spades => "Spades",
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Ranks run from 2 to 14, with 11 = Jack, 12 = Queen, 13 = King and
/// 14 = Ace. A card can only be built through the validating constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCard"))]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Lowest legal rank.
    pub const MIN_RANK: u8 = 2;
    /// Jack.
    pub const JACK: u8 = 11;
    /// Queen.
    pub const QUEEN: u8 = 12;
    /// King.
    pub const KING: u8 = 13;
    /// Ace, always ranked high outside of the wheel straight.
    pub const ACE: u8 = 14;

    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside `2..=14`.
    pub const fn new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if rank < Self::MIN_RANK || rank > Self::ACE {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self { suit, rank })
    }

    /// Creates a card from a rank and a numeric suit index in `0..4`.
    ///
    /// # Errors
    ///
    /// Returns an error if either the rank or the suit is out of range.
    pub const fn from_indices(rank: u8, suit: u8) -> Result<Self, CardError> {
        match Suit::from_index(suit) {
            Ok(suit) => Self::new(suit, rank),
            Err(err) => Err(err),
        }
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank as a word: `"2"` to `"10"`, `"Jack"`, `"Queen"`,
    /// `"King"` or `"Ace"`.
    #[must_use]
    pub const fn rank_name(&self) -> &'static str {
        match self.rank {
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            Self::JACK => "Jack",
            Self::QUEEN => "Queen",
            Self::KING => "King",
            _ => "Ace",
        }
    }

    /// Returns the suit as a word.
    #[must_use]
    pub const fn suit_name(&self) -> &'static str {
        self.suit.name()
    }

    /// Returns a compact label such as `"10H"` or `"AS"`.
    #[must_use]
    pub fn short_name(&self) -> alloc::string::String {
        let rank = if self.rank > 10 {
            &self.rank_name()[..1]
        } else {
            self.rank_name()
        };
        let suit = &self.suit_name()[..1];
        alloc::format!("{rank}{suit}")
    }
}

/// Unchecked wire form of a [`Card`], validated on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCard {
    suit: Suit,
    rank: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCard> for Card {
    type Error = CardError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Self::new(raw.suit, raw.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank_name(), self.suit_name())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// A shuffled deck of the 52 standard cards.
///
/// Cards are dealt from the top until the deck is exhausted. The order is
/// fully determined by the seed.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a deck shuffled with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    /// Creates a deck shuffled with an existing generator.
    pub(crate) fn shuffled(rng: &mut ChaCha8Rng) -> Self {
        let mut cards = Self::standard();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Returns the 52 cards in suit-major order, unshuffled.
    #[must_use]
    pub fn standard() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Card::MIN_RANK..=Card::ACE {
                cards.push(Card { suit, rank });
            }
        }

        cards
    }

    /// Creates a deck that deals `cards` in the given order.
    #[must_use]
    pub fn from_draws(cards: &[Card]) -> Self {
        let mut cards = cards.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Deals the top card, or `None` when the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
