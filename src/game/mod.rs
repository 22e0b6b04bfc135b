//! Game engine and state management.

use core::sync::atomic::{AtomicU32, Ordering};

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::board::{Grid, sweep};
use crate::card::{Card, Deck};
use crate::error::{HandError, NewGameError};
use crate::options::GameOptions;
use crate::result::SweepResult;

mod place;
pub mod state;

pub use state::GameState;

/// A poker solitaire game that deals cards and scores the grid.
///
/// The game owns the deck, the grid, and the card waiting to be placed.
/// Every game deals from a freshly shuffled deck; the high score survives
/// across games started with [`Game::new_game`].
pub struct Game {
    /// Cards left in the deck.
    pub deck: Mutex<Deck>,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// The board.
    pub grid: Mutex<Grid>,
    /// Card waiting to be placed.
    next_card: Mutex<Option<Card>>,
    /// Score computed by the latest sweep.
    last_score: Mutex<SweepResult>,
    /// Best final total seen so far.
    high_score: AtomicU32,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use pokersol::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert!(game.next_card().is_some());
    /// assert_eq!(game.cards_placed(), 0);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        Self::from_parts(options, deck, rng)
    }

    /// Creates a game that deals from `deck` instead of a shuffled one.
    ///
    /// Later games started with [`Game::new_game`] shuffle with `seed`.
    #[must_use]
    pub fn with_deck(options: GameOptions, deck: Deck, seed: u64) -> Self {
        Self::from_parts(options, deck, ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_parts(options: GameOptions, mut deck: Deck, rng: ChaCha8Rng) -> Self {
        let next_card = deck.deal();

        Self {
            deck: Mutex::new(deck),
            options,
            state: Mutex::new(GameState::Placing),
            grid: Mutex::new(Grid::new()),
            next_card: Mutex::new(next_card),
            last_score: Mutex::new(SweepResult::empty()),
            high_score: AtomicU32::new(options.high_score),
            rng: Mutex::new(rng),
        }
    }

    /// Starts a new game with a reshuffled deck and an empty grid.
    ///
    /// # Errors
    ///
    /// Returns an error if the current game is not over.
    pub fn new_game(&self) -> Result<(), NewGameError> {
        let mut state = self.state.lock();
        if *state != GameState::GameOver {
            return Err(NewGameError::InvalidState);
        }

        let mut deck = Deck::shuffled(&mut self.rng.lock());
        *self.next_card.lock() = deck.deal();
        *self.deck.lock() = deck;
        self.grid.lock().clear();
        *self.last_score.lock() = SweepResult::empty();
        *state = GameState::Placing;
        drop(state);

        debug!("new game, high score {}", self.high_score());
        Ok(())
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the card waiting to be placed.
    ///
    /// Returns `None` once the game is over or the deck ran out.
    pub fn next_card(&self) -> Option<Card> {
        *self.next_card.lock()
    }

    /// Returns a copy of the board.
    pub fn grid(&self) -> Grid {
        *self.grid.lock()
    }

    /// Returns the number of cards on the board.
    pub fn cards_placed(&self) -> usize {
        self.grid.lock().occupied()
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns the best final total reached so far.
    pub fn high_score(&self) -> u32 {
        self.high_score.load(Ordering::SeqCst)
    }

    /// Returns the score recorded by the latest placement.
    pub fn last_score(&self) -> SweepResult {
        self.last_score.lock().clone()
    }

    /// Scores the current board.
    ///
    /// # Errors
    ///
    /// Returns an error if a line holds the same card twice.
    pub fn score(&self) -> Result<SweepResult, HandError> {
        let grid = self.grid();
        sweep(&grid)
    }
}
