//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the next card to be placed.
    Placing,
    /// All 25 cells are filled and the final score is known.
    GameOver,
}
