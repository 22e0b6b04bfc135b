use core::sync::atomic::Ordering;

use log::debug;

use crate::board::{Grid, sweep};
use crate::error::PlaceError;
use crate::result::Placement;

use super::{Game, GameState};

impl Game {
    /// Places the waiting card at `(row, col)` and deals the next one.
    ///
    /// The board is re-scored after the placement when live scoring is
    /// enabled, and always on the placement that fills the grid. Filling
    /// the grid ends the game and updates the high score.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the position is outside the
    /// grid or already occupied, no card is waiting, or scoring fails. On
    /// error the board is left unchanged.
    pub fn place(&self, row: usize, col: usize) -> Result<Placement, PlaceError> {
        let mut state = self.state.lock();
        if *state != GameState::Placing {
            return Err(PlaceError::InvalidState);
        }

        if !Grid::contains(row, col) {
            return Err(PlaceError::OutOfBounds { row, col });
        }

        let mut grid = self.grid.lock();
        if grid.get(row, col).is_some() {
            return Err(PlaceError::Occupied { row, col });
        }

        let mut next_card = self.next_card.lock();
        let card = (*next_card).ok_or(PlaceError::NoCard)?;

        let mut placed = *grid;
        placed.set(row, col, Some(card));
        let game_over = placed.is_full();

        let score = if self.options.live_scoring || game_over {
            Some(sweep(&placed)?)
        } else {
            None
        };

        *grid = placed;
        drop(grid);

        if game_over {
            *next_card = None;
            *state = GameState::GameOver;
        } else {
            *next_card = self.deck.lock().deal();
        }
        drop(next_card);
        drop(state);

        if let Some(score) = &score {
            *self.last_score.lock() = score.clone();
            debug!("placed {card} at ({row}, {col}), total {}", score.total);
        } else {
            debug!("placed {card} at ({row}, {col})");
        }

        if game_over {
            let total = score.as_ref().map_or(0, |score| score.total);
            let best = self.high_score.fetch_max(total, Ordering::SeqCst).max(total);
            debug!("game over with {total} points, high score {best}");
        }

        Ok(Placement {
            card,
            row,
            col,
            score,
            game_over,
        })
    }
}
