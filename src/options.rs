//! Game configuration options.

/// Configuration options for a poker solitaire game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pokersol::GameOptions;
///
/// let options = GameOptions::default()
///     .with_live_scoring(false)
///     .with_high_score(120);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Whether the board is re-scored after every placement. When disabled,
    /// the score is only computed once the grid is full.
    pub live_scoring: bool,
    /// High score carried over from earlier sessions.
    pub high_score: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            live_scoring: true,
            high_score: 0,
        }
    }
}

impl GameOptions {
    /// Sets whether the board is re-scored after every placement.
    ///
    /// # Example
    ///
    /// ```
    /// use pokersol::GameOptions;
    ///
    /// let options = GameOptions::default().with_live_scoring(false);
    /// assert_eq!(options.live_scoring, false);
    /// ```
    #[must_use]
    pub const fn with_live_scoring(mut self, live: bool) -> Self {
        self.live_scoring = live;
        self
    }

    /// Sets the starting high score.
    ///
    /// # Example
    ///
    /// ```
    /// use pokersol::GameOptions;
    ///
    /// let options = GameOptions::default().with_high_score(300);
    /// assert_eq!(options.high_score, 300);
    /// ```
    #[must_use]
    pub const fn with_high_score(mut self, score: u32) -> Self {
        self.high_score = score;
        self
    }
}
