//! Game state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No round has started yet.
    Idle,
    /// Accepting the bet for the next round.
    Betting,
    /// Waiting for player decisions on the current hand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and hands can be resolved.
    Resolved,
}

impl GameState {
    /// Returns whether no cards are out for a round in this state.
    #[must_use]
    pub const fn is_between_rounds(self) -> bool {
        matches!(self, Self::Idle | Self::Betting | Self::Resolved)
    }
}
