//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors raised by a malformed [`Rules`](crate::Rules) configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Deck count is zero.
    #[error("deck count must be positive")]
    NoDecks,
    /// Blackjack payout is neither 3:2 nor 6:5.
    #[error("blackjack payout must be 1.5 or 1.2")]
    UnsupportedPayout,
    /// Bet limits are not positive or minimum exceeds maximum.
    #[error("bet limits must be positive with min_bet <= max_bet")]
    InvalidBetLimits,
    /// Penetration is outside (0, 1].
    #[error("penetration must be in (0, 1]")]
    InvalidPenetration,
    /// Rules can only change between rounds.
    #[error("rules can only change between rounds")]
    InvalidState,
}

/// Errors raised by the shoe while dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    Exhausted,
}

/// Errors raised while stacking the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// The shoe has no copy of this card left to place on top.
    #[error("card {0} is not available in the shoe")]
    Unavailable(Card),
    /// Cards are out for a round in progress.
    #[error("cannot stack the shoe during a round")]
    InvalidState,
}

/// Errors that can occur when starting a round or reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// A round is still in progress.
    #[error("a round is still in progress")]
    InvalidState,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount outside the table limits.
    #[error("bet must be between {min} and {max}")]
    OutOfRange {
        /// Table minimum.
        min: u32,
        /// Table maximum.
        max: u32,
    },
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// No bet has been placed.
    #[error("no bet has been placed")]
    NoBet,
    /// The shoe ran out mid-deal.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Maximum splits reached.
    #[error("maximum splits reached")]
    MaxSplitsReached,
    /// Cannot surrender at this point.
    #[error("cannot surrender at this point")]
    CannotSurrender,
    /// Insurance is only offered against an unrevealed ace.
    #[error("insurance is not available")]
    CannotInsure,
    /// The shoe ran out.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that can occur during dealer play and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// The shoe ran out while the dealer had to draw.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}
