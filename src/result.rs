//! Round result types for settlement.

extern crate alloc;

use alloc::vec::Vec;

use crate::strategy::Action;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses (player busts or dealer has higher value).
    Lose,
    /// Push (tie).
    Push,
    /// Player has blackjack.
    Blackjack,
    /// Player surrendered.
    Surrendered,
}

/// Result for a single hand, carrying every field a session log records.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The final bet on the hand, including any double.
    pub bet: u32,
    /// Signed profit or loss.
    pub profit: f64,
    /// The player's hand value.
    pub player_value: u8,
    /// The dealer's hand value.
    pub dealer_value: u8,
    /// Whether the hand was a natural.
    pub blackjack: bool,
    /// Whether the hand busted.
    pub bust: bool,
    /// Whether the hand was surrendered.
    pub surrendered: bool,
    /// Whether the hand was doubled.
    pub doubled: bool,
    /// Whether the hand came from a split.
    pub split: bool,
    /// Whether insurance was taken.
    pub insured: bool,
    /// Decisions taken on the hand, in order.
    pub actions: Vec<Action>,
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult {
    /// Results for each hand.
    pub hands: Vec<HandResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
    /// Sum of the hands' profit.
    pub net: f64,
    /// Running count after every card of the round was seen.
    pub running_count: i32,
    /// True count when the bet was placed.
    pub bet_true_count: f64,
    /// True count after every card of the round was seen.
    pub true_count: f64,
}
