//! A blackjack rules engine, basic strategy resolver, and Hi-Lo counting
//! engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs single-seat rounds under
//! configurable [`Rules`], a [`BasicStrategy`] resolver for the correct play,
//! and a [`HiLoCounter`] with index plays and [`BettingStrategy`] bet sizing.
//!
//! # Example
//!
//! ```
//! use bjtrainer::{BasicStrategy, Game, GameState, Rules};
//!
//! let rules = Rules::default();
//! let strategy = BasicStrategy::from_rules(&rules);
//! let mut game = Game::new(rules, 7).unwrap();
//!
//! game.new_round().unwrap();
//! game.place_bet(10).unwrap();
//! game.deal_initial_cards().unwrap();
//! if game.state() == GameState::PlayerTurn {
//!     let advice = game.recommended_action(&strategy);
//!     assert!(advice.is_some());
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod counting;
pub mod error;
pub mod game;
pub mod hand;
mod math;
pub mod result;
pub mod rules;
pub mod shoe;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use counting::{BettingStrategy, HiLoCounter, IndexPlay, should_deviate};
pub use error::{
    ActionError, BetError, ConfigError, DealError, RoundError, ShoeError, ShowdownError,
    StackError,
};
pub use game::{Game, GameState, dealer_should_hit};
pub use hand::{DealerHand, Hand};
pub use result::{HandOutcome, HandResult, RoundResult};
pub use rules::Rules;
pub use shoe::Shoe;
pub use strategy::{Action, BasicStrategy};
