//! Round engine and state management.

use alloc::vec::Vec;

use crate::card::Card;
use crate::counting::{HiLoCounter, should_deviate};
use crate::error::{ConfigError, RoundError, ShoeError, StackError};
use crate::hand::{DealerHand, Hand};
use crate::rules::Rules;
use crate::shoe::Shoe;
use crate::strategy::{Action, BasicStrategy};

mod actions;
mod bet;
mod dealer;
mod insurance;
pub mod state;

pub use dealer::dealer_should_hit;
pub use state::GameState;

/// A single-seat blackjack table.
///
/// The game owns the shoe, the Hi-Lo counter, and the hands of the current
/// round. Every card that becomes visible is counted as it is dealt, and the
/// dealer's hole card is counted when it is revealed.
///
/// ```
/// use bjtrainer::{Game, GameState, Rules};
///
/// let mut game = Game::new(Rules::default(), 42).unwrap();
/// game.new_round().unwrap();
/// game.place_bet(25).unwrap();
/// game.deal_initial_cards().unwrap();
/// while game.state() == GameState::PlayerTurn {
///     game.stand().unwrap();
/// }
/// game.play_dealer_hand().unwrap();
/// let result = game.settle().unwrap();
/// assert_eq!(result.hands.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    rules: Rules,
    shoe: Shoe,
    counter: HiLoCounter,
    state: GameState,
    /// Player hands; grows on split.
    hands: Vec<Hand>,
    dealer_hand: DealerHand,
    /// Index of the hand awaiting a decision.
    current_hand: usize,
    /// True count when the bet was placed.
    bet_true_count: f64,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the rules are invalid.
    pub fn new(rules: Rules, seed: u64) -> Result<Self, ConfigError> {
        rules.validate()?;

        Ok(Self {
            rules,
            shoe: Shoe::new(rules.decks, rules.penetration, seed),
            counter: HiLoCounter::new(rules.decks),
            state: GameState::Idle,
            hands: Vec::new(),
            dealer_hand: DealerHand::new(),
            current_hand: 0,
            bet_true_count: 0.0,
        })
    }

    /// Replaces the house rules between rounds.
    ///
    /// Changing the deck count or penetration rebuilds the shoe and resets the
    /// count.
    ///
    /// # Errors
    ///
    /// Returns an error if the rules are invalid or a round is in progress.
    pub fn set_rules(&mut self, rules: Rules) -> Result<(), ConfigError> {
        rules.validate()?;
        if !matches!(self.state, GameState::Idle | GameState::Resolved) {
            return Err(ConfigError::InvalidState);
        }

        #[expect(
            clippy::float_cmp,
            reason = "penetration is compared against the value it was set from"
        )]
        let shoe_changed =
            rules.decks != self.rules.decks || rules.penetration != self.rules.penetration;
        self.rules = rules;
        if shoe_changed {
            self.shoe.reconfigure(rules.decks, rules.penetration);
            self.counter.reset(rules.decks);
        }
        log::info!("rules updated: {rules:?}");
        Ok(())
    }

    /// Reshuffles the shoe and resets the count.
    ///
    /// # Errors
    ///
    /// Returns an error if cards are out for a round in progress.
    pub fn reshuffle(&mut self) -> Result<(), RoundError> {
        if !self.state.is_between_rounds() {
            return Err(RoundError::InvalidState);
        }
        self.shoe.reset();
        self.counter.reset(self.rules.decks);
        log::info!("shoe reshuffled ({} decks)", self.rules.decks);
        Ok(())
    }

    /// Reshuffles and stacks `top` on top of the shoe, first element dealt
    /// first. The count is reset as for any reshuffle.
    ///
    /// # Errors
    ///
    /// Returns an error if cards are out for a round in progress or the shoe
    /// cannot supply one of the cards.
    pub fn stack_shoe(&mut self, top: &[Card]) -> Result<(), StackError> {
        if !self.state.is_between_rounds() {
            return Err(StackError::InvalidState);
        }
        self.shoe.stack(top)?;
        self.counter.reset(self.rules.decks);
        Ok(())
    }

    /// Starts a new round.
    ///
    /// Reshuffles first when the cut card has been reached. Returns `true`
    /// if a reshuffle was performed.
    ///
    /// # Errors
    ///
    /// Returns an error if the current round has not been resolved.
    pub fn new_round(&mut self) -> Result<bool, RoundError> {
        if !self.state.is_between_rounds() {
            return Err(RoundError::InvalidState);
        }

        let reshuffled = self.shoe.needs_shuffle();
        if reshuffled {
            self.reshuffle()?;
        }

        self.hands = alloc::vec![Hand::new(0)];
        self.dealer_hand = DealerHand::new();
        self.current_hand = 0;
        self.bet_true_count = 0.0;
        self.state = GameState::Betting;
        Ok(reshuffled)
    }

    /// Deals one visible card from the shoe and counts it.
    ///
    /// Every face-up card the engine deals goes through here, so the count
    /// never drifts from the cards on the table.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe is empty.
    pub fn deal_and_count(&mut self) -> Result<Card, ShoeError> {
        let card = self.shoe.deal_card()?;
        self.counter.count_card(&card);
        Ok(card)
    }

    /// Advances past the current hand, handing over to the dealer after the
    /// last one.
    fn advance(&mut self) {
        self.current_hand += 1;
        if self.current_hand >= self.hands.len() {
            self.state = GameState::DealerTurn;
        }
    }

    /// Returns whether every player hand has been played.
    #[must_use]
    pub fn is_round_complete(&self) -> bool {
        self.current_hand >= self.hands.len()
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the house rules.
    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the counter.
    #[must_use]
    pub const fn counter(&self) -> &HiLoCounter {
        &self.counter
    }

    /// Returns the running count.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.counter.running_count()
    }

    /// Returns the true count for the cards left in the shoe.
    #[must_use]
    pub fn true_count(&self) -> f64 {
        self.counter.true_count(self.shoe.decks_remaining())
    }

    /// Returns the player's hands.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the index of the hand awaiting a decision.
    #[must_use]
    pub const fn current_hand_index(&self) -> usize {
        self.current_hand
    }

    /// Returns the hand awaiting a decision, if any.
    #[must_use]
    pub fn current_hand(&self) -> Option<&Hand> {
        if self.state == GameState::PlayerTurn {
            self.hands.get(self.current_hand)
        } else {
            None
        }
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Returns the dealer's up card once dealt.
    #[must_use]
    pub fn dealer_up_card(&self) -> Option<Card> {
        self.dealer_hand.up_card()
    }

    /// Returns the basic strategy action for the current hand, with double,
    /// split, and surrender permissions taken from the hand and the rules.
    #[must_use]
    pub fn recommended_action(&self, strategy: &BasicStrategy) -> Option<Action> {
        let hand = self.current_hand()?;
        let up_card = self.dealer_up_card()?;
        Some(strategy.action(
            hand,
            up_card,
            self.double_allowed(hand),
            self.split_allowed(hand).is_ok(),
            self.surrender_allowed(hand),
        ))
    }

    /// Returns the index play for the current hand at the current true count.
    ///
    /// Plays that are not available right now (insurance after it has been
    /// taken, a split the hand cannot make) are skipped.
    #[must_use]
    pub fn index_play(&self) -> Option<Action> {
        let hand = self.current_hand()?;
        let up_card = self.dealer_up_card()?;
        let action = should_deviate(
            self.true_count(),
            hand.value(),
            up_card.value(),
            hand.is_soft(),
        )?;

        let available = match action {
            Action::Insure => self.insurance_available(hand),
            Action::Split => {
                hand.is_pair()
                    && hand.cards()[0].rank.is_ten_valued()
                    && self.split_allowed(hand).is_ok()
            }
            _ => true,
        };
        available.then_some(action)
    }
}
