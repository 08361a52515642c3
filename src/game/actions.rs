use crate::card::Card;
use crate::error::{ActionError, ShoeError};
use crate::hand::Hand;
use crate::strategy::Action;

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn || self.current_hand >= self.hands.len() {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Returns whether the rules let `hand` double now.
    pub(super) fn double_allowed(&self, hand: &Hand) -> bool {
        hand.can_double() && (!hand.is_split() || self.rules.double_after_split)
    }

    /// Checks whether `hand` may be split now.
    ///
    /// Split hands may be split again until the hand cap is reached, except
    /// aces, which need `resplit_aces`.
    pub(super) fn split_allowed(&self, hand: &Hand) -> Result<(), ActionError> {
        if !hand.is_pair() {
            return Err(ActionError::CannotSplit);
        }

        if hand.is_split() && hand.cards()[0].is_ace() && !self.rules.resplit_aces {
            return Err(ActionError::CannotSplit);
        }

        if self.hands.len() >= self.rules.max_hands() {
            return Err(ActionError::MaxSplitsReached);
        }

        Ok(())
    }

    /// Returns whether the rules let `hand` surrender now.
    pub(super) fn surrender_allowed(&self, hand: &Hand) -> bool {
        self.rules.surrender && hand.len() == 2 && !hand.is_split() && !hand.is_doubled()
    }

    /// Player action: Hit (draw a card).
    ///
    /// Busting moves play to the next hand.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the shoe is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.deal_and_count()?;
        let index = self.current_hand;
        let hand = &mut self.hands[index];
        hand.add_card(card);
        hand.record(Action::Hit);
        log::debug!("hand {index} hits {card}, total {}", hand.value());

        if hand.is_bust() {
            self.advance();
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        let index = self.current_hand;
        self.hands[index].record(Action::Stand);
        log::debug!("hand {index} stands on {}", self.hands[index].value());
        self.advance();

        Ok(())
    }

    /// Player action: Double down (double bet, receive one card, then stand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the hand is not
    /// eligible to double down, or the shoe is empty.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        if !self.double_allowed(&self.hands[self.current_hand]) {
            return Err(ActionError::CannotDouble);
        }

        let card = self.deal_and_count()?;
        let index = self.current_hand;
        let hand = &mut self.hands[index];
        hand.double_bet();
        hand.add_card(card);
        hand.record(Action::Double);
        log::debug!("hand {index} doubles, draws {card}, total {}", hand.value());
        self.advance();

        Ok(card)
    }

    /// Player action: Split (split a pair into two hands).
    ///
    /// The second card moves to a new hand right after the current one with
    /// the same bet, and each hand receives one new card. Play stays on the
    /// original hand. Returns the new cards for the original and the new hand.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the hand cannot be
    /// split, the maximum splits are reached, or the shoe runs out.
    pub fn split(&mut self) -> Result<(Card, Card), ActionError> {
        self.ensure_player_turn()?;
        self.split_allowed(&self.hands[self.current_hand])?;

        if self.shoe.cards_remaining() < 2 {
            return Err(ShoeError::Exhausted.into());
        }

        let index = self.current_hand;
        let hand = &mut self.hands[index];
        let split_card = hand
            .take_split_card()
            .ok_or(ActionError::CannotSplit)?;
        hand.mark_split();
        hand.record(Action::Split);
        let mut new_hand = Hand::from_split(split_card, hand.bet());

        let first = self.deal_and_count()?;
        self.hands[index].add_card(first);
        let second = self.deal_and_count()?;
        new_hand.add_card(second);
        self.hands.insert(index + 1, new_hand);

        log::debug!("hand {index} split, now {} hands", self.hands.len());
        Ok((first, second))
    }

    /// Player action: Surrender (forfeit half the bet).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, surrender is
    /// disabled, or the hand no longer holds its original two cards.
    pub fn surrender(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        if !self.surrender_allowed(&self.hands[self.current_hand]) {
            return Err(ActionError::CannotSurrender);
        }

        let index = self.current_hand;
        let hand = &mut self.hands[index];
        hand.surrender();
        hand.record(Action::Surrender);
        log::debug!("hand {index} surrenders");
        self.advance();

        Ok(())
    }
}
