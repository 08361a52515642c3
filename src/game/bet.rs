use crate::error::{BetError, DealError, ShoeError};

use super::{Game, GameState};

impl Game {
    /// Places the bet for the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state or the amount is
    /// outside the table limits.
    pub fn place_bet(&mut self, amount: u32) -> Result<(), BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        if amount < self.rules.min_bet || amount > self.rules.max_bet {
            return Err(BetError::OutOfRange {
                min: self.rules.min_bet,
                max: self.rules.max_bet,
            });
        }

        self.bet_true_count = self.true_count();
        self.hands[0].set_bet(amount);
        log::debug!("bet {amount} at true count {:+.2}", self.bet_true_count);

        Ok(())
    }

    /// Deals the opening cards: player, dealer, player, dealer.
    ///
    /// The player's cards and the dealer's up card are counted; the hole card
    /// stays uncounted until the dealer reveals it. A player natural ends the
    /// player's turn straight away unless insurance is offered, in which case
    /// the player may insure (take even money) before standing.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, no bet has been
    /// placed, or there are not enough cards in the shoe.
    pub fn deal_initial_cards(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Betting {
            return Err(DealError::InvalidState);
        }

        if self.hands[0].bet() == 0 {
            return Err(DealError::NoBet);
        }

        if self.shoe.cards_remaining() < 4 {
            return Err(ShoeError::Exhausted.into());
        }

        let card = self.deal_and_count()?;
        self.hands[0].add_card(card);

        let up_card = self.deal_and_count()?;
        self.dealer_hand.add_card(up_card);

        let card = self.deal_and_count()?;
        self.hands[0].add_card(card);

        let hole_card = self.shoe.deal_card()?;
        self.dealer_hand.add_card(hole_card);

        self.current_hand = 0;
        self.state = GameState::PlayerTurn;
        log::debug!(
            "dealt {} {} against {up_card}",
            self.hands[0].cards()[0],
            self.hands[0].cards()[1]
        );

        if self.hands[0].is_blackjack() && !self.insurance_available(&self.hands[0]) {
            self.advance();
        }

        Ok(())
    }
}
