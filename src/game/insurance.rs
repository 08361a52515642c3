use crate::error::ActionError;
use crate::hand::Hand;
use crate::strategy::Action;

use super::Game;

impl Game {
    /// Returns whether `hand` can still take insurance.
    pub(super) fn insurance_available(&self, hand: &Hand) -> bool {
        !self.dealer_hand.is_hole_revealed()
            && self.dealer_hand.up_card().is_some_and(|card| card.is_ace())
            && !hand.is_insured()
    }

    /// Returns whether insurance is currently being offered on the current
    /// hand.
    #[must_use]
    pub fn is_insurance_offered(&self) -> bool {
        self.current_hand()
            .is_some_and(|hand| self.insurance_available(hand))
    }

    /// Takes insurance on the current hand.
    ///
    /// Insurance is half the hand's bet and pays 2:1 when the dealer has
    /// blackjack. Play stays on the same hand.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the dealer is not
    /// showing an ace, the hole card is revealed, or the hand is already
    /// insured.
    pub fn insure(&mut self) -> Result<(), ActionError> {
        let index = self.current_hand;
        let hand = self.current_hand().ok_or(ActionError::InvalidState)?;

        if !self.insurance_available(hand) {
            return Err(ActionError::CannotInsure);
        }

        let hand = &mut self.hands[index];
        hand.insure();
        hand.record(Action::Insure);
        log::debug!("hand {index} insured");

        Ok(())
    }
}
