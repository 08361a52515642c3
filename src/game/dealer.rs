use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::hand::{DealerHand, Hand};
use crate::result::{HandOutcome, HandResult, RoundResult};

use super::{Game, GameState};

/// Returns whether the dealer draws another card.
///
/// The dealer stands on 18 or more and on hard 17. Soft 17 is hit only when
/// `hits_soft_17` is set. Anything below 17 is hit.
#[must_use]
pub fn dealer_should_hit(dealer: &DealerHand, hits_soft_17: bool) -> bool {
    match dealer.value() {
        0..17 => true,
        17 => hits_soft_17 && dealer.is_soft(),
        _ => false,
    }
}

impl Game {
    /// Dealer plays their hand according to the rules.
    ///
    /// The hole card is revealed and counted once. If no player hand is still
    /// waiting on the dealer (all busted, surrendered, or naturals), the dealer
    /// does not draw.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the shoe is
    /// empty while the dealer must draw.
    pub fn play_dealer_hand(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        // A retry after the shoe ran out must not count the hole card twice.
        if !self.dealer_hand.is_hole_revealed() {
            self.dealer_hand.reveal_hole();
            if let Some(hole_card) = self.dealer_hand.hole_card() {
                self.counter.count_card(&hole_card);
            }
        }

        let mut drawn_cards = Vec::new();
        if self.hands.iter().any(Hand::is_live) {
            while dealer_should_hit(&self.dealer_hand, self.rules.dealer_hits_soft_17) {
                let card = self.deal_and_count()?;
                self.dealer_hand.add_card(card);
                drawn_cards.push(card);
            }
        }

        log::debug!(
            "dealer finishes on {} after drawing {} cards",
            self.dealer_hand.value(),
            drawn_cards.len()
        );
        self.state = GameState::Resolved;

        Ok(drawn_cards)
    }

    /// Returns the signed profit or loss of `hand` against the dealer's
    /// current hand.
    ///
    /// Checked in order: surrender loses half the bet; a bust loses the bet;
    /// a natural pushes against a dealer natural and otherwise pays the
    /// blackjack ratio; a dealer bust pays even money; a dealer natural takes
    /// the bet, or half of it when the hand is insured; otherwise the higher
    /// total wins even money and equal totals push.
    #[must_use]
    pub fn resolve_hand(&self, hand: &Hand) -> f64 {
        let bet = f64::from(hand.bet());

        if hand.is_surrendered() {
            return -bet * 0.5;
        }

        if hand.is_bust() {
            return -bet;
        }

        if hand.is_blackjack() {
            return if self.dealer_hand.is_blackjack() {
                0.0
            } else {
                bet * self.rules.blackjack_pays
            };
        }

        if self.dealer_hand.is_bust() {
            return bet;
        }

        if self.dealer_hand.is_blackjack() {
            return if hand.is_insured() { -bet * 0.5 } else { -bet };
        }

        let player_value = hand.value();
        let dealer_value = self.dealer_hand.value();
        if player_value > dealer_value {
            bet
        } else if player_value < dealer_value {
            -bet
        } else {
            0.0
        }
    }

    /// Resolves every hand and returns the round's results.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer has not finished the round.
    pub fn settle(&self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::Resolved {
            return Err(ShowdownError::InvalidState);
        }

        let dealer_value = self.dealer_hand.value();
        let hands: Vec<HandResult> = self
            .hands
            .iter()
            .enumerate()
            .map(|(hand_index, hand)| {
                let profit = self.resolve_hand(hand);
                let outcome = if hand.is_surrendered() {
                    HandOutcome::Surrendered
                } else if profit > 0.0 && hand.is_blackjack() {
                    HandOutcome::Blackjack
                } else if profit > 0.0 {
                    HandOutcome::Win
                } else if profit < 0.0 {
                    HandOutcome::Lose
                } else {
                    HandOutcome::Push
                };

                HandResult {
                    hand_index,
                    outcome,
                    bet: hand.bet(),
                    profit,
                    player_value: hand.value(),
                    dealer_value,
                    blackjack: hand.is_blackjack(),
                    bust: hand.is_bust(),
                    surrendered: hand.is_surrendered(),
                    doubled: hand.is_doubled(),
                    split: hand.is_split(),
                    insured: hand.is_insured(),
                    actions: hand.actions().to_vec(),
                }
            })
            .collect();

        let net: f64 = hands.iter().map(|hand| hand.profit).sum();
        log::debug!("round settled, net {net:+}");

        Ok(RoundResult {
            hands,
            dealer_value,
            dealer_bust: self.dealer_hand.is_bust(),
            dealer_blackjack: self.dealer_hand.is_blackjack(),
            net,
            running_count: self.running_count(),
            bet_true_count: self.bet_true_count,
            true_count: self.true_count(),
        })
    }
}
