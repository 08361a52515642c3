//! Multi-deck shoe with a cut card and discard pile.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{self, Card, DECK_SIZE};
use crate::error::{ShoeError, StackError};

/// A shuffled shoe of one or more decks.
///
/// Cards leave the shoe only through [`Shoe::deal_card`], which moves them to
/// the discard pile, so `cards_remaining() + discards().len()` always equals
/// the full shoe size between resets.
#[derive(Debug, Clone)]
pub struct Shoe {
    decks: u8,
    penetration: f64,
    /// Undealt cards; the top of the shoe is the end of the vector.
    cards: Vec<Card>,
    discards: Vec<Card>,
    cut_card_index: usize,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates and shuffles a shoe with the given number of decks.
    ///
    /// The same seed always produces the same sequence of shuffles.
    #[must_use]
    pub fn new(decks: u8, penetration: f64, seed: u64) -> Self {
        let mut shoe = Self {
            decks,
            penetration,
            cards: Vec::new(),
            discards: Vec::new(),
            cut_card_index: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.reset();
        shoe
    }

    fn fresh_cards(decks: u8) -> Vec<Card> {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);
        for _ in 0..decks {
            cards.extend(card::deck());
        }
        cards
    }

    fn place_cut_card(&mut self) {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let remaining_at_cut = self.total_cards() as f64 * (1.0 - self.penetration);
        self.cut_card_index = remaining_at_cut as usize;
    }

    /// Gathers every card, reshuffles, and places the cut card.
    pub fn reset(&mut self) {
        let mut cards = Self::fresh_cards(self.decks);
        cards.shuffle(&mut self.rng);
        self.cards = cards;
        self.discards.clear();
        self.place_cut_card();
    }

    /// Changes the shoe size or penetration and reshuffles.
    pub fn reconfigure(&mut self, decks: u8, penetration: f64) {
        self.decks = decks;
        self.penetration = penetration;
        self.reset();
    }

    /// Reshuffles and places `top` on top of the shoe, first element dealt
    /// first.
    ///
    /// The stacked cards are taken out of the shoe's own decks, so the shoe
    /// still holds exactly `decks * 52` cards.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Unavailable`] if the shoe does not contain enough
    /// copies of a requested card. The shoe is left untouched in that case.
    pub fn stack(&mut self, top: &[Card]) -> Result<(), StackError> {
        let mut pool = Self::fresh_cards(self.decks);
        for &wanted in top {
            let position = pool
                .iter()
                .position(|&card| card == wanted)
                .ok_or(StackError::Unavailable(wanted))?;
            pool.swap_remove(position);
        }

        pool.shuffle(&mut self.rng);
        pool.extend(top.iter().rev());
        self.cards = pool;
        self.discards.clear();
        self.place_cut_card();
        Ok(())
    }

    /// Deals the top card, moving it to the discard pile.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`] if the shoe is empty.
    pub fn deal_card(&mut self) -> Result<Card, ShoeError> {
        let card = self.cards.pop().ok_or(ShoeError::Exhausted)?;
        self.discards.push(card);
        Ok(card)
    }

    /// Returns the number of decks in the shoe.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the configured penetration.
    #[must_use]
    pub const fn penetration(&self) -> f64 {
        self.penetration
    }

    /// Returns the size of the full shoe.
    #[must_use]
    pub const fn total_cards(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the dealt cards, oldest first.
    #[must_use]
    pub fn discards(&self) -> &[Card] {
        &self.discards
    }

    /// Returns the position of the cut card, counted in remaining cards.
    #[must_use]
    pub const fn cut_card_index(&self) -> usize {
        self.cut_card_index
    }

    /// Returns the number of decks left to deal.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    pub fn decks_remaining(&self) -> f64 {
        self.cards_remaining() as f64 / DECK_SIZE as f64
    }

    /// Returns whether the cut card has been reached.
    #[must_use]
    pub fn needs_shuffle(&self) -> bool {
        self.cards_remaining() <= self.cut_card_index
    }
}
