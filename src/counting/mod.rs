//! Hi-Lo card counting, index plays, and count-based bet sizing.

use crate::card::{Card, DECK_SIZE};
use crate::math;

mod betting;
mod index;

pub use betting::{BettingStrategy, KELLY_VARIANCE};
pub use index::{INDEX_PLAYS, IndexPlay, should_deviate};

/// Player edge gained per point of true count.
pub const EDGE_PER_TRUE_COUNT: f64 = 0.005;

/// Hi-Lo running count for one shoe.
///
/// ```
/// use bjtrainer::{Card, HiLoCounter, Rank, Suit};
///
/// let mut counter = HiLoCounter::new(6);
/// counter.count_card(&Card::new(Suit::Hearts, Rank::Five));
/// counter.count_card(&Card::new(Suit::Clubs, Rank::King));
/// counter.count_card(&Card::new(Suit::Spades, Rank::Three));
/// assert_eq!(counter.running_count(), 1);
/// assert_eq!(counter.true_count(0.5), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiLoCounter {
    running_count: i32,
    cards_seen: u32,
    starting_decks: u8,
}

impl HiLoCounter {
    /// Creates a counter for a fresh shoe of `starting_decks` decks.
    #[must_use]
    pub const fn new(starting_decks: u8) -> Self {
        Self {
            running_count: 0,
            cards_seen: 0,
            starting_decks,
        }
    }

    /// Starts over for a fresh shoe.
    pub const fn reset(&mut self, starting_decks: u8) {
        *self = Self::new(starting_decks);
    }

    /// Counts one card and returns its tag.
    pub fn count_card(&mut self, card: &Card) -> i32 {
        let tag = card.hi_lo_value();
        self.running_count += tag;
        self.cards_seen += 1;
        log::trace!("counted {card} ({tag:+}), running count {}", self.running_count);
        tag
    }

    /// Counts several cards and returns the sum of their tags.
    pub fn count_cards<'a>(&mut self, cards: impl IntoIterator<Item = &'a Card>) -> i32 {
        cards.into_iter().map(|card| self.count_card(card)).sum()
    }

    /// Returns the running count.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.running_count
    }

    /// Returns how many cards have been counted since the last reset.
    #[must_use]
    pub const fn cards_seen(&self) -> u32 {
        self.cards_seen
    }

    /// Returns the deck count the counter was reset for.
    #[must_use]
    pub const fn starting_decks(&self) -> u8 {
        self.starting_decks
    }

    /// Converts the running count to a true count.
    ///
    /// Returns 0 when no decks remain.
    #[must_use]
    pub fn true_count(&self, decks_remaining: f64) -> f64 {
        if decks_remaining <= 0.0 {
            return 0.0;
        }
        f64::from(self.running_count) / decks_remaining
    }

    /// Estimates decks remaining from the cards the counter has seen.
    #[must_use]
    pub fn estimated_decks_remaining(&self) -> f64 {
        let total = u32::from(self.starting_decks) * DECK_SIZE as u32;
        Self::decks_remaining_from_cards(total.saturating_sub(self.cards_seen) as usize)
    }

    /// Converts a card count to decks.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    pub fn decks_remaining_from_cards(cards_remaining: usize) -> f64 {
        cards_remaining as f64 / DECK_SIZE as f64
    }

    /// Estimated player edge at a true count, as a fraction.
    #[must_use]
    pub const fn estimate_edge(true_count: f64) -> f64 {
        true_count * EDGE_PER_TRUE_COUNT
    }

    /// Recommended bet in table-minimum units for a true count.
    ///
    /// ```
    /// use bjtrainer::HiLoCounter;
    ///
    /// assert_eq!(HiLoCounter::betting_index(-3.0), 1);
    /// assert_eq!(HiLoCounter::betting_index(3.7), 4);
    /// assert_eq!(HiLoCounter::betting_index(9.0), 8);
    /// ```
    #[must_use]
    pub fn betting_index(true_count: f64) -> u32 {
        match math::floor(true_count) as i64 {
            i64::MIN..=1 => 1,
            2 => 2,
            3 => 4,
            4 => 6,
            _ => 8,
        }
    }
}

impl Default for HiLoCounter {
    fn default() -> Self {
        Self::new(6)
    }
}
