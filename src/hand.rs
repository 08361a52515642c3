//! Player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::strategy::Action;

/// Returns `(value, is_soft)` for a set of cards.
///
/// Every ace starts at 11 and is reduced to 1 while the total is over 21, so
/// the value is the best total not over 21 when one exists and the smallest
/// bust total otherwise. The hand is soft when an ace is still worth 11.
fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value, is_soft)
}

/// A player's hand.
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Bet amount for this hand.
    bet: u32,
    /// Whether this hand took part in a split.
    is_split: bool,
    is_doubled: bool,
    is_surrendered: bool,
    is_insured: bool,
    /// Decisions taken on this hand, in order.
    actions: Vec<Action>,
}

impl Hand {
    /// Creates a new empty hand with the given bet.
    #[must_use]
    pub const fn new(bet: u32) -> Self {
        Self {
            cards: Vec::new(),
            bet,
            is_split: false,
            is_doubled: false,
            is_surrendered: false,
            is_insured: false,
            actions: Vec::new(),
        }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub fn with_cards(bet: u32, cards: &[Card]) -> Self {
        let mut hand = Self::new(bet);
        hand.cards.extend_from_slice(cards);
        hand
    }

    /// Creates a new hand from a split with a single card.
    #[must_use]
    pub fn from_split(card: Card, bet: u32) -> Self {
        let mut hand = Self::with_cards(bet, &[card]);
        hand.is_split = true;
        hand
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the bet amount for this hand.
    #[must_use]
    pub const fn bet(&self) -> u32 {
        self.bet
    }

    /// Sets the bet amount.
    pub const fn set_bet(&mut self, bet: u32) {
        self.bet = bet;
    }

    /// Returns whether this hand came from a split.
    #[must_use]
    pub const fn is_split(&self) -> bool {
        self.is_split
    }

    /// Returns whether the hand was doubled.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.is_doubled
    }

    /// Returns whether the hand was surrendered.
    #[must_use]
    pub const fn is_surrendered(&self) -> bool {
        self.is_surrendered
    }

    /// Returns whether insurance was taken on the hand.
    #[must_use]
    pub const fn is_insured(&self) -> bool {
        self.is_insured
    }

    /// Marks the hand as split.
    pub const fn mark_split(&mut self) {
        self.is_split = true;
    }

    /// Doubles the bet and marks the hand as doubled.
    pub const fn double_bet(&mut self) {
        self.bet = self.bet.saturating_mul(2);
        self.is_doubled = true;
    }

    /// Marks the hand as surrendered.
    pub const fn surrender(&mut self) {
        self.is_surrendered = true;
    }

    /// Marks the hand as insured.
    pub const fn insure(&mut self) {
        self.is_insured = true;
    }

    /// Returns the decisions recorded on this hand.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub(crate) fn record(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is exactly two cards of the same rank.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }

    /// Returns whether the hand is a blackjack: exactly two cards totalling
    /// 21. A split ace drawing a ten counts too.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand is an unsplit pair.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.is_pair() && !self.is_split
    }

    /// Returns whether the hand can still be doubled.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.cards.len() == 2 && !self.is_doubled
    }

    /// Returns whether the dealer's result still matters for this hand.
    #[must_use]
    pub fn is_live(&self) -> bool {
        !self.is_surrendered && !self.is_bust() && !self.is_blackjack()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the second card (for splitting).
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }
}

/// The dealer's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Creates a dealer hand holding the given cards, hole card face down.
    #[must_use]
    pub fn with_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Returns the face-down second card.
    #[must_use]
    pub fn hole_card(&self) -> Option<Card> {
        self.cards.get(1).copied()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible value (only up card if hole not revealed).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.value()
        } else {
            self.up_card().map_or(0, Card::value)
        }
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}
