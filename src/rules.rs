//! House rule configuration.

use crate::error::ConfigError;

/// 3:2 blackjack payout.
pub const PAYS_THREE_TO_TWO: f64 = 1.5;
/// 6:5 blackjack payout.
pub const PAYS_SIX_TO_FIVE: f64 = 1.2;

/// House rules for a blackjack table.
///
/// Use the builder pattern to customize rules:
///
/// ```
/// use bjtrainer::Rules;
///
/// let rules = Rules::default()
///     .with_decks(8)
///     .with_dealer_hits_soft_17(true)
///     .with_blackjack_pays(1.2);
/// assert!(rules.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rules {
    /// Number of decks.
    pub decks: u8,
    /// Whether the dealer hits soft 17 (H17). `false` is S17.
    pub dealer_hits_soft_17: bool,
    /// Blackjack payout ratio, 1.5 or 1.2.
    pub blackjack_pays: f64,
    /// Whether surrender is allowed.
    pub surrender: bool,
    /// Whether double down is allowed after split.
    pub double_after_split: bool,
    /// Whether split aces may be split again.
    pub resplit_aces: bool,
    /// Maximum number of splits per round.
    pub max_splits: u8,
    /// Table minimum bet.
    pub min_bet: u32,
    /// Table maximum bet.
    pub max_bet: u32,
    /// Fraction of the shoe dealt before the cut card.
    pub penetration: f64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            decks: 6,
            dealer_hits_soft_17: false,
            blackjack_pays: PAYS_THREE_TO_TWO,
            surrender: true,
            double_after_split: true,
            resplit_aces: false,
            max_splits: 3,
            min_bet: 10,
            max_bet: 500,
            penetration: 0.75,
        }
    }
}

impl Rules {
    /// Checks the rules for consistency.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: no decks, a payout other than 3:2 or
    /// 6:5, non-positive or inverted bet limits, or penetration outside
    /// `(0, 1]`.
    ///
    /// ```
    /// use bjtrainer::{ConfigError, Rules};
    ///
    /// let rules = Rules::default().with_bet_limits(100, 50);
    /// assert_eq!(rules.validate(), Err(ConfigError::InvalidBetLimits));
    /// ```
    #[expect(
        clippy::float_cmp,
        reason = "payouts are compared against the exact supported constants"
    )]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decks == 0 {
            return Err(ConfigError::NoDecks);
        }
        if self.blackjack_pays != PAYS_THREE_TO_TWO && self.blackjack_pays != PAYS_SIX_TO_FIVE {
            return Err(ConfigError::UnsupportedPayout);
        }
        if self.min_bet == 0 || self.min_bet > self.max_bet {
            return Err(ConfigError::InvalidBetLimits);
        }
        if !(self.penetration > 0.0 && self.penetration <= 1.0) {
            return Err(ConfigError::InvalidPenetration);
        }
        Ok(())
    }

    /// Returns the maximum number of player hands in a round.
    #[must_use]
    pub const fn max_hands(&self) -> usize {
        self.max_splits as usize + 1
    }

    /// Sets the number of decks.
    ///
    /// ```
    /// use bjtrainer::Rules;
    ///
    /// let rules = Rules::default().with_decks(2);
    /// assert_eq!(rules.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets whether the dealer hits soft 17.
    #[must_use]
    pub const fn with_dealer_hits_soft_17(mut self, hits: bool) -> Self {
        self.dealer_hits_soft_17 = hits;
        self
    }

    /// Sets the blackjack payout ratio.
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets whether surrender is allowed.
    #[must_use]
    pub const fn with_surrender(mut self, allowed: bool) -> Self {
        self.surrender = allowed;
        self
    }

    /// Sets whether double down is allowed after split.
    #[must_use]
    pub const fn with_double_after_split(mut self, allowed: bool) -> Self {
        self.double_after_split = allowed;
        self
    }

    /// Sets whether split aces may be resplit.
    #[must_use]
    pub const fn with_resplit_aces(mut self, allowed: bool) -> Self {
        self.resplit_aces = allowed;
        self
    }

    /// Sets the maximum number of splits.
    ///
    /// ```
    /// use bjtrainer::Rules;
    ///
    /// let rules = Rules::default().with_max_splits(1);
    /// assert_eq!(rules.max_hands(), 2);
    /// ```
    #[must_use]
    pub const fn with_max_splits(mut self, splits: u8) -> Self {
        self.max_splits = splits;
        self
    }

    /// Sets the table bet limits.
    #[must_use]
    pub const fn with_bet_limits(mut self, min_bet: u32, max_bet: u32) -> Self {
        self.min_bet = min_bet;
        self.max_bet = max_bet;
        self
    }

    /// Sets the deck penetration.
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }
}
