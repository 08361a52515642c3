use crate::math;
use crate::rules::Rules;

use super::{EDGE_PER_TRUE_COUNT, HiLoCounter};

/// Approximate variance of a blackjack hand, used by the Kelly bet.
pub const KELLY_VARIANCE: f64 = 1.33;

/// Largest spread bet in minimum-bet units.
const MAX_SPREAD: u32 = 8;

/// Kelly bets are rounded to this increment.
const BET_INCREMENT: f64 = 10.0;

/// Count-driven bet sizing within table limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BettingStrategy {
    /// Bankroll the Kelly fraction is taken from.
    pub bankroll: f64,
    /// Fraction of full Kelly to bet (0.5 is half Kelly).
    pub risk_fraction: f64,
    /// Table minimum.
    pub min_bet: u32,
    /// Table maximum.
    pub max_bet: u32,
}

impl BettingStrategy {
    /// Creates a strategy using the table limits from `rules`.
    #[must_use]
    pub const fn new(bankroll: f64, risk_fraction: f64, rules: &Rules) -> Self {
        Self {
            bankroll,
            risk_fraction,
            min_bet: rules.min_bet,
            max_bet: rules.max_bet,
        }
    }

    const fn clamp(&self, bet: u32) -> u32 {
        if bet < self.min_bet {
            self.min_bet
        } else if bet > self.max_bet {
            self.max_bet
        } else {
            bet
        }
    }

    /// Fractional Kelly bet for a true count.
    ///
    /// The bet is rounded to the nearest 10 and held within the table limits.
    /// A true count of zero or less bets the minimum.
    ///
    /// ```
    /// use bjtrainer::{BettingStrategy, Rules};
    ///
    /// let betting = BettingStrategy::new(10_000.0, 0.5, &Rules::default());
    /// assert_eq!(betting.kelly_bet(-1.0), 10);
    /// assert_eq!(betting.kelly_bet(4.0), 80);
    /// ```
    #[must_use]
    pub fn kelly_bet(&self, true_count: f64) -> u32 {
        if true_count <= 0.0 {
            return self.min_bet;
        }

        let kelly_fraction = true_count * EDGE_PER_TRUE_COUNT / KELLY_VARIANCE;
        let raw = self.bankroll * kelly_fraction * self.risk_fraction;
        let rounded = math::round(raw / BET_INCREMENT) * BET_INCREMENT;
        // Float-to-int casts saturate, so a negative bankroll lands on zero.
        self.clamp(rounded as u32)
    }

    /// Flat spread bet: the count's betting index in minimum-bet units, held
    /// within the table limits. `spread` caps only the top bucket.
    #[must_use]
    pub fn simple_spread_bet(&self, true_count: f64, spread: u32) -> u32 {
        let units = match HiLoCounter::betting_index(true_count) {
            MAX_SPREAD => MAX_SPREAD.min(spread),
            units => units,
        };
        self.clamp(self.min_bet.saturating_mul(units))
    }

    /// Picks the Kelly bet or an eight-unit spread.
    #[must_use]
    pub fn optimal_bet(&self, true_count: f64, use_kelly: bool) -> u32 {
        if use_kelly {
            self.kelly_bet(true_count)
        } else {
            self.simple_spread_bet(true_count, MAX_SPREAD)
        }
    }

    /// Approximate risk of ruin, in percent, for a per-hand `win_rate`
    /// (expected profit per unit bet) at an average bet of `avg_bet`.
    ///
    /// Uses `exp(-2 * win_rate * bankroll / avg_bet)`, capped at 100. Returns
    /// 0 when no money is bet and 100 when the game has no positive
    /// expectation.
    ///
    /// ```
    /// use bjtrainer::{BettingStrategy, Rules};
    ///
    /// let betting = BettingStrategy::new(1_000.0, 0.5, &Rules::default());
    /// assert_eq!(betting.risk_of_ruin(0.01, 0.0), 0.0);
    /// assert_eq!(betting.risk_of_ruin(-0.005, 25.0), 100.0);
    /// assert!(betting.risk_of_ruin(0.01, 10.0) < 14.0);
    /// ```
    #[must_use]
    pub fn risk_of_ruin(&self, win_rate: f64, avg_bet: f64) -> f64 {
        if avg_bet <= 0.0 {
            return 0.0;
        }
        if win_rate <= 0.0 {
            return 100.0;
        }

        let bankroll_units = self.bankroll / avg_bet;
        (math::exp(-2.0 * win_rate * bankroll_units) * 100.0).min(100.0)
    }

    /// Returns whether the count is poor enough to leave the table.
    #[must_use]
    pub const fn should_wong_out(&self, true_count: f64) -> bool {
        true_count <= -2.0
    }

    /// Applies a round's profit or loss to the bankroll.
    pub const fn update_bankroll(&mut self, profit: f64) {
        self.bankroll += profit;
    }
}
