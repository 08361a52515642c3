//! Basic strategy resolver.
//!
//! Charts are for a six-deck shoe. The rule-dependent cells (11 vs ace, soft
//! 18 vs 2, the surrender set, and the low pair splits that rely on doubling
//! after a split) are fixed when the resolver is built.

use core::fmt;

use crate::card::Card;
use crate::hand::Hand;
use crate::rules::Rules;

/// A player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Take another card.
    Hit,
    /// Keep the current total.
    Stand,
    /// Double the bet and take exactly one card.
    Double,
    /// Split a pair into two hands.
    Split,
    /// Forfeit half the bet.
    Surrender,
    /// Take insurance against a dealer ace.
    Insure,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hit => "Hit",
            Self::Stand => "Stand",
            Self::Double => "Double Down",
            Self::Split => "Split",
            Self::Surrender => "Surrender",
            Self::Insure => "Insurance",
        })
    }
}

/// A chart cell. The conditional cells only become an [`Action`] once the
/// caller says whether doubling is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Play {
    Hit,
    Stand,
    Split,
    Surrender,
    DoubleOrHit,
    DoubleOrStand,
}

impl Play {
    const fn resolve(self, can_double: bool) -> Action {
        match self {
            Self::Hit => Action::Hit,
            Self::Stand => Action::Stand,
            Self::Split => Action::Split,
            Self::Surrender => Action::Surrender,
            Self::DoubleOrHit if can_double => Action::Double,
            Self::DoubleOrHit => Action::Hit,
            Self::DoubleOrStand if can_double => Action::Double,
            Self::DoubleOrStand => Action::Stand,
        }
    }

    fn accepts(self, action: Action) -> bool {
        match self {
            Self::DoubleOrHit => matches!(action, Action::Double | Action::Hit),
            Self::DoubleOrStand => matches!(action, Action::Double | Action::Stand),
            fixed => fixed.resolve(false) == action,
        }
    }
}

use Play::{DoubleOrHit as Dh, DoubleOrStand as Ds, Hit as H, Stand as S};

const HARD_MIN: u8 = 5;
const SOFT_MIN: u8 = 13;

// Columns are dealer upcards 2-9, 10, A.
const HARD_CHART: [[Play; 10]; 17] = [
    [H, H, H, H, H, H, H, H, H, H],           // 5
    [H, H, H, H, H, H, H, H, H, H],           // 6
    [H, H, H, H, H, H, H, H, H, H],           // 7
    [H, H, H, H, H, H, H, H, H, H],           // 8
    [H, Dh, Dh, Dh, Dh, H, H, H, H, H],       // 9
    [Dh, Dh, Dh, Dh, Dh, Dh, Dh, Dh, H, H],   // 10
    [Dh, Dh, Dh, Dh, Dh, Dh, Dh, Dh, Dh, H],  // 11
    [H, H, S, S, S, H, H, H, H, H],           // 12
    [S, S, S, S, S, H, H, H, H, H],           // 13
    [S, S, S, S, S, H, H, H, H, H],           // 14
    [S, S, S, S, S, H, H, H, H, H],           // 15
    [S, S, S, S, S, H, H, H, H, H],           // 16
    [S, S, S, S, S, S, S, S, S, S],           // 17
    [S, S, S, S, S, S, S, S, S, S],           // 18
    [S, S, S, S, S, S, S, S, S, S],           // 19
    [S, S, S, S, S, S, S, S, S, S],           // 20
    [S, S, S, S, S, S, S, S, S, S],           // 21
];

const SOFT_CHART: [[Play; 10]; 9] = [
    [H, H, H, Dh, Dh, H, H, H, H, H],    // A,2
    [H, H, H, Dh, Dh, H, H, H, H, H],    // A,3
    [H, H, Dh, Dh, Dh, H, H, H, H, H],   // A,4
    [H, H, Dh, Dh, Dh, H, H, H, H, H],   // A,5
    [H, Dh, Dh, Dh, Dh, H, H, H, H, H],  // A,6
    [S, Ds, Ds, Ds, Ds, S, S, H, H, H],  // A,7
    [S, S, S, S, S, S, S, S, S, S],      // A,8
    [S, S, S, S, S, S, S, S, S, S],      // A,9
    [S, S, S, S, S, S, S, S, S, S],      // 21
];

const Y: bool = true;
const N: bool = false;

// Rows are the pair's card value, 2 through ace. Cells that only split when
// doubling after a split is allowed are marked in `DAS_SPLITS`.
const PAIR_SPLITS: [[bool; 10]; 10] = [
    [Y, Y, Y, Y, Y, Y, N, N, N, N], // 2,2
    [Y, Y, Y, Y, Y, Y, N, N, N, N], // 3,3
    [N, N, N, Y, Y, N, N, N, N, N], // 4,4
    [N, N, N, N, N, N, N, N, N, N], // 5,5
    [Y, Y, Y, Y, Y, N, N, N, N, N], // 6,6
    [Y, Y, Y, Y, Y, Y, N, N, N, N], // 7,7
    [Y, Y, Y, Y, Y, Y, Y, Y, Y, Y], // 8,8
    [Y, Y, Y, Y, Y, N, Y, Y, N, N], // 9,9
    [N, N, N, N, N, N, N, N, N, N], // 10,10
    [Y, Y, Y, Y, Y, Y, Y, Y, Y, Y], // A,A
];

/// `(pair value, upcard)` cells that need double after split.
const DAS_SPLITS: [(u8, u8); 7] = [(2, 2), (2, 3), (3, 2), (3, 3), (4, 5), (4, 6), (6, 2)];

const fn column(up_card: u8) -> usize {
    (up_card - 2) as usize
}

/// Basic strategy for one set of house rules.
///
/// ```
/// use bjtrainer::{Action, BasicStrategy, Card, Hand, Rank, Suit};
///
/// let strategy = BasicStrategy::new(false, true, true);
/// let hand = Hand::with_cards(10, &[
///     Card::new(Suit::Spades, Rank::Ten),
///     Card::new(Suit::Hearts, Rank::Six),
/// ]);
/// let dealer = Card::new(Suit::Clubs, Rank::Seven);
/// assert_eq!(strategy.action(&hand, dealer, true, true, true), Action::Hit);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicStrategy {
    dealer_hits_soft_17: bool,
    surrender: bool,
    double_after_split: bool,
    hard: [[Play; 10]; 17],
    soft: [[Play; 10]; 9],
    pairs: [[bool; 10]; 10],
    /// Rows for hard 15, 16 and 17.
    surrender_against: [[bool; 10]; 3],
}

impl BasicStrategy {
    /// Builds the charts for the given rule flags.
    #[must_use]
    pub fn new(dealer_hits_soft_17: bool, surrender: bool, double_after_split: bool) -> Self {
        let mut hard = HARD_CHART;
        let mut soft = SOFT_CHART;
        let mut pairs = PAIR_SPLITS;
        let mut surrender_against = [[false; 10]; 3];

        if dealer_hits_soft_17 {
            hard[usize::from(11 - HARD_MIN)][column(11)] = Dh;
            soft[usize::from(18 - SOFT_MIN)][column(2)] = Ds;
        }

        if !double_after_split {
            for (pair, up_card) in DAS_SPLITS {
                pairs[column(pair)][column(up_card)] = false;
            }
        }

        if surrender {
            surrender_against[0][column(10)] = true;
            for up_card in [9, 10, 11] {
                surrender_against[1][column(up_card)] = true;
            }
            surrender_against[2][column(11)] = dealer_hits_soft_17;
        }

        Self {
            dealer_hits_soft_17,
            surrender,
            double_after_split,
            hard,
            soft,
            pairs,
            surrender_against,
        }
    }

    /// Builds the charts matching a table's rules.
    #[must_use]
    pub fn from_rules(rules: &Rules) -> Self {
        Self::new(
            rules.dealer_hits_soft_17,
            rules.surrender,
            rules.double_after_split,
        )
    }

    /// Returns whether the charts assume the dealer hits soft 17.
    #[must_use]
    pub const fn dealer_hits_soft_17(&self) -> bool {
        self.dealer_hits_soft_17
    }

    /// Returns whether the charts include surrender.
    #[must_use]
    pub const fn surrender(&self) -> bool {
        self.surrender
    }

    /// Returns whether the charts assume double after split.
    #[must_use]
    pub const fn double_after_split(&self) -> bool {
        self.double_after_split
    }

    fn lookup(&self, hand: &Hand, up_card: Card, can_split: bool, can_surrender: bool) -> Play {
        let up = column(up_card.value());
        let total = hand.value();
        let soft = hand.is_soft();

        if can_split && hand.is_pair() && self.pairs[column(hand.cards()[0].value())][up] {
            return Play::Split;
        }

        if can_surrender
            && hand.len() == 2
            && !soft
            && (15..=17).contains(&total)
            && self.surrender_against[usize::from(total - 15)][up]
        {
            return Play::Surrender;
        }

        if soft && total <= 21 {
            match total.checked_sub(SOFT_MIN) {
                Some(row) => self.soft[usize::from(row)][up],
                None => Play::Hit,
            }
        } else {
            match total {
                0..HARD_MIN => Play::Hit,
                HARD_MIN..=21 => self.hard[usize::from(total - HARD_MIN)][up],
                _ => Play::Stand,
            }
        }
    }

    /// Returns the basic strategy action.
    ///
    /// A pair the chart splits is split before surrender is considered, so
    /// eights are always split. A pair that is not split is played as its
    /// total. Doubling cells fall back to hit or stand when `can_double` is
    /// false.
    #[must_use]
    pub fn action(
        &self,
        hand: &Hand,
        up_card: Card,
        can_double: bool,
        can_split: bool,
        can_surrender: bool,
    ) -> Action {
        self.lookup(hand, up_card, can_split, can_surrender)
            .resolve(can_double)
    }

    /// Returns whether `action` agrees with basic strategy.
    ///
    /// Where the chart says to double, both the double and its fallback are
    /// accepted.
    #[must_use]
    pub fn is_correct_action(
        &self,
        hand: &Hand,
        up_card: Card,
        action: Action,
        can_split: bool,
        can_surrender: bool,
    ) -> bool {
        self.lookup(hand, up_card, can_split, can_surrender)
            .accepts(action)
    }
}

impl Default for BasicStrategy {
    fn default() -> Self {
        Self::from_rules(&Rules::default())
    }
}
