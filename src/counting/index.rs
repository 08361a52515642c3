use crate::math;
use crate::strategy::Action;

/// A count-dependent departure from basic strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexPlay {
    /// Player total the play applies to; `None` matches any total.
    pub player_total: Option<u8>,
    /// Dealer upcard value (ace is 11).
    pub dealer_up_card: u8,
    /// Lowest whole true count at which the play is made.
    pub min_true_count: i32,
    /// Action taken at or above the index.
    pub action: Action,
}

impl IndexPlay {
    const fn new(
        player_total: Option<u8>,
        dealer_up_card: u8,
        min_true_count: i32,
        action: Action,
    ) -> Self {
        Self {
            player_total,
            dealer_up_card,
            min_true_count,
            action,
        }
    }

    /// Returns whether the play fires for the given situation.
    ///
    /// Only insurance applies to soft totals.
    #[must_use]
    pub fn applies(
        &self,
        whole_count: i32,
        player_total: u8,
        dealer_up_card: u8,
        is_soft: bool,
    ) -> bool {
        if dealer_up_card != self.dealer_up_card || whole_count < self.min_true_count {
            return false;
        }
        match self.player_total {
            None => true,
            Some(total) => total == player_total && !is_soft,
        }
    }
}

/// Hi-Lo index plays in priority order.
pub const INDEX_PLAYS: [IndexPlay; 8] = [
    IndexPlay::new(None, 11, 3, Action::Insure),
    IndexPlay::new(Some(16), 10, 0, Action::Stand),
    IndexPlay::new(Some(15), 10, 4, Action::Stand),
    IndexPlay::new(Some(12), 3, 2, Action::Stand),
    IndexPlay::new(Some(12), 2, 3, Action::Stand),
    IndexPlay::new(Some(13), 2, -1, Action::Stand),
    IndexPlay::new(Some(20), 5, 5, Action::Split),
    IndexPlay::new(Some(20), 6, 4, Action::Split),
];

/// Returns the first index play that fires, if any.
///
/// The true count is compared as a whole number, truncated toward zero.
///
/// ```
/// use bjtrainer::{Action, should_deviate};
///
/// assert_eq!(should_deviate(0.4, 16, 10, false), Some(Action::Stand));
/// assert_eq!(should_deviate(3.9, 15, 10, false), None);
/// ```
#[must_use]
pub fn should_deviate(
    true_count: f64,
    player_total: u8,
    dealer_up_card: u8,
    is_soft: bool,
) -> Option<Action> {
    let whole_count = math::trunc(true_count) as i32;
    INDEX_PLAYS
        .iter()
        .find(|play| play.applies(whole_count, player_total, dealer_up_card, is_soft))
        .map(|play| play.action)
}
