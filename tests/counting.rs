//! Hi-Lo counting, index play, and bet sizing tests.

#![allow(clippy::float_cmp)]

use bjtrainer::counting::{INDEX_PLAYS, KELLY_VARIANCE};
use bjtrainer::{
    Action, BettingStrategy, Card, HiLoCounter, IndexPlay, Rank, Rules, Suit, card,
    should_deviate,
};

#[test]
fn hi_lo_tags() {
    for rank in Rank::ALL {
        let expected = match rank {
            Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six => 1,
            Rank::Seven | Rank::Eight | Rank::Nine => 0,
            _ => -1,
        };
        assert_eq!(rank.hi_lo_value(), expected, "{rank}");
    }

    let full_deck: i32 = card::deck().map(Card::hi_lo_value).sum();
    assert_eq!(full_deck, 0);
    assert_eq!(card::deck().count(), 52);
}

#[test]
fn counter_tracks_running_count() {
    let mut counter = HiLoCounter::new(6);
    let cards = [
        Card::new(Suit::Hearts, Rank::Two),
        Card::new(Suit::Clubs, Rank::Six),
        Card::new(Suit::Spades, Rank::Eight),
        Card::new(Suit::Diamonds, Rank::Ace),
        Card::new(Suit::Hearts, Rank::Four),
    ];
    assert_eq!(counter.count_cards(&cards), 2);
    assert_eq!(counter.running_count(), 2);
    assert_eq!(counter.cards_seen(), 5);
    assert_eq!(counter.estimated_decks_remaining(), 307.0 / 52.0);

    counter.reset(2);
    assert_eq!(counter, HiLoCounter::new(2));
    assert_eq!(HiLoCounter::default().starting_decks(), 6);
}

#[test]
fn true_count_conversion() {
    let mut counter = HiLoCounter::new(6);
    for _ in 0..6 {
        counter.count_card(&Card::new(Suit::Hearts, Rank::Five));
    }
    assert_eq!(counter.true_count(3.0), 2.0);
    assert_eq!(counter.true_count(0.5), 12.0);
    assert_eq!(counter.true_count(0.0), 0.0);
    assert_eq!(counter.true_count(-1.0), 0.0);

    // True count times decks remaining gives back the running count.
    let decks = HiLoCounter::decks_remaining_from_cards(156);
    assert_eq!(decks, 3.0);
    assert_eq!(counter.true_count(decks) * decks, 6.0);
}

#[test]
fn edge_and_betting_index() {
    assert_eq!(HiLoCounter::estimate_edge(0.0), 0.0);
    assert_eq!(HiLoCounter::estimate_edge(2.0), 0.01);

    let buckets = [
        (-5.0, 1),
        (0.0, 1),
        (1.9, 1),
        (2.0, 2),
        (2.99, 2),
        (3.0, 4),
        (4.5, 6),
        (5.0, 8),
        (12.0, 8),
    ];
    for (true_count, units) in buckets {
        assert_eq!(HiLoCounter::betting_index(true_count), units, "{true_count}");
    }
}

#[test]
fn index_plays_in_priority_order() {
    assert_eq!(INDEX_PLAYS.len(), 8);
    assert_eq!(
        INDEX_PLAYS[0],
        IndexPlay {
            player_total: None,
            dealer_up_card: 11,
            min_true_count: 3,
            action: Action::Insure,
        }
    );

    // Insurance comes before any total-specific play.
    assert_eq!(should_deviate(3.0, 16, 11, false), Some(Action::Insure));
    assert_eq!(should_deviate(2.9, 16, 11, false), None);

    assert_eq!(should_deviate(0.0, 16, 10, false), Some(Action::Stand));
    assert_eq!(should_deviate(-0.9, 16, 10, false), Some(Action::Stand));
    assert_eq!(should_deviate(-1.0, 16, 10, false), None);
    assert_eq!(should_deviate(0.0, 16, 10, true), None);

    assert_eq!(should_deviate(4.0, 15, 10, false), Some(Action::Stand));
    assert_eq!(should_deviate(2.0, 12, 3, false), Some(Action::Stand));
    assert_eq!(should_deviate(2.0, 12, 2, false), None);
    assert_eq!(should_deviate(3.0, 12, 2, false), Some(Action::Stand));
    assert_eq!(should_deviate(-1.5, 13, 2, false), Some(Action::Stand));
    assert_eq!(should_deviate(-2.0, 13, 2, false), None);
    assert_eq!(should_deviate(5.0, 20, 5, false), Some(Action::Split));
    assert_eq!(should_deviate(4.0, 20, 5, false), None);
    assert_eq!(should_deviate(4.0, 20, 6, false), Some(Action::Split));
    assert_eq!(should_deviate(10.0, 18, 7, false), None);
}

#[test]
fn kelly_bets() {
    let betting = BettingStrategy::new(10_000.0, 0.5, &Rules::default());
    assert_eq!(betting.kelly_bet(0.0), 10);
    assert_eq!(betting.kelly_bet(-4.0), 10);
    assert_eq!(betting.kelly_bet(1.0), 20);
    assert_eq!(betting.kelly_bet(2.0), 40);
    assert_eq!(betting.kelly_bet(4.0), 80);
    assert_eq!(betting.kelly_bet(100.0), 500);
    assert!(KELLY_VARIANCE > 1.0);

    let broke = BettingStrategy::new(0.0, 0.5, &Rules::default());
    assert_eq!(broke.kelly_bet(5.0), 10);
}

#[test]
fn spread_bets() {
    let betting = BettingStrategy::new(10_000.0, 0.5, &Rules::default());
    assert_eq!(betting.simple_spread_bet(-1.0, 8), 10);
    assert_eq!(betting.simple_spread_bet(2.0, 8), 20);
    assert_eq!(betting.simple_spread_bet(3.0, 8), 40);
    assert_eq!(betting.simple_spread_bet(4.0, 8), 60);
    assert_eq!(betting.simple_spread_bet(6.0, 8), 80);
    assert_eq!(betting.simple_spread_bet(6.0, 4), 40);
    assert_eq!(betting.simple_spread_bet(6.0, 0), 10);

    // A narrow spread only caps the top bucket.
    assert_eq!(betting.simple_spread_bet(4.0, 2), 60);
    assert_eq!(betting.simple_spread_bet(3.0, 2), 40);
    assert_eq!(betting.simple_spread_bet(5.0, 2), 20);

    let high_limit = BettingStrategy::new(
        10_000.0,
        0.5,
        &Rules::default().with_bet_limits(100, 500),
    );
    assert_eq!(high_limit.simple_spread_bet(6.0, 8), 500);

    assert_eq!(betting.optimal_bet(4.0, true), betting.kelly_bet(4.0));
    assert_eq!(betting.optimal_bet(4.0, false), 60);
}

#[test]
fn bankroll_and_wonging() {
    let mut betting = BettingStrategy::new(1_000.0, 1.0, &Rules::default());
    betting.update_bankroll(-150.0);
    betting.update_bankroll(25.0);
    assert_eq!(betting.bankroll, 875.0);

    assert!(betting.should_wong_out(-2.0));
    assert!(!betting.should_wong_out(-1.9));
}

#[test]
fn risk_of_ruin_approximation() {
    let betting = BettingStrategy::new(1_000.0, 0.5, &Rules::default());
    assert_eq!(betting.risk_of_ruin(0.01, 0.0), 0.0);
    assert_eq!(betting.risk_of_ruin(0.0, 10.0), 100.0);
    assert_eq!(betting.risk_of_ruin(-0.02, 10.0), 100.0);

    let ror = betting.risk_of_ruin(0.01, 10.0);
    assert!((ror - 100.0 * (-2.0_f64).exp()).abs() < 1e-9);

    // Doubling the bankroll lowers the risk.
    let deeper = BettingStrategy::new(2_000.0, 0.5, &Rules::default());
    assert!(deeper.risk_of_ruin(0.01, 10.0) < ror);

    let broke = BettingStrategy::new(-50.0, 0.5, &Rules::default());
    assert_eq!(broke.risk_of_ruin(0.01, 10.0), 100.0);
}
