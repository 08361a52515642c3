//! Plays rounds automatically with basic strategy, Hi-Lo index plays, and
//! Kelly bet sizing, then prints a session summary.
//!
//! Usage: `cargo run --example autoplay -- [rounds] [seed]`
//! Set `RUST_LOG=debug` to follow every decision.

#![allow(clippy::missing_docs_in_private_items)]

use std::error::Error;
use std::time::{SystemTime, UNIX_EPOCH};

use bjtrainer::{
    Action, BasicStrategy, BettingStrategy, Game, GameState, HandOutcome, RoundResult, Rules,
};

const STARTING_BANKROLL: f64 = 10_000.0;

#[derive(Debug, Default)]
struct Session {
    rounds: u32,
    hands: u32,
    wins: u32,
    losses: u32,
    pushes: u32,
    blackjacks: u32,
    surrenders: u32,
    reshuffles: u32,
    wagered: u64,
    net: f64,
}

impl Session {
    fn record(&mut self, result: &RoundResult) {
        self.rounds += 1;
        self.net += result.net;
        for hand in &result.hands {
            self.hands += 1;
            self.wagered += u64::from(hand.bet);
            match hand.outcome {
                HandOutcome::Win => self.wins += 1,
                HandOutcome::Lose => self.losses += 1,
                HandOutcome::Push => self.pushes += 1,
                HandOutcome::Blackjack => self.blackjacks += 1,
                HandOutcome::Surrendered => self.surrenders += 1,
            }
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn play_round(
    game: &mut Game,
    strategy: &BasicStrategy,
    betting: &BettingStrategy,
    session: &mut Session,
) -> Result<RoundResult, Box<dyn Error>> {
    if game.new_round()? {
        session.reshuffles += 1;
    }

    let bet = betting.optimal_bet(game.true_count(), true);
    game.place_bet(bet)?;
    game.deal_initial_cards()?;

    while game.state() == GameState::PlayerTurn {
        let Some(action) = game
            .index_play()
            .or_else(|| game.recommended_action(strategy))
        else {
            break;
        };

        match action {
            Action::Hit => {
                game.hit()?;
            }
            Action::Stand => game.stand()?,
            Action::Double => {
                game.double_down()?;
            }
            Action::Split => {
                game.split()?;
            }
            Action::Surrender => game.surrender()?,
            Action::Insure => game.insure()?,
        }
    }

    game.play_dealer_hand()?;
    Ok(game.settle()?)
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let rounds: u32 = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1_000);
    let seed = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(clock_seed);

    let rules = Rules::default();
    let strategy = BasicStrategy::from_rules(&rules);
    let mut betting = BettingStrategy::new(STARTING_BANKROLL, 0.5, &rules);
    let mut game = match Game::new(rules, seed) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Invalid rules: {err}");
            return;
        }
    };

    println!("Playing {rounds} rounds with seed {seed}");

    let mut session = Session::default();
    for round in 0..rounds {
        match play_round(&mut game, &strategy, &betting, &mut session) {
            Ok(result) => {
                betting.update_bankroll(result.net);
                session.record(&result);
            }
            Err(err) => {
                eprintln!("Round {round} failed: {err}");
                break;
            }
        }
    }

    println!("Rounds:     {}", session.rounds);
    println!("Hands:      {}", session.hands);
    println!(
        "Won {} / lost {} / pushed {} / blackjacks {} / surrendered {}",
        session.wins, session.losses, session.pushes, session.blackjacks, session.surrenders
    );
    println!("Reshuffles: {}", session.reshuffles);
    println!("Wagered:    {}", session.wagered);
    println!("Net:        {:+.1}", session.net);
    println!("Bankroll:   {:.1}", betting.bankroll);
    println!(
        "Final running count {}, true count {:+.2}",
        game.running_count(),
        game.true_count()
    );
}
