// src/bin/poker_showdown_cli.rs

use std::process::ExitCode;

use poker_showdown::api::ShowdownReport;
use poker_showdown::engine::{GameConfig, PokerGame};
use poker_showdown::infra::SystemRng;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::default();
    let mut rng = SystemRng;

    let game = match PokerGame::deal(&config, &mut rng) {
        Ok(game) => game,
        Err(err) => {
            log::error!("dealing failed: {err}");
            eprintln!("Не удалось раздать карты: {err}");
            return ExitCode::FAILURE;
        }
    };

    for (i, hand) in game.hands().iter().enumerate() {
        let cards: Vec<String> = hand.hand().iter().map(|c| c.pretty()).collect();
        println!(
            "Player {}'s hand: {} with rank {}",
            i + 1,
            cards.join(", "),
            hand.category()
        );
    }

    match game.determine_winner() {
        Some((_, hand)) => println!("The winner is: {}", hand.category()),
        None => println!("The winner is: none"),
    }

    let leaders = game.leaders();
    if leaders.len() > 1 {
        let seats: Vec<String> = leaders.iter().map(|i| (i + 1).to_string()).collect();
        println!("(tie by category between players {})", seats.join(", "));
    }

    match ShowdownReport::from_game(&game).to_json() {
        Ok(json) => log::debug!("showdown report:\n{json}"),
        Err(err) => log::warn!("could not serialize showdown report: {err}"),
    }

    ExitCode::SUCCESS
}
