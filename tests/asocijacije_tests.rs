//! Asocijacije session tests.

use slagalica_engine::core::{score_delta, GameEvent, Phase, PlayerId};
use slagalica_engine::error::{ActionError, ConfigError};
use slagalica_engine::games::asocijacije::{
    AsocijacijeConfig, AsocijacijeGame, Column, ColumnClues, ASOCIJACIJE_CLOCK, FIELD_COUNT,
};
use slagalica_engine::rules::{GameResult, RoundEngine};

fn config() -> AsocijacijeConfig {
    let column = |fields: [&str; 4], solution: &str| ColumnClues::new(fields, solution);
    AsocijacijeConfig::new(
        [
            column(["salt", "wave", "coral", "tide"], "Sea"),
            column(["peak", "snow", "climb", "alps"], "Mountain"),
            column(["oak", "pine", "moss", "trail"], "Forest"),
            column(["dune", "cactus", "oasis", "camel"], "Desert"),
        ],
        "Nature",
    )
}

fn game() -> AsocijacijeGame {
    AsocijacijeGame::new(&config()).unwrap()
}

fn solve(game: &mut AsocijacijeGame, player: PlayerId, column: Column, answer: &str) -> u32 {
    game.open_field(player, column, 0).unwrap();
    let events = game.guess_column(player, column, answer).unwrap();
    score_delta(&events, player)
}

#[test]
fn test_final_after_all_columns() {
    let mut game = game();
    assert_eq!(solve(&mut game, PlayerId::ONE, Column::A, "sea"), 10);
    game.yield_turn(PlayerId::ONE).unwrap();
    assert_eq!(solve(&mut game, PlayerId::TWO, Column::B, "MOUNTAIN"), 10);
    game.yield_turn(PlayerId::TWO).unwrap();
    assert_eq!(solve(&mut game, PlayerId::ONE, Column::C, "Forest"), 10);
    game.yield_turn(PlayerId::ONE).unwrap();
    assert_eq!(solve(&mut game, PlayerId::TWO, Column::D, " desert "), 10);

    let events = game.guess_final(PlayerId::TWO, "nature").unwrap();
    assert_eq!(score_delta(&events, PlayerId::TWO), 10);
    assert_eq!(game.result(), Some(GameResult::Winner(PlayerId::TWO)));
}

#[test]
fn test_multiple_columns_in_one_turn() {
    let mut game = game();
    game.open_field(PlayerId::ONE, Column::A, 0).unwrap();
    game.yield_turn(PlayerId::ONE).unwrap();
    game.open_field(PlayerId::TWO, Column::B, 1).unwrap();
    game.yield_turn(PlayerId::TWO).unwrap();

    game.open_field(PlayerId::ONE, Column::A, 1).unwrap();
    let first = game.guess_column(PlayerId::ONE, Column::A, "Sea").unwrap();
    let second = game.guess_column(PlayerId::ONE, Column::B, "Mountain").unwrap();

    assert_eq!(score_delta(&first, PlayerId::ONE), 8);
    assert_eq!(score_delta(&second, PlayerId::ONE), 10);
    assert_eq!(game.current_player(), PlayerId::ONE);
    assert_eq!(game.open_field(PlayerId::ONE, Column::C, 0), Err(ActionError::BoxAlreadyOpened));
}

#[test]
fn test_wrong_final_passes_turn() {
    let mut game = game();
    game.open_field(PlayerId::ONE, Column::C, 2).unwrap();
    let events = game.guess_final(PlayerId::ONE, "Water").unwrap();
    assert_eq!(events.as_slice(), &[GameEvent::TurnPassed { to: PlayerId::TWO }]);

    game.open_field(PlayerId::TWO, Column::D, 0).unwrap();
    let events = game.guess_final(PlayerId::TWO, "Nature").unwrap();
    assert_eq!(score_delta(&events, PlayerId::TWO), 50);
    assert!(game.is_finished());
    assert!(Column::ALL
        .iter()
        .all(|&c| game.state().column(c).solved_by == Some(PlayerId::TWO)));
    assert_eq!(game.open_field(PlayerId::ONE, Column::A, 0), Err(ActionError::SessionFinished));
}

#[test]
fn test_clock_expiry() {
    let mut game = game();
    solve(&mut game, PlayerId::ONE, Column::A, "Sea");
    for _ in 0..ASOCIJACIJE_CLOCK {
        game.tick();
    }

    assert_eq!(game.phase(), Phase::Finished);
    assert_eq!(game.remaining(), 0);
    assert_eq!(game.scores()[PlayerId::ONE], 10);
    assert_eq!(game.visible_solution(Column::D), Some("Desert"));
    assert_eq!(game.visible_final(), Some("Nature"));
    for field in 0..FIELD_COUNT {
        assert!(game.visible_field(Column::B, field).is_some());
    }

    let before = game.state().clone();
    game.tick();
    assert_eq!(game.state(), &before);
}

#[test]
fn test_guessing_allowed_once_every_field_is_open() {
    let mut game = game();
    let mut player = PlayerId::ONE;
    for column in Column::ALL {
        for field in 0..FIELD_COUNT {
            game.open_field(player, column, field).unwrap();
            game.yield_turn(player).unwrap();
            player = player.other();
        }
    }

    // No clue is left to open, so guessing needs no opened box.
    assert!(!game.state().box_opened_this_turn);
    let events = game.guess_column(player, Column::C, "forest").unwrap();
    assert_eq!(score_delta(&events, player), 4);
    let events = game.guess_final(player, "nature").unwrap();
    assert_eq!(score_delta(&events, player), 40);
}

#[test]
fn test_empty_guess_rejected() {
    let mut game = game();
    game.open_field(PlayerId::ONE, Column::A, 0).unwrap();
    assert_eq!(game.guess_column(PlayerId::ONE, Column::A, "  "), Err(ActionError::EmptySubmission));
    assert_eq!(game.state().history.len(), 1);
}

#[test]
fn test_rejects_incomplete_board() {
    let mut config = config();
    config.column_c.solution.clear();
    assert!(matches!(
        AsocijacijeGame::new(&config),
        Err(ConfigError::MissingField { .. })
    ));
}
