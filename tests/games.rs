use chessvar::{new_game, Color, GameState, Setup, Uci};
use serde::Deserialize;
use serde_with::{formats::SpaceSeparator, serde_as, DisplayFromStr, StringWithSeparator};

#[serde_as]
#[derive(Deserialize)]
struct Record {
    #[serde_as(as = "StringWithSeparator<SpaceSeparator, Uci>")]
    moves: Vec<Uci>,
    #[serde_as(as = "DisplayFromStr")]
    state: GameState,
    #[serde_as(as = "DisplayFromStr")]
    turn: Color,
    #[serde_as(as = "DisplayFromStr")]
    setup: Setup,
}

#[test]
fn test_game_records() {
    let mut reader = csv::Reader::from_path("tests/games.csv").expect("reader");

    for (i, record) in reader.deserialize().enumerate() {
        let record: Record = record.expect("record");

        let mut game = new_game();
        for uci in &record.moves {
            game.play_uci(*uci)
                .unwrap_or_else(|err| panic!("line {}: {uci}: {err}", i + 1));
        }

        assert_eq!(game.game_state(), record.state, "line {}", i + 1);
        assert_eq!(game.active_side(), record.turn, "line {}", i + 1);
        assert_eq!(game.to_setup().to_string(), record.setup.to_string(), "line {}", i + 1);
    }
}
