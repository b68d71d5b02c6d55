#![no_main]

use arbitrary::Arbitrary;
use chessvar::{new_game, Square};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Data {
    moves: Vec<(Square, Square)>,
    candidate: (Square, Square),
}

fuzz_target!(|data: Data| {
    let mut game = new_game();
    for (from, to) in data.moves {
        let before = game.clone();
        if game.play(from.into(), to.into()).is_err() {
            assert_eq!(game, before);
        }
    }

    let (from, to) = data.candidate;
    let legals = game.legal_moves();
    assert_eq!(
        legals.iter().any(|m| m.from == from && m.to == to),
        game.is_legal(from.into(), to.into())
    );
    assert!(legals.iter().all(|&m| game.is_legal(m.from.into(), m.to.into())));
});
