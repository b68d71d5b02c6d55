use chessvar::{new_game, perft, Coordinate, EdgeMode, Game, Setup, Square, Uci};
use iai::black_box;

fn bench_shallow_perft() {
    let game = new_game();
    assert_eq!(black_box(perft(black_box(&game), 2)), 400);
}

fn bench_deep_perft() -> u64 {
    let game = new_game();
    perft(black_box(&game), 3)
}

fn bench_generate_moves() -> usize {
    let setup: Setup = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w 4"
        .parse()
        .expect("valid setup");
    let game = Game::from_setup(setup, EdgeMode::Standard).expect("valid position");
    black_box(&game).legal_moves().len()
}

fn bench_attempt_move() -> bool {
    let mut game = black_box(new_game());
    game.attempt_move(Coordinate::from(Square::G1), Coordinate::from(Square::F3))
}

fn bench_play_game() -> Game {
    let moves = [
        "e2e3", "b8a6", "d1h5", "a6b8", "h5h7", "b8a6", "h7g7", "a6b8", "g7f7", "b8a6", "f7e7",
        "a6b8", "e7d7", "b8a6", "d7c7", "a6b8", "c7b7", "b8a6", "b7a7",
    ];

    let mut game = black_box(new_game());
    for uci in black_box(moves) {
        let uci: Uci = uci.parse().expect("valid uci");
        game.play_uci(uci).expect("legal move");
    }
    game
}

iai::main!(
    bench_shallow_perft,
    bench_deep_perft,
    bench_generate_moves,
    bench_attempt_move,
    bench_play_game,
);
