#[macro_use]
extern crate bencher;
extern crate kingrace;

use bencher::{black_box, Bencher};
use kingrace::{is_legal_move, kings_in_check, Board, ChessMove, Game, GameConfig, MoveGen, Square, ALL_SQUARES};
use std::str::FromStr;

const MIDGAME: &str = "8/2K5/1B1N4/8/3n1b2/6k1/R6r/1BN2nb1 w";

fn movegen_perft(bench: &mut Bencher, game: Game, depth: usize) {
    bench.iter(|| black_box(MoveGen::movegen_perft_test(&game, depth)));
}

fn racing_movegen_len(bench: &mut Bencher) {
    let game = Game::new();
    bench.iter(|| assert_eq!(MoveGen::new_legal(&game).len(), 21));
}

fn standard_movegen_len(bench: &mut Bencher) {
    let game = Game::with_config(GameConfig::standard().with_pawns(true));
    bench.iter(|| assert_eq!(MoveGen::new_legal(&game).len(), 20));
}

fn perft_2_racing(bench: &mut Bencher) {
    movegen_perft(bench, Game::new(), 2);
}

fn perft_2_midgame(bench: &mut Bencher) {
    movegen_perft(bench, Game::from_str(MIDGAME).expect("valid position"), 2);
}

fn board_is_legal_move(bench: &mut Bencher) {
    let board = Board::default();
    bench.iter(|| {
        let mut count = 0;
        for source in ALL_SQUARES.iter() {
            for dest in ALL_SQUARES.iter() {
                if is_legal_move(&board, *source, *dest) {
                    count += 1;
                }
            }
        }
        black_box(count)
    });
}

fn board_kings_in_check(bench: &mut Bencher) {
    let board = *Game::from_str(MIDGAME).expect("valid position").board();
    bench.iter(|| black_box(kings_in_check(&board)));
}

fn game_make_move(bench: &mut Bencher) {
    let game = Game::new();
    let m = ChessMove::new(Square::C2, Square::D4);
    bench.iter(|| {
        let mut after = game.clone();
        assert!(after.make_move(m));
    });
}

benchmark_group!(
    benches,
    racing_movegen_len,
    standard_movegen_len,
    perft_2_racing,
    perft_2_midgame,
    board_is_legal_move,
    board_kings_in_check,
    game_make_move
);

benchmark_main!(benches);
