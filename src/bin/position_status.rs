use std::env;
use std::process;

use chess_rules::Game;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() || args.len() % 2 != 0 {
        eprintln!("usage: position_status <from> <to> [<from> <to> ...]");
        process::exit(2);
    }

    let mut game = Game::new();
    for pair in args.chunks(2) {
        let request = format!("{} {}", pair[0], pair[1]);
        if let Err(e) = game.play(&request) {
            eprintln!("{request}: {e}");
            process::exit(1);
        }
    }

    let mut board = *game.board();
    let side = board.side_to_move();
    let moves = board.pseudo_legal_moves(side);
    print!("{board}");
    println!("side_to_move: {side}");
    match board.is_in_check(side) {
        Ok(in_check) => println!("check: {in_check}"),
        Err(e) => println!("check: {e}"),
    }
    match board.is_checkmate(side) {
        Ok(mated) => println!("checkmate: {mated}"),
        Err(e) => println!("checkmate: {e}"),
    }
    println!("stalemate: {}", board.is_stalemate(side));
    println!("game_over: {}", game.is_over());
    println!("moves: {}", moves.len());
    for mv in &moves {
        println!("{mv}");
    }
}
