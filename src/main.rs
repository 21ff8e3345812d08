use std::env;
use std::io;
use std::process;

use chess_rules::game::run_loop;
use chess_rules::RulesConfig;

fn main() {
    let config = if env::args().skip(1).any(|arg| arg == "--strict") {
        RulesConfig::strict()
    } else {
        RulesConfig::default()
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = run_loop(stdin.lock(), &mut stdout, config) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
