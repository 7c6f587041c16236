use std::io::{stdin, stdout, BufRead, Write};
use std::time::Instant;

use chess_game::chess_board::fen::INITIAL_POSITION;
use chess_game::chess_board::{Color, Coordinate, Move};
use chess_game::engines::random_player::RandomPlayer;
use chess_game::engines::{play_out, Player};
use chess_game::game::perft::perft;
use chess_game::game::{Game, GameStatus};

use clap::arg;
use clap::command;
use clap::Command;

use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

fn main() {
    let matches = command!()
        .version("v0.1.0")
        .propagate_version(true)
        .arg(arg!(
            -d --debug "Turn debugging information on"
        ))
        .subcommand(Command::new("benchmark").about("Runs a benchmark"))
        .subcommand(
            Command::new("play")
                .about("Play a game in the terminal")
                .arg(
                    arg!(
                    -f --fen <FEN> "Board position"
                            )
                    .default_value(INITIAL_POSITION),
                )
                .arg(
                    arg!(
                    -o --opponent <opponent> "Who plays Black"
                            )
                    .value_parser(["human", "random"])
                    .default_value("human"),
                )
                .arg(
                    arg!(
                    -s --seed <seed> "Seed for the random opponent"
                            )
                    .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("perft")
                .about("Run Perft test")
                .arg(
                    arg!(
                    -f --fen <FEN> "Board position"
                            )
                    .default_value(INITIAL_POSITION),
                )
                .arg(
                    arg!(
                    -x --depth <d> "depth"
                            )
                    .default_value("3")
                    .value_parser(clap::value_parser!(u8)),
                )
                .arg(
                    arg!(
                    -m --moves <moves> "List of moves"
                            )
                    .num_args(1..)
                    .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("selfplay")
                .about("Play random games against each other")
                .arg(
                    arg!(
                    -g --games <n> "Number of games"
                            )
                    .default_value("10")
                    .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(
                    -s --seed <seed> "Seed of the first game"
                            )
                    .default_value("0")
                    .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    arg!(
                    -p --"max-plies" <plies> "Stop a game after this many moves"
                            )
                    .default_value("300")
                    .value_parser(clap::value_parser!(usize)),
                ),
        )
        .get_matches();

    let debug = matches.get_flag("debug");

    match matches.subcommand() {
        Some(("benchmark", _)) => {
            benchmark();
        }
        Some(("play", arg_matches)) => {
            let fen = arg_matches.get_one::<String>("fen").map_or(INITIAL_POSITION, |f| f.as_str());
            let opponent = match arg_matches.get_one::<String>("opponent").map(|o| o.as_str()) {
                Some("random") => Some(match arg_matches.get_one::<u64>("seed") {
                    Some(&seed) => RandomPlayer::new(seed),
                    None => RandomPlayer::from_entropy(),
                }),
                _ => None,
            };
            play(fen, opponent, debug);
        }
        Some(("perft", arg_matches)) => {
            let fen = arg_matches.get_one::<String>("fen").map_or(INITIAL_POSITION, |f| f.as_str());
            let depth = arg_matches.get_one::<u8>("depth").copied().unwrap_or(3);
            let moves = arg_matches
                .get_many::<String>("moves")
                .unwrap_or_default()
                .filter(|&v| !v.is_empty())
                .collect::<Vec<_>>();
            run_perft(fen, moves, depth);
        }
        Some(("selfplay", arg_matches)) => {
            let games = arg_matches.get_one::<usize>("games").copied().unwrap_or(10);
            let seed = arg_matches.get_one::<u64>("seed").copied().unwrap_or(0);
            let max_plies = arg_matches.get_one::<usize>("max-plies").copied().unwrap_or(300);
            selfplay(games, seed, max_plies, debug);
        }
        None => {
            play(INITIAL_POSITION, None, debug);
        }
        _ => unreachable!("Exhausted list of subcommands"),
    }
}

fn describe(game: &Game) -> String {
    match game.status() {
        GameStatus::Active => format!("{} to move", game.current_player()),
        GameStatus::Check => format!("{} to move, in check", game.current_player()),
        GameStatus::Checkmate => format!("Checkmate, {} wins", game.current_player().opposite()),
        GameStatus::Stalemate => "Stalemate, draw".to_string(),
    }
}

/// The computer opponent always plays Black.
fn opponent_reply(game: &mut Game, opponent: Option<&mut RandomPlayer>) {
    if let Some(player) = opponent {
        if game.current_player() == Color::Black && !game.status().is_terminal() {
            if let Some(reply) = player.choose_move(game) {
                game.make_move(reply.from, reply.to);
                println!("{} plays {}", player.name(), reply);
            }
        }
    }
}

/// Writes the input prompt; false once the output is gone.
fn prompt<W: Write>(out: &mut W) -> bool {
    match out.write_all(b"> ").and_then(|()| out.flush()) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Cannot write prompt: {}", e);
            false
        }
    }
}

fn play(fen: &str, mut opponent: Option<RandomPlayer>, debug: bool) {
    let mut game = match Game::from_fen(fen) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    opponent_reply(&mut game, opponent.as_mut());
    println!("{}", game.board().render_to_string());
    println!("{}", describe(&game));
    if !prompt(&mut stdout()) {
        return;
    }

    for line in stdin().lock().lines() {
        let line = match line {
            Ok(l) => l.trim().to_string(),
            Err(_) => break,
        };
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => return,
            ["board"] => println!("{}", game.board().render_to_string()),
            ["reset"] => {
                game.reset();
                println!("{}", game.board().render_to_string());
                println!("{}", describe(&game));
            }
            ["moves", square] => match Coordinate::from_algebraic(square) {
                Ok(from) => {
                    let targets: Vec<String> = game.legal_moves(from).iter().map(|c| c.as_algebraic()).collect();
                    println!("{}: {}", from, targets.join(" "));
                }
                Err(e) => eprintln!("{}", e),
            },
            [notation] => match Move::from_algebraic(notation) {
                Ok(mv) => match game.try_move(mv.from, mv.to) {
                    Ok(()) => {
                        if debug {
                            println!("played {}, {}", mv, game.to_fen());
                        }
                        opponent_reply(&mut game, opponent.as_mut());
                        println!("{}", game.board().render_to_string());
                        println!("{}", describe(&game));
                    }
                    Err(e) => eprintln!("{}", e),
                },
                Err(e) => eprintln!("{}", e),
            },
            _ => eprintln!("Unknown command: {}", line),
        }
        if !prompt(&mut stdout()) {
            break;
        }
    }
}

fn run_perft(fen: &str, moves: Vec<&String>, depth: u8) {
    println!("Perft test for {} moves {:?} with depth {}", fen, moves, depth);
    let mut game = match Game::from_fen(fen) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };
    for m in moves {
        let applied = Move::from_algebraic(m)
            .map_err(|e| e.to_string())
            .and_then(|mv| game.try_move(mv.from, mv.to).map_err(|e| e.to_string()));
        if let Err(e) = applied {
            eprintln!("Invalid move {}: {}", m, e);
            return;
        }
    }

    if depth == 0 {
        println!("\nNodes searched: 1");
        return;
    }

    let mut result_moves = Vec::<(String, u64)>::new();
    for mv in game.all_legal_moves() {
        let mut new_game = game.clone();
        new_game.make_move(mv.from, mv.to);
        result_moves.push((mv.as_algebraic(), perft(&new_game, depth - 1)));
    }
    result_moves.sort();

    let mut num_nodes = 0;
    for (m, c) in result_moves {
        println!("{}: {}", m, c);
        num_nodes += c;
    }
    println!("\nNodes searched: {}", num_nodes);
}

#[derive(Tabled)]
struct BenchmarkRow {
    depth: u8,
    node_count: u64,
    elapsed_time: f32,
    kilo_nodes_per_sec: f32,
}

fn benchmark() {
    let game = Game::new();
    let mut table_rows = Vec::new();
    for depth in 1..=4 {
        let start_time = Instant::now();
        let node_count = perft(&game, depth);
        let elapsed = start_time.elapsed();
        table_rows.push(BenchmarkRow {
            depth,
            node_count,
            elapsed_time: elapsed.as_secs_f32(),
            kilo_nodes_per_sec: node_count as f32 / elapsed.as_secs_f32().max(f32::EPSILON) / 1000f32,
        });
        if elapsed.as_secs() > 10 {
            break;
        }
    }
    println!("{}", Table::new(table_rows).with(Style::modern()));
}

/// Consecutive seeds starting at `seed`, wrapping past `u64::MAX`.
fn game_seeds(seed: u64, games: usize) -> impl Iterator<Item = u64> {
    (0..games as u64).map(move |i| seed.wrapping_add(i))
}

#[derive(Tabled)]
struct SelfplayRow {
    seed: u64,
    plies: usize,
    status: String,
    result: String,
}

fn selfplay(games: usize, seed: u64, max_plies: usize, debug: bool) {
    let mut table_rows = Vec::new();
    for game_seed in game_seeds(seed, games) {
        let mut game = Game::new();
        let mut white = RandomPlayer::new(game_seed.wrapping_mul(2));
        let mut black = RandomPlayer::new(game_seed.wrapping_mul(2).wrapping_add(1));
        let history = play_out(&mut game, &mut white, &mut black, max_plies);

        if debug {
            let moves: Vec<String> = history.iter().map(|m| m.as_algebraic()).collect();
            println!("seed {}: {}", game_seed, moves.join(" "));
            println!("{}", game.board().render_to_string());
        }

        let result = match game.status() {
            GameStatus::Checkmate => format!("{} wins", game.current_player().opposite()),
            GameStatus::Stalemate => "draw".to_string(),
            _ => "unfinished".to_string(),
        };
        table_rows.push(SelfplayRow {
            seed: game_seed,
            plies: history.len(),
            status: game.status().to_string(),
            result,
        });
    }
    println!("{}", Table::new(table_rows).with(Style::modern()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct ClosedOutput;

    impl Write for ClosedOutput {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_prompt_reports_write_failure() {
        let mut out = Vec::new();
        assert!(prompt(&mut out));
        assert_eq!(out, b"> ");
        assert!(!prompt(&mut ClosedOutput));
    }

    #[test]
    fn test_game_seeds_are_consecutive() {
        assert_eq!(game_seeds(5, 3).collect::<Vec<_>>(), vec![5, 6, 7]);
        assert_eq!(game_seeds(5, 0).count(), 0);
    }

    #[test]
    fn test_game_seeds_wrap_at_u64_max() {
        assert_eq!(game_seeds(u64::MAX, 2).collect::<Vec<_>>(), vec![u64::MAX, 0]);
        assert_eq!(game_seeds(u64::MAX - 1, 3).collect::<Vec<_>>(), vec![u64::MAX - 1, u64::MAX, 0]);
    }
}
