//! Checkers solver binary.
//!
//! Finds the best move for player one from the standard opening or from a
//! small endgame, and can play the solver against a seeded random opponent.
//!
//! Usage:
//!   cargo run --release --bin solve_checkers -- [OPTIONS]

use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use game_search::games::checkers::{Board, CheckersProblem, Piece};
use game_search::games::Player;
use game_search::search::{AdversarialProblem, MinimaxConfig, MinimaxSolver};
use game_search::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Position {
    /// The standard opening
    Start,
    /// Two pieces each, player one to capture
    Endgame,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Position to solve
    #[arg(short, long, value_enum, default_value_t = Position::Endgame)]
    position: Position,

    /// Deepest level to search (default: 6 from the opening, 30 otherwise)
    #[arg(short, long)]
    max_level: Option<u32>,

    /// Disable the transposition table
    #[arg(long)]
    no_cache: bool,

    /// Play the solver against a random opponent until the game ends
    #[arg(long)]
    self_play: bool,

    /// Seed for the random opponent
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Stop self-play after this many moves
    #[arg(long, default_value_t = 200)]
    max_moves: usize,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let (board, default_level) = match args.position {
        Position::Start => (Board::standard(), 6),
        Position::Endgame => (endgame()?, 30),
    };
    let problem = CheckersProblem::default().with_max_level(args.max_level.unwrap_or(default_level));
    let config = if args.no_cache {
        MinimaxConfig::without_cache()
    } else {
        MinimaxConfig::default()
    };

    println!("=== Checkers Solver ===");
    println!("Position: {:?}", args.position);
    println!("Max level: {}", problem.max_level);
    println!("Transposition table: {}", config.use_transposition_table);
    println!();
    println!("{}", board);

    let mut solver = MinimaxSolver::new(problem, config);

    if args.self_play {
        self_play(&mut solver, board, args)
    } else {
        let result = solver.solve_for_best_action(&board)?;
        match &result.action {
            Some(action) => println!("Best move: {} (value {})", action, result.value),
            None => println!("No move available."),
        }
        println!("{}", result.stats);
        Ok(())
    }
}

/// Two pieces each; player one can take at once.
fn endgame() -> Result<Board> {
    Board::empty()
        .place("a1", Piece::man(Player::One))?
        .place("b2", Piece::man(Player::Two))?
        .place("h4", Piece::man(Player::Two))?
        .place("f2", Piece::man(Player::One))
}

fn self_play(solver: &mut MinimaxSolver<CheckersProblem>, mut board: Board, args: &Args) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(args.seed);
    let problem = *solver.problem();
    let start = Instant::now();
    let mut moves = 0;

    println!("Self-play: {} (solver) against {} (random, seed {})", problem.computer, problem.computer.opponent(), args.seed);
    println!();

    while moves < args.max_moves && !problem.is_terminal(&board)? {
        let player = problem.player_to_move(&board);
        let action = if player == problem.computer {
            solver.solve_for_best_action(&board)?.action
        } else {
            board.valid_moves(player)?.choose(&mut rng).cloned()
        };

        let Some(action) = action else {
            println!("{} has no move.", player);
            break;
        };
        moves += 1;
        println!("{:>3}. {}: {}", moves, player, action);
        info!("{}", solver.stats());
        board = action.execute(&board)?;
    }

    println!();
    println!("{}", board);
    let outcome = if board.has_won(problem.computer) {
        "solver wins"
    } else if board.has_won(problem.computer.opponent()) {
        "random opponent wins"
    } else {
        "no winner"
    };
    println!("Result after {} moves: {}", moves, outcome);
    println!("Total time: {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}
