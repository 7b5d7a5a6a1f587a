//! Peg solitaire solver binary.
//!
//! Enumerates every finished game from a starting board and reports the
//! one leaving the fewest pegs. With `--all-holes` every starting hole of
//! the board is solved in parallel, one independent solver per hole.
//!
//! Usage:
//!   cargo run --release --bin solve_peg_board -- [OPTIONS]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use serde::Serialize;

use game_search::games::peg_board::{BoardConfiguration, PegBoard, PegBoardProblem};
use game_search::search::{DepthFirstConfig, DepthFirstSolver, SearchStats};
use game_search::{Error, Result};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board configuration JSON file (default: the 15-hole triangle)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with every hole filled except this vertex
    #[arg(long, conflicts_with = "all_holes")]
    hole: Option<usize>,

    /// Solve every starting hole in parallel
    #[arg(long)]
    all_holes: bool,

    /// Explore rotated copies of a board separately
    #[arg(long)]
    no_folding: bool,

    /// Write per-hole results to this JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct HoleResult {
    hole: Option<usize>,
    solutions: usize,
    fewest_pegs: Option<usize>,
    best_path: Vec<String>,
    stats: SearchStats,
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
    println!("=== Peg Board Solver ===");

    let template = match &args.config {
        Some(path) => {
            println!("Loading configuration from: {}", path.display());
            PegBoard::from_configuration(&BoardConfiguration::from_path(path)?)?
        }
        None => PegBoard::standard()?,
    };
    let config = DepthFirstConfig::default().with_folding(!args.no_folding);
    println!("Vertices: {}", template.vertex_count());
    println!("Folding rotations: {}", config.fold_equivalent_states);
    println!();

    let total_start = Instant::now();
    let results = if args.all_holes {
        solve_all_holes(&template, &config)?
    } else {
        let board = match args.hole {
            Some(hole) => single_hole(&template, hole)?,
            None => template,
        };
        println!("Starting board:\n{}", board);
        vec![solve(board, args.hole, &config)?]
    };

    println!("=== Summary ===");
    for result in &results {
        let label = result.hole.map_or("given board".to_string(), |h| format!("hole {}", h));
        println!(
            "{:>12}: {:>6} solutions, fewest pegs {:>2}, {} states in {:.3}s",
            label,
            result.solutions,
            result.fewest_pegs.map_or("-".to_string(), |p| p.to_string()),
            result.stats.visited_states,
            result.stats.elapsed_seconds
        );
    }
    if let [result] = results.as_slice() {
        println!();
        println!("Best path:");
        for (i, step) in result.best_path.iter().enumerate() {
            println!("  {:>2}. {}", i + 1, step);
        }
    }
    println!();
    println!("Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    if let Some(path) = &args.output {
        export_results(path, &results)?;
        println!("Results written to: {}", path.display());
    }
    Ok(())
}

/// `template` with every vertex filled except `hole`.
fn single_hole(template: &PegBoard, hole: usize) -> Result<PegBoard> {
    (0..template.vertex_count()).try_fold(template.clone(), |board, index| {
        board.with_peg(index, index != hole)
    })
}

fn solve_all_holes(template: &PegBoard, config: &DepthFirstConfig) -> Result<Vec<HoleResult>> {
    let holes: Vec<usize> = (0..template.vertex_count()).collect();

    let progress = ProgressBar::new(holes.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} holes ({msg})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-"),
    );

    let results = holes
        .par_iter()
        .map(|&hole| {
            let board = single_hole(template, hole)?;
            let result = solve(board, Some(hole), config)?;
            progress.set_message(format!("hole {} done", hole));
            progress.inc(1);
            Ok(result)
        })
        .collect::<Result<Vec<_>>>();

    progress.finish_with_message("all holes solved");
    println!();
    results
}

fn solve(board: PegBoard, hole: Option<usize>, config: &DepthFirstConfig) -> Result<HoleResult> {
    let mut solver = DepthFirstSolver::new(PegBoardProblem::new(board), config.clone());
    let result = solver.solve()?;

    let best = result.best_by_key(|s| s.final_state.peg_count());
    info!(
        "hole {:?}: {} solutions, {} states",
        hole,
        result.solutions.len(),
        result.stats.visited_states
    );

    Ok(HoleResult {
        hole,
        solutions: result.solutions.len(),
        fewest_pegs: best.map(|s| s.final_state.peg_count()),
        best_path: best
            .map(|s| s.actions().map(|jump| jump.to_string()).collect())
            .unwrap_or_default(),
        stats: result.stats.clone(),
    })
}

fn export_results(path: &Path, results: &[HoleResult]) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    let mut file = File::create(path).map_err(|source| Error::Io {
        operation: format!("create {}", path.display()),
        source,
    })?;
    file.write_all(json.as_bytes()).map_err(|source| Error::Io {
        operation: format!("write {}", path.display()),
        source,
    })
}
